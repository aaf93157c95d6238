use pretty_assertions::assert_eq;
use skeleton_core::{Layout, Size, Skeleton, TableConfig};

#[test]
fn header_adds_one_row() {
    let config = TableConfig {
        rows: 3,
        cols: 2,
        show_header: true,
        ..TableConfig::default()
    };
    let node = Skeleton::table(&config).unwrap();
    let rows = node.child_nodes();
    assert_eq!(rows.len(), 4);
    for row in rows {
        assert_eq!(row.child_nodes().len(), 2);
        match &row.as_container().unwrap().layout {
            Layout::Grid(grid) => assert_eq!(grid.columns, 2),
            other => panic!("unexpected layout {other:?}"),
        }
    }
    assert_eq!(rows[0].units()[0].height, Size::Px(20.0));
    assert_eq!(rows[1].units()[0].height, Size::Px(16.0));
}

#[test]
fn no_header_by_default() {
    let node = Skeleton::table(&TableConfig::default()).unwrap();
    assert_eq!(node.child_nodes().len(), 5);
    assert!(node.units().iter().all(|u| u.height == Size::Px(16.0)));
}
