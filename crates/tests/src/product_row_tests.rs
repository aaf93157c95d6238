use pretty_assertions::assert_eq;
use skeleton_core::{Node, ProductRowConfig, Skeleton};

fn info_sections(node: &Node) -> Vec<Node> {
    node.child_nodes()[0].child_nodes()[1].child_nodes().to_vec()
}

#[test]
fn rating_survives_hidden_price() {
    let base = ProductRowConfig {
        items: 1,
        show_rating: true,
        ..ProductRowConfig::default()
    };
    let with_price = Skeleton::product_row(&ProductRowConfig {
        show_price: true,
        ..base.clone()
    })
    .unwrap();
    let without_price = Skeleton::product_row(&ProductRowConfig {
        show_price: false,
        ..base
    })
    .unwrap();

    let with_price = info_sections(&with_price);
    let without_price = info_sections(&without_price);
    // title, rating, price vs title, rating
    assert_eq!(with_price.len(), 3);
    assert_eq!(without_price.len(), 2);
    assert_eq!(without_price[1], with_price[1]);
    assert_eq!(without_price[1].units().len(), 6);
}

#[test]
fn each_item_is_a_row() {
    let node = Skeleton::product_row(&ProductRowConfig::default()).unwrap();
    assert_eq!(node.child_nodes().len(), 4);
    for row in node.child_nodes() {
        assert!(row.child_nodes()[0].as_unit().is_some());
    }
}
