use pretty_assertions::assert_eq;
use skeleton_core::{Size, Skeleton, TextConfig};

use crate::common::{heights, widths};

#[test]
fn four_lines_shorten_only_the_last() {
    let config = TextConfig {
        lines: 4,
        last_line_width: 60.0,
        ..TextConfig::default()
    };
    let node = Skeleton::text(&config).unwrap();
    assert_eq!(
        widths(&node),
        vec![
            Size::Percent(100.0),
            Size::Percent(100.0),
            Size::Percent(100.0),
            Size::Percent(60.0),
        ]
    );
    assert_eq!(heights(&node), vec![Size::Px(12.0); 4]);
}

#[test]
fn text_block_is_one_column_stack() {
    let node = Skeleton::text(&TextConfig::default()).unwrap();
    assert_eq!(node.depth(), 2);
    assert_eq!(
        node.as_container().unwrap().css().to_string(),
        "display:flex;flex-direction:column;gap:8px;width:100%"
    );
}
