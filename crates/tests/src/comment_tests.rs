use pretty_assertions::assert_eq;
use skeleton_core::{CommentConfig, Size, Skeleton};

#[test]
fn replies_have_one_line_and_smaller_avatars() {
    let config = CommentConfig {
        lines: 2,
        reply_count: 1,
        show_actions: false,
        ..CommentConfig::default()
    };
    let node = Skeleton::comment(&config).unwrap();
    assert_eq!(node.child_nodes().len(), 3);

    for thread in node.child_nodes() {
        let replies = &thread.child_nodes()[1];
        assert_eq!(replies.child_nodes().len(), 1);

        let reply = replies.child_nodes()[0].units();
        // avatar, author name, timestamp, one text line
        assert_eq!(reply.len(), 4);
        assert_eq!(reply[0].width, Size::Px(36.0 * 0.8));
        assert_eq!(reply[0].height, Size::Px(36.0 * 0.8));
        assert_eq!(reply[3].width, Size::Percent(70.0));

        let parent = thread.child_nodes()[0].units();
        assert_eq!(parent.len(), 5);
        assert_eq!(parent[0].width, Size::Px(36.0));
    }
}

#[test]
fn reply_column_indent() {
    let node = Skeleton::comment(&CommentConfig::default()).unwrap();
    let replies = node.child_nodes()[0].child_nodes()[1].as_container().unwrap();
    assert_eq!(replies.style.get("margin-left"), Some("48px"));
}

#[test]
fn reply_count_repeats_replies() {
    let config = CommentConfig {
        items: 1,
        reply_count: 3,
        ..CommentConfig::default()
    };
    let node = Skeleton::comment(&config).unwrap();
    assert_eq!(node.child_nodes()[0].child_nodes()[1].child_nodes().len(), 3);
}
