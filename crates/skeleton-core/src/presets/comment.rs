use super::text::body_text;
use super::{flexible, full_width, leaf, non_negative, Compose};
use crate::error::Result;
use crate::node::{Align, Container, Node, Stack};
use crate::radius::RadiusPreset;
use crate::shape::ShapeConfig;
use crate::style::{px, Size, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// Space between an avatar and the comment body; replies are indented by
/// the parent avatar plus this gap.
pub const REPLY_INDENT: f64 = 12.0;

/// Threaded comments with one level of indented replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentConfig {
    /// Number of top-level threads.
    pub items: u32,
    pub gap: f64,
    /// Replies under each thread.
    pub reply_count: u32,
    pub lines: u32,
    pub show_actions: bool,
    pub avatar_size: f64,
    pub variant: Variant,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            items: 3,
            gap: 24.0,
            reply_count: 1,
            lines: 2,
            show_actions: true,
            avatar_size: 36.0,
            variant: Variant::Pulse,
            class: None,
            style: Style::new(),
        }
    }
}

impl CommentConfig {
    /// Replies are one line shorter than their parent, but never empty.
    pub fn reply_lines(&self) -> u32 {
        self.lines.saturating_sub(1).max(1)
    }

    pub fn reply_avatar_size(&self) -> f64 {
        self.avatar_size * 0.8
    }

    fn bar(&self, width: impl Into<Size>, height: f64) -> Result<Node> {
        leaf(ShapeConfig::sized(width, height).radius(4).variant(self.variant))
    }

    fn single(&self, reply: bool) -> Result<Node> {
        let (avatar_size, lines, last_line_width) = if reply {
            (self.reply_avatar_size(), self.reply_lines(), 70.0)
        } else {
            (self.avatar_size, self.lines, 55.0)
        };

        let author = Container::new(Stack::row().gap(10.0).align(Align::Center))
            .with_style(Style::new().with("margin-bottom", "8px"))
            .child(self.bar(Size::Percent(25.0), 12.0)?)
            .child(self.bar(Size::Percent(15.0), 10.0)?);

        let actions: Option<Node> = if self.show_actions {
            let buttons = (0..3)
                .map(|_| self.bar(40.0, 10.0))
                .collect::<Result<Vec<_>>>()?;
            Some(
                Container::new(Stack::row().gap(16.0).align(Align::Center))
                    .with_style(Style::new().with("margin-top", "10px"))
                    .children(buttons)
                    .into(),
            )
        } else {
            None
        };

        let body = Container::block()
            .with_style(flexible())
            .child(author)
            .child(body_text(lines, 6.0, last_line_width, self.variant)?)
            .maybe_child(actions);

        Ok(Container::new(Stack::row().gap(REPLY_INDENT))
            .with_style(full_width())
            .child(leaf(
                ShapeConfig::sized(avatar_size, avatar_size)
                    .radius(RadiusPreset::Circle)
                    .variant(self.variant)
                    .css("flex-shrink", 0),
            )?)
            .child(body)
            .into())
    }

    fn thread(&self) -> Result<Node> {
        let replies: Option<Node> = if self.reply_count > 0 {
            let replies = (0..self.reply_count)
                .map(|_| self.single(true))
                .collect::<Result<Vec<_>>>()?;
            Some(
                Container::new(Stack::column().gap(16.0))
                    .with_style(
                        Style::new()
                            .with("margin-top", "16px")
                            .with("margin-left", px(self.avatar_size + REPLY_INDENT))
                            .with("border-left", "2px solid rgba(128,128,128,0.15)")
                            .with("padding-left", "16px"),
                    )
                    .children(replies)
                    .into(),
            )
        } else {
            None
        };

        Ok(Container::block()
            .child(self.single(false)?)
            .maybe_child(replies)
            .into())
    }
}

impl Compose for CommentConfig {
    fn compose(&self) -> Result<Node> {
        let gap = non_negative("gap", self.gap)?;
        Size::Px(self.avatar_size).validate("avatarSize")?;

        let threads = (0..self.items)
            .map(|_| self.thread())
            .collect::<Result<Vec<_>>>()?;

        Ok(Container::new(Stack::column().gap(gap))
            .with_style(full_width())
            .children(threads)
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reply_lines_never_drop_below_one() {
        let lines = |lines| CommentConfig {
            lines,
            ..CommentConfig::default()
        }
        .reply_lines();
        assert_eq!(lines(0), 1);
        assert_eq!(lines(1), 1);
        assert_eq!(lines(2), 1);
        assert_eq!(lines(5), 4);
    }

    #[test]
    fn default_thread_shape() {
        let node = CommentConfig::default().compose().unwrap();
        assert_eq!(node.child_nodes().len(), 3);
        let thread = &node.child_nodes()[0];
        // avatar, author x2, 2 lines, 3 actions; reply: avatar, author x2, 1 line, 3 actions
        assert_eq!(thread.units().len(), 8 + 7);
        assert!(thread.units().iter().all(|u| u.variant == Variant::Pulse));
    }

    #[test]
    fn replies_are_indented_past_the_parent_avatar() {
        let node = CommentConfig {
            items: 1,
            avatar_size: 40.0,
            ..CommentConfig::default()
        }
        .compose()
        .unwrap();
        let replies = node.child_nodes()[0].child_nodes()[1].as_container().unwrap();
        assert_eq!(replies.style.get("margin-left"), Some("52px"));
        let reply_avatar = replies.children[0].units()[0];
        assert_eq!(reply_avatar.width, Size::Px(32.0));
        assert_eq!(reply_avatar.corner_radius, Size::Percent(50.0));
    }

    #[test]
    fn reply_text_uses_the_longer_last_line() {
        let node = CommentConfig {
            items: 1,
            lines: 3,
            show_actions: false,
            ..CommentConfig::default()
        }
        .compose()
        .unwrap();
        let thread = &node.child_nodes()[0];
        let parent = thread.child_nodes()[0].units();
        let reply = thread.child_nodes()[1].units();
        assert_eq!(parent.len(), 1 + 2 + 3);
        assert_eq!(parent[5].width, Size::Percent(55.0));
        assert_eq!(reply.len(), 1 + 2 + 2);
        assert_eq!(reply[4].width, Size::Percent(70.0));
    }

    #[test]
    fn no_replies_column_without_replies() {
        let node = CommentConfig {
            items: 2,
            reply_count: 0,
            ..CommentConfig::default()
        }
        .compose()
        .unwrap();
        for thread in node.child_nodes() {
            assert_eq!(thread.child_nodes().len(), 1);
        }
    }

    #[test]
    fn parses_reply_count_alias() {
        let config: CommentConfig =
            serde_json::from_str(r#"{"replyCount": 3, "avatarSize": 40, "variant": "wave"}"#).unwrap();
        assert_eq!(config.reply_count, 3);
        assert_eq!(config.avatar_size, 40.0);
        assert_eq!(config.variant, Variant::Wave);
    }
}
