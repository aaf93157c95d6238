use pretty_assertions::assert_eq;
use skeleton_core::{Preset, Style};

fn with_overrides(name: &str) -> Preset {
    let json = serde_json::json!({
        "preset": name,
        "className": "  custom  ",
        "style": { "width": "320px", "outline": "1px dashed red" },
    })
    .to_string();
    Preset::from_json_str(&json).unwrap()
}

#[test]
fn outermost_node_takes_class_and_style() {
    for name in [
        "text",
        "avatarText",
        "card",
        "table",
        "button",
        "image",
        "list",
        "form",
        "stat",
        "banner",
        "comment",
        "productRow",
        "chip",
    ] {
        let node = with_overrides(name).compose().unwrap().unwrap();
        let (class, css) = match node.as_container() {
            Some(container) => (container.class.clone(), container.css()),
            None => {
                let unit = node.as_unit().unwrap();
                (unit.class.clone(), unit.css())
            }
        };
        assert_eq!(class.as_deref(), Some("custom"), "{name}");
        assert_eq!(css.get("width"), Some("320px"), "{name}");
        assert_eq!(css.get("outline"), Some("1px dashed red"), "{name}");
    }
}

#[test]
fn overrides_replace_in_place_and_append() {
    let computed = Style::new().with("display", "flex").with("width", "100%");
    let overrides = Style::new().with("width", "50%").with("opacity", "0.5");
    assert_eq!(
        Style::merged(&computed, &overrides).to_string(),
        "display:flex;width:50%;opacity:0.5"
    );
}
