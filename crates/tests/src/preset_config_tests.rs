use pretty_assertions::assert_eq;
use skeleton_core::{Compose, Node, Preset, ShapeConfig, Size, SkeletonErrorKind, TextConfig, Variant};

use crate::common::widths;

#[test]
fn json_presets_use_camel_case_property_names() {
    let preset = Preset::from_json_str(
        r#"{"preset": "text", "lines": 2, "lastLineWidth": 40, "lineHeight": 10, "unknownProp": true}"#,
    )
    .unwrap();
    let node = preset.compose().unwrap().unwrap();
    assert_eq!(widths(&node), vec![Size::Percent(100.0), Size::Percent(40.0)]);
}

#[test]
fn toml_presets() {
    let source = r#"
preset = "comment"
items = 1
replyCount = 0
variant = "static"
"#;
    let node = Preset::from_toml_str(source).unwrap().compose().unwrap().unwrap();
    assert_eq!(node.child_nodes().len(), 1);
    assert!(node.units().iter().all(|u| u.variant == Variant::Static));
}

#[test]
fn every_preset_composes_with_defaults() {
    let names = [
        "shape",
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
    ];
    for name in names {
        let json = serde_json::json!({ "preset": name }).to_string();
        let preset = Preset::from_json_str(&json).unwrap();
        assert_eq!(preset.name(), name);
        let node = preset.compose().unwrap().unwrap();
        assert!(!node.units().is_empty(), "{name} rendered no units");
    }
}

#[test]
fn composed_trees_survive_json() {
    let node = TextConfig::default().compose().unwrap();
    let json = serde_json::to_string(&node).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back.units().last().unwrap().width, Size::Percent(60.0));
    assert_eq!(back, node);

    for name in ["card", "table", "image", "stat", "banner", "comment", "productRow", "chip"] {
        let preset = Preset::from_json_str(&serde_json::json!({ "preset": name }).to_string()).unwrap();
        let node = preset.compose().unwrap().unwrap();
        let back: Node = serde_json::from_str(&serde_json::to_string(&node).unwrap()).unwrap();
        assert_eq!(back, node, "{name}");
    }
}

#[test]
fn configs_survive_json() {
    let config = ShapeConfig::default();
    let back: ShapeConfig = serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(back.width, Size::Percent(100.0));
    assert_eq!(back, config);

    let preset = Preset::from_json_str(
        r#"{"preset": "text", "lines": 2, "style": {"width": "50%", "margin": "0 auto"}}"#,
    )
    .unwrap();
    let json = serde_json::to_string(&preset).unwrap();
    assert_eq!(Preset::from_json_str(&json).unwrap(), preset);
}

#[test]
fn bad_values_are_invalid_config() {
    for json in [
        r#"{"preset": "table", "rows": -2}"#,
        r#"{"preset": "chip", "count": 1.5}"#,
        r#"{"preset": "image", "aspectRatio": "2:1"}"#,
        r#"{"preset": "list", "avatarShape": "hexagon"}"#,
        r#"{"lines": 3}"#,
    ] {
        let err = Preset::from_json_str(json).unwrap_err();
        assert_eq!(err.kind, SkeletonErrorKind::InvalidConfig, "{json}");
    }
}
