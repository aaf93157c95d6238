use pretty_assertions::assert_eq;
use skeleton_core::{AspectRatio, ImageConfig, Size, Skeleton};

#[test]
fn four_by_three_pads_seventy_five_percent() {
    let config = ImageConfig {
        aspect_ratio: AspectRatio::Standard,
        height: None,
        ..ImageConfig::default()
    };
    assert_eq!(config.aspect_ratio.padding_fraction(), 0.75);

    let node = Skeleton::image(&config).unwrap();
    let frame = node.as_container().unwrap();
    assert_eq!(frame.style.get("padding-top"), Some("75%"));
    assert_eq!(frame.style.get("position"), Some("relative"));
}

#[test]
fn explicit_height_wins() {
    let config = ImageConfig {
        aspect_ratio: AspectRatio::Standard,
        height: Some(Size::Px(90.0)),
        ..ImageConfig::default()
    };
    let node = Skeleton::image(&config).unwrap();
    assert_eq!(node.depth(), 1);
    assert_eq!(node.units()[0].height, Size::Px(90.0));
}

#[test]
fn ratio_parses_from_config() {
    let config: ImageConfig = serde_json::from_str(r#"{"aspectRatio": "4:3"}"#).unwrap();
    assert_eq!(config.aspect_ratio, AspectRatio::Standard);
}
