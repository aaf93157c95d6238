use pretty_assertions::assert_eq;
use skeleton_core::{ShapeConfig, Skeleton, Variant, ALL_VARIANTS};

fn resolved_variant(config: &ShapeConfig) -> Variant {
    Skeleton::shape(config).unwrap().unwrap().units()[0].variant
}

#[test]
fn animate_false_is_always_static() {
    for variant in ALL_VARIANTS {
        let config = ShapeConfig::default().variant(*variant).animate(false);
        assert_eq!(resolved_variant(&config), Variant::Static);
    }
}

#[test]
fn animate_omitted_or_true_keeps_the_variant() {
    let omitted = ShapeConfig::default().variant(Variant::Pulse);
    assert_eq!(resolved_variant(&omitted), Variant::Pulse);

    let enabled = ShapeConfig::default().variant(Variant::Pulse).animate(true);
    assert_eq!(resolved_variant(&enabled), Variant::Pulse);
}

#[test]
fn animation_class_names() {
    let config = ShapeConfig::default().variant(Variant::Wave);
    let node = Skeleton::shape(&config).unwrap().unwrap();
    assert_eq!(
        node.units()[0].class_name(),
        "nano-skeleton nano-skeleton-wave"
    );

    let legacy = ShapeConfig::from_json_str(r#"{"variant": "shimmer", "animate": false}"#).unwrap();
    let node = Skeleton::shape(&legacy).unwrap().unwrap();
    assert_eq!(
        node.units()[0].class_name(),
        "nano-skeleton nano-skeleton-static"
    );
}

#[test]
fn unknown_variant_name_is_rejected() {
    assert!("bounce".parse::<Variant>().is_err());
    assert!(ShapeConfig::from_json_str(r#"{"variant": "bounce"}"#).is_err());
}
