use pretty_assertions::assert_eq;
use skeleton_core::{Layout, Node, ShapeConfig, Skeleton, SkeletonErrorKind};

// ── Repetition ──────────────────────────────────────────────────────

#[test]
fn count_one_is_a_bare_unit() {
    let node = Skeleton::shape(&ShapeConfig::default()).unwrap().unwrap();
    assert!(matches!(node, Node::Unit(_)));
    assert_eq!(node.depth(), 1);
}

#[test]
fn count_n_yields_n_units_in_one_stack() {
    for count in [2, 3, 10] {
        let config = ShapeConfig::sized(80, 12).count(count).gap(6.0);
        let node = Skeleton::shape(&config).unwrap().unwrap();
        assert_eq!(node.units().len(), count as usize);
        assert_eq!(node.depth(), 2);

        let stack = node.as_container().unwrap();
        match &stack.layout {
            Layout::Flex(flex) => assert_eq!(flex.gap, Some(6.0)),
            other => panic!("unexpected layout {other:?}"),
        }
        // one gap directive spaces all children
        let css = stack.css().to_string();
        assert_eq!(css.matches("gap:").count(), 1);
        assert_eq!(css, "display:flex;flex-direction:column;gap:6px");
    }
}

#[test]
fn every_repeated_unit_is_identical() {
    let config = ShapeConfig::sized("50%", 20).radius("lg").count(4);
    let node = Skeleton::shape(&config).unwrap().unwrap();
    let units = node.units();
    assert!(units.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn count_zero_renders_nothing() {
    let config = ShapeConfig::default().count(0);
    assert_eq!(Skeleton::shape(&config).unwrap(), None);
}

// ── Malformed counts ────────────────────────────────────────────────

#[test]
fn negative_count_is_invalid_config() {
    let err = ShapeConfig::from_json_str(r#"{"count": -1}"#).unwrap_err();
    assert_eq!(err.kind, SkeletonErrorKind::InvalidConfig);
}

#[test]
fn fractional_count_is_invalid_config() {
    let err = ShapeConfig::from_json_str(r#"{"count": 2.5}"#).unwrap_err();
    assert_eq!(err.kind, SkeletonErrorKind::InvalidConfig);

    let err = ShapeConfig::from_toml_str("count = 1.5").unwrap_err();
    assert_eq!(err.kind, SkeletonErrorKind::InvalidConfig);
}

#[test]
fn negative_dimensions_are_invalid_config() {
    let err = Skeleton::shape(&ShapeConfig::sized(-10, 16)).unwrap_err();
    assert_eq!(err.kind, SkeletonErrorKind::InvalidConfig);
    assert_eq!(err.field.as_deref(), Some("width"));
}
