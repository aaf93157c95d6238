use pretty_assertions::assert_eq;
use skeleton_core::{ChipConfig, Skeleton, SkeletonErrorKind};

use crate::common::{px, widths};

#[test]
fn widths_cycle_through_the_list() {
    let config = ChipConfig {
        count: 8,
        vary_widths: true,
        width_cycle: vec![72.0, 56.0, 88.0],
        ..ChipConfig::default()
    };
    let node = Skeleton::chip(&config).unwrap();
    assert_eq!(
        widths(&node),
        px(&[72.0, 56.0, 88.0, 72.0, 56.0, 88.0, 72.0, 56.0])
    );
}

#[test]
fn chips_are_pills() {
    let node = Skeleton::chip(&ChipConfig::default()).unwrap();
    assert!(node.units().iter().all(|u| u.corner_radius.to_string() == "9999px"));
}

#[test]
fn empty_cycle_fails() {
    let config = ChipConfig {
        width_cycle: Vec::new(),
        ..ChipConfig::default()
    };
    let err = Skeleton::chip(&config).unwrap_err();
    assert_eq!(err.kind, SkeletonErrorKind::InvalidConfig);
}
