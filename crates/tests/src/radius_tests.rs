use pretty_assertions::{assert_eq, assert_ne};
use skeleton_core::{
    Compose, FieldType, FormConfig, ListConfig, Radius, RadiusPreset, ShapeConfig, Size, Skeleton,
    TableConfig, ALL_PRESETS,
};

fn shape_radius(radius: impl Into<Radius>) -> Size {
    let config = ShapeConfig::default().radius(radius);
    Skeleton::shape(&config).unwrap().unwrap().units()[0]
        .corner_radius
        .clone()
}

#[test]
fn sm_is_the_same_everywhere() {
    let sm = shape_radius("sm");
    assert_eq!(sm, RadiusPreset::Sm.value());

    // List thumbnails and checkboxes are both `sm`
    let list = ListConfig {
        items: 1,
        show_thumbnail: true,
        ..ListConfig::default()
    }
    .compose()
    .unwrap();
    assert_eq!(list.units()[0].corner_radius, sm);

    let form = FormConfig {
        fields: 1,
        field_types: vec![FieldType::Checkbox],
        show_submit: false,
        ..FormConfig::default()
    }
    .compose()
    .unwrap();
    assert_eq!(form.units()[0].corner_radius, sm);

    let table = TableConfig {
        rows: 1,
        cols: 1,
        cell_radius: Radius::from("sm"),
        ..TableConfig::default()
    }
    .compose()
    .unwrap();
    assert_eq!(table.units()[0].corner_radius, sm);
}

#[test]
fn presets_are_distinct() {
    let values: Vec<Size> = ALL_PRESETS.iter().map(|preset| shape_radius(*preset)).collect();
    for (i, a) in values.iter().enumerate() {
        for b in &values[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(shape_radius("sm"), shape_radius("md"));
    assert_ne!(shape_radius("sm"), shape_radius("lg"));
    assert_ne!(shape_radius("sm"), shape_radius("xl"));
}

#[test]
fn raw_values_pass_through() {
    assert_eq!(shape_radius(3), Size::Px(3.0));
    assert_eq!(shape_radius("0.5rem"), Size::Expr("0.5rem".into()));
    assert_eq!(shape_radius("circle"), Size::Percent(50.0));
}
