//! Sizes and inline style declarations shared by every node of a composite tree.

use crate::error::{Result, SkeletonError};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A width, height or radius value.
///
/// Pixel and percentage values come from the composers or from plain
/// `"12px"` / `"60%"` strings. Anything else (`auto`, `calc(...)`) is an
/// opaque expression that is never interpreted, only passed through to the
/// renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Size {
    Px(f64),
    Percent(f64),
    Expr(String),
}

impl Size {
    pub fn full() -> Self {
        Size::Percent(100.0)
    }

    /// Reject negative or non-finite numeric values. Expressions pass.
    pub fn validate(&self, field: &str) -> Result<()> {
        match self {
            Size::Px(n) | Size::Percent(n) if !n.is_finite() => Err(
                SkeletonError::invalid_field(field, format!("{n} is not a finite size")),
            ),
            Size::Px(n) | Size::Percent(n) if *n < 0.0 => Err(SkeletonError::invalid_field(
                field,
                format!("{n} is negative"),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Px(n) => write!(f, "{n}px"),
            Size::Percent(p) => write!(f, "{p}%"),
            Size::Expr(expr) => f.write_str(expr),
        }
    }
}

impl From<f64> for Size {
    fn from(px: f64) -> Self {
        Size::Px(px)
    }
}

impl From<u32> for Size {
    fn from(px: u32) -> Self {
        Size::Px(f64::from(px))
    }
}

impl From<i32> for Size {
    fn from(px: i32) -> Self {
        Size::Px(f64::from(px))
    }
}

impl From<&str> for Size {
    fn from(text: &str) -> Self {
        Size::parse(text)
    }
}

impl From<String> for Size {
    fn from(text: String) -> Self {
        Size::parse(&text)
    }
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Size::Px(n) => serializer.serialize_f64(*n),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

/// Numbers or strings, as they appear in JSON and TOML configuration.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrText {
    Number(f64),
    Text(String),
}

impl Size {
    /// Read a configuration string. `"60%"` and `"12px"` become typed
    /// values; anything else, negative lengths included, stays an expression.
    pub fn parse(text: &str) -> Size {
        let typed = |suffix: &str, make: fn(f64) -> Size| {
            text.strip_suffix(suffix)
                .and_then(|n| n.parse::<f64>().ok())
                .filter(|n| n.is_finite() && *n >= 0.0)
                .map(make)
        };
        typed("%", Size::Percent)
            .or_else(|| typed("px", Size::Px))
            .unwrap_or_else(|| Size::Expr(text.to_string()))
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => Size::Px(n),
            NumberOrText::Text(text) => Size::parse(&text),
        })
    }
}

/// Format a pixel length the way inline styles expect it.
pub fn px(n: f64) -> String {
    format!("{n}px")
}

/// An ordered list of CSS declarations.
///
/// Setting a property that is already present replaces its value in place,
/// so the declaration order is the order in which properties first appeared.
/// Configuration maps keep their document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, property: &str, value: impl ToString) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: &str, value: impl ToString) {
        let value = value.to_string();
        match self.declarations.iter_mut().find(|(p, _)| p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property.to_string(), value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Merge `overrides` on top of `computed`.
    ///
    /// Every declaration in `overrides` wins over a computed declaration of
    /// the same property. Properties only present in `overrides` are appended
    /// after the computed ones.
    pub fn merged(computed: &Style, overrides: &Style) -> Style {
        let mut out = computed.clone();
        for (property, value) in &overrides.declarations {
            out.set(property, value);
        }
        out
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{property}:{value}")?;
        }
        Ok(())
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for (property, value) in &self.declarations {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

struct StyleVisitor;

impl<'de> Visitor<'de> for StyleVisitor {
    type Value = Style;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of CSS properties to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Style, A::Error> {
        let mut style = Style::new();
        while let Some((property, value)) = access.next_entry::<String, String>()? {
            style.set(&property, value);
        }
        Ok(style)
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(StyleVisitor)
    }
}

/// Parses an inline `style` attribute such as `"opacity:0.5; width: 10px"`.
/// Declarations without a colon are skipped.
impl FromStr for Style {
    type Err = std::convert::Infallible;

    fn from_str(inline: &str) -> std::result::Result<Self, Self::Err> {
        Ok(inline
            .split(';')
            .filter_map(|declaration| declaration.split_once(':'))
            .map(|(property, value)| (property.trim(), value.trim()))
            .filter(|(property, _)| !property.is_empty())
            .collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Style {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}

/// Join class names, skipping empty ones.
pub fn join_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn size_display_formats_each_kind() {
        assert_eq!(Size::Px(16.0).to_string(), "16px");
        assert_eq!(Size::Px(28.8).to_string(), "28.8px");
        assert_eq!(Size::Percent(60.0).to_string(), "60%");
        assert_eq!(Size::Expr("calc(100% - 8px)".into()).to_string(), "calc(100% - 8px)");
    }

    #[test]
    fn size_validate_rejects_negative_and_nan() {
        assert!(Size::Px(-1.0).validate("width").is_err());
        assert!(Size::Percent(f64::NAN).validate("width").is_err());
        assert!(Size::Px(0.0).validate("width").is_ok());
        assert!(Size::Expr("-5px".into()).validate("width").is_ok());
    }

    #[test]
    fn size_deserializes_numbers_units_and_expressions() {
        let sizes: Vec<Size> =
            serde_json::from_str(r#"[120, 12.5, "auto", "50%", "8px", "-4px", "calc(100% - 8px)"]"#)
                .unwrap();
        assert_eq!(
            sizes,
            vec![
                Size::Px(120.0),
                Size::Px(12.5),
                Size::Expr("auto".into()),
                Size::Percent(50.0),
                Size::Px(8.0),
                Size::Expr("-4px".into()),
                Size::Expr("calc(100% - 8px)".into()),
            ]
        );
    }

    #[test]
    fn size_survives_serde() {
        let sizes = vec![Size::Px(16.0), Size::Percent(60.0), Size::Expr("auto".into())];
        let json = serde_json::to_string(&sizes).unwrap();
        assert_eq!(json, r#"[16.0,"60%","auto"]"#);
        assert_eq!(serde_json::from_str::<Vec<Size>>(&json).unwrap(), sizes);
    }

    #[test]
    fn style_set_replaces_in_place() {
        let mut style = Style::new().with("width", "10px").with("height", "4px");
        style.set("width", "20px");
        assert_eq!(style.to_string(), "width:20px;height:4px");
    }

    #[test]
    fn merged_gives_overrides_precedence() {
        let computed = Style::new().with("width", "100%").with("height", "16px");
        let overrides = Style::new().with("opacity", "0.4").with("height", "20px");
        let merged = Style::merged(&computed, &overrides);
        assert_eq!(merged.to_string(), "width:100%;height:20px;opacity:0.4");
        // Inputs stay untouched.
        assert_eq!(computed.get("height"), Some("16px"));
    }

    #[test]
    fn style_deserializes_from_map() {
        let style: Style = serde_json::from_str(r#"{"margin-top": "4px"}"#).unwrap();
        assert_eq!(style.get("margin-top"), Some("4px"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn style_keeps_document_order() {
        let json = r#"{"width":"320px","outline":"1px dashed red","aspect-ratio":"2"}"#;
        let style: Style = serde_json::from_str(json).unwrap();
        assert_eq!(style.to_string(), "width:320px;outline:1px dashed red;aspect-ratio:2");
        assert_eq!(serde_json::to_string(&style).unwrap(), json);

        let style: Style = toml::from_str("z-index = \"2\"\nopacity = \"0.5\"").unwrap();
        assert_eq!(style.to_string(), "z-index:2;opacity:0.5");
    }

    #[test]
    fn style_parses_inline_attribute() {
        let style: Style = "opacity:0.5; width: 10px;;broken".parse().unwrap();
        assert_eq!(style.to_string(), "opacity:0.5;width:10px");
    }

    #[test]
    fn join_classes_skips_blanks() {
        assert_eq!(join_classes(["nano-skeleton", "", " extra "]), "nano-skeleton extra");
    }
}
