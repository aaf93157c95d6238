use super::{full_width, leaf, non_negative, Compose};
use crate::error::{Result, SkeletonError};
use crate::node::{Align, Container, Node, Stack};
use crate::radius::RadiusPreset;
use crate::shape::ShapeConfig;
use crate::style::{Size, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// Kind of input a form row stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Input,
    Textarea,
    Select,
    Checkbox,
    Radio,
}

impl FieldType {
    /// Fixed control height, or `None` to use the configured input height.
    pub fn fixed_height(&self) -> Option<f64> {
        match self {
            FieldType::Input | FieldType::Select => None,
            FieldType::Textarea => Some(100.0),
            FieldType::Checkbox | FieldType::Radio => Some(20.0),
        }
    }

    /// Checkboxes and radios render inline with their label.
    pub fn is_toggle(&self) -> bool {
        matches!(self, FieldType::Checkbox | FieldType::Radio)
    }
}

/// Labelled form fields followed by a submit button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    pub fields: u32,
    pub gap: f64,
    pub show_label: bool,
    pub label_height: f64,
    pub input_height: f64,
    /// Type of each field in order; the last entry repeats.
    pub field_types: Vec<FieldType>,
    pub show_submit: bool,
    pub submit_width: Size,
    pub submit_height: f64,
    pub variant: Variant,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            fields: 4,
            gap: 20.0,
            show_label: true,
            label_height: 13.0,
            input_height: 44.0,
            field_types: vec![FieldType::Input],
            show_submit: true,
            submit_width: Size::Px(160.0),
            submit_height: 44.0,
            variant: Variant::Shimmer,
            class: None,
            style: Style::new(),
        }
    }
}

impl FormConfig {
    /// Type of field `index`; indices past the list reuse its last entry.
    pub fn field_type(&self, index: usize) -> Option<FieldType> {
        self.field_types
            .get(index)
            .or_else(|| self.field_types.last())
            .copied()
    }

    fn field(&self, kind: FieldType) -> Result<Node> {
        let label = if self.show_label && !kind.is_toggle() {
            Some(leaf(
                ShapeConfig::sized(Size::Percent(35.0), self.label_height)
                    .radius(4)
                    .variant(self.variant),
            )?)
        } else {
            None
        };

        let control: Node = if kind.is_toggle() {
            let radius = if kind == FieldType::Checkbox {
                RadiusPreset::Sm
            } else {
                RadiusPreset::Circle
            };
            Container::new(Stack::row().align(Align::Center).gap(10.0))
                .child(leaf(
                    ShapeConfig::sized(20, 20).radius(radius).variant(self.variant),
                )?)
                .child(leaf(
                    ShapeConfig::sized(Size::Percent(50.0), 13)
                        .radius(4)
                        .variant(self.variant),
                )?)
                .into()
        } else {
            let height = kind.fixed_height().unwrap_or(self.input_height);
            leaf(
                ShapeConfig::sized(Size::full(), height)
                    .radius(6)
                    .variant(self.variant),
            )?
        };

        Ok(Container::new(Stack::column().gap(8.0))
            .maybe_child(label)
            .child(control)
            .into())
    }
}

impl Compose for FormConfig {
    fn compose(&self) -> Result<Node> {
        let gap = non_negative("gap", self.gap)?;
        if self.fields > 0 && self.field_types.is_empty() {
            return Err(SkeletonError::invalid_field(
                "fieldTypes",
                "at least one field type is required",
            ));
        }

        let fields = (0..self.fields as usize)
            .filter_map(|i| self.field_type(i))
            .map(|kind| self.field(kind))
            .collect::<Result<Vec<_>>>()?;

        let submit = if self.show_submit {
            Some(
                Container::block()
                    .with_style(Style::new().with("padding-top", "4px"))
                    .child(leaf(
                        ShapeConfig::sized(self.submit_width.clone(), self.submit_height)
                            .radius(6)
                            .variant(self.variant),
                    )?)
                    .into(),
            )
        } else {
            None
        };

        Ok(Container::new(Stack::column().gap(gap))
            .with_style(full_width())
            .children(fields)
            .maybe_child(submit)
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}
