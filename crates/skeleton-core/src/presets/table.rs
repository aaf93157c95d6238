use super::{full_width, leaf, non_negative, Compose};
use crate::error::Result;
use crate::node::{Container, Grid, Node, Stack, Track};
use crate::radius::Radius;
use crate::shape::ShapeConfig;
use crate::style::{Size, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// Rows of equally wide cells, with an optional taller header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Body rows, not counting the header.
    pub rows: u32,
    pub cols: u32,
    pub row_gap: f64,
    pub col_gap: f64,
    pub cell_height: f64,
    pub variant: Variant,
    pub cell_radius: Radius,
    pub show_header: bool,
    pub header_height: f64,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 4,
            row_gap: 12.0,
            col_gap: 12.0,
            cell_height: 16.0,
            variant: Variant::Shimmer,
            cell_radius: Radius::Px(4.0),
            show_header: false,
            header_height: 20.0,
            class: None,
            style: Style::new(),
        }
    }
}

impl TableConfig {
    /// Rows actually rendered, header included.
    pub fn total_rows(&self) -> u32 {
        if self.show_header {
            self.rows + 1
        } else {
            self.rows
        }
    }

    fn row(&self, height: f64) -> Result<Node> {
        let cells = (0..self.cols)
            .map(|_| {
                leaf(
                    ShapeConfig::sized(Size::full(), height)
                        .radius(self.cell_radius.clone())
                        .variant(self.variant),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Container::new(Grid {
            columns: self.cols,
            gap: self.col_gap,
            track: Track::Fraction,
        })
        .with_style(full_width())
        .children(cells)
        .into())
    }
}

impl Compose for TableConfig {
    fn compose(&self) -> Result<Node> {
        let row_gap = non_negative("rowGap", self.row_gap)?;
        non_negative("colGap", self.col_gap)?;

        let rows = (0..self.total_rows())
            .map(|index| {
                let is_header = self.show_header && index == 0;
                self.row(if is_header {
                    self.header_height
                } else {
                    self.cell_height
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Container::new(Stack::column().gap(row_gap))
            .with_style(full_width())
            .children(rows)
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}
