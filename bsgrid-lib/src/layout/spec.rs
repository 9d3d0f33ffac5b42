//! JSON layout documents.
//!
//! ```json
//! { "size": "12 md:6", "offset": "md:3", "order": "first" }
//! ```
//!
//! Each field holds a rule list in [`notation`](super::notation) form and may
//! be left out.

use super::ColumnLayout;
use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl LayoutSpec {
    pub fn from_json(text: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Fields set in `overrides` replace the ones in `self`.
    pub fn merge(self, overrides: LayoutSpec) -> LayoutSpec {
        LayoutSpec {
            size: overrides.size.or(self.size),
            offset: overrides.offset.or(self.offset),
            order: overrides.order.or(self.order),
        }
    }

    pub fn to_layout(&self) -> Result<ColumnLayout, LayoutError> {
        let mut layout = ColumnLayout::new();
        if let Some(size) = &self.size {
            layout = layout.with_size(size.parse()?);
        }
        if let Some(offset) = &self.offset {
            layout = layout.with_offset(offset.parse()?);
        }
        if let Some(order) = &self.order {
            layout = layout.with_order(order.parse()?);
        }
        Ok(layout)
    }
}
