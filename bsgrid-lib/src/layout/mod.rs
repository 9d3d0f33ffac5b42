//! Combines size, offset and order builders into a column's class attribute.

pub mod notation;
pub mod spec;

use crate::builders::{ColumnOffsetBuilder, ColumnOrderBuilder, ColumnSizeBuilder, CssBuilder};

/// The grid classes of a single column.
///
/// Parts render in a fixed order: size, offset, then order. Parts that are
/// unset or render nothing leave no gap in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    pub size: Option<ColumnSizeBuilder>,
    pub offset: Option<ColumnOffsetBuilder>,
    pub order: Option<ColumnOrderBuilder>,
}

impl ColumnLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: ColumnSizeBuilder) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_offset(mut self, offset: ColumnOffsetBuilder) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_order(mut self, order: ColumnOrderBuilder) -> Self {
        self.order = Some(order);
        self
    }
}

impl CssBuilder for ColumnLayout {
    fn to_class(&self) -> String {
        let parts = [
            self.size.as_ref().map(CssBuilder::to_class),
            self.offset.as_ref().map(CssBuilder::to_class),
            self.order.as_ref().map(CssBuilder::to_class),
        ];
        parts
            .into_iter()
            .flatten()
            .filter(|class| !class.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_style(&self) -> String {
        String::new()
    }
}
