use super::{value_selectors, GridBuilder, GridRule};
use crate::enums::breakpoint::Breakpoint;

/// A column width (`"1"`..`"12"` or `"auto"`) with an optional breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnSizeRule {
    size: String,
    breakpoint: Option<Breakpoint>,
}

impl ColumnSizeRule {
    pub fn new(size: impl Into<String>, breakpoint: Option<Breakpoint>) -> Self {
        ColumnSizeRule {
            size: size.into(),
            breakpoint,
        }
    }

    pub fn size(&self) -> &str {
        &self.size
    }
}

impl GridRule for ColumnSizeRule {
    const DEFAULT_VALUE: &'static str = "12";

    fn from_parts(value: String, breakpoint: Option<Breakpoint>) -> Self {
        ColumnSizeRule::new(value, breakpoint)
    }

    fn value(&self) -> &str {
        &self.size
    }

    fn breakpoint(&self) -> Option<Breakpoint> {
        self.breakpoint
    }

    fn base_class(value: &str) -> &'static str {
        match value {
            "1" => "col-1",
            "2" => "col-2",
            "3" => "col-3",
            "4" => "col-4",
            "5" => "col-5",
            "6" => "col-6",
            "7" => "col-7",
            "8" => "col-8",
            "9" => "col-9",
            "10" => "col-10",
            "11" => "col-11",
            "12" => "col-12",
            "auto" => "col-auto",
            _ => "",
        }
    }
}

/// Builds `col-*` classes, e.g. `ColumnSizeBuilder::empty().s12().s6().on_tablet()`
/// renders `col-12 col-md-6`.
pub type ColumnSizeBuilder = GridBuilder<ColumnSizeRule>;

impl GridBuilder<ColumnSizeRule> {
    value_selectors! {
        s1 => "1",
        s2 => "2",
        s3 => "3",
        s4 => "4",
        s5 => "5",
        s6 => "6",
        s7 => "7",
        s8 => "8",
        s9 => "9",
        s10 => "10",
        s11 => "11",
        s12 => "12",
        /// Sizes the column to its content.
        auto => "auto",
    }
}
