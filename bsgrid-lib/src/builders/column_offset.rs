use super::{value_selectors, GridBuilder, GridRule};
use crate::enums::breakpoint::Breakpoint;

/// A column offset (`"1"`..`"12"`) with an optional breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnOffsetRule {
    offset: String,
    breakpoint: Option<Breakpoint>,
}

impl ColumnOffsetRule {
    pub fn new(offset: impl Into<String>, breakpoint: Option<Breakpoint>) -> Self {
        ColumnOffsetRule {
            offset: offset.into(),
            breakpoint,
        }
    }

    pub fn offset(&self) -> &str {
        &self.offset
    }
}

impl GridRule for ColumnOffsetRule {
    const DEFAULT_VALUE: &'static str = "12";

    fn from_parts(value: String, breakpoint: Option<Breakpoint>) -> Self {
        ColumnOffsetRule::new(value, breakpoint)
    }

    fn value(&self) -> &str {
        &self.offset
    }

    fn breakpoint(&self) -> Option<Breakpoint> {
        self.breakpoint
    }

    fn base_class(value: &str) -> &'static str {
        match value {
            "1" => "offset-1",
            "2" => "offset-2",
            "3" => "offset-3",
            "4" => "offset-4",
            "5" => "offset-5",
            "6" => "offset-6",
            "7" => "offset-7",
            "8" => "offset-8",
            "9" => "offset-9",
            "10" => "offset-10",
            "11" => "offset-11",
            "12" => "offset-12",
            _ => "",
        }
    }
}

/// Builds `offset-*` classes.
pub type ColumnOffsetBuilder = GridBuilder<ColumnOffsetRule>;

impl GridBuilder<ColumnOffsetRule> {
    value_selectors! {
        o1 => "1",
        o2 => "2",
        o3 => "3",
        o4 => "4",
        o5 => "5",
        o6 => "6",
        o7 => "7",
        o8 => "8",
        o9 => "9",
        o10 => "10",
        o11 => "11",
        o12 => "12",
    }
}
