use super::{value_selectors, GridBuilder, GridRule};
use crate::enums::breakpoint::Breakpoint;
use crate::enums::column_order::ColumnOrder;

/// A column order token (`"1"`..`"12"`, `"first"`, `"last"`) with an optional
/// breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnOrderRule {
    order: String,
    breakpoint: Option<Breakpoint>,
}

impl ColumnOrderRule {
    pub fn new(order: impl Into<String>, breakpoint: Option<Breakpoint>) -> Self {
        ColumnOrderRule {
            order: order.into(),
            breakpoint,
        }
    }

    pub fn order(&self) -> &str {
        &self.order
    }
}

impl From<ColumnOrder> for ColumnOrderRule {
    fn from(order: ColumnOrder) -> Self {
        ColumnOrderRule::new(order.value(), None)
    }
}

impl GridRule for ColumnOrderRule {
    const DEFAULT_VALUE: &'static str = "12";

    fn from_parts(value: String, breakpoint: Option<Breakpoint>) -> Self {
        ColumnOrderRule::new(value, breakpoint)
    }

    fn value(&self) -> &str {
        &self.order
    }

    fn breakpoint(&self) -> Option<Breakpoint> {
        self.breakpoint
    }

    fn base_class(value: &str) -> &'static str {
        match value {
            "1" => "order-1",
            "2" => "order-2",
            "3" => "order-3",
            "4" => "order-4",
            "5" => "order-5",
            "6" => "order-6",
            "7" => "order-7",
            "8" => "order-8",
            "9" => "order-9",
            "10" => "order-10",
            "11" => "order-11",
            "12" => "order-12",
            "first" => "order-first",
            "last" => "order-last",
            _ => "",
        }
    }
}

/// Builds `order-*` classes.
pub type ColumnOrderBuilder = GridBuilder<ColumnOrderRule>;

impl GridBuilder<ColumnOrderRule> {
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
        first => "first",
        last => "last",
    }

    pub fn order(self, order: ColumnOrder) -> Self {
        self.chain_with_value(order.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::CssBuilder;

    #[test]
    fn test_named_orders() {
        let builder = ColumnOrderBuilder::empty().first().on_desktop().last();
        assert_eq!(builder.to_class(), "order-xl-first order-last");
    }

    #[test]
    fn test_order_enum_selector_matches_named_selector() {
        let by_enum = ColumnOrderBuilder::empty().order(ColumnOrder::O5).on_widescreen();
        let by_name = ColumnOrderBuilder::empty().o5().on_widescreen();
        assert_eq!(by_enum, by_name);
        assert_eq!(by_enum.to_class(), "order-xxl-5");
    }

    #[test]
    fn test_rule_from_order_enum() {
        let builder = ColumnOrderBuilder::empty().push(ColumnOrder::Last.into()).on_phone();
        assert_eq!(builder.to_class(), "order-sm-last");
    }
}
