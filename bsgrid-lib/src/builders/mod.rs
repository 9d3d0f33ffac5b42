//! Fluent builders that turn column rules into Bootstrap grid classes.
//!
//! A builder owns an ordered list of rules. Value selectors (`s6()`, `o2()`,
//! `first()`, ...) append a rule; breakpoint selectors (`on_tablet()`, ...)
//! re-tag the most recent rule. Every selector takes the builder by value and
//! hands the same accumulator back, so a chain never copies the rule list.
//!
//! Rendering walks the rules in insertion order, looks up each value's base
//! class, splices the breakpoint infix after the first hyphen and joins the
//! results with single spaces. Values missing from a rule kind's table render
//! nothing at all.

/// Generates value selectors that append one rule each.
macro_rules! value_selectors {
    ($($(#[$meta:meta])* $name:ident => $value:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(self) -> Self {
                self.chain_with_value($value)
            }
        )*
    };
}

pub(crate) use value_selectors;

pub mod column_offset;
pub mod column_order;
pub mod column_size;

use crate::enums::breakpoint::{breakpoint_class, Breakpoint};
use std::fmt;

pub use column_offset::{ColumnOffsetBuilder, ColumnOffsetRule};
pub use column_order::{ColumnOrderBuilder, ColumnOrderRule};
pub use column_size::{ColumnSizeBuilder, ColumnSizeRule};

/// Anything that renders to a `class` and a `style` attribute value.
pub trait CssBuilder {
    fn to_class(&self) -> String;
    fn to_style(&self) -> String;
}

/// One kind of `(value, breakpoint)` rule together with its class table.
pub trait GridRule: Clone {
    /// Value synthesized when a breakpoint is set on an empty builder.
    const DEFAULT_VALUE: &'static str;

    fn from_parts(value: String, breakpoint: Option<Breakpoint>) -> Self;

    fn value(&self) -> &str;

    fn breakpoint(&self) -> Option<Breakpoint>;

    /// Breakpoint-free class for `value`, or `""` if the value is unknown.
    fn base_class(value: &str) -> &'static str;

    fn with_breakpoint(&self, breakpoint: Breakpoint) -> Self {
        Self::from_parts(self.value().to_string(), Some(breakpoint))
    }
}

/// Accumulates rules of one kind. Use the aliases [`ColumnSizeBuilder`],
/// [`ColumnOffsetBuilder`] and [`ColumnOrderBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuilder<R> {
    rules: Vec<R>,
}

impl<R> Default for GridBuilder<R> {
    fn default() -> Self {
        GridBuilder {
            rules: Vec::with_capacity(4),
        }
    }
}

impl<R: GridRule> GridBuilder<R> {
    /// A builder holding a single rule.
    pub fn new(value: impl Into<String>, breakpoint: Option<Breakpoint>) -> Self {
        let mut builder = Self::default();
        builder.rules.push(R::from_parts(value.into(), breakpoint));
        builder
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Seeds a builder with a copy of `rules`, preserving their order.
    pub fn from_rules(rules: &[R]) -> Self {
        log::trace!("seeding grid builder with {} rules", rules.len());
        let mut builder = Self::default();
        builder.rules.extend_from_slice(rules);
        builder
    }

    pub fn push(mut self, rule: R) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[R] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Tags the most recent rule with `breakpoint`. An empty builder first
    /// gets a rule with the kind's default value.
    pub fn on(mut self, breakpoint: Breakpoint) -> Self {
        match self.rules.last_mut() {
            Some(last) => *last = last.with_breakpoint(breakpoint),
            None => self
                .rules
                .push(R::from_parts(R::DEFAULT_VALUE.to_string(), Some(breakpoint))),
        }
        self
    }

    pub fn on_phone(self) -> Self {
        self.on(Breakpoint::Phone)
    }

    pub fn on_tablet(self) -> Self {
        self.on(Breakpoint::Tablet)
    }

    pub fn on_laptop(self) -> Self {
        self.on(Breakpoint::Laptop)
    }

    pub fn on_desktop(self) -> Self {
        self.on(Breakpoint::Desktop)
    }

    pub fn on_widescreen(self) -> Self {
        self.on(Breakpoint::Widescreen)
    }

    pub fn on_ultrawide(self) -> Self {
        self.on(Breakpoint::Ultrawide)
    }

    fn chain_with_value(mut self, value: &str) -> Self {
        self.rules.push(R::from_parts(value.to_string(), None));
        self
    }
}

impl<R: GridRule> CssBuilder for GridBuilder<R> {
    fn to_class(&self) -> String {
        render_classes(&self.rules)
    }

    // Grid sizing, offsets and ordering only exist as classes.
    fn to_style(&self) -> String {
        String::new()
    }
}

impl<R: GridRule> fmt::Display for GridBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_class())
    }
}

/// Renders `rules` in order, skipping values the rule kind does not know.
pub(crate) fn render_classes<R: GridRule>(rules: &[R]) -> String {
    let mut out = String::new();
    for rule in rules {
        let class = R::base_class(rule.value());
        if class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        let infix = breakpoint_class(rule.breakpoint());
        if infix.is_empty() {
            out.push_str(class);
        } else {
            out.push_str(&insert_breakpoint(class, infix));
        }
    }
    out
}

/// `col-6` + `md` => `col-md-6`. A class without a hyphen past its first
/// character gets the infix prepended instead.
pub(crate) fn insert_breakpoint(class_name: &str, infix: &str) -> String {
    let mut out = String::with_capacity(class_name.len() + infix.len() + 1);
    match class_name.find('-') {
        Some(dash) if dash > 0 => {
            out.push_str(&class_name[..dash]);
            out.push('-');
            out.push_str(infix);
            out.push_str(&class_name[dash..]);
        }
        _ => {
            out.push_str(infix);
            out.push('-');
            out.push_str(class_name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_after_first_hyphen() {
        assert_eq!(insert_breakpoint("col-6", "md"), "col-md-6");
        assert_eq!(insert_breakpoint("order-first", "xl"), "order-xl-first");
        assert_eq!(insert_breakpoint("col-auto", "lg"), "col-lg-auto");
    }

    #[test]
    fn test_insert_without_hyphen_prepends() {
        assert_eq!(insert_breakpoint("col", "md"), "md-col");
        // A leading hyphen does not count as a split point.
        assert_eq!(insert_breakpoint("-x", "sm"), "sm--x");
    }

    #[test]
    fn test_render_skips_unknown_values_without_stray_spaces() {
        let rules = vec![
            ColumnSizeRule::new("99", Some(Breakpoint::Tablet)),
            ColumnSizeRule::new("3", None),
            ColumnSizeRule::new("", None),
            ColumnSizeRule::new("4", Some(Breakpoint::Phone)),
            ColumnSizeRule::new("nope", None),
        ];
        assert_eq!(render_classes(&rules), "col-3 col-sm-4");
    }

    #[test]
    fn test_render_nothing() {
        let rules: Vec<ColumnSizeRule> = Vec::new();
        assert_eq!(render_classes(&rules), "");
        assert_eq!(render_classes(&[ColumnSizeRule::new("13", None)]), "");
    }

    #[test]
    fn test_breakpoint_replaces_only_last_rule() {
        let builder = ColumnSizeBuilder::empty()
            .s2()
            .on_phone()
            .s8()
            .on_tablet()
            .on_desktop();
        assert_eq!(
            builder.rules(),
            &[
                ColumnSizeRule::new("2", Some(Breakpoint::Phone)),
                ColumnSizeRule::new("8", Some(Breakpoint::Desktop)),
            ]
        );
    }
}
