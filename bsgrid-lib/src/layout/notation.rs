//! The `bp:value` text notation, e.g. `"12 md:6 xl:auto"`.
//!
//! Tokens are separated by whitespace. A token without a colon is a bare
//! value; otherwise the part before the colon names a breakpoint, either by
//! variant (`tablet`) or by infix (`md`). Values are kept as written and only
//! judged at render time.

use crate::builders::{GridBuilder, GridRule};
use crate::enums::breakpoint::Breakpoint;
use crate::error::LayoutError;
use std::str::FromStr;

pub fn parse_rules<R: GridRule>(notation: &str) -> Result<Vec<R>, LayoutError> {
    notation.split_whitespace().map(parse_rule).collect()
}

fn parse_rule<R: GridRule>(token: &str) -> Result<R, LayoutError> {
    let Some((bp, value)) = token.split_once(':') else {
        return Ok(R::from_parts(token.to_string(), None));
    };
    let breakpoint = Breakpoint::from_str(bp)
        .map_err(|_| LayoutError::UnknownBreakpoint(bp.to_string()))?;
    if value.is_empty() {
        return Err(LayoutError::EmptyValue(token.to_string()));
    }
    Ok(R::from_parts(value.to_string(), Some(breakpoint)))
}

impl<R: GridRule> FromStr for GridBuilder<R> {
    type Err = LayoutError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let rules: Vec<R> = parse_rules(notation)?;
        Ok(GridBuilder::from_rules(&rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{ColumnOrderRule, ColumnSizeBuilder, ColumnSizeRule, CssBuilder};

    #[test]
    fn test_bare_and_prefixed_tokens() {
        let rules: Vec<ColumnSizeRule> = parse_rules("6  md:4\tlaptop:auto").unwrap();
        assert_eq!(
            rules,
            vec![
                ColumnSizeRule::new("6", None),
                ColumnSizeRule::new("4", Some(Breakpoint::Tablet)),
                ColumnSizeRule::new("auto", Some(Breakpoint::Laptop)),
            ]
        );
    }

    #[test]
    fn test_blank_notation_is_no_rules() {
        let rules: Vec<ColumnOrderRule> = parse_rules("   ").unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_unknown_breakpoint() {
        let err = parse_rules::<ColumnSizeRule>("6 watch:4").unwrap_err();
        assert!(matches!(err, LayoutError::UnknownBreakpoint(ref bp) if bp == "watch"));

        let err = parse_rules::<ColumnSizeRule>(":4").unwrap_err();
        assert!(matches!(err, LayoutError::UnknownBreakpoint(ref bp) if bp.is_empty()));
    }

    #[test]
    fn test_missing_value() {
        let err = parse_rules::<ColumnSizeRule>("md:").unwrap_err();
        assert!(matches!(err, LayoutError::EmptyValue(ref token) if token == "md:"));
    }

    #[test]
    fn test_unknown_values_still_parse() {
        let builder: ColumnSizeBuilder = "99 lg:3".parse().unwrap();
        assert_eq!(builder.len(), 2);
        assert_eq!(builder.to_class(), "col-lg-3");
    }
}
