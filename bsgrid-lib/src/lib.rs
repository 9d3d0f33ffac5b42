//! Bootstrap grid class builders.
//!
//! ```
//! use bsgrid_lib::{ColumnSizeBuilder, CssBuilder};
//!
//! let classes = ColumnSizeBuilder::empty().s12().s6().on_tablet().to_class();
//! assert_eq!(classes, "col-12 col-md-6");
//! ```

pub mod builders;
pub mod enums;
pub mod error;
pub mod layout;

pub use builders::{
    ColumnOffsetBuilder, ColumnOffsetRule, ColumnOrderBuilder, ColumnOrderRule, ColumnSizeBuilder,
    ColumnSizeRule, CssBuilder, GridBuilder, GridRule,
};
pub use enums::{breakpoint_class, Breakpoint, ColumnOrder};
pub use error::LayoutError;
pub use layout::spec::LayoutSpec;
pub use layout::ColumnLayout;
