pub mod breakpoint;
pub mod column_order;

pub use breakpoint::{breakpoint_class, Breakpoint};
pub use column_order::ColumnOrder;
