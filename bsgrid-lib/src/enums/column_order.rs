use strum::{Display, EnumIter, EnumString};

/// Bootstrap column order tokens. `Display` prints the raw token, which is
/// what an order rule stores as its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum ColumnOrder {
    #[strum(to_string = "1")]
    O1,
    #[strum(to_string = "2")]
    O2,
    #[strum(to_string = "3")]
    O3,
    #[strum(to_string = "4")]
    O4,
    #[strum(to_string = "5")]
    O5,
    #[strum(to_string = "6")]
    O6,
    #[strum(to_string = "7")]
    O7,
    #[strum(to_string = "8")]
    O8,
    #[strum(to_string = "9")]
    O9,
    #[strum(to_string = "10")]
    O10,
    #[strum(to_string = "11")]
    O11,
    #[strum(to_string = "12")]
    O12,
    #[strum(to_string = "first")]
    First,
    #[strum(to_string = "last")]
    Last,
}

impl ColumnOrder {
    pub const fn value(self) -> &'static str {
        match self {
            ColumnOrder::O1 => "1",
            ColumnOrder::O2 => "2",
            ColumnOrder::O3 => "3",
            ColumnOrder::O4 => "4",
            ColumnOrder::O5 => "5",
            ColumnOrder::O6 => "6",
            ColumnOrder::O7 => "7",
            ColumnOrder::O8 => "8",
            ColumnOrder::O9 => "9",
            ColumnOrder::O10 => "10",
            ColumnOrder::O11 => "11",
            ColumnOrder::O12 => "12",
            ColumnOrder::First => "first",
            ColumnOrder::Last => "last",
        }
    }
}
