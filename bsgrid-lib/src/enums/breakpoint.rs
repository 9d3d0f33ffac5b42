use strum::{Display, EnumIter, EnumString};

/// Responsive breakpoints understood by the Bootstrap grid.
///
/// "No breakpoint" is not a variant: builders carry `Option<Breakpoint>` and
/// `None` renders the base class unchanged.
///
/// Parsing accepts either the variant name (`"tablet"`) or its infix (`"md"`),
/// ignoring ASCII case. `Display` prints the lowercase variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Breakpoint {
    #[strum(to_string = "phone", serialize = "sm")]
    Phone,
    #[strum(to_string = "tablet", serialize = "md")]
    Tablet,
    #[strum(to_string = "laptop", serialize = "lg")]
    Laptop,
    #[strum(to_string = "desktop", serialize = "xl")]
    Desktop,
    #[strum(to_string = "widescreen", serialize = "xxl")]
    Widescreen,
    #[strum(to_string = "ultrawide", serialize = "xxxl")]
    Ultrawide,
}

impl Breakpoint {
    /// The class infix spliced into a base class, e.g. `md` in `col-md-6`.
    pub const fn infix(self) -> &'static str {
        match self {
            Breakpoint::Phone => "sm",
            Breakpoint::Tablet => "md",
            Breakpoint::Laptop => "lg",
            Breakpoint::Desktop => "xl",
            Breakpoint::Widescreen => "xxl",
            Breakpoint::Ultrawide => "xxxl",
        }
    }
}

/// Maps an optional breakpoint to its infix. `None` maps to `""`.
pub fn breakpoint_class(breakpoint: Option<Breakpoint>) -> &'static str {
    match breakpoint {
        Some(bp) => bp.infix(),
        None => "",
    }
}
