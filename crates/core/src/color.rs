//! The teletext color palette.

/// One of the seven colors a teletext cell can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Black,
    Red,
    Green,
    Blue,
    Cyan,
    Yellow,
    White,
}

impl Colour {
    /// Resolve a CSS class token to a palette color.
    ///
    /// Accepts the bare foreground form (`"red"`) and the `bg-` prefixed
    /// background form (`"bg-red"`). An empty label resolves to `White`, the
    /// foreground default. Unrecognized labels return `None`; the markup
    /// parser turns that into an error rather than guessing.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "black" | "bg-black" => Some(Self::Black),
            "red" | "bg-red" => Some(Self::Red),
            "green" | "bg-green" => Some(Self::Green),
            "blue" | "bg-blue" => Some(Self::Blue),
            "cyan" | "bg-cyan" => Some(Self::Cyan),
            "yellow" | "bg-yellow" => Some(Self::Yellow),
            "white" | "bg-white" | "" => Some(Self::White),
            _ => None,
        }
    }

    /// Lowercase palette name, as used by the output contract.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }
}
