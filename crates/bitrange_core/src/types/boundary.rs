//! Range boundary qualification.

use std::fmt;
use std::str::FromStr;

/// Whether each end of a requested range is inclusive (closed) or exclusive (open).
///
/// # Variants
///
/// * `ClosedClosed` - `[lower, upper]`
/// * `ClosedOpen` - `[lower, upper)`
/// * `OpenClosed` - `(lower, upper]`
/// * `OpenOpen` - `(lower, upper)`
///
/// # Examples
///
/// ```
/// use bitrange_core::types::BoundaryKind;
///
/// let kind: BoundaryKind = "co".parse().unwrap();
/// assert_eq!(kind, BoundaryKind::ClosedOpen);
/// assert!(!kind.lower_open());
/// assert!(kind.upper_open());
/// assert_eq!(kind.to_string(), "CO");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryKind {
    /// Both ends inclusive.
    #[default]
    ClosedClosed,
    /// Lower inclusive, upper exclusive.
    ClosedOpen,
    /// Lower exclusive, upper inclusive.
    OpenClosed,
    /// Both ends exclusive.
    OpenOpen,
}

impl BoundaryKind {
    /// All four kinds, in CC / CO / OC / OO order.
    pub const ALL: [BoundaryKind; 4] = [
        BoundaryKind::ClosedClosed,
        BoundaryKind::ClosedOpen,
        BoundaryKind::OpenClosed,
        BoundaryKind::OpenOpen,
    ];

    /// Builds a kind from the openness of each end.
    #[inline]
    pub const fn from_openness(lower_open: bool, upper_open: bool) -> Self {
        match (lower_open, upper_open) {
            (false, false) => BoundaryKind::ClosedClosed,
            (false, true) => BoundaryKind::ClosedOpen,
            (true, false) => BoundaryKind::OpenClosed,
            (true, true) => BoundaryKind::OpenOpen,
        }
    }

    /// Returns true if the lower bound is excluded.
    #[inline]
    pub const fn lower_open(self) -> bool {
        matches!(self, BoundaryKind::OpenClosed | BoundaryKind::OpenOpen)
    }

    /// Returns true if the upper bound is excluded.
    #[inline]
    pub const fn upper_open(self) -> bool {
        matches!(self, BoundaryKind::ClosedOpen | BoundaryKind::OpenOpen)
    }

    /// Two-letter code (`CC`, `CO`, `OC`, `OO`).
    pub const fn code(self) -> &'static str {
        match self {
            BoundaryKind::ClosedClosed => "CC",
            BoundaryKind::ClosedOpen => "CO",
            BoundaryKind::OpenClosed => "OC",
            BoundaryKind::OpenOpen => "OO",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BoundaryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CC" => Ok(BoundaryKind::ClosedClosed),
            "CO" => Ok(BoundaryKind::ClosedOpen),
            "OC" => Ok(BoundaryKind::OpenClosed),
            "OO" => Ok(BoundaryKind::OpenOpen),
            _ => Err(format!("Unknown boundary kind: {}", s)),
        }
    }
}
