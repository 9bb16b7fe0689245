//! Three-valued (Kleene) logic.
//!
//! `False` dominates AND, `True` dominates OR, and `Unknown` propagates
//! everywhere else.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use serde::{Deserialize, Serialize};

/// A boolean that may also be `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Tribool {
    False = 0,
    True = 1,
    #[default]
    Unknown = 2,
}

impl Tribool {
    pub const fn is_true(self) -> bool {
        matches!(self, Tribool::True)
    }

    pub const fn is_false(self) -> bool {
        matches!(self, Tribool::False)
    }

    pub const fn is_unknown(self) -> bool {
        matches!(self, Tribool::Unknown)
    }

    pub const fn and(self, rhs: Tribool) -> Tribool {
        match (self, rhs) {
            (Tribool::False, _) | (_, Tribool::False) => Tribool::False,
            (Tribool::True, Tribool::True) => Tribool::True,
            _ => Tribool::Unknown,
        }
    }

    pub const fn or(self, rhs: Tribool) -> Tribool {
        match (self, rhs) {
            (Tribool::True, _) | (_, Tribool::True) => Tribool::True,
            (Tribool::False, Tribool::False) => Tribool::False,
            _ => Tribool::Unknown,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub const fn not(self) -> Tribool {
        match self {
            Tribool::False => Tribool::True,
            Tribool::True => Tribool::False,
            Tribool::Unknown => Tribool::Unknown,
        }
    }

    /// `Some(bool)` for a known value, `None` for `Unknown`.
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Tribool::False => Some(false),
            Tribool::True => Some(true),
            Tribool::Unknown => None,
        }
    }
}

impl From<bool> for Tribool {
    fn from(b: bool) -> Self {
        if b { Tribool::True } else { Tribool::False }
    }
}

impl From<Option<bool>> for Tribool {
    fn from(b: Option<bool>) -> Self {
        b.map_or(Tribool::Unknown, Tribool::from)
    }
}

impl Not for Tribool {
    type Output = Tribool;

    fn not(self) -> Tribool {
        Tribool::not(self)
    }
}

impl BitAnd for Tribool {
    type Output = Tribool;

    fn bitand(self, rhs: Tribool) -> Tribool {
        self.and(rhs)
    }
}

impl BitOr for Tribool {
    type Output = Tribool;

    fn bitor(self, rhs: Tribool) -> Tribool {
        self.or(rhs)
    }
}

impl fmt::Display for Tribool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tribool::False => write!(f, "false"),
            Tribool::True => write!(f, "true"),
            Tribool::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown() {
        assert!(Tribool::default().is_unknown());
    }

    #[test]
    fn predicates_are_exclusive() {
        for t in [Tribool::False, Tribool::True, Tribool::Unknown] {
            let hits = [t.is_false(), t.is_true(), t.is_unknown()]
                .iter()
                .filter(|b| **b)
                .count();
            assert_eq!(hits, 1, "{t}");
        }
    }

    #[test]
    fn discriminants_match_limits_encoding() {
        assert_eq!(Tribool::False as u8, 0);
        assert_eq!(Tribool::True as u8, 1);
        assert_eq!(Tribool::Unknown as u8, 2);
    }

    #[test]
    fn option_conversions() {
        assert_eq!(Tribool::from(None), Tribool::Unknown);
        assert_eq!(Tribool::from(Some(true)), Tribool::True);
        assert_eq!(Tribool::False.to_option(), Some(false));
        assert_eq!(Tribool::Unknown.to_option(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Tribool::Unknown.to_string(), "unknown");
        assert_eq!(Tribool::True.to_string(), "true");
    }
}
