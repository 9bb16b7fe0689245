//! Canonical primitive aliases and the name newtypes used as registry keys.
//!
//! Hex, octal and binary aliases are *semantic* aliases: an `H16` is a `u16`
//! that callers intend to display or parse in base 16. They share the storage,
//! range and size of their unsigned base type.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Fixed-width aliases
// ---------------------------------------------------------------------------

pub type I8 = i8;
pub type I16 = i16;
pub type I32 = i32;
pub type I64 = i64;

pub type U8 = u8;
pub type U16 = u16;
pub type U32 = u32;
pub type U64 = u64;

pub type H8 = u8;
pub type H16 = u16;
pub type H32 = u32;
pub type H64 = u64;

pub type O8 = u8;
pub type O16 = u16;
pub type O32 = u32;
pub type O64 = u64;

pub type B8 = u8;
pub type B16 = u16;
pub type B32 = u32;
pub type B64 = u64;

pub type F32 = f32;
pub type F64 = f64;

pub type Isize = isize;
pub type Usize = usize;

/// The platform C `char` (signed on x86, unsigned on most ARM targets).
pub type Char = std::ffi::c_char;

/// Bit set of caller-defined flags.
pub type Flags = u64;

/// Identifier of a node in a caller-defined graph.
pub type NodeId = u64;

/// Information-theoretic entropy measure, in bits.
pub type Entropy = f64;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed type identifier (`"Point"`, `"i32"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(pub String);

impl TypeName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed name for a registered behavior (an adapter, for example).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryName(pub String);

impl EntryName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for EntryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntryName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
