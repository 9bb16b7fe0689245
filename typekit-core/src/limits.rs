//! Static numeric limits for the canonical type names.
//!
//! # Notes
//!
//! - Hex/octal/binary aliases report exactly the range and size of their
//!   unsigned base type.
//! - `f32`/`f64` report the range of the signed integer of the same width
//!   (storage width), not the IEEE-754 real-valued range.
//! - `cstr` is variable-length: `min == max == 0` and `size` is a pointer width.
//!
//! The host's native integer and float layout is checked at compile time.

use std::ffi::c_char;
use std::mem::size_of;

use crate::tribool::Tribool;

/// Declared range and storage size for a canonical type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limits {
    pub type_id: &'static str,
    pub min: i128,
    pub max: i128,
    /// Storage size in bytes.
    pub size: usize,
}

impl Limits {
    const fn new(type_id: &'static str, min: i128, max: i128, size: usize) -> Self {
        Self { type_id, min, max, size }
    }

    /// `true` when `value` lies in `min..=max`.
    ///
    /// Always `false` for variable-length entries.
    pub fn contains(&self, value: i128) -> bool {
        !self.is_variable_length() && (self.min..=self.max).contains(&value)
    }

    /// `true` for entries with no fixed numeric bound (`cstr`).
    pub fn is_variable_length(&self) -> bool {
        self.min == 0 && self.max == 0
    }
}

const PTR_SIZE: usize = size_of::<*const c_char>();

const LIMITS_TABLE: &[Limits] = &[
    // Signed integers
    Limits::new("i8", i8::MIN as i128, i8::MAX as i128, size_of::<i8>()),
    Limits::new("i16", i16::MIN as i128, i16::MAX as i128, size_of::<i16>()),
    Limits::new("i32", i32::MIN as i128, i32::MAX as i128, size_of::<i32>()),
    Limits::new("i64", i64::MIN as i128, i64::MAX as i128, size_of::<i64>()),
    // Unsigned integers
    Limits::new("u8", 0, u8::MAX as i128, size_of::<u8>()),
    Limits::new("u16", 0, u16::MAX as i128, size_of::<u16>()),
    Limits::new("u32", 0, u32::MAX as i128, size_of::<u32>()),
    Limits::new("u64", 0, u64::MAX as i128, size_of::<u64>()),
    // Hexadecimal
    Limits::new("h8", 0, u8::MAX as i128, size_of::<u8>()),
    Limits::new("h16", 0, u16::MAX as i128, size_of::<u16>()),
    Limits::new("h32", 0, u32::MAX as i128, size_of::<u32>()),
    Limits::new("h64", 0, u64::MAX as i128, size_of::<u64>()),
    // Octal
    Limits::new("o8", 0, u8::MAX as i128, size_of::<u8>()),
    Limits::new("o16", 0, u16::MAX as i128, size_of::<u16>()),
    Limits::new("o32", 0, u32::MAX as i128, size_of::<u32>()),
    Limits::new("o64", 0, u64::MAX as i128, size_of::<u64>()),
    // Binary
    Limits::new("b8", 0, u8::MAX as i128, size_of::<u8>()),
    Limits::new("b16", 0, u16::MAX as i128, size_of::<u16>()),
    Limits::new("b32", 0, u32::MAX as i128, size_of::<u32>()),
    Limits::new("b64", 0, u64::MAX as i128, size_of::<u64>()),
    // Floating (storage-width ranges)
    Limits::new("f32", i32::MIN as i128, i32::MAX as i128, size_of::<f32>()),
    Limits::new("f64", i64::MIN as i128, i64::MAX as i128, size_of::<f64>()),
    // Boolean / tribool
    Limits::new("bool", 0, 1, size_of::<bool>()),
    Limits::new("tribool", 0, 2, size_of::<Tribool>()),
    // Char / string
    Limits::new("char", c_char::MIN as i128, c_char::MAX as i128, size_of::<c_char>()),
    Limits::new("cstr", 0, 0, PTR_SIZE),
];

// ---------------------------------------------------------------------------
// Build-time validation
// ---------------------------------------------------------------------------

const _: () = {
    assert!(u8::BITS == 8, "8-bit bytes required");
    assert!(size_of::<u8>() == 1);
    assert!(i8::MIN == -128 && i16::MIN == -32_768, "two's-complement integers required");
    assert!(i32::MIN == -2_147_483_648);
    assert!(i64::MIN == -9_223_372_036_854_775_808);
    assert!(f32::RADIX == 2 && f32::MANTISSA_DIGITS == 24, "IEEE-754 binary32 required");
    assert!(f64::RADIX == 2 && f64::MANTISSA_DIGITS == 53, "IEEE-754 binary64 required");
    assert!(size_of::<f32>() == 4 && size_of::<f64>() == 8);
    assert!(size_of::<bool>() == 1);
    assert!(size_of::<Tribool>() == 1);
    assert!(size_of::<c_char>() == 1);
    assert!(aliases_match_base(), "alias limits diverge from their unsigned base");
};

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn find(type_id: &str) -> Option<Limits> {
    let mut i = 0;
    while i < LIMITS_TABLE.len() {
        if str_eq(LIMITS_TABLE[i].type_id, type_id) {
            return Some(LIMITS_TABLE[i]);
        }
        i += 1;
    }
    None
}

const fn same_shape(alias: &str, base: &str) -> bool {
    match (find(alias), find(base)) {
        (Some(a), Some(b)) => a.min == b.min && a.max == b.max && a.size == b.size,
        _ => false,
    }
}

const fn aliases_match_base() -> bool {
    const PAIRS: [(&str, &str); 12] = [
        ("h8", "u8"), ("h16", "u16"), ("h32", "u32"), ("h64", "u64"),
        ("o8", "u8"), ("o16", "u16"), ("o32", "u32"), ("o64", "u64"),
        ("b8", "u8"), ("b16", "u16"), ("b32", "u32"), ("b64", "u64"),
    ];
    let mut i = 0;
    while i < PAIRS.len() {
        if !same_shape(PAIRS[i].0, PAIRS[i].1) {
            return false;
        }
        i += 1;
    }
    true
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Look up the limits for `type_id` (exact, case-sensitive match).
///
/// Returns `None` for unknown or empty names.
pub fn get(type_id: &str) -> Option<&'static Limits> {
    if type_id.is_empty() {
        return None;
    }
    LIMITS_TABLE.iter().find(|l| l.type_id == type_id)
}

/// The whole table, in declaration order.
pub fn all() -> &'static [Limits] {
    LIMITS_TABLE
}
