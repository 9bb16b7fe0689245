//! Tagged primitive values.
//!
//! [`Value`] is a closed sum over every canonical primitive kind. It is the
//! attribute value type and the currency adapters and converters trade in.
//! [`ValueKind`] is the fieldless tag; its [`ValueKind::name`] is the same
//! spelling the limits table uses.

use std::any::Any;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::CoreError;
use crate::limits::{self, Limits};
use crate::tribool::Tribool;
use crate::types::Char;

// ---------------------------------------------------------------------------
// Opaque handle
// ---------------------------------------------------------------------------

/// A shared, type-erased handle carried by [`Value::Ptr`].
///
/// Two handles are equal only when they point at the same allocation.
#[derive(Clone)]
pub struct Opaque(Arc<dyn Any + Send + Sync>);

impl Opaque {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({:p})", Arc::as_ptr(&self.0))
    }
}

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// The tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    H8,
    H16,
    H32,
    H64,
    O8,
    O16,
    O32,
    O64,
    B8,
    B16,
    B32,
    B64,
    F32,
    F64,
    Bool,
    Tribool,
    Char,
    Cstr,
    Ptr,
}

const ALL_KINDS: [ValueKind; 27] = [
    ValueKind::I8,
    ValueKind::I16,
    ValueKind::I32,
    ValueKind::I64,
    ValueKind::U8,
    ValueKind::U16,
    ValueKind::U32,
    ValueKind::U64,
    ValueKind::H8,
    ValueKind::H16,
    ValueKind::H32,
    ValueKind::H64,
    ValueKind::O8,
    ValueKind::O16,
    ValueKind::O32,
    ValueKind::O64,
    ValueKind::B8,
    ValueKind::B16,
    ValueKind::B32,
    ValueKind::B64,
    ValueKind::F32,
    ValueKind::F64,
    ValueKind::Bool,
    ValueKind::Tribool,
    ValueKind::Char,
    ValueKind::Cstr,
    ValueKind::Ptr,
];

impl ValueKind {
    pub fn all() -> &'static [ValueKind] {
        &ALL_KINDS
    }

    /// Canonical spelling, shared with the limits table.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::I8 => "i8",
            ValueKind::I16 => "i16",
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::U8 => "u8",
            ValueKind::U16 => "u16",
            ValueKind::U32 => "u32",
            ValueKind::U64 => "u64",
            ValueKind::H8 => "h8",
            ValueKind::H16 => "h16",
            ValueKind::H32 => "h32",
            ValueKind::H64 => "h64",
            ValueKind::O8 => "o8",
            ValueKind::O16 => "o16",
            ValueKind::O32 => "o32",
            ValueKind::O64 => "o64",
            ValueKind::B8 => "b8",
            ValueKind::B16 => "b16",
            ValueKind::B32 => "b32",
            ValueKind::B64 => "b64",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
            ValueKind::Bool => "bool",
            ValueKind::Tribool => "tribool",
            ValueKind::Char => "char",
            ValueKind::Cstr => "cstr",
            ValueKind::Ptr => "ptr",
        }
    }

    /// Limits table entry for this kind. `Ptr` has none.
    pub fn limits(self) -> Option<&'static Limits> {
        limits::get(self.name())
    }

    /// `true` for the signed, unsigned and alias integer kinds.
    pub fn is_integer(self) -> bool {
        !matches!(
            self,
            ValueKind::F32
                | ValueKind::F64
                | ValueKind::Bool
                | ValueKind::Tribool
                | ValueKind::Char
                | ValueKind::Cstr
                | ValueKind::Ptr
        )
    }

    /// Build an integer value of this kind, or `None` if `n` is out of range
    /// or the kind is not an integer kind.
    pub fn integer(self, n: i128) -> Option<Value> {
        let v = match self {
            ValueKind::I8 => Value::I8(n.try_into().ok()?),
            ValueKind::I16 => Value::I16(n.try_into().ok()?),
            ValueKind::I32 => Value::I32(n.try_into().ok()?),
            ValueKind::I64 => Value::I64(n.try_into().ok()?),
            ValueKind::U8 => Value::U8(n.try_into().ok()?),
            ValueKind::U16 => Value::U16(n.try_into().ok()?),
            ValueKind::U32 => Value::U32(n.try_into().ok()?),
            ValueKind::U64 => Value::U64(n.try_into().ok()?),
            ValueKind::H8 => Value::H8(n.try_into().ok()?),
            ValueKind::H16 => Value::H16(n.try_into().ok()?),
            ValueKind::H32 => Value::H32(n.try_into().ok()?),
            ValueKind::H64 => Value::H64(n.try_into().ok()?),
            ValueKind::O8 => Value::O8(n.try_into().ok()?),
            ValueKind::O16 => Value::O16(n.try_into().ok()?),
            ValueKind::O32 => Value::O32(n.try_into().ok()?),
            ValueKind::O64 => Value::O64(n.try_into().ok()?),
            ValueKind::B8 => Value::B8(n.try_into().ok()?),
            ValueKind::B16 => Value::B16(n.try_into().ok()?),
            ValueKind::B32 => Value::B32(n.try_into().ok()?),
            ValueKind::B64 => Value::B64(n.try_into().ok()?),
            _ => return None,
        };
        Some(v)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| CoreError::UnknownType { name: s.to_owned() })
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A primitive value tagged with its canonical kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    H8(u8),
    H16(u16),
    H32(u32),
    H64(u64),
    O8(u8),
    O16(u16),
    O32(u32),
    O64(u64),
    B8(u8),
    B16(u16),
    B32(u32),
    B64(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Tribool(Tribool),
    Char(Char),
    Cstr(String),
    Ptr(Opaque),
}

impl Value {
    pub fn hex8(x: u8) -> Self {
        Value::H8(x)
    }
    pub fn hex16(x: u16) -> Self {
        Value::H16(x)
    }
    pub fn hex32(x: u32) -> Self {
        Value::H32(x)
    }
    pub fn hex64(x: u64) -> Self {
        Value::H64(x)
    }
    pub fn oct8(x: u8) -> Self {
        Value::O8(x)
    }
    pub fn oct16(x: u16) -> Self {
        Value::O16(x)
    }
    pub fn oct32(x: u32) -> Self {
        Value::O32(x)
    }
    pub fn oct64(x: u64) -> Self {
        Value::O64(x)
    }
    pub fn bin8(x: u8) -> Self {
        Value::B8(x)
    }
    pub fn bin16(x: u16) -> Self {
        Value::B16(x)
    }
    pub fn bin32(x: u32) -> Self {
        Value::B32(x)
    }
    pub fn bin64(x: u64) -> Self {
        Value::B64(x)
    }

    pub fn ptr<T: Any + Send + Sync>(x: T) -> Self {
        Value::Ptr(Opaque::new(x))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::I8(_) => ValueKind::I8,
            Value::I16(_) => ValueKind::I16,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::U8(_) => ValueKind::U8,
            Value::U16(_) => ValueKind::U16,
            Value::U32(_) => ValueKind::U32,
            Value::U64(_) => ValueKind::U64,
            Value::H8(_) => ValueKind::H8,
            Value::H16(_) => ValueKind::H16,
            Value::H32(_) => ValueKind::H32,
            Value::H64(_) => ValueKind::H64,
            Value::O8(_) => ValueKind::O8,
            Value::O16(_) => ValueKind::O16,
            Value::O32(_) => ValueKind::O32,
            Value::O64(_) => ValueKind::O64,
            Value::B8(_) => ValueKind::B8,
            Value::B16(_) => ValueKind::B16,
            Value::B32(_) => ValueKind::B32,
            Value::B64(_) => ValueKind::B64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::Bool(_) => ValueKind::Bool,
            Value::Tribool(_) => ValueKind::Tribool,
            Value::Char(_) => ValueKind::Char,
            Value::Cstr(_) => ValueKind::Cstr,
            Value::Ptr(_) => ValueKind::Ptr,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Widen any integer kind (aliases included) to `i128`.
    pub fn as_i128(&self) -> Option<i128> {
        let n: i128 = match *self {
            Value::I8(x) => x.into(),
            Value::I16(x) => x.into(),
            Value::I32(x) => x.into(),
            Value::I64(x) => x.into(),
            Value::U8(x) | Value::H8(x) | Value::O8(x) | Value::B8(x) => x.into(),
            Value::U16(x) | Value::H16(x) | Value::O16(x) | Value::B16(x) => x.into(),
            Value::U32(x) | Value::H32(x) | Value::O32(x) | Value::B32(x) => x.into(),
            Value::U64(x) | Value::H64(x) | Value::O64(x) | Value::B64(x) => x.into(),
            _ => return None,
        };
        Some(n)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F32(x) => Some(x.into()),
            Value::F64(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_tribool(&self) -> Option<Tribool> {
        match *self {
            Value::Tribool(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Cstr(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Value::Ptr(p) => Some(p),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(x: $ty) -> Self {
                    Value::$variant(x)
                }
            }
        )*
    };
}

impl_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    Tribool => Tribool,
    String => Cstr,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Cstr(s.to_owned())
    }
}
