//! Directed conversions between named types.
//!
//! Converters are keyed by the exact `(from, to)` pair; `i32 -> u8` and
//! `u8 -> i32` are separate entries.

use std::fmt;

use typekit_core::{TypeName, Value, ValueKind};

use crate::error::{ConvertError, RegistryKind};
use crate::registry::{Entry, NameRegistry, RegistryKey};

// ---------------------------------------------------------------------------
// 1. Key
// ---------------------------------------------------------------------------

/// The `(from, to)` pair a converter is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversionPair {
    pub from: TypeName,
    pub to: TypeName,
}

impl ConversionPair {
    pub fn new(from: impl Into<TypeName>, to: impl Into<TypeName>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for ConversionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl RegistryKey for ConversionPair {
    fn is_blank(&self) -> bool {
        self.from.is_empty() || self.to.is_empty()
    }
}

// ---------------------------------------------------------------------------
// 2. Payload
// ---------------------------------------------------------------------------

/// Conversion behavior stored in a [`Converter`].
pub trait Convert: Send + Sync {
    fn convert(&self, input: &Value) -> Result<Value, ConvertError>;
}

impl<F> Convert for F
where
    F: Fn(&Value) -> Result<Value, ConvertError> + Send + Sync,
{
    fn convert(&self, input: &Value) -> Result<Value, ConvertError> {
        self(input)
    }
}

/// A conversion from one named type to another.
pub struct Converter {
    pair: ConversionPair,
    convert: Box<dyn Convert>,
}

impl Converter {
    pub fn new(
        from: impl Into<TypeName>,
        to: impl Into<TypeName>,
        convert: impl Convert + 'static,
    ) -> Self {
        Self {
            pair: ConversionPair::new(from, to),
            convert: Box::new(convert),
        }
    }

    /// Range-checked conversion between two canonical integer kinds.
    ///
    /// The converter accepts only values of kind `from` and produces a value
    /// of kind `to`, failing with [`ConvertError::OutOfRange`] when the input
    /// does not fit the limits of `to`. Returns `None` if either name is not
    /// an integer kind.
    pub fn integer(from: &str, to: &str) -> Option<Self> {
        let from_kind = from.parse::<ValueKind>().ok().filter(|k| k.is_integer())?;
        let to_kind = to.parse::<ValueKind>().ok().filter(|k| k.is_integer())?;
        let target = to_kind.limits()?;

        Some(Self::new(from_kind.name(), to_kind.name(), move |input: &Value| {
            let Some(n) = input.as_i128().filter(|_| input.kind() == from_kind) else {
                return Err(ConvertError::UnsupportedInput {
                    from: from_kind.name().to_owned(),
                    to: to_kind.name().to_owned(),
                    found: input.type_name(),
                });
            };
            if !target.contains(n) {
                return Err(ConvertError::OutOfRange {
                    value: n,
                    target: to_kind.name().to_owned(),
                });
            }
            to_kind.integer(n).ok_or_else(|| ConvertError::OutOfRange {
                value: n,
                target: to_kind.name().to_owned(),
            })
        }))
    }

    pub fn pair(&self) -> &ConversionPair {
        &self.pair
    }

    pub fn convert(&self, input: &Value) -> Result<Value, ConvertError> {
        self.convert.convert(input)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter").field("pair", &self.pair).finish_non_exhaustive()
    }
}

impl Entry for Converter {
    const KIND: RegistryKind = RegistryKind::Converter;
    type Key = ConversionPair;

    fn key(&self) -> &ConversionPair {
        &self.pair
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.pair.from.is_empty() {
            return Err("source type must not be empty");
        }
        if self.pair.to.is_empty() {
            return Err("target type must not be empty");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// 3. Registry
// ---------------------------------------------------------------------------

pub type ConverterRegistry = NameRegistry<Converter>;

impl NameRegistry<Converter> {
    /// Run the `from -> to` converter on `input`.
    ///
    /// `None` when no such converter is registered; otherwise the converter's
    /// own result, unchanged.
    pub fn apply(&self, from: &str, to: &str, input: &Value) -> Option<Result<Value, ConvertError>> {
        let converter = self.lookup(&ConversionPair::new(from, to))?;
        Some(converter.convert(input))
    }
}
