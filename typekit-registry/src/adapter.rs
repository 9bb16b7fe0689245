//! Named value transforms.
//!
//! An adapter maps one [`Value`] to another (or to nothing). Any state the
//! transform needs is captured by the closure or carried by the implementing
//! type.
//!
//! ```
//! use typekit_core::Value;
//! use typekit_registry::adapter::{Adapter, AdapterRegistry};
//!
//! let adapters = AdapterRegistry::new();
//! adapters
//!     .register(Adapter::new("to_upper", |v: Value| {
//!         v.as_str().map(|s| Value::from(s.to_uppercase()))
//!     }))
//!     .unwrap();
//! assert_eq!(adapters.apply("to_upper", Value::from("abc")), Some(Value::from("ABC")));
//! assert_eq!(adapters.apply("missing", Value::from("abc")), None);
//! ```

use std::fmt;

use typekit_core::{EntryName, Value};

use crate::error::RegistryKind;
use crate::registry::{Entry, NameRegistry};

/// Transform behavior stored in an [`Adapter`].
pub trait Adapt: Send + Sync {
    fn adapt(&self, input: Value) -> Option<Value>;
}

impl<F> Adapt for F
where
    F: Fn(Value) -> Option<Value> + Send + Sync,
{
    fn adapt(&self, input: Value) -> Option<Value> {
        self(input)
    }
}

/// A named transform.
pub struct Adapter {
    name: EntryName,
    adapt: Box<dyn Adapt>,
}

impl Adapter {
    pub fn new(name: impl Into<EntryName>, adapt: impl Adapt + 'static) -> Self {
        Self {
            name: name.into(),
            adapt: Box::new(adapt),
        }
    }

    pub fn name(&self) -> &EntryName {
        &self.name
    }

    pub fn adapt(&self, input: Value) -> Option<Value> {
        self.adapt.adapt(input)
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Entry for Adapter {
    const KIND: RegistryKind = RegistryKind::Adapter;
    type Key = str;

    fn key(&self) -> &str {
        self.name.as_str()
    }
}

pub type AdapterRegistry = NameRegistry<Adapter>;

impl NameRegistry<Adapter> {
    /// Run the adapter registered as `name` on `input`.
    ///
    /// `None` when no such adapter exists; otherwise whatever the adapter
    /// returned.
    pub fn apply(&self, name: &str, input: Value) -> Option<Value> {
        self.lookup(name)?.adapt(input)
    }
}
