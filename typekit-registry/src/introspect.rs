//! Name and size descriptors for registered types.

use std::fmt;

use typekit_core::TypeName;

use crate::error::RegistryKind;
use crate::registry::{Entry, NameRegistry};

type NameFn = Box<dyn Fn() -> String + Send + Sync>;
type SizeFn = Box<dyn Fn() -> usize + Send + Sync>;

/// Describes a type by a human-readable name and a storage size in bytes.
pub struct Introspection {
    type_id: TypeName,
    name: NameFn,
    size: SizeFn,
}

impl Introspection {
    pub fn new<N, S>(type_id: impl Into<TypeName>, name: N, size: S) -> Self
    where
        N: Fn() -> String + Send + Sync + 'static,
        S: Fn() -> usize + Send + Sync + 'static,
    {
        Self {
            type_id: type_id.into(),
            name: Box::new(name),
            size: Box::new(size),
        }
    }

    /// Descriptor for the Rust type `T`: `std::any::type_name` and `size_of`.
    pub fn of<T: 'static>(type_id: impl Into<TypeName>) -> Self {
        Self::new(
            type_id,
            || std::any::type_name::<T>().to_owned(),
            std::mem::size_of::<T>,
        )
    }

    pub fn type_id(&self) -> &TypeName {
        &self.type_id
    }

    pub fn name(&self) -> String {
        (self.name)()
    }

    pub fn size(&self) -> usize {
        (self.size)()
    }
}

impl fmt::Debug for Introspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Introspection")
            .field("type_id", &self.type_id)
            .finish_non_exhaustive()
    }
}

impl Entry for Introspection {
    const KIND: RegistryKind = RegistryKind::Introspection;
    type Key = str;

    fn key(&self) -> &str {
        self.type_id.as_str()
    }
}

pub type IntrospectionRegistry = NameRegistry<Introspection>;

impl NameRegistry<Introspection> {
    pub fn name(&self, type_id: &str) -> Option<String> {
        self.lookup(type_id).map(|i| i.name())
    }

    pub fn size(&self, type_id: &str) -> Option<usize> {
        self.lookup(type_id).map(|i| i.size())
    }
}
