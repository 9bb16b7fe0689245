//! Per-type attribute tables.
//!
//! An [`AttributeTable`] attaches a fixed list of key/[`Value`] pairs to a type
//! id. Tables are registered whole; individual attributes are never added or
//! changed afterwards.

use std::sync::Arc;

use typekit_core::{TypeName, Value};

use crate::error::RegistryKind;
use crate::registry::{Entry, NameRegistry};

/// One key/value pair in an [`AttributeTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub value: Value,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The attribute list for one type id.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeTable {
    type_id: TypeName,
    attributes: Vec<Attribute>,
}

impl AttributeTable {
    pub fn new(type_id: impl Into<TypeName>) -> Self {
        Self {
            type_id: type_id.into(),
            attributes: Vec::new(),
        }
    }

    /// Builder-style append.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// Replace the type id (useful after `collect`).
    pub fn for_type(mut self, type_id: impl Into<TypeName>) -> Self {
        self.type_id = type_id.into();
        self
    }

    pub fn type_id(&self) -> &TypeName {
        &self.type_id
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// First attribute named `key`.
    pub fn get(&self, key: &str) -> Option<&Attribute> {
        if key.is_empty() {
            return None;
        }
        self.attributes.iter().find(|a| a.key == key)
    }
}

impl FromIterator<Attribute> for AttributeTable {
    /// Collects into a table with an empty type id; set one with
    /// [`AttributeTable::for_type`] before registering.
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self {
            type_id: TypeName::from(""),
            attributes: iter.into_iter().collect(),
        }
    }
}

impl Entry for AttributeTable {
    const KIND: RegistryKind = RegistryKind::Attribute;
    type Key = str;

    fn key(&self) -> &str {
        self.type_id.as_str()
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.type_id.is_empty() {
            return Err("type id must not be empty");
        }
        if self.attributes.iter().any(|a| a.key.is_empty()) {
            return Err("attribute keys must not be empty");
        }
        Ok(())
    }
}

pub type AttributeRegistry = NameRegistry<AttributeTable>;

impl NameRegistry<AttributeTable> {
    pub fn table(&self, type_id: &str) -> Option<Arc<AttributeTable>> {
        self.lookup(type_id)
    }

    /// The attribute `key` of the table registered for `type_id`.
    pub fn get(&self, type_id: &str, key: &str) -> Option<Attribute> {
        self.lookup(type_id)?.get(key).cloned()
    }

    pub fn has(&self, type_id: &str, key: &str) -> bool {
        self.get(type_id, key).is_some()
    }
}
