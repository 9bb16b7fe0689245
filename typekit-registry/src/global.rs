//! Process-wide registries.
//!
//! # API pattern
//!
//! Every registry operation has two forms:
//! - a method on an explicit [`Registries`] (or one of its fields); used in
//!   tests and by code that owns its context
//! - a free function here, which resolves the process-wide instance and
//!   delegates to the method
//!
//! The process-wide instance is created by [`init`] or, failing that, lazily
//! with default capacities on first use. [`reset`] drops it so a test suite
//! can start over; handles obtained earlier through [`get`] keep working on
//! the old instance.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use typekit_core::{limits, Limits, Value};

use crate::adapter::Adapter;
use crate::attribute::{Attribute, AttributeTable};
use crate::config::RegistryConfig;
use crate::context::Registries;
use crate::converter::Converter;
use crate::error::{ConvertError, RegistryError};
use crate::introspect::Introspection;
use crate::registry::Registration;

static GLOBAL: RwLock<Option<Arc<Registries>>> = RwLock::new(None);

// ---------------------------------------------------------------------------
// 1. Lifecycle
// ---------------------------------------------------------------------------

/// Create the process-wide registries with the capacities in `config`.
///
/// Returns `RegistryError::AlreadyInitialized` if they already exist, whether
/// from an earlier `init` or from lazy creation in [`get`].
pub fn init(config: &RegistryConfig) -> Result<Arc<Registries>, RegistryError> {
    let mut slot = write();
    if slot.is_some() {
        return Err(RegistryError::AlreadyInitialized);
    }
    let registries = Arc::new(Registries::from_config(config));
    *slot = Some(Arc::clone(&registries));
    tracing::info!(?config, "process-wide registries initialized");
    Ok(registries)
}

/// The process-wide registries, created with defaults if [`init`] never ran.
pub fn get() -> Arc<Registries> {
    if let Some(registries) = read().as_ref() {
        return Arc::clone(registries);
    }
    let mut slot = write();
    Arc::clone(slot.get_or_insert_with(|| {
        tracing::info!("process-wide registries created with default capacities");
        Arc::new(Registries::new())
    }))
}

/// Drop the process-wide registries. The next [`init`] or [`get`] starts empty.
pub fn reset() {
    if write().take().is_some() {
        tracing::info!("process-wide registries reset");
    }
}

fn read() -> RwLockReadGuard<'static, Option<Arc<Registries>>> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Option<Arc<Registries>>> {
    GLOBAL.write().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// 2. Adapters
// ---------------------------------------------------------------------------

pub fn register_adapter(adapter: Adapter) -> Result<Registration, RegistryError> {
    get().adapters.register(adapter)
}

pub fn adapter_apply(name: &str, input: Value) -> Option<Value> {
    get().adapters.apply(name, input)
}

// ---------------------------------------------------------------------------
// 3. Attributes
// ---------------------------------------------------------------------------

pub fn register_attributes(table: AttributeTable) -> Result<Registration, RegistryError> {
    get().attributes.register(table)
}

pub fn attributes_get(type_id: &str, key: &str) -> Option<Attribute> {
    get().attributes.get(type_id, key)
}

pub fn attributes_has(type_id: &str, key: &str) -> bool {
    get().attributes.has(type_id, key)
}

// ---------------------------------------------------------------------------
// 4. Converters
// ---------------------------------------------------------------------------

pub fn register_converter(converter: Converter) -> Result<Registration, RegistryError> {
    get().converters.register(converter)
}

pub fn converter_apply(from: &str, to: &str, input: &Value) -> Option<Result<Value, ConvertError>> {
    get().converters.apply(from, to, input)
}

// ---------------------------------------------------------------------------
// 5. Introspection
// ---------------------------------------------------------------------------

pub fn register_introspection(info: Introspection) -> Result<Registration, RegistryError> {
    get().introspection.register(info)
}

pub fn introspection_name(type_id: &str) -> Option<String> {
    get().introspection.name(type_id)
}

pub fn introspection_size(type_id: &str) -> Option<usize> {
    get().introspection.size(type_id)
}

// ---------------------------------------------------------------------------
// 6. Limits
// ---------------------------------------------------------------------------

/// Same as [`typekit_core::limits::get`]; listed here so the whole surface
/// lives in one module.
pub fn limits_get(type_id: &str) -> Option<&'static Limits> {
    limits::get(type_id)
}
