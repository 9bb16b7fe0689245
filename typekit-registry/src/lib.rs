//! typekit registries: bounded, first-write-wins, name-keyed stores.
//!
//! Public API surface:
//! - [`registry`]: the generic [`NameRegistry`] and its [`Entry`] contract
//! - [`adapter`], [`attribute`], [`converter`], [`introspect`]: the four kinds
//! - [`context`]: [`Registries`], an owned bundle of all four
//! - [`global`]: process-wide instance with `init` / `reset` and free functions
//! - [`config`]: [`RegistryConfig`] capacities, loadable from YAML
//! - [`error`]: [`RegistryError`], [`ConfigError`], [`ConvertError`]

pub mod adapter;
pub mod attribute;
pub mod config;
pub mod context;
pub mod converter;
pub mod error;
pub mod global;
pub mod introspect;
pub mod registry;

pub use adapter::{Adapt, Adapter, AdapterRegistry};
pub use attribute::{Attribute, AttributeRegistry, AttributeTable};
pub use config::RegistryConfig;
pub use context::Registries;
pub use converter::{ConversionPair, Convert, Converter, ConverterRegistry};
pub use error::{ConfigError, ConvertError, RegistryError, RegistryKind};
pub use introspect::{Introspection, IntrospectionRegistry};
pub use registry::{Entry, NameRegistry, Registration, RegistryKey, DEFAULT_CAPACITY};
