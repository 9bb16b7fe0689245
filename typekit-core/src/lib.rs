//! typekit core: canonical primitive vocabulary.
//!
//! Public API surface:
//! - [`types`]: fixed-width aliases and the `TypeName` / `EntryName` newtypes
//! - [`tribool`]: three-valued logic
//! - [`value`]: [`Value`], the tagged primitive, and its [`ValueKind`]
//! - [`limits`]: static numeric limits per canonical type name
//! - [`feature`]: named on/off flags
//! - [`error`]: [`CoreError`]

pub mod error;
pub mod feature;
pub mod limits;
pub mod tribool;
pub mod types;
pub mod value;

pub use error::CoreError;
pub use feature::Feature;
pub use limits::Limits;
pub use tribool::Tribool;
pub use types::{EntryName, TypeName};
pub use value::{Opaque, Value, ValueKind};
