//! An owned bundle of the four registries.
//!
//! Pass a [`Registries`] to the code that needs it; tests build their own and
//! never touch the process-wide instance in [`crate::global`].

use crate::adapter::AdapterRegistry;
use crate::attribute::AttributeRegistry;
use crate::config::RegistryConfig;
use crate::converter::ConverterRegistry;
use crate::introspect::IntrospectionRegistry;

#[derive(Debug, Default)]
pub struct Registries {
    pub adapters: AdapterRegistry,
    pub attributes: AttributeRegistry,
    pub converters: ConverterRegistry,
    pub introspection: IntrospectionRegistry,
}

impl Registries {
    /// Four empty registries at the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Four empty registries sized by `config`.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self {
            adapters: AdapterRegistry::with_capacity(config.adapters),
            attributes: AttributeRegistry::with_capacity(config.attributes),
            converters: ConverterRegistry::with_capacity(config.converters),
            introspection: IntrospectionRegistry::with_capacity(config.introspection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DEFAULT_CAPACITY;

    #[test]
    fn from_config_sizes_each_kind() {
        let cfg = RegistryConfig { adapters: 1, attributes: 2, converters: 3, introspection: 4 };
        let regs = Registries::from_config(&cfg);
        assert_eq!(regs.adapters.capacity(), 1);
        assert_eq!(regs.attributes.capacity(), 2);
        assert_eq!(regs.converters.capacity(), 3);
        assert_eq!(regs.introspection.capacity(), 4);
    }

    #[test]
    fn new_is_empty_at_default_capacity() {
        let regs = Registries::new();
        assert!(regs.adapters.is_empty());
        assert_eq!(regs.converters.capacity(), DEFAULT_CAPACITY);
    }
}
