//! Process-wide registry lifecycle.
//!
//! Everything touching the global instance lives in one test so parallel test
//! threads never race on it.

use typekit_core::Value;
use typekit_registry::global;
use typekit_registry::{
    Adapter, AttributeTable, Converter, Introspection, Registration, RegistryConfig, RegistryError,
};

#[test]
fn init_use_reset() {
    global::reset();

    // Explicit init with custom capacities.
    let regs = global::init(&RegistryConfig::uniform(1)).expect("first init");
    assert_eq!(regs.adapters.capacity(), 1);
    assert_eq!(
        global::init(&RegistryConfig::default()).unwrap_err(),
        RegistryError::AlreadyInitialized
    );

    // Free functions delegate to the same instance.
    assert_eq!(
        global::register_adapter(Adapter::new("neg", |v: Value| {
            v.as_tribool().map(|t| Value::from(!t))
        })),
        Ok(Registration::Added)
    );
    assert!(matches!(
        global::register_adapter(Adapter::new("other", |v: Value| Some(v))),
        Err(RegistryError::RegistryFull { capacity: 1, .. })
    ));
    assert_eq!(
        global::adapter_apply("neg", Value::from(typekit_core::Tribool::True)),
        Some(Value::from(typekit_core::Tribool::False))
    );
    assert_eq!(regs.adapters.len(), 1);

    global::register_attributes(AttributeTable::new("Point").with("x", 1i32)).expect("attrs");
    assert!(global::attributes_has("Point", "x"));
    assert_eq!(global::attributes_get("Point", "x").map(|a| a.value), Some(Value::I32(1)));

    global::register_converter(Converter::integer("u8", "u16").unwrap()).expect("conv");
    assert_eq!(
        global::converter_apply("u8", "u16", &Value::from(5u8)),
        Some(Ok(Value::U16(5)))
    );

    global::register_introspection(Introspection::of::<i16>("Short")).expect("intro");
    assert_eq!(global::introspection_size("Short"), Some(2));
    assert!(global::introspection_name("Short").is_some());

    assert_eq!(global::limits_get("i32").map(|l| l.size), Some(4));

    // Reset starts over; old handles keep the old state.
    global::reset();
    assert_eq!(global::adapter_apply("neg", Value::from(true)), None);
    assert_eq!(regs.adapters.len(), 1);

    // Lazy creation uses default capacities and blocks a later init.
    assert_eq!(global::get().adapters.capacity(), 64);
    assert_eq!(
        global::init(&RegistryConfig::default()).unwrap_err(),
        RegistryError::AlreadyInitialized
    );
    global::reset();
}
