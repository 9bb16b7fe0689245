//! Registry contract tests, run against every registry kind.
//!
//! Each test builds its own `Registries`; none touch the process-wide instance.

use rstest::rstest;
use typekit_core::{Tribool, Value};
use typekit_registry::{
    Adapter, AttributeTable, ConvertError, Converter, Introspection, Registration, Registries,
    RegistryConfig, RegistryError, RegistryKind,
};

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

fn identity(v: Value) -> Option<Value> {
    Some(v)
}

/// Register `count` distinct entries of `kind`, returning the outcome of each.
fn fill(regs: &Registries, kind: RegistryKind, count: usize) -> Vec<Result<Registration, RegistryError>> {
    (0..count)
        .map(|i| {
            let key = format!("k{i}");
            match kind {
                RegistryKind::Adapter => regs.adapters.register(Adapter::new(key, identity)),
                RegistryKind::Attribute => regs.attributes.register(AttributeTable::new(key)),
                RegistryKind::Converter => regs
                    .converters
                    .register(Converter::new(key, "out", |v: &Value| -> Result<Value, ConvertError> {
                        Ok(v.clone())
                    })),
                RegistryKind::Introspection => {
                    regs.introspection.register(Introspection::of::<u32>(key))
                }
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// 1. Capacity
// ---------------------------------------------------------------------------

#[rstest]
#[case(RegistryKind::Adapter)]
#[case(RegistryKind::Attribute)]
#[case(RegistryKind::Converter)]
#[case(RegistryKind::Introspection)]
fn capacity_plus_one_is_full(#[case] kind: RegistryKind) {
    init_tracing();
    let regs = Registries::new();
    let outcomes = fill(&regs, kind, 65);

    assert!(outcomes[..64].iter().all(|o| o == &Ok(Registration::Added)));
    match &outcomes[64] {
        Err(RegistryError::RegistryFull { kind: k, capacity, key }) => {
            assert_eq!(*k, kind);
            assert_eq!(*capacity, 64);
            assert!(key.contains("k64"), "got: {key}");
        }
        other => panic!("expected RegistryFull, got {other:?}"),
    }
}

#[rstest]
#[case(RegistryKind::Adapter)]
#[case(RegistryKind::Attribute)]
#[case(RegistryKind::Converter)]
#[case(RegistryKind::Introspection)]
fn configured_capacity_is_honoured(#[case] kind: RegistryKind) {
    let regs = Registries::from_config(&RegistryConfig::uniform(2));
    let outcomes = fill(&regs, kind, 3);
    assert!(outcomes[0].is_ok() && outcomes[1].is_ok());
    assert!(matches!(outcomes[2], Err(RegistryError::RegistryFull { capacity: 2, .. })));
}

#[test]
fn full_error_message_names_kind_and_key() {
    let regs = Registries::from_config(&RegistryConfig::uniform(0));
    let err = regs.attributes.register(AttributeTable::new("Point")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("attribute table registry is full"), "got: {msg}");
    assert!(msg.contains("`Point`"), "got: {msg}");
}

// ---------------------------------------------------------------------------
// 2. First registration wins
// ---------------------------------------------------------------------------

#[test]
fn adapter_first_payload_wins() {
    let regs = Registries::new();
    regs.adapters.register(Adapter::new("f", |_: Value| Some(Value::from(1u8)))).unwrap();
    let second = regs.adapters.register(Adapter::new("f", |_: Value| Some(Value::from(2u8))));
    assert_eq!(second, Ok(Registration::AlreadyRegistered));
    assert_eq!(regs.adapters.apply("f", Value::from(true)), Some(Value::U8(1)));
}

#[test]
fn attribute_first_table_wins() {
    let regs = Registries::new();
    regs.attributes.register(AttributeTable::new("T").with("a", 1i32)).unwrap();
    regs.attributes.register(AttributeTable::new("T").with("b", 2i32)).unwrap();
    assert!(regs.attributes.has("T", "a"));
    assert!(!regs.attributes.has("T", "b"));
    assert_eq!(regs.attributes.len(), 1);
}

#[test]
fn converter_first_payload_wins() {
    let regs = Registries::new();
    regs.converters.register(Converter::integer("i32", "u8").unwrap()).unwrap();
    let second = regs
        .converters
        .register(Converter::new("i32", "u8", |_: &Value| -> Result<Value, ConvertError> {
            Ok(Value::U8(0))
        }));
    assert_eq!(second, Ok(Registration::AlreadyRegistered));
    assert_eq!(
        regs.converters.apply("i32", "u8", &Value::from(9i32)),
        Some(Ok(Value::U8(9)))
    );
}

#[test]
fn introspection_first_descriptor_wins() {
    let regs = Registries::new();
    regs.introspection.register(Introspection::of::<u64>("Id")).unwrap();
    regs.introspection.register(Introspection::of::<u8>("Id")).unwrap();
    assert_eq!(regs.introspection.size("Id"), Some(8));
}

// ---------------------------------------------------------------------------
// 3. Absent and empty keys
// ---------------------------------------------------------------------------

#[rstest]
#[case("missing")]
#[case("")]
fn absent_keys_yield_nothing_for_every_kind(#[case] key: &str) {
    let regs = Registries::new();
    let _ = fill(&regs, RegistryKind::Adapter, 1);
    let _ = fill(&regs, RegistryKind::Attribute, 1);
    let _ = fill(&regs, RegistryKind::Converter, 1);
    let _ = fill(&regs, RegistryKind::Introspection, 1);

    assert_eq!(regs.adapters.apply(key, Value::from(1u8)), None);
    assert_eq!(regs.attributes.get(key, "x"), None);
    assert_eq!(regs.attributes.get("k0", key), None);
    assert!(!regs.attributes.has(key, "x"));
    assert!(regs.converters.apply(key, "out", &Value::from(1u8)).is_none());
    assert_eq!(regs.introspection.name(key), None);
    assert_eq!(regs.introspection.size(key), None);
}

#[rstest]
#[case(RegistryKind::Adapter)]
#[case(RegistryKind::Attribute)]
#[case(RegistryKind::Introspection)]
fn empty_key_registration_is_invalid(#[case] kind: RegistryKind) {
    let regs = Registries::new();
    let err = match kind {
        RegistryKind::Adapter => regs.adapters.register(Adapter::new("", identity)),
        RegistryKind::Attribute => regs.attributes.register(AttributeTable::new("")),
        _ => regs.introspection.register(Introspection::of::<u8>("")),
    }
    .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidEntry { kind: k, .. } if k == kind), "got: {err}");
    assert!(err.to_string().starts_with("invalid "));
}

// ---------------------------------------------------------------------------
// 4. End-to-end scenarios
// ---------------------------------------------------------------------------

#[test]
fn to_upper_adapter() {
    let regs = Registries::new();
    regs.adapters
        .register(Adapter::new("to_upper", |v: Value| {
            v.as_str().map(|s| Value::from(s.to_uppercase()))
        }))
        .expect("register");

    assert_eq!(regs.adapters.apply("to_upper", Value::from("abc")), Some(Value::from("ABC")));
    assert_eq!(regs.adapters.apply("missing", Value::from("abc")), None);
}

#[test]
fn point_and_color_attribute_tables() {
    let regs = Registries::new();
    regs.attributes
        .register(AttributeTable::new("Point").with("x", 0.0f32).with("y", 0.0f32).with("dims", 2u8))
        .expect("Point");
    regs.attributes
        .register(
            AttributeTable::new("Color")
                .with("r", Value::hex8(0xFF))
                .with("g", Value::hex8(0x80))
                .with("b", Value::hex8(0x00))
                .with("opaque", Tribool::Unknown),
        )
        .expect("Color");

    assert!(regs.attributes.has("Point", "x"));
    assert!(!regs.attributes.has("Color", "x"));
    assert_eq!(
        regs.attributes.get("Color", "g").map(|a| a.value),
        Some(Value::H8(0x80))
    );
    assert_eq!(
        regs.attributes.get("Color", "opaque").and_then(|a| a.value.as_tribool()),
        Some(Tribool::Unknown)
    );
}

#[test]
fn converter_chain_through_registry() {
    let regs = Registries::new();
    for (from, to) in [("u8", "i64"), ("i64", "i8")] {
        regs.converters.register(Converter::integer(from, to).unwrap()).unwrap();
    }

    let wide = regs.converters.apply("u8", "i64", &Value::from(100u8)).unwrap().unwrap();
    assert_eq!(wide, Value::I64(100));
    assert_eq!(
        regs.converters.apply("i64", "i8", &wide),
        Some(Ok(Value::I8(100)))
    );

    let too_big = regs.converters.apply("i64", "i8", &Value::from(200i64)).unwrap();
    assert!(too_big.unwrap_err().to_string().contains("out of range for `i8`"));
}

// ---------------------------------------------------------------------------
// 5. Concurrency
// ---------------------------------------------------------------------------

#[test]
fn readers_see_only_complete_tables() {
    let regs = Registries::new();
    std::thread::scope(|s| {
        s.spawn(|| {
            for i in 0..64 {
                let table = AttributeTable::new(format!("T{i}")).with("a", 1u8).with("b", 2u8);
                regs.attributes.register(table).unwrap();
            }
        });
        for _ in 0..4 {
            s.spawn(|| {
                for i in 0..64 {
                    // A table is visible with all of its attributes or not at all.
                    if let Some(table) = regs.attributes.table(&format!("T{i}")) {
                        assert!(table.get("a").is_some() && table.get("b").is_some());
                        assert_eq!(table.attributes().len(), 2);
                    }
                }
            });
        }
    });
    assert_eq!(regs.attributes.len(), 64);
}
