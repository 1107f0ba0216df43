//! Integration tests for computed property resolution
//!
//! Tests formulas, cycle detection, and concurrent resolution with shared
//! randomness.

use std::sync::Arc;

use tokio::task::JoinSet;
use wayfarer_engine::{EngineConfig, PropertyComputationTracker};
use wayfarer_foundation::{EntityId, ErrorKind, ItemId, LocationId, PropertyId, PropertyValue};

fn prop(name: &str) -> PropertyId {
    PropertyId::new(name)
}

// =============================================================================
// Formulas
// =============================================================================

#[test]
fn location_lighting_depends_on_item_state() {
    let mut resolver = EngineConfig::default()
        .resolver()
        .with_value(ItemId::new("lamp"), "isOn", false)
        .with_value(ItemId::new("lamp"), "location", EntityId::location("cellar"));
    resolver.define_location_formula("cellar", "isLit", |r, me| {
        let lamp = ItemId::new("lamp");
        let here = r.item_property(&lamp, &prop("location"))?;
        let on = r.item_property(&lamp, &prop("isOn"))?.as_bool()?;
        Ok(PropertyValue::Bool(on && here.as_entity()? == me))
    });

    let cellar = LocationId::new("cellar");
    assert_eq!(
        resolver.location_property(&cellar, &prop("isLit")).unwrap(),
        PropertyValue::Bool(false)
    );

    resolver.set_value(ItemId::new("lamp"), "isOn", true);
    assert_eq!(
        resolver.location_property(&cellar, &prop("isLit")).unwrap(),
        PropertyValue::Bool(true)
    );
}

#[test]
fn three_step_cycle_is_reported_not_overflowed() {
    let mut resolver = EngineConfig::default().resolver();
    resolver.define_item_formula("a", "p", |r, _| r.item_property(&ItemId::new("b"), &prop("p")));
    resolver.define_item_formula("b", "p", |r, _| {
        r.location_property(&LocationId::new("c"), &prop("p"))
    });
    resolver.define_location_formula("c", "p", |r, _| {
        r.item_property(&ItemId::new("a"), &prop("p"))
    });

    let err = resolver
        .item_property(&ItemId::new("a"), &prop("p"))
        .unwrap_err();
    assert!(err.is_circular_dependency());
    let frames = err.context.unwrap().stack;
    assert_eq!(frames, vec!["item:a:p", "item:b:p", "location:c:p"]);
}

#[test]
fn type_errors_inside_formulas_propagate() {
    let mut resolver = EngineConfig::default()
        .resolver()
        .with_value(ItemId::new("sign"), "text", "KEEP OUT");
    resolver.define_item_formula("sign", "size", |r, me| {
        let n = r.resolve(me, &prop("text"))?.as_int()?;
        Ok(PropertyValue::Int(n))
    });
    let err = resolver
        .item_property(&ItemId::new("sign"), &prop("size"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::PropertyTypeMismatch { .. }));
    assert!(PropertyComputationTracker::active_keys().is_empty());
}

#[test]
fn configured_depth_limit_applies() {
    let mut resolver = EngineConfig::default()
        .with_max_computation_depth(2)
        .resolver();
    resolver.define_item_formula("x", "p", |r, _| r.item_property(&ItemId::new("y"), &prop("p")));
    resolver.define_item_formula("y", "p", |r, _| r.item_property(&ItemId::new("z"), &prop("p")));
    resolver.define_item_formula("z", "p", |_, _| Ok(PropertyValue::Int(1)));

    let err = resolver
        .item_property(&ItemId::new("x"), &prop("p"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DepthExceeded { limit: 2, .. }));
    assert_eq!(
        resolver.item_property(&ItemId::new("y"), &prop("p")).unwrap(),
        PropertyValue::Int(1)
    );
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_reads_of_same_property_are_not_cycles() {
    let mut resolver = EngineConfig::default()
        .resolver()
        .with_value(ItemId::new("troll"), "strength", 7_i64);
    resolver.define_item_formula("troll", "description", |r, me| {
        std::thread::sleep(std::time::Duration::from_millis(2));
        let s = r.resolve(me, &prop("strength"))?.as_int()?;
        Ok(PropertyValue::Text(format!("A troll of strength {s}.")))
    });
    let resolver = Arc::new(resolver);

    let mut set = JoinSet::new();
    for _ in 0..16 {
        let resolver = Arc::clone(&resolver);
        set.spawn(async move {
            resolver.item_property(&ItemId::new("troll"), &prop("description"))
        });
    }
    while let Some(result) = set.join_next().await {
        assert_eq!(
            result.unwrap().unwrap(),
            PropertyValue::from("A troll of strength 7.")
        );
    }
}

#[test]
fn formulas_drawing_randomness_replay_in_order() {
    let run = |seed: u64| {
        let rng = EngineConfig::seeded(seed).rng();
        let mut resolver = EngineConfig::default().resolver();
        let source = Arc::clone(&rng);
        resolver.define_item_formula("sword", "damage", move |_, _| {
            Ok(PropertyValue::Int(i64::from(source.roll(8))))
        });
        (0..10)
            .map(|_| {
                resolver
                    .item_property(&ItemId::new("sword"), &prop("damage"))
                    .unwrap()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}
