//! Integration tests for computation tracking
//!
//! Tests key construction and the active-set lifecycle of tracked scopes.

use proptest::prelude::*;
use wayfarer_engine::{ComputationKey, PropertyComputationTracker, TrackingContext};
use wayfarer_foundation::{EntityId, Error, ItemId, LocationId, PropertyId, Result};

fn key(entity: &EntityId, property: &str) -> ComputationKey {
    PropertyComputationTracker::key(entity, &PropertyId::new(property)).unwrap()
}

// =============================================================================
// Keys
// =============================================================================

#[test]
fn item_and_location_keys_differ() {
    assert_ne!(
        key(&EntityId::item("x"), "p"),
        key(&EntityId::location("x"), "p")
    );
}

#[test]
fn key_matches_typed_constructors() {
    assert_eq!(
        key(&EntityId::item("lamp"), "isOn"),
        ComputationKey::item(&ItemId::new("lamp"), &PropertyId::new("isOn"))
    );
    assert_eq!(
        key(&EntityId::location("attic"), "isLit"),
        ComputationKey::location(&LocationId::new("attic"), &PropertyId::new("isLit"))
    );
}

#[test]
fn timed_events_have_no_keys() {
    let property = PropertyId::new("p");
    assert!(PropertyComputationTracker::key(&EntityId::daemon("thief"), &property).is_err());
    assert!(PropertyComputationTracker::key(&EntityId::fuse("timer"), &property).is_err());
    assert!(PropertyComputationTracker::key(&EntityId::Global, &property).is_err());
}

proptest! {
    #[test]
    fn keys_are_injective_across_kinds(id in ".{0,12}", property in ".{0,12}") {
        let item = key(&EntityId::item(id.as_str()), &property);
        let location = key(&EntityId::location(id.as_str()), &property);
        prop_assert_ne!(item, location);
    }

    #[test]
    fn keys_are_deterministic(id in "[a-zA-Z:]{1,12}", property in "[a-zA-Z:]{1,12}") {
        let a = key(&EntityId::item(id.as_str()), &property);
        let b = key(&EntityId::item(id.as_str()), &property);
        prop_assert_eq!(a.as_str(), format!("item:{id}:{property}"));
        prop_assert_eq!(a, b);
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn active_only_during_body() {
    let k = key(&EntityId::item("lamp"), "description");
    assert!(!PropertyComputationTracker::is_active(&k));

    let during = PropertyComputationTracker::with_tracking(k.clone(), async {
        PropertyComputationTracker::is_active(&k)
    })
    .await;

    assert!(during);
    assert!(!PropertyComputationTracker::is_active(&k));
}

#[tokio::test]
async fn released_when_body_fails() {
    let k = key(&EntityId::item("lamp"), "description");
    let result: Result<()> = PropertyComputationTracker::with_tracking(k.clone(), async {
        tokio::task::yield_now().await;
        Err(Error::internal("formula failed"))
    })
    .await;

    assert!(result.is_err());
    assert!(!PropertyComputationTracker::is_active(&k));
}

#[tokio::test]
async fn nested_keys_unwind_in_order() {
    let outer = key(&EntityId::location("cellar"), "isLit");
    let inner = key(&EntityId::item("lamp"), "isOn");

    PropertyComputationTracker::with_tracking(outer.clone(), async {
        PropertyComputationTracker::with_tracking(inner.clone(), async {
            assert!(PropertyComputationTracker::is_active(&outer));
            assert!(PropertyComputationTracker::is_active(&inner));
        })
        .await;
        assert!(PropertyComputationTracker::is_active(&outer));
        assert!(!PropertyComputationTracker::is_active(&inner));
    })
    .await;

    assert!(PropertyComputationTracker::active_keys().is_empty());
}

#[tokio::test]
async fn own_key_is_visible_for_cycle_detection() {
    let k = key(&EntityId::item("mirror"), "description");
    let err = PropertyComputationTracker::with_tracking(k.clone(), async {
        PropertyComputationTracker::guard(&k).unwrap_err()
    })
    .await;
    assert!(err.is_circular_dependency());
    assert!(PropertyComputationTracker::guard(&k).is_ok());
}

#[tokio::test]
async fn explicit_context_is_honored() {
    let k = key(&EntityId::item("lamp"), "p");
    let ctx = TrackingContext::new().with_key(k.clone());
    let seen = PropertyComputationTracker::within(ctx, async {
        PropertyComputationTracker::is_active(&k)
    })
    .await;
    assert!(seen);
    assert!(!PropertyComputationTracker::is_active(&k));
}

#[test]
fn sync_and_async_scopes_compose() {
    let outer = key(&EntityId::item("lamp"), "a");
    let inner = key(&EntityId::item("lamp"), "b");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    runtime.block_on(PropertyComputationTracker::with_tracking(outer.clone(), async {
        PropertyComputationTracker::with_tracking_sync(inner.clone(), || {
            assert!(PropertyComputationTracker::is_active(&outer));
            assert!(PropertyComputationTracker::is_active(&inner));
        });
        assert!(!PropertyComputationTracker::is_active(&inner));
    }));
}
