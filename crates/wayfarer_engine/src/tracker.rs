//! Re-entrancy tracking for computed properties.
//!
//! A computed property's formula may read other computed properties, which
//! may read back to the first. The tracker records which (entity, property)
//! pairs are being computed *by the current task lineage* so a resolver can
//! report a circular dependency instead of recursing forever.
//!
//! The active set is an immutable snapshot bound to the running task with a
//! `tokio` task-local. Entering a computation binds an extended copy for the
//! duration of the body; the previous snapshot comes back on every exit path,
//! including `?`, panics, and dropping a cancelled future. Tasks started with
//! `tokio::spawn` see an empty set, so unrelated work never observes another
//! task's keys. [`PropertyComputationTracker::spawn_inheriting`] starts a
//! child that begins from the caller's snapshot instead.

use std::fmt;
use std::future::Future;

use tokio::task::JoinHandle;
use tracing::{trace, warn};
use wayfarer_foundation::{
    EntityId, EntityKind, Error, ErrorContext, ItemId, LocationId, PropertyId, Result,
};

tokio::task_local! {
    static ACTIVE: TrackingContext;
}

/// Identifies one (entity, property) computation: `<kind>:<id>:<property>`.
///
/// The kind prefix keeps an item and a location with identical ids apart.
/// Ids and property names are opaque and are never escaped.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct ComputationKey(String);

impl ComputationKey {
    /// Key for a property computed on an item.
    #[must_use]
    pub fn item(item: &ItemId, property: &PropertyId) -> Self {
        Self(format!("item:{item}:{property}"))
    }

    /// Key for a property computed on a location.
    #[must_use]
    pub fn location(location: &LocationId, property: &PropertyId) -> Self {
        Self(format!("location:{location}:{property}"))
    }

    /// Returns the key string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComputationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ComputationKey> for String {
    fn from(key: ComputationKey) -> Self {
        key.0
    }
}

/// Snapshot of the computations in progress for one task lineage.
///
/// Cloning is O(1); [`TrackingContext::with_key`] returns an extended copy
/// that shares structure with the original and never mutates it.
#[derive(Clone, Debug, Default)]
pub struct TrackingContext {
    active: im::HashSet<ComputationKey>,
}

impl TrackingContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this context with `key` also active.
    #[must_use]
    pub fn with_key(&self, key: ComputationKey) -> Self {
        Self {
            active: self.active.update(key),
        }
    }

    /// Returns true if `key` is active in this context.
    #[must_use]
    pub fn contains(&self, key: &ComputationKey) -> bool {
        self.active.contains(key)
    }

    /// Returns the number of active computations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns true if nothing is being computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns the active keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<ComputationKey> {
        let mut keys: Vec<ComputationKey> = self.active.iter().cloned().collect();
        keys.sort();
        keys
    }
}

/// Task-lineage-scoped tracker of in-flight property computations.
///
/// The tracker only answers "is this key being computed right now". Deciding
/// that an active key means a cycle is the resolver's job; see
/// [`PropertyComputationTracker::guard`].
pub struct PropertyComputationTracker;

impl PropertyComputationTracker {
    /// Builds the computation key for `property` on `entity`.
    ///
    /// # Errors
    /// Returns an entity kind mismatch unless `entity` is an item or location.
    pub fn key(entity: &EntityId, property: &PropertyId) -> Result<ComputationKey> {
        match entity {
            EntityId::Item(item) => Ok(ComputationKey::item(item, property)),
            EntityId::Location(location) => Ok(ComputationKey::location(location, property)),
            // Only items and locations carry computed properties.
            other => Err(Error::entity_kind_mismatch(EntityKind::Item, other)),
        }
    }

    /// Returns the calling task's current snapshot.
    #[must_use]
    pub fn current() -> TrackingContext {
        ACTIVE.try_with(Clone::clone).unwrap_or_default()
    }

    /// Returns true if the calling task lineage is computing `key`.
    #[must_use]
    pub fn is_active(key: &ComputationKey) -> bool {
        ACTIVE.try_with(|ctx| ctx.contains(key)).unwrap_or(false)
    }

    /// Returns the keys the calling task lineage is computing, sorted.
    #[must_use]
    pub fn active_keys() -> Vec<ComputationKey> {
        Self::current().keys()
    }

    /// Fails with a circular dependency if `key` is already being computed.
    ///
    /// # Errors
    /// Returns [`wayfarer_foundation::ErrorKind::CircularDependency`] with the
    /// active keys recorded as context frames.
    pub fn guard(key: &ComputationKey) -> Result<()> {
        let ctx = Self::current();
        if !ctx.contains(key) {
            return Ok(());
        }
        warn!(%key, depth = ctx.len(), "circular property dependency detected");
        let context = ctx
            .keys()
            .into_iter()
            .fold(ErrorContext::new(), |c, k| c.with_frame(k));
        Err(Error::circular_dependency(key.clone()).with_context(context))
    }

    /// Runs `body` with `key` marked active for the calling task lineage.
    ///
    /// Nested sub-computations awaited by `body` share the extended snapshot.
    pub async fn with_tracking<F>(key: ComputationKey, body: F) -> F::Output
    where
        F: Future,
    {
        trace!(%key, "entering tracked computation");
        let ctx = Self::current().with_key(key);
        ACTIVE.scope(ctx, body).await
    }

    /// Synchronous form of [`PropertyComputationTracker::with_tracking`].
    pub fn with_tracking_sync<R>(key: ComputationKey, body: impl FnOnce() -> R) -> R {
        trace!(%key, "entering tracked computation");
        let ctx = Self::current().with_key(key);
        ACTIVE.sync_scope(ctx, body)
    }

    /// Runs `body` with an explicitly supplied snapshot.
    ///
    /// For handing a lineage across a boundary the task-local cannot follow,
    /// such as a channel to a worker task.
    pub async fn within<F>(ctx: TrackingContext, body: F) -> F::Output
    where
        F: Future,
    {
        ACTIVE.scope(ctx, body).await
    }

    /// Spawns a child task that starts from the caller's snapshot.
    ///
    /// The child's own tracking never leaks back to the caller or to its
    /// siblings.
    pub fn spawn_inheriting<F>(body: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        tokio::spawn(ACTIVE.scope(Self::current(), body))
    }
}
