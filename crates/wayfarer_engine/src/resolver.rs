//! Computed property resolution for items and locations.
//!
//! Properties are either stored values or formulas registered per
//! (entity, property). Formulas receive the resolver and may read any other
//! property, computed or stored. Every formula runs under the computation
//! tracker, so a formula that reaches itself again fails with a circular
//! dependency instead of overflowing the stack.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};
use wayfarer_foundation::{
    EntityId, Error, ItemId, LocationId, PropertyId, PropertyValue, Result,
};

use crate::tracker::{ComputationKey, PropertyComputationTracker};

/// Default limit on nested formula evaluations.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A computed property formula.
///
/// Called with the resolver and the entity the property is being read from.
pub type Formula =
    Arc<dyn Fn(&PropertyResolver, &EntityId) -> Result<PropertyValue> + Send + Sync>;

type Slot = (EntityId, PropertyId);

/// Resolves stored and computed properties.
///
/// Cloning is O(1); the value and formula tables are persistent maps.
#[derive(Clone)]
pub struct PropertyResolver {
    values: im::HashMap<Slot, PropertyValue>,
    formulas: im::HashMap<Slot, Formula>,
    max_depth: usize,
}

impl Default for PropertyResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PropertyResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyResolver")
            .field("values", &self.values.len())
            .field("formulas", &self.formulas.len())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl PropertyResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: im::HashMap::new(),
            formulas: im::HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum number of nested formula evaluations.
    #[must_use]
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }

    /// Returns the maximum nesting depth.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Stores a plain value for `property` on `entity`.
    pub fn set_value(
        &mut self,
        entity: impl Into<EntityId>,
        property: impl Into<PropertyId>,
        value: impl Into<PropertyValue>,
    ) {
        self.values
            .insert((entity.into(), property.into()), value.into());
    }

    /// Builder form of [`PropertyResolver::set_value`].
    #[must_use]
    pub fn with_value(
        mut self,
        entity: impl Into<EntityId>,
        property: impl Into<PropertyId>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.set_value(entity, property, value);
        self
    }

    /// Registers a formula for `property` on an item.
    pub fn define_item_formula<F>(
        &mut self,
        item: impl Into<ItemId>,
        property: impl Into<PropertyId>,
        formula: F,
    ) where
        F: Fn(&PropertyResolver, &EntityId) -> Result<PropertyValue> + Send + Sync + 'static,
    {
        self.define(EntityId::Item(item.into()), property.into(), Arc::new(formula));
    }

    /// Registers a formula for `property` on a location.
    pub fn define_location_formula<F>(
        &mut self,
        location: impl Into<LocationId>,
        property: impl Into<PropertyId>,
        formula: F,
    ) where
        F: Fn(&PropertyResolver, &EntityId) -> Result<PropertyValue> + Send + Sync + 'static,
    {
        self.define(EntityId::Location(location.into()), property.into(), Arc::new(formula));
    }

    fn define(&mut self, entity: EntityId, property: PropertyId, formula: Formula) {
        debug!(%entity, %property, "registered computed property");
        self.formulas.insert((entity, property), formula);
    }

    /// Returns true if a formula is registered for the property.
    #[must_use]
    pub fn is_computed(&self, entity: &EntityId, property: &PropertyId) -> bool {
        self.formulas
            .contains_key(&(entity.clone(), property.clone()))
    }

    /// Returns the stored value, ignoring any formula.
    #[must_use]
    pub fn stored(&self, entity: &EntityId, property: &PropertyId) -> Option<&PropertyValue> {
        self.values.get(&(entity.clone(), property.clone()))
    }

    /// Reads `property` on `entity`.
    ///
    /// A registered formula takes precedence over a stored value.
    ///
    /// # Errors
    /// Returns an error if the property is neither computed nor stored, if a
    /// formula fails, if evaluation re-enters a computation already in
    /// progress, or if nesting exceeds the configured depth.
    pub fn resolve(&self, entity: &EntityId, property: &PropertyId) -> Result<PropertyValue> {
        let slot = (entity.clone(), property.clone());
        let Some(formula) = self.formulas.get(&slot) else {
            return self
                .values
                .get(&slot)
                .cloned()
                .ok_or_else(|| Error::property_not_found(slot.0, slot.1));
        };

        let key = PropertyComputationTracker::key(entity, property)?;
        PropertyComputationTracker::guard(&key)?;
        self.check_depth(&key)?;

        let formula = Arc::clone(formula);
        let value =
            PropertyComputationTracker::with_tracking_sync(key, || formula(self, entity))?;
        trace!(%entity, %property, %value, "computed property");
        Ok(value)
    }

    /// Reads `property` on `item`.
    ///
    /// # Errors
    /// See [`PropertyResolver::resolve`].
    pub fn item_property(&self, item: &ItemId, property: &PropertyId) -> Result<PropertyValue> {
        self.resolve(&EntityId::Item(item.clone()), property)
    }

    /// Reads `property` on `location`.
    ///
    /// # Errors
    /// See [`PropertyResolver::resolve`].
    pub fn location_property(
        &self,
        location: &LocationId,
        property: &PropertyId,
    ) -> Result<PropertyValue> {
        self.resolve(&EntityId::Location(location.clone()), property)
    }

    /// Reads a property, falling back to `default` on any error.
    #[must_use]
    pub fn resolve_or(
        &self,
        entity: &EntityId,
        property: &PropertyId,
        default: PropertyValue,
    ) -> PropertyValue {
        self.resolve(entity, property).unwrap_or(default)
    }

    fn check_depth(&self, key: &ComputationKey) -> Result<()> {
        if PropertyComputationTracker::current().len() >= self.max_depth {
            return Err(Error::depth_exceeded(self.max_depth, key.clone()));
        }
        Ok(())
    }
}
