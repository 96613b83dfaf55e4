//! Memoized preset groups shared across generation requests.

use std::sync::{Arc, PoisonError, RwLock};

use hashbrown::HashMap;
use tracing::debug;

use crate::group::SymmetryGroup;
use crate::presets::SymmetryFamily;

/// Compute-once, read-many cache of preset groups.
///
/// The registry is owned by the caller and passed by reference into
/// generation calls. Two threads racing on the first request for a family
/// both compute the closure; the first insert wins and the other result is
/// dropped. Closure is deterministic, so both results are identical.
///
/// # Example
///
/// ```
/// use form_symmetry::SymmetryRegistry;
///
/// let registry = SymmetryRegistry::new();
/// let cubic = registry.get_or_compute("octahedral");
/// assert_eq!(cubic.len(), 48);
/// assert_eq!(cubic.label(), "cubic");
///
/// let unknown = registry.get_or_compute("heptagonal");
/// assert!(unknown.is_empty());
/// assert_eq!(unknown.label(), "");
/// ```
#[derive(Debug, Default)]
pub struct SymmetryRegistry {
    groups: RwLock<HashMap<SymmetryFamily, Arc<SymmetryGroup>>>,
}

impl SymmetryRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a group by key, computing and caching it on first use.
    ///
    /// Unknown keys yield an empty, uncached group with an empty label.
    #[must_use]
    pub fn get_or_compute(&self, key: &str) -> Arc<SymmetryGroup> {
        match SymmetryFamily::from_key(key) {
            Some(family) => self.get(family),
            None => {
                debug!("Unknown symmetry group key '{}'", key);
                Arc::new(SymmetryGroup::empty())
            }
        }
    }

    /// Get the closed group for a preset family.
    #[must_use]
    pub fn get(&self, family: SymmetryFamily) -> Arc<SymmetryGroup> {
        {
            let groups = self.groups.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(group) = groups.get(&family) {
                return Arc::clone(group);
            }
        }

        let computed = Arc::new(family.build());
        debug!("Computed '{}' group with {} transforms", family, computed.len());

        let mut groups = self.groups.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(groups.entry(family).or_insert(computed))
    }

    /// Number of cached families.
    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.groups.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
