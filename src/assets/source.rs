use std::collections::HashMap;

use crate::story::model::Resource;

/// Pick the rendition URL to load for a target display width.
///
/// Variants are ordered smallest first; the first one wide enough to cover
/// the target wins. Falls back to the canonical source when no variant
/// suffices or the resource does not support renditions (videos, or images
/// without variants). Geometry is unaffected by the choice: it depends only
/// on the intrinsic dimensions.
pub fn select_source(resource: &Resource, target_width: f64) -> &str {
    if !resource.supports_variants() {
        return &resource.src;
    }
    resource
        .variants
        .iter()
        .find(|v| f64::from(v.width) >= target_width)
        .map_or(resource.src.as_str(), |v| v.url.as_str())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Progressive-upgrade state of a resource's best-available URL.
pub enum SourceState {
    /// Only the smallest placeholder rendition has loaded.
    Smallest,
    /// A mid-resolution rendition is cached and displayed.
    Cached,
    /// The full-resolution source has been preloaded and swapped in.
    FullSize,
}

#[derive(Debug, Default)]
/// Explicit per-session cache of resource upgrade states, keyed by id.
///
/// Injected where needed rather than living as module-level shared state;
/// its lifecycle is tied to the editing session that owns it.
pub struct ResourceCache {
    states: HashMap<String, SourceState>,
}

impl ResourceCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current upgrade state for a resource id.
    pub fn get(&self, id: &str) -> Option<SourceState> {
        self.states.get(id).copied()
    }

    /// Record the upgrade state for a resource id.
    pub fn set(&mut self, id: impl Into<String>, state: SourceState) {
        self.states.insert(id.into(), state);
    }

    /// Drop all recorded states (page teardown).
    pub fn clear(&mut self) {
        self.states.clear();
    }
}
