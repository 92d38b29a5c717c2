use super::degree::Degree;
use super::lfsr::Matrices;
use log::trace;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Shares transition matrices between computations that use the same
/// `(poly, degree)` pair.
///
/// The cache is owned by whoever creates it; there is no process-wide
/// instance. It is `Sync`, so one cache can serve many threads.
#[derive(Debug, Default)]
pub struct MatrixCache {
    entries: RwLock<HashMap<(u32, Degree), Arc<Matrices>>>,
}

impl MatrixCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the matrices for `(poly, degree)`, building them on first use.
    pub fn get_or_build(&self, poly: u32, degree: Degree) -> Arc<Matrices> {
        let key = (poly, degree);

        if let Some(found) = self.read_entries(|entries| entries.get(&key).cloned()) {
            trace!("matrix cache hit for 0x{:X} ({})", poly, degree);
            return found;
        }

        let built = Arc::new(Matrices::build(poly, degree));
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // another thread may have raced us here; keep whichever landed first
        let entry = entries.entry(key).or_insert(built);
        Arc::clone(entry)
    }

    /// Number of cached `(poly, degree)` pairs.
    pub fn len(&self) -> usize {
        self.read_entries(|entries| entries.len())
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    fn read_entries<T>(&self, f: impl FnOnce(&HashMap<(u32, Degree), Arc<Matrices>>) -> T) -> T {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&entries)
    }
}
