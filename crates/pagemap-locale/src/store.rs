//! Atomically swappable locale table.
//!
//! # Thread Safety
//!
//! `NavStore` is designed for concurrent access:
//! - `snapshot()` returns `Arc<LocaleResolver>` with minimal locking (just Arc clone)
//! - `rebuild()` builds the replacement without holding the read lock and
//!   swaps it in only when the build succeeds
//! - readers holding an older snapshot keep using it until they drop it

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::resolver::LocaleResolver;

/// Shared handle to the current [`LocaleResolver`].
///
/// Resolve calls never observe a partially rebuilt locale set: a rebuild
/// produces a complete resolver and replaces the whole snapshot at once.
pub struct NavStore {
    /// Serializes rebuilds.
    reload_lock: Mutex<()>,
    /// Current snapshot (atomically swappable).
    current: RwLock<Arc<LocaleResolver>>,
    /// Incremented on every swap.
    generation: AtomicU64,
}

impl NavStore {
    /// Create a store holding `resolver`.
    #[must_use]
    pub fn new(resolver: LocaleResolver) -> Self {
        Self {
            reload_lock: Mutex::new(()),
            current: RwLock::new(Arc::new(resolver)),
            generation: AtomicU64::new(0),
        }
    }

    /// Current resolver snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<LocaleResolver> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of swaps since creation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Replace the snapshot with a fully built resolver.
    pub fn replace(&self, resolver: LocaleResolver) -> Arc<LocaleResolver> {
        let _guard = self.reload_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.swap(resolver)
    }

    /// Build a replacement with `build` and swap it in.
    ///
    /// On error the current snapshot stays in place and the error is
    /// returned.
    pub fn rebuild<E, F>(&self, build: F) -> Result<Arc<LocaleResolver>, E>
    where
        E: std::fmt::Display,
        F: FnOnce() -> Result<LocaleResolver, E>,
    {
        let _guard = self.reload_lock.lock().unwrap_or_else(PoisonError::into_inner);

        match build() {
            Ok(resolver) => Ok(self.swap(resolver)),
            Err(e) => {
                tracing::warn!(error = %e, "Rebuild failed, keeping current locale table");
                Err(e)
            }
        }
    }

    fn swap(&self, resolver: LocaleResolver) -> Arc<LocaleResolver> {
        let resolver = Arc::new(resolver);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&resolver);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        tracing::info!(
            generation,
            locales = resolver.available_locales().len(),
            "Swapped locale table"
        );

        resolver
    }
}
