//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::BookingStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the booking store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn BookingStore>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `store` - Backing store for hotels and bookings
    #[must_use]
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    /// Get a reference to the booking store.
    #[must_use]
    pub fn store(&self) -> &dyn BookingStore {
        self.inner.store.as_ref()
    }
}
