//! Test observer — records every value an observable hands it.

use std::fmt;
use std::sync::{Arc, Mutex};

/// An observer that records each value it is called with.
///
/// Clones share the same recording, so a clone can be moved into a callback
/// while the original is kept for assertions.
pub struct RecordingObserver<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> RecordingObserver<T>
where
    T: Clone + Send + 'static,
{
    /// Create a recorder with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a callback that appends every value it receives to this
    /// recorder.
    ///
    /// # Panics
    ///
    /// The callback panics if the internal mutex is poisoned.
    pub fn callback(&self) -> impl Fn(&T) + Send + Sync + use<T> {
        let calls = Arc::clone(&self.calls);
        move |value: &T| calls.lock().unwrap().push(value.clone())
    }

    /// Returns a snapshot of all recorded values, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The most recently recorded value, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl<T> Clone for RecordingObserver<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Default for RecordingObserver<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RecordingObserver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingObserver")
            .field("calls", &self.calls)
            .finish()
    }
}
