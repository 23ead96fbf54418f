//! Observer registry.
//!
//! Keeps callbacks keyed by [`SubscriptionId`] in registration order.
//! Notification works on a snapshot so callbacks are free to register or
//! deregister observers while they run.

use std::fmt;
use std::sync::Arc;

/// Callback invoked with the new value of an observed cell.
pub type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Identifies one registration within an [`ObserverRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw id value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Ordered mapping from subscription id to callback.
pub struct ObserverRegistry<T> {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer<T>)>,
}

impl<T> ObserverRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            observers: Vec::new(),
        }
    }

    /// Adds an observer after all existing ones and returns its id.
    ///
    /// Ids are never reused within a registry.
    pub fn register(&mut self, observer: Observer<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes the observer registered under `id`.
    ///
    /// Returns `false` if no such observer was registered.
    pub fn deregister(&mut self, id: SubscriptionId) -> bool {
        match self.observers.iter().position(|(existing, _)| *existing == id) {
            Some(index) => {
                // `remove` rather than `swap_remove`: registration order is
                // notification order.
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns whether `id` is currently registered.
    #[must_use]
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.observers.iter().any(|(existing, _)| *existing == id)
    }

    /// Returns the callbacks in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(SubscriptionId, Observer<T>)> {
        self.observers.clone()
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns `true` if no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<T> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ObserverRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("next_id", &self.next_id)
            .field(
                "observers",
                &self.observers.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn noop() -> Observer<i64> {
        Arc::new(|_: &i64| {})
    }

    #[test]
    fn test_register_assigns_increasing_ids() {
        // Arrange
        let mut registry = ObserverRegistry::new();

        // Act
        let first = registry.register(noop());
        let second = registry.register(noop());

        // Assert
        assert!(first < second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_deregister_removes_only_the_given_id() {
        // Arrange
        let mut registry = ObserverRegistry::new();
        let first = registry.register(noop());
        let second = registry.register(noop());

        // Act
        let removed = registry.deregister(first);

        // Assert
        assert!(removed);
        assert!(!registry.contains(first));
        assert!(registry.contains(second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_deregister_unknown_id_returns_false() {
        // Arrange
        let mut registry = ObserverRegistry::new();
        let id = registry.register(noop());
        registry.deregister(id);

        // Act
        let removed_again = registry.deregister(id);

        // Assert
        assert!(!removed_again);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_deregister() {
        // Arrange
        let mut registry = ObserverRegistry::new();
        let first = registry.register(noop());
        registry.deregister(first);

        // Act
        let second = registry.register(noop());

        // Assert
        assert_ne!(first, second);
    }

    #[test]
    fn test_snapshot_preserves_registration_order() {
        // Arrange
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut registry: ObserverRegistry<i64> = ObserverRegistry::new();
        for tag in ["a", "b", "c"] {
            let calls = Arc::clone(&calls);
            registry.register(Arc::new(move |_: &i64| calls.lock().unwrap().push(tag)));
        }

        // Act
        for (_, observer) in registry.snapshot() {
            observer(&0);
        }

        // Assert
        assert_eq!(*calls.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_changes() {
        // Arrange
        let mut registry = ObserverRegistry::new();
        let id = registry.register(noop());
        let snapshot = registry.snapshot();

        // Act
        registry.deregister(id);
        registry.register(noop());
        registry.register(noop());

        // Assert
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].0, id);
    }

    #[test]
    fn test_subscription_id_display() {
        let mut registry = ObserverRegistry::new();
        let id = registry.register(noop());
        assert_eq!(id.to_string(), "sub-1");
        assert_eq!(id.get(), 1);
    }
}
