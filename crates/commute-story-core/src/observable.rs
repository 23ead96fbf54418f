//! Observable value cell.
//!
//! An [`Observable`] holds one value that any number of consumers can read,
//! overwrite and subscribe to. Writes are last-write-wins and are not
//! validated; every write synchronously notifies the live observers in
//! registration order before returning.
//!
//! A write made from inside an observer of the same cell is queued behind
//! the notifications already in flight, so every observer sees the values
//! in write order and its last value matches [`Observable::read`].

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::{debug, trace};

use crate::observer::{Observer, ObserverRegistry, SubscriptionId};

struct Shared<T> {
    name: &'static str,
    value: Mutex<T>,
    registry: Mutex<ObserverRegistry<T>>,
    pending: Mutex<PendingNotifications<T>>,
}

struct PendingNotifications<T> {
    draining: bool,
    queue: VecDeque<(SubscriptionId, Observer<T>, T)>,
}

/// Ends a drain pass. Clears leftovers if an observer panicked mid-pass.
struct DrainGuard<'a, T>(&'a Shared<T>);

impl<T> Drop for DrainGuard<'_, T> {
    fn drop(&mut self) {
        let mut pending = lock(&self.0.pending);
        pending.draining = false;
        pending.queue.clear();
    }
}

// The guarded data is a plain value, so a panic in another holder cannot
// leave it half-written.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A shared, externally mutable value with change subscription.
///
/// Cloning an `Observable` clones the handle: all clones read and write the
/// same cell and share its observers.
pub struct Observable<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Observable<T>
where
    T: Clone + Send + 'static,
{
    /// Creates a cell holding `initial`. `name` identifies the cell in logs.
    #[must_use]
    pub fn new(name: &'static str, initial: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                name,
                value: Mutex::new(initial),
                registry: Mutex::new(ObserverRegistry::new()),
                pending: Mutex::new(PendingNotifications {
                    draining: false,
                    queue: VecDeque::new(),
                }),
            }),
        }
    }

    /// The name this cell was created with.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.shared.name
    }

    /// Returns the most recently written value.
    #[must_use]
    pub fn read(&self) -> T {
        lock(&self.shared.value).clone()
    }

    /// Replaces the value and notifies every live observer.
    pub fn set(&self, value: T) {
        *lock(&self.shared.value) = value.clone();
        self.notify(value);
    }

    /// Replaces the value with `f(current)` and notifies like [`set`].
    ///
    /// [`set`]: Observable::set
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.read());
        self.set(next);
    }

    /// Registers `observer`, calls it once with the current value, and
    /// returns the handle that deregisters it.
    ///
    /// The observer is then called again on every subsequent write until
    /// the returned [`Subscription`] is used to unsubscribe. Dropping the
    /// handle without unsubscribing leaves the observer registered.
    pub fn subscribe<F>(&self, observer: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let observer: Observer<T> = Arc::new(observer);
        let id = lock(&self.shared.registry).register(Arc::clone(&observer));
        debug!(cell = self.shared.name, subscription = %id, "observer subscribed");

        observer(&self.read());

        Subscription {
            id,
            cell: Arc::downgrade(&self.shared),
        }
    }

    /// Number of currently registered observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.shared.registry).len()
    }

    fn notify(&self, value: T) {
        let snapshot = lock(&self.shared.registry).snapshot();
        trace!(
            cell = self.shared.name,
            observers = snapshot.len(),
            "notifying observers"
        );

        {
            let mut pending = lock(&self.shared.pending);
            pending.queue.extend(
                snapshot
                    .into_iter()
                    .map(|(id, observer)| (id, observer, value.clone())),
            );
            // A write from inside an observer: the outer pass delivers it.
            if pending.draining {
                return;
            }
            pending.draining = true;
        }

        let _guard = DrainGuard(&self.shared);
        // No lock is held while observers run.
        loop {
            let next = lock(&self.shared.pending).queue.pop_front();
            let Some((id, observer, value)) = next else {
                break;
            };
            // Skip observers removed since the write was queued.
            if lock(&self.shared.registry).contains(id) {
                observer(&value);
            }
        }
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("name", &self.shared.name)
            .field("value", &*lock(&self.shared.value))
            .field("subscribers", &lock(&self.shared.registry).len())
            .finish()
    }
}

/// Capability to deregister one observer from an [`Observable`].
///
/// Holds only a weak reference, so it never keeps the cell alive.
#[must_use = "the observer stays registered until `unsubscribe` is called"]
pub struct Subscription<T> {
    id: SubscriptionId,
    cell: Weak<Shared<T>>,
}

impl<T> Subscription<T> {
    /// The registry id of this subscription.
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Deregisters the observer.
    ///
    /// Returns `true` if this call removed it; calling again, or after the
    /// cell has been dropped, is a no-op returning `false`.
    pub fn unsubscribe(&self) -> bool {
        let Some(cell) = self.cell.upgrade() else {
            return false;
        };
        let removed = lock(&cell.registry).deregister(self.id);
        if removed {
            debug!(cell = cell.name, subscription = %self.id, "observer unsubscribed");
        }
        removed
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("cell_alive", &(self.cell.strong_count() > 0))
            .finish()
    }
}
