//! # Observable Store
//!
//! A value plus the callbacks that want to hear when it changes. `AuthStore`
//! and `ThemeStore` are both thin wrappers around one of these.
//!
//! ## Notification Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store<S> Mutation                                    │
//! │                                                                         │
//! │  update(|s| ...)                                                        │
//! │       │                                                                 │
//! │       ├── 0. take the update lock (one mutation in flight at a time)    │
//! │       │                                                                 │
//! │       ├── 1. take write lock, run the closure, clone the new snapshot   │
//! │       │                                                                 │
//! │       ├── 2. release the write lock                                     │
//! │       │                                                                 │
//! │       ├── 3. call every listener with &snapshot, in subscribe order     │
//! │       │                                                                 │
//! │       └── 4. release the update lock                                    │
//! │                                                                         │
//! │  Listeners run synchronously on the caller's thread. The state lock is  │
//! │  NOT held while they run, so a listener may read the store again.      │
//! │  A listener must not call `update` on the same store (deadlock).       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//! Listeners see snapshots in exactly the order mutations were applied,
//! even when several threads update the same store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Holds a value of type `S` and notifies listeners after each mutation.
pub struct Store<S> {
    state: RwLock<S>,
    listeners: RwLock<Vec<(SubscriptionId, Listener<S>)>>,
    /// Held from mutation until the last listener returns.
    update_lock: Mutex<()>,
    next_id: AtomicU64,
}

impl<S: Clone> Store<S> {
    pub fn new(initial: S) -> Self {
        Store {
            state: RwLock::new(initial),
            listeners: RwLock::new(Vec::new()),
            update_lock: Mutex::new(()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> S {
        self.read(S::clone)
    }

    /// Executes a function with read access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let signed_in = auth.read(|s| s.is_authenticated());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        // State is plain data, so a panic elsewhere cannot leave it half-written
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Mutates the state, then notifies every listener with the result.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut S) -> R,
    {
        let _serial = self.update_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let (result, snapshot) = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let result = f(&mut state);
            (result, state.clone())
        };

        self.notify(&snapshot);
        result
    }

    /// Registers a listener called after every mutation.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, snapshot: &S) {
        // Clone the Arcs so listeners may (un)subscribe while being called
        let listeners: Vec<Listener<S>> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }
}

impl<S: Clone + Default> Default for Store<S> {
    fn default() -> Self {
        Store::new(S::default())
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field(
                "subscribers",
                &self
                    .listeners
                    .read()
                    .map(|l| l.len())
                    .unwrap_or_else(|e| e.into_inner().len()),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_update_notifies_with_new_state() {
        let store = Store::new(0_i32);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |v: &i32| sink.lock().unwrap().push(*v));

        store.update(|v| *v += 1);
        store.update(|v| *v += 10);

        assert_eq!(*seen.lock().unwrap(), vec![1, 11]);
        assert_eq!(store.snapshot(), 11);
    }

    #[test]
    fn test_listeners_called_in_subscribe_order() {
        let store = Store::new(());
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            let sink = Arc::clone(&order);
            store.subscribe(move |_: &()| sink.lock().unwrap().push(tag));
        }
        store.update(|_| ());

        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = Store::new(0_u8);
        let calls = Arc::new(AtomicU64::new(0));

        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_: &u8| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        store.update(|v| *v = 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.update(|v| *v = 2);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_can_read_store_reentrantly() {
        let store = Arc::new(Store::new(String::from("a")));
        let observed = Arc::new(Mutex::new(String::new()));

        let inner = Arc::clone(&store);
        let sink = Arc::clone(&observed);
        store.subscribe(move |_: &String| {
            *sink.lock().unwrap() = inner.snapshot();
        });
        store.update(|s| s.push('b'));

        assert_eq!(*observed.lock().unwrap(), "ab");
    }

    #[test]
    fn test_concurrent_updates_notify_in_mutation_order() {
        let store = Arc::new(Store::new(0_u32));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |v: &u32| sink.lock().unwrap().push(*v));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        store.update(|v| *v += 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, (1..=1000).collect::<Vec<u32>>());
        assert_eq!(store.snapshot(), 1000);
    }

    #[test]
    fn test_update_returns_closure_result() {
        let store = Store::new(vec![1, 2, 3]);
        let popped = store.update(|v| v.pop());
        assert_eq!(popped, Some(3));
        assert_eq!(store.read(|v| v.len()), 2);
    }
}
