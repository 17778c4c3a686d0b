use crate::filter::{EventFilter, EventWatchHandle};
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Every predicate currently reachable from SDL through the trampolines.
///
/// Watches are keyed by the token that SDL hands back as its `userdata` pointer.
pub(crate) struct CallbackRegistry {
    filter: Option<Arc<dyn EventFilter>>,
    watches: BTreeMap<NonZeroUsize, Arc<dyn EventFilter>>,
    next_token: NonZeroUsize,
}

static REGISTRY: Mutex<CallbackRegistry> = Mutex::new(CallbackRegistry::new());

/// Serializes filter and watch transitions, so that the registry and SDL's own state change
/// together. Trampolines never take this lock.
static TRANSITIONS: Mutex<()> = Mutex::new(());

/// Locks the registry.
///
/// No predicate ever runs while this lock is held, so poisoning can only come from a bug in this
/// module. The registry's state is still consistent in that case.
pub(crate) fn registry() -> MutexGuard<'static, CallbackRegistry> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn lock_transitions() -> MutexGuard<'static, ()> {
    TRANSITIONS.lock().unwrap_or_else(PoisonError::into_inner)
}

impl CallbackRegistry {
    const fn new() -> Self {
        Self {
            filter: None,
            watches: BTreeMap::new(),
            next_token: NonZeroUsize::MIN,
        }
    }

    #[inline]
    pub fn filter(&self) -> Option<Arc<dyn EventFilter>> {
        self.filter.clone()
    }

    #[inline]
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Replaces the cached filter, returning the previous one.
    ///
    /// The returned predicate must be dropped after the registry lock is released.
    #[inline]
    pub fn replace_filter(
        &mut self,
        filter: Option<Arc<dyn EventFilter>>,
    ) -> Option<Arc<dyn EventFilter>> {
        core::mem::replace(&mut self.filter, filter)
    }

    pub fn insert_watch(&mut self, watch: Arc<dyn EventFilter>) -> EventWatchHandle {
        let token = self.next_token;
        self.next_token = token.saturating_add(1);

        self.watches.insert(token, watch);
        EventWatchHandle(token)
    }

    #[inline]
    pub fn watch(&self, token: usize) -> Option<Arc<dyn EventFilter>> {
        self.watches.get(&NonZeroUsize::new(token)?).cloned()
    }

    #[inline]
    pub fn contains_watch(&self, handle: EventWatchHandle) -> bool {
        self.watches.contains_key(&handle.0)
    }

    /// Removes a watch, returning it so it can be dropped after the registry lock is released.
    #[inline]
    pub fn remove_watch(&mut self, handle: EventWatchHandle) -> Option<Arc<dyn EventFilter>> {
        self.watches.remove(&handle.0)
    }

    #[inline]
    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    pub fn watch_handles(&self) -> Vec<EventWatchHandle> {
        self.watches.keys().copied().map(EventWatchHandle).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::Event;

    fn accept_all() -> Arc<dyn EventFilter> {
        Arc::new(|_: &Event<'_>| true)
    }

    #[test]
    fn tokens_are_never_reused() {
        let mut registry = CallbackRegistry::new();

        let first = registry.insert_watch(accept_all());
        assert!(registry.remove_watch(first).is_some());
        let second = registry.insert_watch(accept_all());

        assert_ne!(first, second);
        assert_eq!(first.token(), 1);
        assert_eq!(second.token(), 2);
        assert!(registry.watch(first.token()).is_none());
        assert!(registry.watch(second.token()).is_some());
    }

    #[test]
    fn zero_token_resolves_to_nothing() {
        let mut registry = CallbackRegistry::new();
        registry.insert_watch(accept_all());

        assert!(registry.watch(0).is_none());
        assert_eq!(registry.watch_count(), 1);
    }

    #[test]
    fn replacing_the_filter_returns_the_previous_one() {
        let mut registry = CallbackRegistry::new();
        assert!(!registry.has_filter());

        assert!(registry.replace_filter(Some(accept_all())).is_none());
        assert!(registry.has_filter());
        assert!(registry.replace_filter(None).is_some());
        assert!(registry.filter().is_none());
    }
}
