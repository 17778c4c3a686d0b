//! Event filters and event watches.
//!
//! SDL lets an application observe events as they are pushed into the queue, through two kinds of
//! callbacks:
//!
//! * A single global *filter*, which decides whether each event gets queued at all
//!   ([`EventSubsystem::set_filter_fn`]);
//! * Any number of *watches*, which see every event that makes it through the filter, but cannot
//!   drop it ([`EventSubsystem::add_watch`]).
//!
//! Both are implemented with the [`EventFilter`] trait, which is implemented for any matching
//! closure. SDL calls them back on whichever thread pushes the event, which is why they must be
//! both [`Send`] and [`Sync`].
//!
//! A predicate may call back into this module (e.g. to remove its own watch), but it must not
//! panic: a panic crashes the process.

use crate::event::{Event, RawEvent};
use crate::subsystem::EventSubsystem;
use core::ffi::{c_int, c_void};
use sdl_events_sys::{SDL_Event, SDL_EventFilter, SDL_FALSE, SDL_TRUE};
use std::fmt::{Debug, Formatter};
use std::num::NonZeroUsize;
use std::sync::Arc;

mod registry;

use registry::{lock_transitions, registry};

/// A predicate over events, used both as the global event filter and as an event watch.
pub trait EventFilter: Send + Sync + 'static {
    /// Returns `true` to keep the event.
    ///
    /// When used as a watch, the return value is ignored.
    fn filter_event(&self, event: &Event<'_>) -> bool;
}

impl<F> EventFilter for F
where
    F: Fn(&Event<'_>) -> bool + Send + Sync + 'static,
{
    #[inline]
    fn filter_event(&self, event: &Event<'_>) -> bool {
        self(event)
    }
}

/// An opaque handle to a registered event watch.
///
/// Handles are never reused, so a stale handle cannot remove another watch.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EventWatchHandle(NonZeroUsize);

impl EventWatchHandle {
    /// The token passed to SDL as this watch's `userdata`.
    #[inline]
    pub const fn token(self) -> usize {
        self.0.get()
    }
}

impl Debug for EventWatchHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "EventWatchHandle({})", self.0)
    }
}

#[inline]
fn to_sdl_bool(keep: bool) -> c_int {
    if keep { SDL_TRUE } else { SDL_FALSE }
}

/// # Safety
///
/// `event` must point to a valid SDL event for the duration of the call.
unsafe fn run_predicate(filter: &dyn EventFilter, event: *mut SDL_Event) -> c_int {
    let raw = RawEvent::from_raw_ptr(event);
    to_sdl_bool(filter.filter_event(&raw.decode()))
}

unsafe extern "C" fn filter_trampoline(_userdata: *mut c_void, event: *mut SDL_Event) -> c_int {
    // The lock is released before the predicate runs.
    let filter = registry().filter();
    let filter = filter.expect("SDL called the event filter while none was registered");

    // SAFETY: SDL passes a valid event pointer for the duration of the callback.
    unsafe { run_predicate(&*filter, event) }
}

unsafe extern "C" fn watch_trampoline(userdata: *mut c_void, event: *mut SDL_Event) -> c_int {
    let watch = registry().watch(userdata.addr());
    let watch = watch.expect("SDL called an event watch that is not registered");

    // SAFETY: SDL passes a valid event pointer for the duration of the callback.
    unsafe { run_predicate(&*watch, event) }
}

type FilterEventsPredicate<'a> = &'a mut dyn FnMut(&Event<'_>) -> bool;

unsafe extern "C" fn filter_events_trampoline(
    userdata: *mut c_void,
    event: *mut SDL_Event,
) -> c_int {
    // SAFETY: userdata points to the predicate on filter_existing_events's stack, which is alive
    // and exclusively borrowed for the whole SDL_FilterEvents call.
    let predicate = unsafe { &mut *userdata.cast::<FilterEventsPredicate>() };
    // SAFETY: SDL passes a valid event pointer for the duration of the callback.
    let raw = unsafe { RawEvent::from_raw_ptr(event) };

    to_sdl_bool(predicate(&raw.decode()))
}

const FILTER_TRAMPOLINE: SDL_EventFilter = Some(filter_trampoline);
const WATCH_TRAMPOLINE: SDL_EventFilter = Some(watch_trampoline);

impl EventSubsystem<'_> {
    /// Sets, replaces or removes the global event filter.
    ///
    /// The filter is called for every event pushed into the queue, and the event is dropped if it
    /// returns `false`. Setting a filter when none was set discards all pending events.
    ///
    /// Replacing a filter with another one doesn't involve SDL at all: only the first filter arms
    /// SDL's callback, and only removing the last one disarms it.
    pub fn set_filter(&self, filter: Option<Arc<dyn EventFilter>>) {
        let _transition = lock_transitions();
        let was_set = registry().has_filter();

        let previous = match (was_set, filter) {
            (false, None) => None,
            (false, Some(filter)) => {
                // The predicate must be reachable before SDL can call the trampoline.
                let previous = registry().replace_filter(Some(filter));

                tracing::debug!("Arming the native event filter");
                // SAFETY: the trampoline only relies on the registry, which is populated.
                unsafe {
                    (self.functions.SDL_SetEventFilter)(FILTER_TRAMPOLINE, core::ptr::null_mut())
                };

                previous
            }
            (true, None) => {
                tracing::debug!("Disarming the native event filter");
                // SAFETY: clearing the filter has no preconditions.
                unsafe { (self.functions.SDL_SetEventFilter)(None, core::ptr::null_mut()) };

                registry().replace_filter(None)
            }
            (true, Some(filter)) => registry().replace_filter(Some(filter)),
        };

        // Dropped outside the registry lock, in case the predicate's destructor re-enters.
        drop(previous);
    }

    /// Sets or replaces the global event filter with the given predicate.
    ///
    /// See [`set_filter`](Self::set_filter).
    #[inline]
    pub fn set_filter_fn(&self, filter: impl EventFilter) {
        self.set_filter(Some(Arc::new(filter)))
    }

    /// Removes the global event filter, if any.
    #[inline]
    pub fn clear_filter(&self) {
        self.set_filter(None)
    }

    /// Returns the current global event filter, as last set through this crate.
    #[inline]
    pub fn filter(&self) -> Option<Arc<dyn EventFilter>> {
        registry().filter()
    }

    /// Returns `true` if SDL currently has a native event filter set.
    pub fn is_native_filter_set(&self) -> bool {
        let mut filter: SDL_EventFilter = None;
        let mut userdata = core::ptr::null_mut();

        // SAFETY: both pointers are valid for writes.
        unsafe { (self.functions.SDL_GetEventFilter)(&mut filter, &mut userdata) == SDL_TRUE }
    }

    /// Runs the given predicate on every event currently in the queue, and removes those it
    /// returns `false` for.
    ///
    /// The predicate is only used for the duration of this call, so it can borrow local state.
    pub fn filter_existing_events<F: FnMut(&Event<'_>) -> bool>(&self, mut predicate: F) {
        let mut predicate: FilterEventsPredicate = &mut predicate;
        let userdata = (&raw mut predicate).cast::<c_void>();

        // SAFETY: SDL only calls the trampoline synchronously during this call, while the
        // predicate is still alive on this stack.
        unsafe { (self.functions.SDL_FilterEvents)(Some(filter_events_trampoline), userdata) };
    }

    /// Adds an event watch, which gets called for every event added to the queue.
    pub fn add_watch(&self, watch: impl EventFilter) -> EventWatchHandle {
        self.add_watch_arc(Arc::new(watch))
    }

    /// Same as [`add_watch`](Self::add_watch), for an already shared predicate.
    pub fn add_watch_arc(&self, watch: Arc<dyn EventFilter>) -> EventWatchHandle {
        let _transition = lock_transitions();
        let handle = registry().insert_watch(watch);

        tracing::debug!(token = handle.token(), "Adding an event watch");

        // SAFETY: the watch was registered before the trampoline can be called with its token.
        unsafe {
            (self.functions.SDL_AddEventWatch)(
                WATCH_TRAMPOLINE,
                core::ptr::without_provenance_mut(handle.token()),
            )
        };

        handle
    }

    /// Removes an event watch. This does nothing if the watch was already removed.
    pub fn remove_watch(&self, handle: EventWatchHandle) {
        let _transition = lock_transitions();
        if !registry().contains_watch(handle) {
            return;
        }

        tracing::debug!(token = handle.token(), "Removing an event watch");

        // SAFETY: the matching entry is still registered while SDL removes it.
        unsafe {
            (self.functions.SDL_DelEventWatch)(
                WATCH_TRAMPOLINE,
                core::ptr::without_provenance_mut(handle.token()),
            )
        };

        let watch = registry().remove_watch(handle);
        drop(watch);
    }

    /// The number of watches currently registered through this crate.
    #[inline]
    pub fn watch_count(&self) -> usize {
        registry().watch_count()
    }

    /// Removes the global event filter and every event watch registered through this crate.
    ///
    /// Watches added directly through SDL are left alone.
    pub fn clear_callbacks(&self) {
        self.clear_filter();

        let handles = registry().watch_handles();
        for handle in handles {
            self.remove_watch(handle);
        }
    }
}
