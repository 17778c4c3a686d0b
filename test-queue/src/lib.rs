//! An in-process emulation of SDL2's event queue, for testing.
//!
//! [`TestQueue`] exposes a [`SDL_EventFunctions`] table whose functions behave like SDL2's own
//! (filters, watches, peeping, waiting, user event registration...), without needing any SDL2
//! library or video backend. It also records how many times the native-side callback functions
//! were called, so tests can check exactly which SDL calls were made.
//!
//! The emulated queue is process-wide, like SDL's. A [`TestQueue`] guard holds it exclusively, so
//! tests using it run one after another.

use sdl_events_sys::{SDL_Event, SDL_EventFunctions};
use std::ffi::CString;
use std::sync::{Mutex, MutexGuard, PoisonError};

mod functions;
mod state;

use state::{event_type, state};

pub use state::{CallStats, MAX_QUEUED_EVENTS};

static SERIAL: Mutex<()> = Mutex::new(());

/// Exclusive access to the emulated event queue.
///
/// The queue is reset both when the guard is acquired and when it is dropped.
pub struct TestQueue {
    _serial: MutexGuard<'static, ()>,
}

impl TestQueue {
    /// Acquires the emulated queue, waiting for any other test to release it first.
    pub fn acquire() -> Self {
        let serial = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
        state().reset();

        Self { _serial: serial }
    }

    /// The function table of the emulated queue.
    #[inline]
    pub fn functions(&self) -> &'static SDL_EventFunctions {
        &functions::FUNCTIONS
    }

    pub fn stats(&self) -> CallStats {
        state().stats
    }

    pub fn reset_stats(&self) {
        state().stats = CallStats::default();
    }

    /// The number of events currently in the queue.
    pub fn len(&self) -> usize {
        state().events.len()
    }

    pub fn is_empty(&self) -> bool {
        state().events.is_empty()
    }

    /// The types of all the queued events, front to back.
    pub fn queued_types(&self) -> Vec<u32> {
        state().events.iter().map(event_type).collect()
    }

    /// Appends an event to the queue directly, as SDL's own input backends do.
    ///
    /// Unlike `SDL_PushEvent`, this bypasses the event filter, watches and disabled types. The
    /// event's timestamp is overwritten.
    ///
    /// # Panics
    ///
    /// If the queue is full.
    pub fn inject(&self, mut event: SDL_Event) {
        let mut state = state();

        // SAFETY: every event starts with the common header.
        let mut common = unsafe { event.common };
        common.timestamp = state.next_timestamp();
        event.common = common;

        assert!(state.enqueue(event), "Emulated event queue is full");
    }

    /// Allocates a NUL-terminated copy of `path`, to be used as a drop event's file.
    ///
    /// The allocation must be released through `SDL_free`. Leftovers are released when the queue
    /// is reset.
    ///
    /// # Panics
    ///
    /// If `path` contains a NUL byte.
    pub fn allocate_drop_file(&self, path: &str) -> *mut core::ffi::c_char {
        let ptr = CString::new(path).unwrap().into_raw();
        state().allocations.insert(ptr.addr(), ptr);
        ptr
    }

    /// The number of drop file allocations not released yet.
    pub fn live_allocations(&self) -> usize {
        state().allocations.len()
    }

    /// The number of `SDL_free` calls on pointers that were not allocated by this queue (or were
    /// already freed).
    pub fn invalid_frees(&self) -> usize {
        state().invalid_frees
    }

    /// Makes the next fallible queue operation fail, with the given error message.
    ///
    /// This affects `SDL_PeepEvents`, `SDL_PushEvent` and `SDL_WaitEventTimeout` (and
    /// `SDL_WaitEvent`).
    pub fn fail_next_call(&self, message: &str) {
        state().pending_failure = Some(message.to_owned());
    }

    /// Whether a native event filter is currently set.
    pub fn has_native_filter(&self) -> bool {
        state().filter.is_some()
    }

    /// The number of native event watches currently registered.
    pub fn native_watch_count(&self) -> usize {
        state().watches.len()
    }
}

impl Drop for TestQueue {
    fn drop(&mut self) {
        state().reset();
    }
}
