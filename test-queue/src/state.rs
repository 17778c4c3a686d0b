use core::ffi::{c_char, c_int, c_void};
use sdl_events_sys::*;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::ffi::CString;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// SDL2's hard limit on the number of queued events.
pub const MAX_QUEUED_EVENTS: usize = 65535;

pub(crate) type Callback = unsafe extern "C" fn(*mut c_void, *mut SDL_Event) -> c_int;

#[derive(Copy, Clone)]
pub(crate) struct RegisteredCallback {
    pub callback: Callback,
    pub userdata: *mut c_void,
}

impl RegisteredCallback {
    #[inline]
    pub fn matches(&self, callback: Callback, userdata: *mut c_void) -> bool {
        core::ptr::fn_addr_eq(self.callback, callback) && self.userdata == userdata
    }

    /// # Safety
    ///
    /// The callback must be safe to call with its userdata and the given event.
    #[inline]
    pub unsafe fn call(&self, event: &mut SDL_Event) -> bool {
        (self.callback)(self.userdata, event) != 0
    }
}

/// How many times the native-side callback functions were called.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub struct CallStats {
    /// Calls to `SDL_SetEventFilter` with a filter.
    pub filter_arms: usize,
    /// Calls to `SDL_SetEventFilter` with a NULL filter.
    pub filter_disarms: usize,
    pub watch_adds: usize,
    pub watch_dels: usize,
    pub filter_events_calls: usize,
    pub pumps: usize,
    pub frees: usize,
    pub subsystem_inits: usize,
    pub subsystem_quits: usize,
}

impl CallStats {
    const ZERO: Self = Self {
        filter_arms: 0,
        filter_disarms: 0,
        watch_adds: 0,
        watch_dels: 0,
        filter_events_calls: 0,
        pumps: 0,
        frees: 0,
        subsystem_inits: 0,
        subsystem_quits: 0,
    };
}

pub(crate) struct QueueState {
    pub events: VecDeque<SDL_Event>,
    pub filter: Option<RegisteredCallback>,
    pub watches: Vec<RegisteredCallback>,
    pub disabled: BTreeSet<u32>,
    pub next_user_event: u32,
    pub ticks: u32,
    pub stats: CallStats,
    pub allocations: BTreeMap<usize, *mut c_char>,
    pub invalid_frees: usize,
    pub pending_failure: Option<String>,
    pub error: Option<CString>,
}

// SAFETY: the raw pointers held here are either callback userdata, which is only ever handed back
// to its callback, or drop file allocations, which are only freed through this state's lock.
unsafe impl Send for QueueState {}

pub(crate) static STATE: Mutex<QueueState> = Mutex::new(QueueState::new());
pub(crate) static EVENT_ADDED: Condvar = Condvar::new();

pub(crate) fn state() -> MutexGuard<'static, QueueState> {
    STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

impl QueueState {
    const fn new() -> Self {
        Self {
            events: VecDeque::new(),
            filter: None,
            watches: Vec::new(),
            disabled: BTreeSet::new(),
            next_user_event: SDL_USEREVENT,
            ticks: 0,
            stats: CallStats::ZERO,
            allocations: BTreeMap::new(),
            invalid_frees: 0,
            pending_failure: None,
            error: None,
        }
    }

    /// Resets everything, releasing any leftover drop file allocation.
    pub fn reset(&mut self) {
        let allocations = core::mem::take(&mut self.allocations);
        for ptr in allocations.into_values() {
            // SAFETY: every tracked allocation comes from CString::into_raw, and is only freed
            // once.
            drop(unsafe { CString::from_raw(ptr) });
        }

        *self = Self::new();
    }

    pub fn set_error(&mut self, message: &str) {
        self.error = Some(CString::new(message).unwrap_or_default());
    }

    /// Consumes a failure requested by the test, setting it as SDL's error.
    pub fn take_failure(&mut self) -> bool {
        match self.pending_failure.take() {
            Some(message) => {
                self.set_error(&message);
                true
            }
            None => false,
        }
    }

    pub fn next_timestamp(&mut self) -> u32 {
        self.ticks = self.ticks.wrapping_add(1);
        self.ticks
    }

    /// Adds an event at the back of the queue. Returns `false` if the queue is full.
    pub fn enqueue(&mut self, event: SDL_Event) -> bool {
        if self.events.len() >= MAX_QUEUED_EVENTS {
            self.set_error("Event queue is full");
            return false;
        }

        self.events.push_back(event);
        EVENT_ADDED.notify_all();
        true
    }

    pub fn flush(&mut self, min_type: u32, max_type: u32) {
        self.events.retain(|e| !in_range(event_type(e), min_type, max_type));
    }
}

#[inline]
pub(crate) fn event_type(event: &SDL_Event) -> u32 {
    // SAFETY: every event starts with its type.
    unsafe { event.type_ }
}

#[inline]
pub(crate) fn in_range(event_type: u32, min_type: u32, max_type: u32) -> bool {
    (min_type..=max_type).contains(&event_type)
}
