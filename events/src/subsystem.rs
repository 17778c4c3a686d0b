use crate::error::{EventError, last_error};
use crate::event::{DropEvent, EventType, RawEvent};
use core::ffi::{CStr, c_int};
use sdl_events_sys::*;
use std::ffi::CString;
use std::fmt::{Debug, Formatter};
use std::ops::RangeInclusive;
use std::time::Duration;

/// The outcome of a successful [`EventSubsystem::push_event`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PushStatus {
    /// The event was added to the queue.
    Queued,
    /// The event was dropped by the event filter, or its type is disabled.
    Filtered,
}

/// Whether events of a given type are processed or dropped.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EventState {
    /// Events of this type are dropped before reaching the queue.
    Ignore,
    /// Events of this type are queued normally.
    Enable,
}

impl EventState {
    #[inline]
    const fn to_raw(self) -> c_int {
        match self {
            Self::Ignore => SDL_IGNORE,
            Self::Enable => SDL_ENABLE,
        }
    }
}

/// A handle to SDL's event subsystem.
///
/// This is a thin, copyable wrapper around a table of SDL's event functions. It is usually
/// obtained from [`SdlLibrary::events`](crate::library::SdlLibrary::events), but can also be built
/// from any table implementing the same C API with [`from_raw`](Self::from_raw).
///
/// Following SDL's own rules, [`pump_events`](Self::pump_events), and the polling and waiting
/// functions must be called from the thread that initialized the video subsystem, if any. Pushing
/// events is allowed from any thread.
#[derive(Copy, Clone)]
pub struct EventSubsystem<'a> {
    pub(crate) functions: &'a SDL_EventFunctions,
}

impl<'a> EventSubsystem<'a> {
    /// Wraps a table of SDL event functions.
    ///
    /// # Safety
    ///
    /// Every function in the table must behave as specified by SDL2's C API, and SDL's event
    /// subsystem must stay initialized for as long as the returned handle is used.
    #[inline]
    pub const unsafe fn from_raw(functions: &'a SDL_EventFunctions) -> Self {
        Self { functions }
    }

    #[inline]
    pub const fn as_raw(&self) -> &'a SDL_EventFunctions {
        self.functions
    }

    /// Gathers pending input from devices and places it into the queue.
    ///
    /// [`poll_event`](Self::poll_event) and the waiting functions do this implicitly.
    #[inline]
    pub fn pump_events(&self) {
        // SAFETY: no special safety considerations
        unsafe { (self.functions.SDL_PumpEvents)() }
    }

    /// Appends the given events to the back of the queue, bypassing the filter and the watches.
    ///
    /// Returns the number of events that were added.
    pub fn add_events(&self, events: &[RawEvent]) -> Result<usize, EventError> {
        // SAFETY: SDL only reads from the given events when adding. RawEvent is repr(transparent)
        // over SDL_Event.
        unsafe {
            self.peep(
                events.as_ptr().cast::<SDL_Event>().cast_mut(),
                events.len(),
                SDL_ADDEVENT,
                &EventType::ALL,
            )
        }
    }

    /// Copies events from the front of the queue into `events`, without removing them.
    ///
    /// Only events whose type is in `types` are considered. Returns the number of events copied.
    pub fn peek_events(
        &self,
        events: &mut [RawEvent],
        types: RangeInclusive<EventType>,
    ) -> Result<usize, EventError> {
        // SAFETY: RawEvent is repr(transparent) over SDL_Event, and SDL only writes valid events.
        unsafe {
            self.peep(
                events.as_mut_ptr().cast(),
                events.len(),
                SDL_PEEKEVENT,
                &types,
            )
        }
    }

    /// Moves events from the front of the queue into `events`.
    ///
    /// Only events whose type is in `types` are considered. Returns the number of events moved.
    pub fn get_events(
        &self,
        events: &mut [RawEvent],
        types: RangeInclusive<EventType>,
    ) -> Result<usize, EventError> {
        // SAFETY: RawEvent is repr(transparent) over SDL_Event, and SDL only writes valid events.
        unsafe {
            self.peep(
                events.as_mut_ptr().cast(),
                events.len(),
                SDL_GETEVENT,
                &types,
            )
        }
    }

    /// Returns the number of queued events whose type is in `types`.
    pub fn count_events(&self, types: RangeInclusive<EventType>) -> Result<usize, EventError> {
        // SAFETY: with a NULL buffer, SDL only counts the matching events.
        unsafe { self.peep(core::ptr::null_mut(), 0, SDL_PEEKEVENT, &types) }
    }

    /// # Safety
    ///
    /// `events` must be valid for `len` reads (for adds) or writes (otherwise), or be NULL when
    /// counting.
    unsafe fn peep(
        &self,
        events: *mut SDL_Event,
        len: usize,
        action: SDL_eventaction,
        types: &RangeInclusive<EventType>,
    ) -> Result<usize, EventError> {
        let len = c_int::try_from(len).unwrap_or(c_int::MAX);

        let result = (self.functions.SDL_PeepEvents)(
            events,
            len,
            action,
            types.start().to_raw(),
            types.end().to_raw(),
        );

        usize::try_from(result).map_err(|_| EventError::native(self.functions, result))
    }

    /// Returns `true` if an event of the given type is in the queue.
    #[inline]
    pub fn has_event(&self, event_type: EventType) -> bool {
        // SAFETY: no special safety considerations
        unsafe { (self.functions.SDL_HasEvent)(event_type.to_raw()) == SDL_TRUE }
    }

    /// Returns `true` if any event whose type is in `types` is in the queue.
    #[inline]
    pub fn has_events(&self, types: RangeInclusive<EventType>) -> bool {
        // SAFETY: no special safety considerations
        unsafe {
            (self.functions.SDL_HasEvents)(types.start().to_raw(), types.end().to_raw()) == SDL_TRUE
        }
    }

    /// Removes every queued event of the given type.
    #[inline]
    pub fn flush_event(&self, event_type: EventType) {
        // SAFETY: no special safety considerations
        unsafe { (self.functions.SDL_FlushEvent)(event_type.to_raw()) }
    }

    /// Removes every queued event whose type is in `types`.
    #[inline]
    pub fn flush_events(&self, types: RangeInclusive<EventType>) {
        // SAFETY: no special safety considerations
        unsafe { (self.functions.SDL_FlushEvents)(types.start().to_raw(), types.end().to_raw()) }
    }

    /// Removes and returns the next event in the queue, if there is one.
    pub fn poll_event(&self) -> Option<RawEvent> {
        let mut event = RawEvent::zeroed();

        // SAFETY: the pointer is valid for writes, and SDL only writes valid events into it.
        let polled = unsafe { (self.functions.SDL_PollEvent)(event.as_mut_ptr()) };

        (polled == 1).then_some(event)
    }

    /// Returns an iterator that polls events until the queue is empty.
    #[inline]
    pub fn poll_iter(&self) -> PollIter<'a> {
        PollIter { subsystem: *self }
    }

    /// Blocks until an event is available, then removes and returns it.
    pub fn wait_event(&self) -> Result<RawEvent, EventError> {
        let mut event = RawEvent::zeroed();

        // SAFETY: the pointer is valid for writes, and SDL only writes valid events into it.
        let received = unsafe { (self.functions.SDL_WaitEvent)(event.as_mut_ptr()) };

        if received == 0 {
            return Err(EventError::WaitFailed(last_error(self.functions)));
        }

        Ok(event)
    }

    /// Blocks until an event is available or the timeout elapses.
    ///
    /// A zero timeout blocks indefinitely, like [`wait_event`](Self::wait_event). Non-zero
    /// timeouts are rounded down to whole milliseconds, but never below 1 millisecond. Returns
    /// `None` if the timeout elapsed, or if waiting failed.
    pub fn wait_event_timeout(&self, timeout: Duration) -> Option<RawEvent> {
        if timeout.is_zero() {
            return self.wait_event().ok();
        }

        let millis = c_int::try_from(timeout.as_millis().max(1)).unwrap_or(c_int::MAX);
        let mut event = RawEvent::zeroed();

        // SAFETY: the pointer is valid for writes, and SDL only writes valid events into it.
        let received =
            unsafe { (self.functions.SDL_WaitEventTimeout)(event.as_mut_ptr(), millis) };

        (received == 1).then_some(event)
    }

    /// Pushes an event into the queue, going through the event filter and the watches.
    ///
    /// The event's timestamp is set by SDL.
    pub fn push_event(&self, event: impl Into<RawEvent>) -> Result<PushStatus, EventError> {
        let mut event = event.into();

        // SAFETY: SDL copies the event, and doesn't keep the pointer.
        let result = unsafe { (self.functions.SDL_PushEvent)(event.as_mut_ptr()) };

        match result {
            1 => Ok(PushStatus::Queued),
            0 => Ok(PushStatus::Filtered),
            code => Err(EventError::native(self.functions, code)),
        }
    }

    /// Reserves `count` contiguous user event types.
    ///
    /// Returns the first one, or `None` if `count` is zero or if not enough types are left.
    pub fn register_events(&self, count: u32) -> Option<EventType> {
        let count = c_int::try_from(count).ok().filter(|c| *c > 0)?;

        // SAFETY: no special safety considerations
        let first = unsafe { (self.functions.SDL_RegisterEvents)(count) };

        if first == u32::MAX {
            tracing::debug!(count, "No user event types left to register");
            return None;
        }

        Some(EventType::from_raw(first))
    }

    /// Sets whether events of the given type are processed, returning whether they were enabled
    /// before the call.
    ///
    /// Ignoring a type also removes its events already in the queue.
    pub fn event_state(&self, event_type: EventType, state: EventState) -> bool {
        // SAFETY: no special safety considerations
        let previous =
            unsafe { (self.functions.SDL_EventState)(event_type.to_raw(), state.to_raw()) };

        previous != 0
    }

    /// Returns `true` if events of the given type are currently processed.
    pub fn is_event_enabled(&self, event_type: EventType) -> bool {
        // SAFETY: querying has no side effects
        let state = unsafe { (self.functions.SDL_EventState)(event_type.to_raw(), SDL_QUERY) };

        state != 0
    }

    /// Takes ownership of the path (or text) carried by a drop event, and releases SDL's
    /// allocation.
    ///
    /// Returns `None` if the event carries no path.
    ///
    /// # Safety
    ///
    /// The path must have been allocated by SDL (as is the case for any event that came out of the
    /// queue), and this must only be called once per dropped item. The event, and all of its
    /// copies, must not be used to access the path afterwards.
    pub unsafe fn take_drop_file(&self, event: &DropEvent) -> Option<CString> {
        let file = event.file_ptr();
        if file.is_null() {
            return None;
        }

        let owned = CStr::from_ptr(file).to_owned();
        (self.functions.SDL_free)(file.cast());

        Some(owned)
    }
}

impl Debug for EventSubsystem<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSubsystem").finish_non_exhaustive()
    }
}

/// An iterator over the currently queued events.
///
/// See [`EventSubsystem::poll_iter`].
pub struct PollIter<'a> {
    subsystem: EventSubsystem<'a>,
}

impl Iterator for PollIter<'_> {
    type Item = RawEvent;

    #[inline]
    fn next(&mut self) -> Option<RawEvent> {
        self.subsystem.poll_event()
    }
}
