use crate::event::{EventType, impl_event_data};
use core::ffi::c_void;
use sdl_events_sys::*;
use std::fmt::{Debug, Formatter};

/// An application-defined event, with a type in the [`EventType::USER`] range.
///
/// Types in that range should be reserved with
/// [`EventSubsystem::register_events`](crate::subsystem::EventSubsystem::register_events).
///
/// The two data pointers are opaque: they are carried as-is and never dereferenced.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct UserEvent {
    inner: SDL_UserEvent,
}

impl_event_data!(UserEvent, |event_type| event_type.is_user());

impl UserEvent {
    /// Creates a new user event with NULL data pointers.
    ///
    /// # Panics
    ///
    /// Panics if `event_type` is outside of the user event range.
    #[inline]
    pub const fn new(event_type: EventType, window_id: u32, code: i32) -> Self {
        assert!(event_type.is_user(), "Not a user event type");

        Self {
            inner: SDL_UserEvent {
                type_: event_type.to_raw(),
                timestamp: 0,
                windowID: window_id,
                code,
                data1: core::ptr::null_mut(),
                data2: core::ptr::null_mut(),
            },
        }
    }

    #[inline]
    pub const fn with_data(mut self, data1: *mut c_void, data2: *mut c_void) -> Self {
        self.inner.data1 = data1;
        self.inner.data2 = data2;
        self
    }

    #[inline]
    pub const fn window_id(&self) -> u32 {
        self.inner.windowID
    }

    #[inline]
    pub const fn code(&self) -> i32 {
        self.inner.code
    }

    #[inline]
    pub const fn data1(&self) -> *mut c_void {
        self.inner.data1
    }

    #[inline]
    pub const fn data2(&self) -> *mut c_void {
        self.inner.data2
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_UserEvent {
        &self.inner
    }
}

impl Debug for UserEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserEvent")
            .field("event_type", &EventType::from_raw(self.inner.type_))
            .field("timestamp", &self.inner.timestamp)
            .field("window_id", &self.inner.windowID)
            .field("code", &self.inner.code)
            .field("data1", &self.inner.data1)
            .field("data2", &self.inner.data2)
            .finish()
    }
}
