use crate::event::{EventType, impl_event_data};
use sdl_events_sys::*;
use std::fmt::{Debug, Formatter};

/// A platform-specific window manager message.
///
/// These are only delivered if enabled with
/// [`EventSubsystem::event_state`](crate::subsystem::EventSubsystem::event_state). The message
/// itself is opaque, and is never dereferenced by this crate.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct SysWmEvent {
    inner: SDL_SysWMEvent,
}

impl_event_data!(SysWmEvent, |event_type| event_type == EventType::SYS_WM);

impl SysWmEvent {
    /// Creates a new event without any message attached.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: SDL_SysWMEvent {
                type_: SDL_SYSWMEVENT,
                timestamp: 0,
                msg: core::ptr::null_mut(),
            },
        }
    }

    /// A pointer to the platform's message, owned by SDL.
    #[inline]
    pub const fn msg(&self) -> *mut SDL_SysWMmsg {
        self.inner.msg
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_SysWMEvent {
        &self.inner
    }
}

impl Default for SysWmEvent {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for SysWmEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SysWmEvent")
            .field("timestamp", &self.inner.timestamp)
            .field("msg", &self.inner.msg)
            .finish()
    }
}
