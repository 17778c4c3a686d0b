use crate::event::{EventType, impl_event_data};
use sdl_events_sys::*;
use std::fmt::{Debug, Formatter};

/// Which change to a window a [`WindowEvent`] is reporting.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct WindowEventId(pub u8);

impl WindowEventId {
    pub const NONE: Self = Self(SDL_WINDOWEVENT_NONE);
    pub const SHOWN: Self = Self(SDL_WINDOWEVENT_SHOWN);
    pub const HIDDEN: Self = Self(SDL_WINDOWEVENT_HIDDEN);
    pub const EXPOSED: Self = Self(SDL_WINDOWEVENT_EXPOSED);
    /// The window moved to (`data1`, `data2`).
    pub const MOVED: Self = Self(SDL_WINDOWEVENT_MOVED);
    /// The window was resized to (`data1`, `data2`).
    pub const RESIZED: Self = Self(SDL_WINDOWEVENT_RESIZED);
    pub const SIZE_CHANGED: Self = Self(SDL_WINDOWEVENT_SIZE_CHANGED);
    pub const MINIMIZED: Self = Self(SDL_WINDOWEVENT_MINIMIZED);
    pub const MAXIMIZED: Self = Self(SDL_WINDOWEVENT_MAXIMIZED);
    pub const RESTORED: Self = Self(SDL_WINDOWEVENT_RESTORED);
    pub const ENTER: Self = Self(SDL_WINDOWEVENT_ENTER);
    pub const LEAVE: Self = Self(SDL_WINDOWEVENT_LEAVE);
    pub const FOCUS_GAINED: Self = Self(SDL_WINDOWEVENT_FOCUS_GAINED);
    pub const FOCUS_LOST: Self = Self(SDL_WINDOWEVENT_FOCUS_LOST);
    pub const CLOSE: Self = Self(SDL_WINDOWEVENT_CLOSE);
    pub const TAKE_FOCUS: Self = Self(SDL_WINDOWEVENT_TAKE_FOCUS);
    pub const HIT_TEST: Self = Self(SDL_WINDOWEVENT_HIT_TEST);
    pub const ICC_PROFILE_CHANGED: Self = Self(SDL_WINDOWEVENT_ICCPROF_CHANGED);
    /// The window moved to the display at index `data1`.
    pub const DISPLAY_CHANGED: Self = Self(SDL_WINDOWEVENT_DISPLAY_CHANGED);
}

/// A change in a window's state.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct WindowEvent {
    inner: SDL_WindowEvent,
}

impl_event_data!(WindowEvent, |event_type| event_type == EventType::WINDOW);

impl WindowEvent {
    #[inline]
    pub const fn new(window_id: u32, event: WindowEventId, data1: i32, data2: i32) -> Self {
        Self {
            inner: SDL_WindowEvent {
                type_: SDL_WINDOWEVENT,
                timestamp: 0,
                windowID: window_id,
                event: event.0,
                padding1: 0,
                padding2: 0,
                padding3: 0,
                data1,
                data2,
            },
        }
    }

    #[inline]
    pub const fn window_id(&self) -> u32 {
        self.inner.windowID
    }

    #[inline]
    pub const fn event(&self) -> WindowEventId {
        WindowEventId(self.inner.event)
    }

    #[inline]
    pub const fn data1(&self) -> i32 {
        self.inner.data1
    }

    #[inline]
    pub const fn data2(&self) -> i32 {
        self.inner.data2
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_WindowEvent {
        &self.inner
    }
}

impl Debug for WindowEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowEvent")
            .field("timestamp", &self.inner.timestamp)
            .field("window_id", &self.inner.windowID)
            .field("event", &self.event())
            .field("data1", &self.inner.data1)
            .field("data2", &self.inner.data2)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::{Event, EventData};

    #[test]
    fn window_fields_land_at_their_offsets() {
        let raw = WindowEvent::new(3, WindowEventId::RESIZED, 800, -600).to_raw();
        let bytes = raw.as_bytes();

        assert_eq!(bytes[0..4], SDL_WINDOWEVENT.to_ne_bytes());
        assert_eq!(bytes[8..12], 3u32.to_ne_bytes());
        assert_eq!(bytes[12], SDL_WINDOWEVENT_RESIZED);
        assert_eq!(bytes[16..20], 800i32.to_ne_bytes());
        assert_eq!(bytes[20..24], (-600i32).to_ne_bytes());

        let Event::Window(window) = raw.decode() else {
            panic!("expected a window event")
        };
        assert_eq!(window.window_id(), 3);
        assert_eq!(window.event(), WindowEventId::RESIZED);
        assert_eq!((window.data1(), window.data2()), (800, -600));
    }
}
