use crate::event::{EventType, impl_event_data};
use sdl_events_sys::SDL_CommonEvent;
use std::fmt::{Debug, Formatter};

/// The fields shared by every SDL event: its type and timestamp.
///
/// This is also the view used for events that carry no additional data (e.g. [`EventType::QUIT`]),
/// as well as for event types this crate doesn't know about.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct CommonEvent {
    inner: SDL_CommonEvent,
}

impl_event_data!(CommonEvent, |_event_type| true);

impl CommonEvent {
    /// Creates a new event of the given type, with no payload.
    ///
    /// SDL sets the timestamp itself when the event gets pushed.
    #[inline]
    pub const fn new(event_type: EventType) -> Self {
        Self {
            inner: SDL_CommonEvent {
                type_: event_type.to_raw(),
                timestamp: 0,
            },
        }
    }

    /// # Safety
    /// The given reference must be the start of a full `SDL_Event` union.
    #[inline]
    pub(crate) const unsafe fn from_raw_ref(raw: &SDL_CommonEvent) -> &Self {
        // SAFETY: CommonEvent is repr(transparent) and ABI compatible
        &*(raw as *const SDL_CommonEvent).cast::<Self>()
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_CommonEvent {
        &self.inner
    }

    #[inline]
    pub const fn event_type(&self) -> EventType {
        EventType::from_raw(self.inner.type_)
    }

    #[inline]
    pub const fn timestamp(&self) -> u32 {
        self.inner.timestamp
    }
}

impl Debug for CommonEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommonEvent")
            .field("event_type", &self.event_type())
            .field("timestamp", &self.inner.timestamp)
            .finish()
    }
}

/// Whether a key or a button was pressed or released.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ButtonState {
    Released,
    Pressed,
}

impl ButtonState {
    /// Any non-zero value is considered pressed.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        if raw == sdl_events_sys::SDL_RELEASED {
            Self::Released
        } else {
            Self::Pressed
        }
    }

    #[inline]
    pub const fn to_raw(self) -> u8 {
        match self {
            Self::Released => sdl_events_sys::SDL_RELEASED,
            Self::Pressed => sdl_events_sys::SDL_PRESSED,
        }
    }

    #[inline]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }
}
