use crate::event::{CommonEvent, Event, EventData, EventType};
use sdl_events_sys::{SDL_CommonEvent, SDL_EVENT_PADDING_SIZE, SDL_Event};
use std::fmt::{Debug, Formatter};

/// A raw, undecoded SDL event.
///
/// This is a fixed-size union of every event struct SDL knows about. Its size is identical for
/// every event type, which makes it safe to copy around and to reinterpret as any of the typed
/// views (see [`decode`](RawEvent::decode)).
///
/// The path held by a drop event is guaranteed to be either NULL or a valid C string: this is why
/// creating a `RawEvent` from arbitrary data is `unsafe`. Other pointers (user data, window manager
/// messages) are opaque and never dereferenced.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct RawEvent {
    inner: SDL_Event,
}

impl RawEvent {
    /// Creates a new event filled with zeroes, with an event type of [`EventType::FIRST`].
    #[inline]
    pub const fn zeroed() -> Self {
        Self {
            inner: SDL_Event {
                padding: [0; SDL_EVENT_PADDING_SIZE],
            },
        }
    }

    /// Creates a new event of the given type, with a zeroed payload.
    #[inline]
    pub fn new(event_type: EventType, timestamp: u32) -> Self {
        let mut raw = Self::zeroed();
        raw.inner.common = SDL_CommonEvent {
            type_: event_type.to_raw(),
            timestamp,
        };

        raw
    }

    /// Wraps a raw SDL event union.
    ///
    /// # Safety
    ///
    /// If the event is a drop event, its file pointer must be either NULL, or point to a valid C
    /// string for as long as this event (or any copy of it) is used.
    #[inline]
    pub const unsafe fn from_raw(raw: SDL_Event) -> Self {
        Self { inner: raw }
    }

    /// Reinterprets a pointer to an SDL event union coming from SDL.
    ///
    /// # Safety
    ///
    /// The pointer must be non-null, well-aligned, and point to a valid SDL event that outlives
    /// `'a`. The same requirements as [`from_raw`](Self::from_raw) also apply to its contents.
    #[inline]
    pub unsafe fn from_raw_ptr<'a>(raw: *const SDL_Event) -> &'a Self {
        // SAFETY: RawEvent is repr(transparent). The caller guarantees the pointer is valid.
        &*raw.cast::<Self>()
    }

    /// Copies a typed view into a new event, zero-padded to the full size of the union.
    #[inline]
    pub fn from_data<E: EventData>(data: &E) -> Self {
        let mut raw = Self::zeroed();

        // SAFETY: EventData guarantees E is a member of the SDL_Event union, thus smaller and less
        // aligned than it. A drop file pointer held by E is guaranteed to be valid by E itself.
        unsafe { raw.as_mut_ptr().cast::<E>().write(*data) };

        raw
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_Event {
        &self.inner
    }

    #[inline]
    pub const fn into_raw(self) -> SDL_Event {
        self.inner
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const SDL_Event {
        &self.inner
    }

    /// Returns a mutable pointer to the raw union, e.g. for SDL to write into.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut SDL_Event {
        &mut self.inner
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; SDL_EVENT_PADDING_SIZE] {
        // SAFETY: every bit pattern is a valid byte array.
        unsafe { &self.inner.padding }
    }

    #[inline]
    pub const fn common(&self) -> &CommonEvent {
        // SAFETY: every event starts with the common fields, and CommonEvent is repr(transparent)
        unsafe { CommonEvent::from_raw_ref(&self.inner.common) }
    }

    #[inline]
    pub const fn event_type(&self) -> EventType {
        self.common().event_type()
    }

    #[inline]
    pub const fn timestamp(&self) -> u32 {
        self.common().timestamp()
    }

    /// Decodes this event into its matching typed view, without copying it.
    ///
    /// This never fails: unknown event types decode into [`Event::Unknown`].
    #[inline]
    pub fn decode(&self) -> Event<'_> {
        Event::decode(self)
    }

    /// Returns this event as a specific typed view, if its type matches.
    #[inline]
    pub fn as_event<E: EventData>(&self) -> Option<&E> {
        if !E::accepts(self.event_type()) {
            return None;
        }

        // SAFETY: we just checked the event type matches.
        Some(unsafe { self.as_event_unchecked() })
    }

    /// Casts this event as an event of a given type, without performing any checks.
    ///
    /// # Safety
    /// The caller *must* ensure the event is of the given type, otherwise this will perform an
    /// incorrect cast, leading to Undefined Behavior.
    #[inline]
    pub unsafe fn as_event_unchecked<E: EventData>(&self) -> &E {
        &*(self as *const Self).cast::<E>()
    }
}

impl Default for RawEvent {
    #[inline]
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Debug for RawEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawEvent")
            .field("event_type", &self.event_type())
            .field("timestamp", &self.timestamp())
            .finish_non_exhaustive()
    }
}

// SAFETY: the only pointers an event holds are opaque to this crate, and never dereferenced,
// except for the dropped file path, which is immutable and handed over to the application.
unsafe impl Send for RawEvent {}
// SAFETY: see above.
unsafe impl Sync for RawEvent {}
