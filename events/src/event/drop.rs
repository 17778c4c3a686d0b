use crate::event::{EventType, impl_event_data};
use core::ffi::{CStr, c_char};
use sdl_events_sys::*;
use std::fmt::{Debug, Formatter};

/// A file or some text being dropped onto a window.
///
/// [`EventType::DROP_FILE`] and [`EventType::DROP_TEXT`] events carry a path (or text) allocated
/// by SDL. This view only ever borrows it: see
/// [`EventSubsystem::take_drop_file`](crate::subsystem::EventSubsystem::take_drop_file) to take
/// ownership of it and release SDL's allocation.
///
/// [`EventType::DROP_BEGIN`] and [`EventType::DROP_COMPLETE`] bracket a multi-item drop, and carry
/// no path.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct DropEvent {
    inner: SDL_DropEvent,
}

impl_event_data!(DropEvent, |event_type| matches!(
    event_type,
    EventType::DROP_FILE | EventType::DROP_TEXT | EventType::DROP_BEGIN | EventType::DROP_COMPLETE
));

impl DropEvent {
    /// Creates a new drop event without any file.
    ///
    /// # Panics
    ///
    /// Panics if `event_type` isn't a drop event type.
    #[inline]
    pub const fn new(event_type: EventType, window_id: u32) -> Self {
        assert!(
            matches!(
                event_type.to_raw(),
                SDL_DROPFILE | SDL_DROPTEXT | SDL_DROPBEGIN | SDL_DROPCOMPLETE
            ),
            "Not a drop event type"
        );

        Self {
            inner: SDL_DropEvent {
                type_: event_type.to_raw(),
                timestamp: 0,
                file: core::ptr::null_mut(),
                windowID: window_id,
                tail_padding: [0; DROP_TAIL_PADDING],
            },
        }
    }

    /// Creates a new drop event holding the given file path or text.
    ///
    /// # Safety
    ///
    /// `file` must be either NULL, or point to a valid, NUL-terminated C string. That string must
    /// stay valid for as long as this event, or any copy of it (including the ones pushed into the
    /// queue), is used.
    ///
    /// If the event is meant to be consumed with
    /// [`take_drop_file`](crate::subsystem::EventSubsystem::take_drop_file), the string must also
    /// have been allocated by SDL.
    ///
    /// # Panics
    ///
    /// Panics if `event_type` isn't a drop event type.
    #[inline]
    pub const unsafe fn with_file(
        event_type: EventType,
        file: *mut c_char,
        window_id: u32,
    ) -> Self {
        let mut event = Self::new(event_type, window_id);
        event.inner.file = file;
        event
    }

    /// The dropped path or text, if this event carries any.
    #[inline]
    pub fn file(&self) -> Option<&CStr> {
        if self.inner.file.is_null() {
            return None;
        }

        // SAFETY: a non-null file pointer can only come from SDL or from `with_file`, which both
        // guarantee it points to a valid C string for this event's lifetime.
        Some(unsafe { CStr::from_ptr(self.inner.file) })
    }

    /// The raw pointer to SDL's allocation. It is never dereferenced nor freed by this view.
    #[inline]
    pub const fn file_ptr(&self) -> *mut c_char {
        self.inner.file
    }

    /// The window the item was dropped on, or 0 if it is unknown.
    #[inline]
    pub const fn window_id(&self) -> u32 {
        self.inner.windowID
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_DropEvent {
        &self.inner
    }
}

impl Debug for DropEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropEvent")
            .field("event_type", &EventType::from_raw(self.inner.type_))
            .field("timestamp", &self.inner.timestamp)
            .field("file", &self.file())
            .field("window_id", &self.inner.windowID)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::{Event, EventData};

    #[test]
    fn encoded_bytes_are_all_initialized() {
        let raw = DropEvent::new(EventType::DROP_BEGIN, 3).to_raw();
        let bytes = raw.as_bytes();
        let window_offset = 8 + size_of::<*mut c_char>();

        assert_eq!(bytes[..4], SDL_DROPBEGIN.to_ne_bytes());
        assert!(bytes[4..window_offset].iter().all(|b| *b == 0));
        assert_eq!(bytes[window_offset..window_offset + 4], 3u32.to_ne_bytes());
        assert!(bytes[window_offset + 4..].iter().all(|b| *b == 0));
    }

    #[test]
    fn begin_and_complete_carry_no_file() {
        for ty in [EventType::DROP_BEGIN, EventType::DROP_COMPLETE] {
            let raw = DropEvent::new(ty, 3).to_raw();

            let Event::Drop(drop) = raw.decode() else {
                panic!("expected a drop event")
            };
            assert!(drop.file().is_none());
            assert_eq!(drop.window_id(), 3);
        }
    }

    #[test]
    fn file_is_borrowed_from_the_payload() {
        let mut path = *b"/tmp/dropped.txt\0";
        // SAFETY: the path outlives every use of the event below.
        let raw = unsafe {
            DropEvent::with_file(EventType::DROP_FILE, path.as_mut_ptr().cast(), 1).to_raw()
        };

        let drop = raw.as_event::<DropEvent>().unwrap();
        assert_eq!(drop.file(), Some(c"/tmp/dropped.txt"));
        assert_eq!(drop.file_ptr().cast_const(), path.as_ptr().cast::<c_char>());
    }

    #[test]
    #[should_panic]
    fn rejects_non_drop_types() {
        let _ = DropEvent::new(EventType::QUIT, 0);
    }
}
