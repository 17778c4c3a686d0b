use crate::event::{ButtonState, EventType, impl_event_data};
use bitflags::bitflags;
use core::ffi::c_char;
use sdl_events_sys::*;
use std::fmt::{Debug, Formatter};

/// A physical key location, independent of the current keyboard layout.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Scancode(pub i32);

impl Scancode {
    pub const UNKNOWN: Self = Self(0);
    pub const A: Self = Self(4);
    pub const RETURN: Self = Self(40);
    pub const ESCAPE: Self = Self(41);
    pub const BACKSPACE: Self = Self(42);
    pub const TAB: Self = Self(43);
    pub const SPACE: Self = Self(44);
}

/// A virtual key, as interpreted by the current keyboard layout.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Keycode(pub i32);

impl Keycode {
    pub const UNKNOWN: Self = Self(0);
    pub const RETURN: Self = Self(b'\r' as i32);
    pub const ESCAPE: Self = Self(0x1B);
    pub const BACKSPACE: Self = Self(0x08);
    pub const TAB: Self = Self(b'\t' as i32);
    pub const SPACE: Self = Self(b' ' as i32);
    pub const A: Self = Self(b'a' as i32);

    /// Returns the keycode SDL uses for keys that have no character representation.
    #[inline]
    pub const fn from_scancode(scancode: Scancode) -> Self {
        Self(scancode.0 | SDLK_SCANCODE_MASK)
    }
}

bitflags! {
    /// Modifier keys that were held down when a key event occurred.
    #[repr(C)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Keymod: u16 {
        const LSHIFT = KMOD_LSHIFT;
        const RSHIFT = KMOD_RSHIFT;
        const LCTRL = KMOD_LCTRL;
        const RCTRL = KMOD_RCTRL;
        const LALT = KMOD_LALT;
        const RALT = KMOD_RALT;
        const LGUI = KMOD_LGUI;
        const RGUI = KMOD_RGUI;
        const NUM = KMOD_NUM;
        const CAPS = KMOD_CAPS;
        const MODE = KMOD_MODE;
        const SCROLL = KMOD_SCROLL;

        const SHIFT = KMOD_LSHIFT | KMOD_RSHIFT;
        const CTRL = KMOD_LCTRL | KMOD_RCTRL;
        const ALT = KMOD_LALT | KMOD_RALT;
        const GUI = KMOD_LGUI | KMOD_RGUI;
    }
}

/// The key involved in a [`KeyboardEvent`].
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct Keysym {
    inner: SDL_Keysym,
}

impl Keysym {
    #[inline]
    pub const fn new(scancode: Scancode, keycode: Keycode, keymod: Keymod) -> Self {
        Self {
            inner: SDL_Keysym {
                scancode: scancode.0,
                sym: keycode.0,
                mod_: keymod.bits(),
                padding: 0,
                unused: 0,
            },
        }
    }

    #[inline]
    pub const fn scancode(&self) -> Scancode {
        Scancode(self.inner.scancode)
    }

    #[inline]
    pub const fn keycode(&self) -> Keycode {
        Keycode(self.inner.sym)
    }

    #[inline]
    pub const fn keymod(&self) -> Keymod {
        Keymod::from_bits_retain(self.inner.mod_)
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_Keysym {
        &self.inner
    }
}

impl Debug for Keysym {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keysym")
            .field("scancode", &self.scancode())
            .field("keycode", &self.keycode())
            .field("keymod", &self.keymod())
            .finish()
    }
}

/// A key press or release.
///
/// Key presses ([`EventType::KEY_DOWN`]) and releases ([`EventType::KEY_UP`]) share the same
/// layout, and are only told apart by their event type.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct KeyboardEvent {
    inner: SDL_KeyboardEvent,
}

impl_event_data!(KeyboardEvent, |event_type| matches!(
    event_type,
    EventType::KEY_DOWN | EventType::KEY_UP
));

impl KeyboardEvent {
    /// Creates a new key event. Its type is [`EventType::KEY_DOWN`] if `state` is pressed, and
    /// [`EventType::KEY_UP`] otherwise.
    #[inline]
    pub const fn new(window_id: u32, state: ButtonState, repeat: bool, keysym: Keysym) -> Self {
        Self {
            inner: SDL_KeyboardEvent {
                type_: if state.is_pressed() {
                    SDL_KEYDOWN
                } else {
                    SDL_KEYUP
                },
                timestamp: 0,
                windowID: window_id,
                state: state.to_raw(),
                repeat: repeat as u8,
                padding2: 0,
                padding3: 0,
                keysym: keysym.inner,
            },
        }
    }

    #[inline]
    pub const fn window_id(&self) -> u32 {
        self.inner.windowID
    }

    #[inline]
    pub const fn state(&self) -> ButtonState {
        ButtonState::from_raw(self.inner.state)
    }

    /// Returns `true` if this is a key repeat, i.e. the key was already held down.
    #[inline]
    pub const fn is_repeat(&self) -> bool {
        self.inner.repeat != 0
    }

    #[inline]
    pub const fn keysym(&self) -> Keysym {
        Keysym {
            inner: self.inner.keysym,
        }
    }

    #[inline]
    pub const fn is_key_up(&self) -> bool {
        self.inner.type_ == SDL_KEYUP
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_KeyboardEvent {
        &self.inner
    }
}

impl Debug for KeyboardEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyboardEvent")
            .field("event_type", &EventType::from_raw(self.inner.type_))
            .field("timestamp", &self.inner.timestamp)
            .field("window_id", &self.inner.windowID)
            .field("state", &self.state())
            .field("repeat", &self.is_repeat())
            .field("keysym", &self.keysym())
            .finish()
    }
}

/// Copies as much of `text` as fits into a NUL-terminated C buffer, without splitting characters.
fn write_text<const N: usize>(text: &str) -> [c_char; N] {
    let mut buffer = [0; N];

    let mut len = text.len().min(N.saturating_sub(1));
    while !text.is_char_boundary(len) {
        len -= 1;
    }

    for (dst, src) in buffer.iter_mut().zip(&text.as_bytes()[..len]) {
        *dst = c_char::from_ne_bytes([*src]);
    }

    buffer
}

fn read_text<const N: usize>(buffer: &[c_char; N]) -> &[u8] {
    // SAFETY: c_char and u8 have the same size and alignment, and every bit pattern is valid.
    let bytes = unsafe { &*(buffer as *const [c_char; N]).cast::<[u8; N]>() };
    let len = bytes.iter().position(|b| *b == 0).unwrap_or(N);

    &bytes[..len]
}

/// Text being composed by an input method, before it is committed.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct TextEditingEvent {
    inner: SDL_TextEditingEvent,
}

impl_event_data!(TextEditingEvent, |event_type| event_type
    == EventType::TEXT_EDITING);

impl TextEditingEvent {
    /// Creates a new text editing event.
    ///
    /// The text is truncated to fit SDL's fixed-size buffer.
    pub fn new(window_id: u32, text: &str, start: i32, length: i32) -> Self {
        Self {
            inner: SDL_TextEditingEvent {
                type_: SDL_TEXTEDITING,
                timestamp: 0,
                windowID: window_id,
                text: write_text(text),
                start,
                length,
            },
        }
    }

    #[inline]
    pub const fn window_id(&self) -> u32 {
        self.inner.windowID
    }

    /// The raw bytes of the composed text, up to (and excluding) its NUL terminator.
    #[inline]
    pub fn text_bytes(&self) -> &[u8] {
        read_text(&self.inner.text)
    }

    /// The composed text, or `None` if SDL didn't provide valid UTF-8.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(self.text_bytes()).ok()
    }

    /// The location to begin editing from.
    #[inline]
    pub const fn start(&self) -> i32 {
        self.inner.start
    }

    /// The number of characters to edit from the start point.
    #[inline]
    pub const fn length(&self) -> i32 {
        self.inner.length
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_TextEditingEvent {
        &self.inner
    }
}

impl Debug for TextEditingEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEditingEvent")
            .field("timestamp", &self.inner.timestamp)
            .field("window_id", &self.inner.windowID)
            .field("text", &String::from_utf8_lossy(self.text_bytes()))
            .field("start", &self.inner.start)
            .field("length", &self.inner.length)
            .finish()
    }
}

/// Committed text input.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct TextInputEvent {
    inner: SDL_TextInputEvent,
}

impl_event_data!(TextInputEvent, |event_type| event_type == EventType::TEXT_INPUT);

impl TextInputEvent {
    /// Creates a new text input event.
    ///
    /// The text is truncated to fit SDL's fixed-size buffer.
    pub fn new(window_id: u32, text: &str) -> Self {
        Self {
            inner: SDL_TextInputEvent {
                type_: SDL_TEXTINPUT,
                timestamp: 0,
                windowID: window_id,
                text: write_text(text),
            },
        }
    }

    #[inline]
    pub const fn window_id(&self) -> u32 {
        self.inner.windowID
    }

    #[inline]
    pub fn text_bytes(&self) -> &[u8] {
        read_text(&self.inner.text)
    }

    #[inline]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(self.text_bytes()).ok()
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_TextInputEvent {
        &self.inner
    }
}

impl Debug for TextInputEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextInputEvent")
            .field("timestamp", &self.inner.timestamp)
            .field("window_id", &self.inner.windowID)
            .field("text", &String::from_utf8_lossy(self.text_bytes()))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::{Event, EventData};

    #[test]
    fn keysym_padding_is_zeroed() {
        let keysym = Keysym::new(Scancode::SPACE, Keycode::SPACE, Keymod::all());
        let raw = KeyboardEvent::new(1, ButtonState::Pressed, false, keysym).to_raw();

        // The two bytes between the modifiers and the unused field.
        assert_eq!(raw.as_bytes()[26..28], [0, 0]);
        assert_eq!(raw.as_bytes()[28..32], [0; 4]);
    }

    #[test]
    fn key_up_shares_the_key_down_layout() {
        let keysym = Keysym::new(Scancode::A, Keycode::A, Keymod::LSHIFT | Keymod::CAPS);
        let down = KeyboardEvent::new(9, ButtonState::Pressed, false, keysym).to_raw();
        let up = KeyboardEvent::new(9, ButtonState::Released, true, keysym).to_raw();

        assert_eq!(down.event_type(), EventType::KEY_DOWN);
        assert_eq!(up.event_type(), EventType::KEY_UP);
        assert_eq!(down.as_bytes()[8..12], up.as_bytes()[8..12]);
        assert_eq!(down.as_bytes()[16..], up.as_bytes()[16..]);

        let Event::KeyUp(key) = up.decode() else {
            panic!("expected a key up event")
        };
        assert!(key.is_key_up());
        assert!(key.is_repeat());
        assert_eq!(key.state(), ButtonState::Released);
        assert_eq!(key.keysym().scancode(), Scancode::A);
        assert_eq!(key.keysym().keycode(), Keycode::A);
        assert!(key.keysym().keymod().contains(Keymod::CAPS));
        assert!(key.keysym().keymod().intersects(Keymod::SHIFT));
    }

    #[test]
    fn keysym_sits_at_offset_16() {
        let keysym = Keysym::new(Scancode::ESCAPE, Keycode::ESCAPE, Keymod::empty());
        let raw = KeyboardEvent::new(0, ButtonState::Pressed, false, keysym).to_raw();

        assert_eq!(raw.as_bytes()[16..20], 41i32.to_ne_bytes());
        assert_eq!(raw.as_bytes()[20..24], 0x1Bi32.to_ne_bytes());
    }

    #[test]
    fn text_is_truncated_on_char_boundaries() {
        let long = "é".repeat(20);
        let event = TextInputEvent::new(1, &long);
        let text = event.text().unwrap();

        assert_eq!(text.len(), 30);
        assert!(long.starts_with(text));
    }

    #[test]
    fn text_editing_keeps_cursor() {
        let raw = TextEditingEvent::new(2, "かな", 1, 2).to_raw();

        let Event::TextEditing(editing) = raw.decode() else {
            panic!("expected a text editing event")
        };
        assert_eq!(editing.text(), Some("かな"));
        assert_eq!((editing.start(), editing.length()), (1, 2));
        assert_eq!(raw.as_bytes()[44..48], 1i32.to_ne_bytes());
    }
}
