//! SDL events, and the decoding of SDL's raw event union into typed views.
//!
//! SDL hands out events as a fixed-size union ([`RawEvent`]), whose first field is always an
//! [`EventType`] discriminant, followed by a timestamp. Calling [`RawEvent::decode`] selects the
//! matching typed view purely from that discriminant, without copying anything, and returns it as
//! an [`Event`].
//!
//! Typed views can also be created from scratch (e.g. [`UserEvent::new`]), and turned back into a
//! [`RawEvent`] to be pushed into the queue.

use std::fmt::Debug;

mod common;
mod controller;
mod drop;
mod event_type;
mod joystick;
mod keyboard;
mod mouse;
mod raw;
mod system;
mod touch;
mod user;
mod window;

pub use common::*;
pub use controller::*;
pub use drop::*;
pub use event_type::*;
pub use joystick::*;
pub use keyboard::*;
pub use mouse::*;
pub use raw::*;
pub use system::*;
pub use touch::*;
pub use user::*;
pub use window::*;

/// A typed view over the contents of a [`RawEvent`].
///
/// # Safety
///
/// This trait allows casting raw event unions to and from implementers. This means implementers of
/// this trait must enforce the following:
///
/// * The type must be `#[repr(C)]` or `#[repr(transparent)]`, and ABI-compatible with the matching
///   SDL event struct, which itself is a member of the `SDL_Event` union;
/// * The type must start with the common `type` and `timestamp` fields;
/// * [`accepts`](EventData::accepts) must only return `true` for event types SDL lays out using
///   that struct.
pub unsafe trait EventData: Copy + Debug + Sized + 'static {
    /// Returns `true` if events of the given type are laid out as `Self`.
    fn accepts(event_type: EventType) -> bool;

    /// Returns the prefix common to all events.
    #[inline]
    fn common(&self) -> &CommonEvent {
        // SAFETY: all implementers start with the fields of CommonEvent, which is repr(transparent)
        unsafe { &*(self as *const Self).cast::<CommonEvent>() }
    }

    #[inline]
    fn event_type(&self) -> EventType {
        self.common().event_type()
    }

    /// The time this event was queued at, in milliseconds since SDL's initialization.
    #[inline]
    fn timestamp(&self) -> u32 {
        self.common().timestamp()
    }

    /// Copies this event into a new, zero-padded [`RawEvent`].
    #[inline]
    fn to_raw(&self) -> RawEvent {
        RawEvent::from_data(self)
    }
}

macro_rules! impl_event_data {
    ($ty:ty, |$event_type:ident| $accepts:expr) => {
        // SAFETY: this type is repr(transparent) over the matching SDL struct, which is a member
        // of the SDL_Event union. The accepted types are those SDL uses this struct for.
        unsafe impl $crate::event::EventData for $ty {
            #[inline]
            fn accepts($event_type: $crate::event::EventType) -> bool {
                $accepts
            }
        }

        impl From<$ty> for $crate::event::RawEvent {
            #[inline]
            fn from(event: $ty) -> Self {
                $crate::event::RawEvent::from_data(&event)
            }
        }
    };
}
pub(crate) use impl_event_data;

/// An SDL event, decoded from a [`RawEvent`] according to its [`EventType`].
///
/// Some variants are shared between multiple event types when SDL lays them out the same way
/// (e.g. [`MouseButton`](Event::MouseButton) is used for both button presses and releases). In that
/// case, the [`event_type`](Event::event_type) tells them apart.
///
/// Event types this crate does not know about still decode successfully, into
/// [`Unknown`](Event::Unknown). That variant keeps the whole raw event, so its payload survives
/// [`to_raw`](Event::to_raw).
#[derive(Copy, Clone, Debug)]
pub enum Event<'a> {
    Window(&'a WindowEvent),
    SysWm(&'a SysWmEvent),
    KeyDown(&'a KeyboardEvent),
    KeyUp(&'a KeyboardEvent),
    TextEditing(&'a TextEditingEvent),
    TextInput(&'a TextInputEvent),
    MouseMotion(&'a MouseMotionEvent),
    MouseButton(&'a MouseButtonEvent),
    MouseWheel(&'a MouseWheelEvent),
    JoyAxis(&'a JoyAxisEvent),
    JoyBall(&'a JoyBallEvent),
    JoyHat(&'a JoyHatEvent),
    JoyButton(&'a JoyButtonEvent),
    JoyDevice(&'a JoyDeviceEvent),
    ControllerAxis(&'a ControllerAxisEvent),
    ControllerButton(&'a ControllerButtonEvent),
    ControllerDevice(&'a ControllerDeviceEvent),
    TouchFinger(&'a TouchFingerEvent),
    MultiGesture(&'a MultiGestureEvent),
    DollarGesture(&'a DollarGestureEvent),
    Clipboard(&'a CommonEvent),
    Drop(&'a DropEvent),
    Render(&'a CommonEvent),
    Quit(&'a CommonEvent),
    User(&'a UserEvent),
    Unknown(&'a RawEvent),
}

impl<'a> Event<'a> {
    /// Decodes the given raw event.
    ///
    /// This is the same as [`RawEvent::decode`].
    pub fn decode(raw: &'a RawEvent) -> Self {
        use Event::*;

        let ty = raw.event_type();

        // SAFETY: each view is only picked for the event types it accepts.
        unsafe {
            match ty {
                EventType::WINDOW => Window(raw.as_event_unchecked()),
                EventType::SYS_WM => SysWm(raw.as_event_unchecked()),
                EventType::KEY_DOWN => KeyDown(raw.as_event_unchecked()),
                EventType::KEY_UP => KeyUp(raw.as_event_unchecked()),
                EventType::TEXT_EDITING => TextEditing(raw.as_event_unchecked()),
                EventType::TEXT_INPUT => TextInput(raw.as_event_unchecked()),
                EventType::MOUSE_MOTION => MouseMotion(raw.as_event_unchecked()),
                EventType::MOUSE_BUTTON_DOWN | EventType::MOUSE_BUTTON_UP => {
                    MouseButton(raw.as_event_unchecked())
                }
                EventType::MOUSE_WHEEL => MouseWheel(raw.as_event_unchecked()),
                EventType::JOY_AXIS_MOTION => JoyAxis(raw.as_event_unchecked()),
                EventType::JOY_BALL_MOTION => JoyBall(raw.as_event_unchecked()),
                EventType::JOY_HAT_MOTION => JoyHat(raw.as_event_unchecked()),
                EventType::JOY_BUTTON_DOWN | EventType::JOY_BUTTON_UP => {
                    JoyButton(raw.as_event_unchecked())
                }
                EventType::JOY_DEVICE_ADDED | EventType::JOY_DEVICE_REMOVED => {
                    JoyDevice(raw.as_event_unchecked())
                }
                EventType::CONTROLLER_AXIS_MOTION => ControllerAxis(raw.as_event_unchecked()),
                EventType::CONTROLLER_BUTTON_DOWN | EventType::CONTROLLER_BUTTON_UP => {
                    ControllerButton(raw.as_event_unchecked())
                }
                EventType::CONTROLLER_DEVICE_ADDED
                | EventType::CONTROLLER_DEVICE_REMOVED
                | EventType::CONTROLLER_DEVICE_REMAPPED => {
                    ControllerDevice(raw.as_event_unchecked())
                }
                EventType::FINGER_DOWN | EventType::FINGER_UP | EventType::FINGER_MOTION => {
                    TouchFinger(raw.as_event_unchecked())
                }
                EventType::MULTI_GESTURE => MultiGesture(raw.as_event_unchecked()),
                EventType::DOLLAR_GESTURE | EventType::DOLLAR_RECORD => {
                    DollarGesture(raw.as_event_unchecked())
                }
                EventType::CLIPBOARD_UPDATE => Clipboard(raw.common()),
                EventType::DROP_FILE
                | EventType::DROP_TEXT
                | EventType::DROP_BEGIN
                | EventType::DROP_COMPLETE => Drop(raw.as_event_unchecked()),
                EventType::RENDER_TARGETS_RESET | EventType::RENDER_DEVICE_RESET => {
                    Render(raw.common())
                }
                EventType::QUIT => Quit(raw.common()),
                ty if ty.is_user() => User(raw.as_event_unchecked()),
                _ => Unknown(raw),
            }
        }
    }

    /// Returns the prefix common to all events.
    pub fn common(&self) -> &'a CommonEvent {
        use Event::*;

        match *self {
            Window(e) => e.common(),
            SysWm(e) => e.common(),
            KeyDown(e) | KeyUp(e) => e.common(),
            TextEditing(e) => e.common(),
            TextInput(e) => e.common(),
            MouseMotion(e) => e.common(),
            MouseButton(e) => e.common(),
            MouseWheel(e) => e.common(),
            JoyAxis(e) => e.common(),
            JoyBall(e) => e.common(),
            JoyHat(e) => e.common(),
            JoyButton(e) => e.common(),
            JoyDevice(e) => e.common(),
            ControllerAxis(e) => e.common(),
            ControllerButton(e) => e.common(),
            ControllerDevice(e) => e.common(),
            TouchFinger(e) => e.common(),
            MultiGesture(e) => e.common(),
            DollarGesture(e) => e.common(),
            Drop(e) => e.common(),
            User(e) => e.common(),
            Clipboard(e) | Render(e) | Quit(e) => e,
            Unknown(raw) => raw.common(),
        }
    }

    #[inline]
    pub fn event_type(&self) -> EventType {
        self.common().event_type()
    }

    #[inline]
    pub fn timestamp(&self) -> u32 {
        self.common().timestamp()
    }

    /// Copies the decoded event back into a new [`RawEvent`].
    pub fn to_raw(&self) -> RawEvent {
        use Event::*;

        match *self {
            Window(e) => e.to_raw(),
            SysWm(e) => e.to_raw(),
            KeyDown(e) | KeyUp(e) => e.to_raw(),
            TextEditing(e) => e.to_raw(),
            TextInput(e) => e.to_raw(),
            MouseMotion(e) => e.to_raw(),
            MouseButton(e) => e.to_raw(),
            MouseWheel(e) => e.to_raw(),
            JoyAxis(e) => e.to_raw(),
            JoyBall(e) => e.to_raw(),
            JoyHat(e) => e.to_raw(),
            JoyButton(e) => e.to_raw(),
            JoyDevice(e) => e.to_raw(),
            ControllerAxis(e) => e.to_raw(),
            ControllerButton(e) => e.to_raw(),
            ControllerDevice(e) => e.to_raw(),
            TouchFinger(e) => e.to_raw(),
            MultiGesture(e) => e.to_raw(),
            DollarGesture(e) => e.to_raw(),
            Drop(e) => e.to_raw(),
            User(e) => e.to_raw(),
            Clipboard(e) | Render(e) | Quit(e) => e.to_raw(),
            Unknown(raw) => *raw,
        }
    }
}

impl<'a> From<&'a RawEvent> for Event<'a> {
    #[inline]
    fn from(raw: &'a RawEvent) -> Self {
        Self::decode(raw)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sdl_events_sys::*;

    fn raw_with(ty: u32, timestamp: u32) -> RawEvent {
        let mut raw = SDL_Event {
            padding: [0; SDL_EVENT_PADDING_SIZE],
        };
        raw.common = SDL_CommonEvent {
            type_: ty,
            timestamp,
        };

        // SAFETY: the payload is all zeroes, which is valid for every event type
        unsafe { RawEvent::from_raw(raw) }
    }

    #[test]
    fn every_known_type_keeps_its_prefix() {
        let known = [
            SDL_QUIT,
            SDL_WINDOWEVENT,
            SDL_SYSWMEVENT,
            SDL_KEYDOWN,
            SDL_KEYUP,
            SDL_TEXTEDITING,
            SDL_TEXTINPUT,
            SDL_MOUSEMOTION,
            SDL_MOUSEBUTTONDOWN,
            SDL_MOUSEBUTTONUP,
            SDL_MOUSEWHEEL,
            SDL_JOYAXISMOTION,
            SDL_JOYBALLMOTION,
            SDL_JOYHATMOTION,
            SDL_JOYBUTTONDOWN,
            SDL_JOYBUTTONUP,
            SDL_JOYDEVICEADDED,
            SDL_JOYDEVICEREMOVED,
            SDL_CONTROLLERAXISMOTION,
            SDL_CONTROLLERBUTTONDOWN,
            SDL_CONTROLLERBUTTONUP,
            SDL_CONTROLLERDEVICEADDED,
            SDL_CONTROLLERDEVICEREMOVED,
            SDL_CONTROLLERDEVICEREMAPPED,
            SDL_FINGERDOWN,
            SDL_FINGERUP,
            SDL_FINGERMOTION,
            SDL_DOLLARGESTURE,
            SDL_DOLLARRECORD,
            SDL_MULTIGESTURE,
            SDL_CLIPBOARDUPDATE,
            SDL_DROPFILE,
            SDL_DROPTEXT,
            SDL_DROPBEGIN,
            SDL_DROPCOMPLETE,
            SDL_RENDER_TARGETS_RESET,
            SDL_RENDER_DEVICE_RESET,
            SDL_USEREVENT,
        ];

        for (i, ty) in known.into_iter().enumerate() {
            let timestamp = 1000 + u32::try_from(i).unwrap();
            let raw = raw_with(ty, timestamp);
            let event = raw.decode();

            assert!(!matches!(event, Event::Unknown(_)), "{ty:#x} decoded as unknown");
            assert_eq!(event.event_type().to_raw(), ty);
            assert_eq!(event.timestamp(), timestamp);
        }
    }

    #[test]
    fn unknown_types_decode_to_the_common_prefix() {
        for ty in [SDL_FIRSTEVENT, SDL_APP_LOWMEMORY, SDL_DISPLAYEVENT, 0x1234, SDL_LASTEVENT] {
            let raw = raw_with(ty, 42);

            match raw.decode() {
                Event::Unknown(unknown) => {
                    assert_eq!(unknown.event_type(), EventType::from_raw(ty));
                    assert_eq!(unknown.timestamp(), 42);
                }
                other => panic!("{ty:#x} decoded as {other:?}"),
            }
        }
    }

    #[test]
    fn paired_types_share_a_variant() {
        assert!(matches!(raw_with(SDL_KEYDOWN, 0).decode(), Event::KeyDown(_)));
        assert!(matches!(raw_with(SDL_KEYUP, 0).decode(), Event::KeyUp(_)));
        assert!(matches!(raw_with(SDL_MOUSEBUTTONUP, 0).decode(), Event::MouseButton(_)));
        assert!(matches!(raw_with(SDL_JOYBUTTONUP, 0).decode(), Event::JoyButton(_)));
        assert!(matches!(raw_with(SDL_JOYDEVICEREMOVED, 0).decode(), Event::JoyDevice(_)));
        assert!(matches!(
            raw_with(SDL_CONTROLLERDEVICEREMAPPED, 0).decode(),
            Event::ControllerDevice(_)
        ));
        assert!(matches!(raw_with(SDL_FINGERMOTION, 0).decode(), Event::TouchFinger(_)));
        assert!(matches!(raw_with(SDL_DOLLARRECORD, 0).decode(), Event::DollarGesture(_)));
        assert!(matches!(raw_with(0x8765, 0).decode(), Event::User(_)));
    }

    #[test]
    fn decoding_does_not_modify_the_source() {
        let raw = raw_with(SDL_MOUSEWHEEL, 7);
        let before = *raw.as_bytes();
        let _ = raw.decode();
        assert_eq!(&before, raw.as_bytes());
    }

    #[test]
    fn unknown_event_keeps_its_payload() {
        let mut bytes = [0; SDL_EVENT_PADDING_SIZE];
        bytes[..4].copy_from_slice(&SDL_DISPLAYEVENT.to_ne_bytes());
        bytes[4..8].copy_from_slice(&12u32.to_ne_bytes());
        bytes[8..12].copy_from_slice(&7u32.to_ne_bytes());

        // SAFETY: this is not a drop event.
        let raw = unsafe { RawEvent::from_raw(SDL_Event { padding: bytes }) };
        let copy = raw.decode().to_raw();

        assert_eq!(raw.as_bytes(), copy.as_bytes());
        assert_eq!(copy.as_bytes()[8..12], 7u32.to_ne_bytes());
    }

    #[test]
    fn decoded_event_copies_back_to_same_bytes() {
        let event =
            MouseButtonEvent::new(MouseButton::RIGHT, ButtonState::Pressed, 2, 3, 1, 40, 50);
        let raw = event.to_raw();
        let copy = raw.decode().to_raw();

        assert_eq!(raw.as_bytes(), copy.as_bytes());
    }
}
