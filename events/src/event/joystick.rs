use crate::event::{ButtonState, EventType, impl_event_data};
use bitflags::bitflags;
use sdl_events_sys::*;
use std::fmt::{Debug, Formatter};

/// The instance ID of an opened joystick or game controller.
///
/// Instance IDs are unique for as long as the device stays connected. Device addition events carry
/// a device *index* instead (see [`JoyDeviceEvent::which`]).
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct JoystickId(pub SDL_JoystickID);

bitflags! {
    /// The position of a joystick hat. [`CENTERED`](HatState::CENTERED) is the empty set.
    #[repr(C)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct HatState: u8 {
        const CENTERED = SDL_HAT_CENTERED;
        const UP = SDL_HAT_UP;
        const RIGHT = SDL_HAT_RIGHT;
        const DOWN = SDL_HAT_DOWN;
        const LEFT = SDL_HAT_LEFT;

        const RIGHT_UP = SDL_HAT_RIGHT | SDL_HAT_UP;
        const RIGHT_DOWN = SDL_HAT_RIGHT | SDL_HAT_DOWN;
        const LEFT_UP = SDL_HAT_LEFT | SDL_HAT_UP;
        const LEFT_DOWN = SDL_HAT_LEFT | SDL_HAT_DOWN;
    }
}

#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct JoyAxisEvent {
    inner: SDL_JoyAxisEvent,
}

impl_event_data!(JoyAxisEvent, |event_type| event_type
    == EventType::JOY_AXIS_MOTION);

impl JoyAxisEvent {
    #[inline]
    pub const fn new(which: JoystickId, axis: u8, value: i16) -> Self {
        Self {
            inner: SDL_JoyAxisEvent {
                type_: SDL_JOYAXISMOTION,
                timestamp: 0,
                which: which.0,
                axis,
                padding1: 0,
                padding2: 0,
                padding3: 0,
                value,
                padding4: 0,
            },
        }
    }

    #[inline]
    pub const fn which(&self) -> JoystickId {
        JoystickId(self.inner.which)
    }

    #[inline]
    pub const fn axis(&self) -> u8 {
        self.inner.axis
    }

    /// The axis position, from -32768 to 32767.
    #[inline]
    pub const fn value(&self) -> i16 {
        self.inner.value
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_JoyAxisEvent {
        &self.inner
    }
}

impl Debug for JoyAxisEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JoyAxisEvent")
            .field("timestamp", &self.inner.timestamp)
            .field("which", &self.inner.which)
            .field("axis", &self.inner.axis)
            .field("value", &self.inner.value)
            .finish()
    }
}

/// Relative motion of a trackball.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct JoyBallEvent {
    inner: SDL_JoyBallEvent,
}

impl_event_data!(JoyBallEvent, |event_type| event_type
    == EventType::JOY_BALL_MOTION);

impl JoyBallEvent {
    #[inline]
    pub const fn new(which: JoystickId, ball: u8, relative: (i16, i16)) -> Self {
        Self {
            inner: SDL_JoyBallEvent {
                type_: SDL_JOYBALLMOTION,
                timestamp: 0,
                which: which.0,
                ball,
                padding1: 0,
                padding2: 0,
                padding3: 0,
                xrel: relative.0,
                yrel: relative.1,
            },
        }
    }

    #[inline]
    pub const fn which(&self) -> JoystickId {
        JoystickId(self.inner.which)
    }

    #[inline]
    pub const fn ball(&self) -> u8 {
        self.inner.ball
    }

    #[inline]
    pub const fn relative(&self) -> (i16, i16) {
        (self.inner.xrel, self.inner.yrel)
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_JoyBallEvent {
        &self.inner
    }
}

impl Debug for JoyBallEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JoyBallEvent")
            .field("timestamp", &self.inner.timestamp)
            .field("which", &self.inner.which)
            .field("ball", &self.inner.ball)
            .field("relative", &self.relative())
            .finish()
    }
}

#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct JoyHatEvent {
    inner: SDL_JoyHatEvent,
}

impl_event_data!(JoyHatEvent, |event_type| event_type == EventType::JOY_HAT_MOTION);

impl JoyHatEvent {
    #[inline]
    pub const fn new(which: JoystickId, hat: u8, state: HatState) -> Self {
        Self {
            inner: SDL_JoyHatEvent {
                type_: SDL_JOYHATMOTION,
                timestamp: 0,
                which: which.0,
                hat,
                value: state.bits(),
                padding1: 0,
                padding2: 0,
            },
        }
    }

    #[inline]
    pub const fn which(&self) -> JoystickId {
        JoystickId(self.inner.which)
    }

    #[inline]
    pub const fn hat(&self) -> u8 {
        self.inner.hat
    }

    #[inline]
    pub const fn state(&self) -> HatState {
        HatState::from_bits_retain(self.inner.value)
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_JoyHatEvent {
        &self.inner
    }
}

impl Debug for JoyHatEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JoyHatEvent")
            .field("timestamp", &self.inner.timestamp)
            .field("which", &self.inner.which)
            .field("hat", &self.inner.hat)
            .field("state", &self.state())
            .finish()
    }
}

/// A joystick button press ([`EventType::JOY_BUTTON_DOWN`]) or release
/// ([`EventType::JOY_BUTTON_UP`]).
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct JoyButtonEvent {
    inner: SDL_JoyButtonEvent,
}

impl_event_data!(JoyButtonEvent, |event_type| matches!(
    event_type,
    EventType::JOY_BUTTON_DOWN | EventType::JOY_BUTTON_UP
));

impl JoyButtonEvent {
    #[inline]
    pub const fn new(which: JoystickId, button: u8, state: ButtonState) -> Self {
        Self {
            inner: SDL_JoyButtonEvent {
                type_: if state.is_pressed() {
                    SDL_JOYBUTTONDOWN
                } else {
                    SDL_JOYBUTTONUP
                },
                timestamp: 0,
                which: which.0,
                button,
                state: state.to_raw(),
                padding1: 0,
                padding2: 0,
            },
        }
    }

    #[inline]
    pub const fn which(&self) -> JoystickId {
        JoystickId(self.inner.which)
    }

    #[inline]
    pub const fn button(&self) -> u8 {
        self.inner.button
    }

    #[inline]
    pub const fn state(&self) -> ButtonState {
        ButtonState::from_raw(self.inner.state)
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_JoyButtonEvent {
        &self.inner
    }
}

impl Debug for JoyButtonEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JoyButtonEvent")
            .field("event_type", &EventType::from_raw(self.inner.type_))
            .field("timestamp", &self.inner.timestamp)
            .field("which", &self.inner.which)
            .field("button", &self.inner.button)
            .field("state", &self.state())
            .finish()
    }
}

/// A joystick being connected ([`EventType::JOY_DEVICE_ADDED`]) or disconnected
/// ([`EventType::JOY_DEVICE_REMOVED`]).
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct JoyDeviceEvent {
    inner: SDL_JoyDeviceEvent,
}

impl_event_data!(JoyDeviceEvent, |event_type| matches!(
    event_type,
    EventType::JOY_DEVICE_ADDED | EventType::JOY_DEVICE_REMOVED
));

impl JoyDeviceEvent {
    /// # Panics
    ///
    /// Panics if `event_type` isn't a joystick device event type.
    #[inline]
    pub const fn new(event_type: EventType, which: i32) -> Self {
        assert!(
            matches!(event_type.to_raw(), SDL_JOYDEVICEADDED | SDL_JOYDEVICEREMOVED),
            "Not a joystick device event type"
        );

        Self {
            inner: SDL_JoyDeviceEvent {
                type_: event_type.to_raw(),
                timestamp: 0,
                which,
            },
        }
    }

    /// The device index for additions, or the instance ID for removals.
    #[inline]
    pub const fn which(&self) -> i32 {
        self.inner.which
    }

    #[inline]
    pub const fn is_added(&self) -> bool {
        self.inner.type_ == SDL_JOYDEVICEADDED
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_JoyDeviceEvent {
        &self.inner
    }
}

impl Debug for JoyDeviceEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JoyDeviceEvent")
            .field("event_type", &EventType::from_raw(self.inner.type_))
            .field("timestamp", &self.inner.timestamp)
            .field("which", &self.inner.which)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::{Event, EventData};

    #[test]
    fn axis_value_sits_at_offset_16() {
        let raw = JoyAxisEvent::new(JoystickId(3), 1, -32768).to_raw();

        assert_eq!(raw.as_bytes()[8..12], 3i32.to_ne_bytes());
        assert_eq!(raw.as_bytes()[12], 1);
        assert_eq!(raw.as_bytes()[16..18], i16::MIN.to_ne_bytes());

        let Event::JoyAxis(axis) = raw.decode() else {
            panic!("expected a joystick axis event")
        };
        assert_eq!(axis.which(), JoystickId(3));
        assert_eq!(axis.value(), i16::MIN);
    }

    #[test]
    fn hat_diagonals_combine_directions() {
        let raw = JoyHatEvent::new(JoystickId(0), 0, HatState::LEFT_DOWN).to_raw();

        let Event::JoyHat(hat) = raw.decode() else {
            panic!("expected a joystick hat event")
        };
        assert!(hat.state().contains(HatState::LEFT));
        assert!(hat.state().contains(HatState::DOWN));
        assert!(HatState::CENTERED.is_empty());
    }

    #[test]
    fn device_removal_is_a_joy_device_event() {
        let raw = JoyDeviceEvent::new(EventType::JOY_DEVICE_REMOVED, 5).to_raw();

        let Event::JoyDevice(device) = raw.decode() else {
            panic!("expected a joystick device event")
        };
        assert!(!device.is_added());
        assert_eq!(device.which(), 5);
    }

    #[test]
    #[should_panic]
    fn device_event_rejects_other_types() {
        let _ = JoyDeviceEvent::new(EventType::JOY_AXIS_MOTION, 0);
    }
}
