use crate::event::{ButtonState, EventType, JoystickId, impl_event_data};
use sdl_events_sys::*;
use std::fmt::{Debug, Formatter};

/// A standardized game controller axis.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ControllerAxis(pub u8);

impl ControllerAxis {
    pub const LEFT_X: Self = Self(0);
    pub const LEFT_Y: Self = Self(1);
    pub const RIGHT_X: Self = Self(2);
    pub const RIGHT_Y: Self = Self(3);
    pub const TRIGGER_LEFT: Self = Self(4);
    pub const TRIGGER_RIGHT: Self = Self(5);
}

/// A standardized game controller button.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ControllerButton(pub u8);

impl ControllerButton {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const X: Self = Self(2);
    pub const Y: Self = Self(3);
    pub const BACK: Self = Self(4);
    pub const GUIDE: Self = Self(5);
    pub const START: Self = Self(6);
    pub const LEFT_STICK: Self = Self(7);
    pub const RIGHT_STICK: Self = Self(8);
    pub const LEFT_SHOULDER: Self = Self(9);
    pub const RIGHT_SHOULDER: Self = Self(10);
    pub const DPAD_UP: Self = Self(11);
    pub const DPAD_DOWN: Self = Self(12);
    pub const DPAD_LEFT: Self = Self(13);
    pub const DPAD_RIGHT: Self = Self(14);
}

#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct ControllerAxisEvent {
    inner: SDL_ControllerAxisEvent,
}

impl_event_data!(ControllerAxisEvent, |event_type| event_type
    == EventType::CONTROLLER_AXIS_MOTION);

impl ControllerAxisEvent {
    #[inline]
    pub const fn new(which: JoystickId, axis: ControllerAxis, value: i16) -> Self {
        Self {
            inner: SDL_ControllerAxisEvent {
                type_: SDL_CONTROLLERAXISMOTION,
                timestamp: 0,
                which: which.0,
                axis: axis.0,
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
    pub const fn axis(&self) -> ControllerAxis {
        ControllerAxis(self.inner.axis)
    }

    #[inline]
    pub const fn value(&self) -> i16 {
        self.inner.value
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_ControllerAxisEvent {
        &self.inner
    }
}

impl Debug for ControllerAxisEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerAxisEvent")
            .field("timestamp", &self.inner.timestamp)
            .field("which", &self.inner.which)
            .field("axis", &self.axis())
            .field("value", &self.inner.value)
            .finish()
    }
}

#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct ControllerButtonEvent {
    inner: SDL_ControllerButtonEvent,
}

impl_event_data!(ControllerButtonEvent, |event_type| matches!(
    event_type,
    EventType::CONTROLLER_BUTTON_DOWN | EventType::CONTROLLER_BUTTON_UP
));

impl ControllerButtonEvent {
    #[inline]
    pub const fn new(which: JoystickId, button: ControllerButton, state: ButtonState) -> Self {
        Self {
            inner: SDL_ControllerButtonEvent {
                type_: if state.is_pressed() {
                    SDL_CONTROLLERBUTTONDOWN
                } else {
                    SDL_CONTROLLERBUTTONUP
                },
                timestamp: 0,
                which: which.0,
                button: button.0,
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
    pub const fn button(&self) -> ControllerButton {
        ControllerButton(self.inner.button)
    }

    #[inline]
    pub const fn state(&self) -> ButtonState {
        ButtonState::from_raw(self.inner.state)
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_ControllerButtonEvent {
        &self.inner
    }
}

impl Debug for ControllerButtonEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerButtonEvent")
            .field("event_type", &EventType::from_raw(self.inner.type_))
            .field("timestamp", &self.inner.timestamp)
            .field("which", &self.inner.which)
            .field("button", &self.button())
            .field("state", &self.state())
            .finish()
    }
}

/// A game controller being added, removed, or remapped.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct ControllerDeviceEvent {
    inner: SDL_ControllerDeviceEvent,
}

impl_event_data!(ControllerDeviceEvent, |event_type| matches!(
    event_type,
    EventType::CONTROLLER_DEVICE_ADDED
        | EventType::CONTROLLER_DEVICE_REMOVED
        | EventType::CONTROLLER_DEVICE_REMAPPED
));

impl ControllerDeviceEvent {
    /// # Panics
    ///
    /// Panics if `event_type` isn't a controller device event type.
    #[inline]
    pub const fn new(event_type: EventType, which: i32) -> Self {
        assert!(
            matches!(
                event_type.to_raw(),
                SDL_CONTROLLERDEVICEADDED
                    | SDL_CONTROLLERDEVICEREMOVED
                    | SDL_CONTROLLERDEVICEREMAPPED
            ),
            "Not a controller device event type"
        );

        Self {
            inner: SDL_ControllerDeviceEvent {
                type_: event_type.to_raw(),
                timestamp: 0,
                which,
            },
        }
    }

    /// The device index for additions, or the instance ID otherwise.
    #[inline]
    pub const fn which(&self) -> i32 {
        self.inner.which
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_ControllerDeviceEvent {
        &self.inner
    }
}

impl Debug for ControllerDeviceEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerDeviceEvent")
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
    fn controller_button_picks_type_from_state() {
        let raw =
            ControllerButtonEvent::new(JoystickId(2), ControllerButton::START, ButtonState::Pressed)
                .to_raw();
        assert_eq!(raw.event_type(), EventType::CONTROLLER_BUTTON_DOWN);

        let Event::ControllerButton(button) = raw.decode() else {
            panic!("expected a controller button event")
        };
        assert_eq!(button.button(), ControllerButton::START);
        assert_eq!(button.which(), JoystickId(2));
    }

    #[test]
    fn remap_decodes_as_controller_device() {
        let raw = ControllerDeviceEvent::new(EventType::CONTROLLER_DEVICE_REMAPPED, 1).to_raw();

        let Event::ControllerDevice(device) = raw.decode() else {
            panic!("expected a controller device event")
        };
        assert_eq!(device.event_type(), EventType::CONTROLLER_DEVICE_REMAPPED);
        assert_eq!(device.which(), 1);
    }

    #[test]
    fn trigger_axis_round_trips() {
        let raw = ControllerAxisEvent::new(JoystickId(0), ControllerAxis::TRIGGER_RIGHT, 32767)
            .to_raw();
        let axis = raw.as_event::<ControllerAxisEvent>().unwrap();

        assert_eq!(axis.axis(), ControllerAxis::TRIGGER_RIGHT);
        assert_eq!(axis.value(), i16::MAX);
    }
}
