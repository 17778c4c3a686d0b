use sdl_events_sys::*;
use std::fmt::{Debug, Formatter};
use std::ops::RangeInclusive;

/// The discriminant identifying which kind of event a [`RawEvent`](super::RawEvent) holds.
///
/// This is a thin wrapper around SDL's `SDL_EventType` codes. Codes that are not known to this
/// crate are still valid values: they simply decode to [`Event::Unknown`](super::Event::Unknown).
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EventType(u32);

impl EventType {
    pub const FIRST: Self = Self(SDL_FIRSTEVENT);

    pub const QUIT: Self = Self(SDL_QUIT);
    pub const APP_TERMINATING: Self = Self(SDL_APP_TERMINATING);
    pub const APP_LOW_MEMORY: Self = Self(SDL_APP_LOWMEMORY);
    pub const APP_WILL_ENTER_BACKGROUND: Self = Self(SDL_APP_WILLENTERBACKGROUND);
    pub const APP_DID_ENTER_BACKGROUND: Self = Self(SDL_APP_DIDENTERBACKGROUND);
    pub const APP_WILL_ENTER_FOREGROUND: Self = Self(SDL_APP_WILLENTERFOREGROUND);
    pub const APP_DID_ENTER_FOREGROUND: Self = Self(SDL_APP_DIDENTERFOREGROUND);
    pub const LOCALE_CHANGED: Self = Self(SDL_LOCALECHANGED);

    pub const DISPLAY: Self = Self(SDL_DISPLAYEVENT);

    pub const WINDOW: Self = Self(SDL_WINDOWEVENT);
    pub const SYS_WM: Self = Self(SDL_SYSWMEVENT);

    pub const KEY_DOWN: Self = Self(SDL_KEYDOWN);
    pub const KEY_UP: Self = Self(SDL_KEYUP);
    pub const TEXT_EDITING: Self = Self(SDL_TEXTEDITING);
    pub const TEXT_INPUT: Self = Self(SDL_TEXTINPUT);
    pub const KEYMAP_CHANGED: Self = Self(SDL_KEYMAPCHANGED);
    pub const TEXT_EDITING_EXT: Self = Self(SDL_TEXTEDITING_EXT);

    pub const MOUSE_MOTION: Self = Self(SDL_MOUSEMOTION);
    pub const MOUSE_BUTTON_DOWN: Self = Self(SDL_MOUSEBUTTONDOWN);
    pub const MOUSE_BUTTON_UP: Self = Self(SDL_MOUSEBUTTONUP);
    pub const MOUSE_WHEEL: Self = Self(SDL_MOUSEWHEEL);

    pub const JOY_AXIS_MOTION: Self = Self(SDL_JOYAXISMOTION);
    pub const JOY_BALL_MOTION: Self = Self(SDL_JOYBALLMOTION);
    pub const JOY_HAT_MOTION: Self = Self(SDL_JOYHATMOTION);
    pub const JOY_BUTTON_DOWN: Self = Self(SDL_JOYBUTTONDOWN);
    pub const JOY_BUTTON_UP: Self = Self(SDL_JOYBUTTONUP);
    pub const JOY_DEVICE_ADDED: Self = Self(SDL_JOYDEVICEADDED);
    pub const JOY_DEVICE_REMOVED: Self = Self(SDL_JOYDEVICEREMOVED);
    pub const JOY_BATTERY_UPDATED: Self = Self(SDL_JOYBATTERYUPDATED);

    pub const CONTROLLER_AXIS_MOTION: Self = Self(SDL_CONTROLLERAXISMOTION);
    pub const CONTROLLER_BUTTON_DOWN: Self = Self(SDL_CONTROLLERBUTTONDOWN);
    pub const CONTROLLER_BUTTON_UP: Self = Self(SDL_CONTROLLERBUTTONUP);
    pub const CONTROLLER_DEVICE_ADDED: Self = Self(SDL_CONTROLLERDEVICEADDED);
    pub const CONTROLLER_DEVICE_REMOVED: Self = Self(SDL_CONTROLLERDEVICEREMOVED);
    pub const CONTROLLER_DEVICE_REMAPPED: Self = Self(SDL_CONTROLLERDEVICEREMAPPED);
    pub const CONTROLLER_TOUCHPAD_DOWN: Self = Self(SDL_CONTROLLERTOUCHPADDOWN);
    pub const CONTROLLER_TOUCHPAD_MOTION: Self = Self(SDL_CONTROLLERTOUCHPADMOTION);
    pub const CONTROLLER_TOUCHPAD_UP: Self = Self(SDL_CONTROLLERTOUCHPADUP);
    pub const CONTROLLER_SENSOR_UPDATE: Self = Self(SDL_CONTROLLERSENSORUPDATE);

    pub const FINGER_DOWN: Self = Self(SDL_FINGERDOWN);
    pub const FINGER_UP: Self = Self(SDL_FINGERUP);
    pub const FINGER_MOTION: Self = Self(SDL_FINGERMOTION);

    pub const DOLLAR_GESTURE: Self = Self(SDL_DOLLARGESTURE);
    pub const DOLLAR_RECORD: Self = Self(SDL_DOLLARRECORD);
    pub const MULTI_GESTURE: Self = Self(SDL_MULTIGESTURE);

    pub const CLIPBOARD_UPDATE: Self = Self(SDL_CLIPBOARDUPDATE);

    pub const DROP_FILE: Self = Self(SDL_DROPFILE);
    pub const DROP_TEXT: Self = Self(SDL_DROPTEXT);
    pub const DROP_BEGIN: Self = Self(SDL_DROPBEGIN);
    pub const DROP_COMPLETE: Self = Self(SDL_DROPCOMPLETE);

    pub const AUDIO_DEVICE_ADDED: Self = Self(SDL_AUDIODEVICEADDED);
    pub const AUDIO_DEVICE_REMOVED: Self = Self(SDL_AUDIODEVICEREMOVED);

    pub const SENSOR_UPDATE: Self = Self(SDL_SENSORUPDATE);

    pub const RENDER_TARGETS_RESET: Self = Self(SDL_RENDER_TARGETS_RESET);
    pub const RENDER_DEVICE_RESET: Self = Self(SDL_RENDER_DEVICE_RESET);

    /// The first event code available for application-defined events.
    ///
    /// Codes starting from this one should be reserved using
    /// [`EventSubsystem::register_events`](crate::subsystem::EventSubsystem::register_events).
    pub const USER: Self = Self(SDL_USEREVENT);
    pub const LAST: Self = Self(SDL_LASTEVENT);

    /// Every possible event type, from [`FIRST`](Self::FIRST) to [`LAST`](Self::LAST).
    pub const ALL: RangeInclusive<Self> = RangeInclusive::new(Self::FIRST, Self::LAST);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn to_raw(self) -> u32 {
        self.0
    }

    /// Returns `true` if this type lies in the range reserved for application-defined events.
    #[inline]
    pub const fn is_user(self) -> bool {
        self.0 >= SDL_USEREVENT && self.0 < SDL_LASTEVENT
    }

    /// Returns the symbolic name of this event type, if it is one SDL defines.
    pub const fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            SDL_FIRSTEVENT => "FIRST",
            SDL_QUIT => "QUIT",
            SDL_APP_TERMINATING => "APP_TERMINATING",
            SDL_APP_LOWMEMORY => "APP_LOW_MEMORY",
            SDL_APP_WILLENTERBACKGROUND => "APP_WILL_ENTER_BACKGROUND",
            SDL_APP_DIDENTERBACKGROUND => "APP_DID_ENTER_BACKGROUND",
            SDL_APP_WILLENTERFOREGROUND => "APP_WILL_ENTER_FOREGROUND",
            SDL_APP_DIDENTERFOREGROUND => "APP_DID_ENTER_FOREGROUND",
            SDL_LOCALECHANGED => "LOCALE_CHANGED",
            SDL_DISPLAYEVENT => "DISPLAY",
            SDL_WINDOWEVENT => "WINDOW",
            SDL_SYSWMEVENT => "SYS_WM",
            SDL_KEYDOWN => "KEY_DOWN",
            SDL_KEYUP => "KEY_UP",
            SDL_TEXTEDITING => "TEXT_EDITING",
            SDL_TEXTINPUT => "TEXT_INPUT",
            SDL_KEYMAPCHANGED => "KEYMAP_CHANGED",
            SDL_TEXTEDITING_EXT => "TEXT_EDITING_EXT",
            SDL_MOUSEMOTION => "MOUSE_MOTION",
            SDL_MOUSEBUTTONDOWN => "MOUSE_BUTTON_DOWN",
            SDL_MOUSEBUTTONUP => "MOUSE_BUTTON_UP",
            SDL_MOUSEWHEEL => "MOUSE_WHEEL",
            SDL_JOYAXISMOTION => "JOY_AXIS_MOTION",
            SDL_JOYBALLMOTION => "JOY_BALL_MOTION",
            SDL_JOYHATMOTION => "JOY_HAT_MOTION",
            SDL_JOYBUTTONDOWN => "JOY_BUTTON_DOWN",
            SDL_JOYBUTTONUP => "JOY_BUTTON_UP",
            SDL_JOYDEVICEADDED => "JOY_DEVICE_ADDED",
            SDL_JOYDEVICEREMOVED => "JOY_DEVICE_REMOVED",
            SDL_JOYBATTERYUPDATED => "JOY_BATTERY_UPDATED",
            SDL_CONTROLLERAXISMOTION => "CONTROLLER_AXIS_MOTION",
            SDL_CONTROLLERBUTTONDOWN => "CONTROLLER_BUTTON_DOWN",
            SDL_CONTROLLERBUTTONUP => "CONTROLLER_BUTTON_UP",
            SDL_CONTROLLERDEVICEADDED => "CONTROLLER_DEVICE_ADDED",
            SDL_CONTROLLERDEVICEREMOVED => "CONTROLLER_DEVICE_REMOVED",
            SDL_CONTROLLERDEVICEREMAPPED => "CONTROLLER_DEVICE_REMAPPED",
            SDL_CONTROLLERTOUCHPADDOWN => "CONTROLLER_TOUCHPAD_DOWN",
            SDL_CONTROLLERTOUCHPADMOTION => "CONTROLLER_TOUCHPAD_MOTION",
            SDL_CONTROLLERTOUCHPADUP => "CONTROLLER_TOUCHPAD_UP",
            SDL_CONTROLLERSENSORUPDATE => "CONTROLLER_SENSOR_UPDATE",
            SDL_FINGERDOWN => "FINGER_DOWN",
            SDL_FINGERUP => "FINGER_UP",
            SDL_FINGERMOTION => "FINGER_MOTION",
            SDL_DOLLARGESTURE => "DOLLAR_GESTURE",
            SDL_DOLLARRECORD => "DOLLAR_RECORD",
            SDL_MULTIGESTURE => "MULTI_GESTURE",
            SDL_CLIPBOARDUPDATE => "CLIPBOARD_UPDATE",
            SDL_DROPFILE => "DROP_FILE",
            SDL_DROPTEXT => "DROP_TEXT",
            SDL_DROPBEGIN => "DROP_BEGIN",
            SDL_DROPCOMPLETE => "DROP_COMPLETE",
            SDL_AUDIODEVICEADDED => "AUDIO_DEVICE_ADDED",
            SDL_AUDIODEVICEREMOVED => "AUDIO_DEVICE_REMOVED",
            SDL_SENSORUPDATE => "SENSOR_UPDATE",
            SDL_RENDER_TARGETS_RESET => "RENDER_TARGETS_RESET",
            SDL_RENDER_DEVICE_RESET => "RENDER_DEVICE_RESET",
            SDL_POLLSENTINEL => "POLL_SENTINEL",
            SDL_USEREVENT => "USER",
            SDL_LASTEVENT => "LAST",
            _ => return None,
        };

        Some(name)
    }
}

impl From<u32> for EventType {
    #[inline]
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<EventType> for u32 {
    #[inline]
    fn from(value: EventType) -> Self {
        value.0
    }
}

impl Debug for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "EventType::{name}"),
            None if self.is_user() => write!(f, "EventType::USER + {}", self.0 - SDL_USEREVENT),
            None => write!(f, "EventType({:#x})", self.0),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn user_range_excludes_last() {
        assert!(EventType::USER.is_user());
        assert!(EventType::from_raw(0x8123).is_user());
        assert!(!EventType::LAST.is_user());
        assert!(!EventType::QUIT.is_user());
    }

    #[test]
    fn debug_names() {
        assert_eq!(format!("{:?}", EventType::KEY_UP), "EventType::KEY_UP");
        assert_eq!(format!("{:?}", EventType::from_raw(0x8002)), "EventType::USER + 2");
        assert_eq!(format!("{:?}", EventType::from_raw(0x1234)), "EventType(0x1234)");
    }
}
