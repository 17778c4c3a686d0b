use crate::event::{ButtonState, EventType, impl_event_data};
use bitflags::bitflags;
use sdl_events_sys::*;
use std::fmt::{Debug, Formatter};

/// The `which` value SDL uses for mouse events synthesized from touch input.
pub const TOUCH_MOUSE_ID: u32 = u32::MAX;

/// A mouse button index.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct MouseButton(pub u8);

impl MouseButton {
    pub const LEFT: Self = Self(SDL_BUTTON_LEFT);
    pub const MIDDLE: Self = Self(SDL_BUTTON_MIDDLE);
    pub const RIGHT: Self = Self(SDL_BUTTON_RIGHT);
    pub const X1: Self = Self(SDL_BUTTON_X1);
    pub const X2: Self = Self(SDL_BUTTON_X2);

    /// Returns the bit of this button in a [`MouseButtonState`], if it has one.
    #[inline]
    pub const fn mask(self) -> Option<MouseButtonState> {
        if self.0 == 0 || self.0 > 32 {
            return None;
        }

        Some(MouseButtonState::from_bits_retain(1 << (self.0 - 1)))
    }
}

bitflags! {
    /// The set of mouse buttons held down during a [`MouseMotionEvent`].
    #[repr(C)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct MouseButtonState: u32 {
        const LEFT = SDL_BUTTON_LMASK;
        const MIDDLE = SDL_BUTTON_MMASK;
        const RIGHT = SDL_BUTTON_RMASK;
        const X1 = SDL_BUTTON_X1MASK;
        const X2 = SDL_BUTTON_X2MASK;
    }
}

#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct MouseMotionEvent {
    inner: SDL_MouseMotionEvent,
}

impl_event_data!(MouseMotionEvent, |event_type| event_type
    == EventType::MOUSE_MOTION);

impl MouseMotionEvent {
    #[inline]
    pub const fn new(
        window_id: u32,
        which: u32,
        state: MouseButtonState,
        position: (i32, i32),
        relative: (i32, i32),
    ) -> Self {
        Self {
            inner: SDL_MouseMotionEvent {
                type_: SDL_MOUSEMOTION,
                timestamp: 0,
                windowID: window_id,
                which,
                state: state.bits(),
                x: position.0,
                y: position.1,
                xrel: relative.0,
                yrel: relative.1,
            },
        }
    }

    #[inline]
    pub const fn window_id(&self) -> u32 {
        self.inner.windowID
    }

    /// The mouse instance, or [`TOUCH_MOUSE_ID`].
    #[inline]
    pub const fn which(&self) -> u32 {
        self.inner.which
    }

    #[inline]
    pub const fn state(&self) -> MouseButtonState {
        MouseButtonState::from_bits_retain(self.inner.state)
    }

    /// The position of the cursor, relative to the window.
    #[inline]
    pub const fn position(&self) -> (i32, i32) {
        (self.inner.x, self.inner.y)
    }

    /// The motion since the last motion event.
    #[inline]
    pub const fn relative(&self) -> (i32, i32) {
        (self.inner.xrel, self.inner.yrel)
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_MouseMotionEvent {
        &self.inner
    }
}

impl Debug for MouseMotionEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MouseMotionEvent")
            .field("timestamp", &self.inner.timestamp)
            .field("window_id", &self.inner.windowID)
            .field("which", &self.inner.which)
            .field("state", &self.state())
            .field("position", &self.position())
            .field("relative", &self.relative())
            .finish()
    }
}

/// A mouse button press ([`EventType::MOUSE_BUTTON_DOWN`]) or release
/// ([`EventType::MOUSE_BUTTON_UP`]).
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct MouseButtonEvent {
    inner: SDL_MouseButtonEvent,
}

impl_event_data!(MouseButtonEvent, |event_type| matches!(
    event_type,
    EventType::MOUSE_BUTTON_DOWN | EventType::MOUSE_BUTTON_UP
));

impl MouseButtonEvent {
    /// Creates a new button event. Its type is picked from `state`.
    #[inline]
    pub const fn new(
        button: MouseButton,
        state: ButtonState,
        clicks: u8,
        window_id: u32,
        which: u32,
        x: i32,
        y: i32,
    ) -> Self {
        Self {
            inner: SDL_MouseButtonEvent {
                type_: if state.is_pressed() {
                    SDL_MOUSEBUTTONDOWN
                } else {
                    SDL_MOUSEBUTTONUP
                },
                timestamp: 0,
                windowID: window_id,
                which,
                button: button.0,
                state: state.to_raw(),
                clicks,
                padding1: 0,
                x,
                y,
            },
        }
    }

    #[inline]
    pub const fn window_id(&self) -> u32 {
        self.inner.windowID
    }

    #[inline]
    pub const fn which(&self) -> u32 {
        self.inner.which
    }

    #[inline]
    pub const fn button(&self) -> MouseButton {
        MouseButton(self.inner.button)
    }

    #[inline]
    pub const fn state(&self) -> ButtonState {
        ButtonState::from_raw(self.inner.state)
    }

    /// 1 for a single click, 2 for a double click, and so on.
    #[inline]
    pub const fn clicks(&self) -> u8 {
        self.inner.clicks
    }

    #[inline]
    pub const fn position(&self) -> (i32, i32) {
        (self.inner.x, self.inner.y)
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_MouseButtonEvent {
        &self.inner
    }
}

impl Debug for MouseButtonEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MouseButtonEvent")
            .field("event_type", &EventType::from_raw(self.inner.type_))
            .field("timestamp", &self.inner.timestamp)
            .field("window_id", &self.inner.windowID)
            .field("which", &self.inner.which)
            .field("button", &self.button())
            .field("state", &self.state())
            .field("clicks", &self.inner.clicks)
            .field("position", &self.position())
            .finish()
    }
}

/// Whether a wheel's deltas are reported as-is, or inverted by the system (e.g. "natural"
/// scrolling).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MouseWheelDirection {
    Normal,
    Flipped,
    Unknown(u32),
}

impl MouseWheelDirection {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            SDL_MOUSEWHEEL_NORMAL => Self::Normal,
            SDL_MOUSEWHEEL_FLIPPED => Self::Flipped,
            other => Self::Unknown(other),
        }
    }

    #[inline]
    pub const fn to_raw(self) -> u32 {
        match self {
            Self::Normal => SDL_MOUSEWHEEL_NORMAL,
            Self::Flipped => SDL_MOUSEWHEEL_FLIPPED,
            Self::Unknown(raw) => raw,
        }
    }
}

fn steps_as_f32(steps: i32) -> f32 {
    let clamped = steps.clamp(i32::from(i16::MIN), i32::from(i16::MAX));
    f32::from(i16::try_from(clamped).unwrap_or_default())
}

#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct MouseWheelEvent {
    inner: SDL_MouseWheelEvent,
}

impl_event_data!(MouseWheelEvent, |event_type| event_type == EventType::MOUSE_WHEEL);

impl MouseWheelEvent {
    /// Creates a new wheel event with whole-step deltas.
    ///
    /// The precise deltas are set to the same values, and the cursor position to the origin.
    pub fn new(window_id: u32, which: u32, x: i32, y: i32, direction: MouseWheelDirection) -> Self {
        Self {
            inner: SDL_MouseWheelEvent {
                type_: SDL_MOUSEWHEEL,
                timestamp: 0,
                windowID: window_id,
                which,
                x,
                y,
                direction: direction.to_raw(),
                preciseX: steps_as_f32(x),
                preciseY: steps_as_f32(y),
                mouseX: 0,
                mouseY: 0,
            },
        }
    }

    #[inline]
    pub fn with_precise(mut self, x: f32, y: f32) -> Self {
        self.inner.preciseX = x;
        self.inner.preciseY = y;
        self
    }

    #[inline]
    pub fn with_mouse_position(mut self, x: i32, y: i32) -> Self {
        self.inner.mouseX = x;
        self.inner.mouseY = y;
        self
    }

    #[inline]
    pub const fn window_id(&self) -> u32 {
        self.inner.windowID
    }

    #[inline]
    pub const fn which(&self) -> u32 {
        self.inner.which
    }

    /// The whole-step scroll amounts.
    ///
    /// Positive `x` is to the right, positive `y` is away from the user.
    #[inline]
    pub const fn delta(&self) -> (i32, i32) {
        (self.inner.x, self.inner.y)
    }

    #[inline]
    pub const fn precise_delta(&self) -> (f32, f32) {
        (self.inner.preciseX, self.inner.preciseY)
    }

    #[inline]
    pub const fn direction(&self) -> MouseWheelDirection {
        MouseWheelDirection::from_raw(self.inner.direction)
    }

    /// The cursor position at the time of the scroll, relative to the window.
    #[inline]
    pub const fn mouse_position(&self) -> (i32, i32) {
        (self.inner.mouseX, self.inner.mouseY)
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_MouseWheelEvent {
        &self.inner
    }
}

impl Debug for MouseWheelEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MouseWheelEvent")
            .field("timestamp", &self.inner.timestamp)
            .field("window_id", &self.inner.windowID)
            .field("which", &self.inner.which)
            .field("delta", &self.delta())
            .field("precise_delta", &self.precise_delta())
            .field("direction", &self.direction())
            .field("mouse_position", &self.mouse_position())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::{Event, EventData};

    #[test]
    fn button_release_decodes_as_mouse_button() {
        let raw =
            MouseButtonEvent::new(MouseButton::X1, ButtonState::Released, 1, 4, 0, 10, 20).to_raw();
        assert_eq!(raw.event_type(), EventType::MOUSE_BUTTON_UP);

        let Event::MouseButton(button) = raw.decode() else {
            panic!("expected a mouse button event")
        };
        assert_eq!(button.button(), MouseButton::X1);
        assert_eq!(button.state(), ButtonState::Released);
        assert_eq!(button.position(), (10, 20));
        assert_eq!(raw.as_bytes()[16], SDL_BUTTON_X1);
    }

    #[test]
    fn motion_state_is_a_button_mask() {
        let state = MouseButtonState::LEFT | MouseButtonState::X2;
        let raw = MouseMotionEvent::new(1, TOUCH_MOUSE_ID, state, (5, 6), (-1, 2)).to_raw();

        let Event::MouseMotion(motion) = raw.decode() else {
            panic!("expected a mouse motion event")
        };
        assert!(motion.state().contains(MouseButton::X2.mask().unwrap()));
        assert!(!motion.state().contains(MouseButtonState::RIGHT));
        assert_eq!(motion.which(), TOUCH_MOUSE_ID);
        assert_eq!(motion.relative(), (-1, 2));
        assert_eq!(MouseButton(0).mask(), None);
    }

    #[test]
    fn wheel_keeps_direction_and_precise_deltas() {
        let raw = MouseWheelEvent::new(2, 0, 0, -3, MouseWheelDirection::Flipped)
            .with_precise(0.25, -2.5)
            .with_mouse_position(100, 200)
            .to_raw();

        let Event::MouseWheel(wheel) = raw.decode() else {
            panic!("expected a mouse wheel event")
        };
        assert_eq!(wheel.delta(), (0, -3));
        assert_eq!(wheel.precise_delta(), (0.25, -2.5));
        assert_eq!(wheel.direction(), MouseWheelDirection::Flipped);
        assert_eq!(wheel.mouse_position(), (100, 200));
    }
}
