use crate::event::{EventType, impl_event_data};
use sdl_events_sys::*;
use std::fmt::{Debug, Formatter};

/// A touch device.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct TouchId(pub SDL_TouchID);

/// A single finger on a touch device.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct FingerId(pub SDL_FingerID);

/// A recorded dollar gesture template.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct GestureId(pub SDL_GestureID);

/// A finger touching, lifting from, or moving on a touch device.
///
/// Coordinates are normalized to the `0.0..=1.0` range.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct TouchFingerEvent {
    inner: SDL_TouchFingerEvent,
}

impl_event_data!(TouchFingerEvent, |event_type| matches!(
    event_type,
    EventType::FINGER_DOWN | EventType::FINGER_UP | EventType::FINGER_MOTION
));

impl TouchFingerEvent {
    /// # Panics
    ///
    /// Panics if `event_type` isn't a finger event type.
    #[inline]
    pub const fn new(
        event_type: EventType,
        touch_id: TouchId,
        finger_id: FingerId,
        position: (f32, f32),
        delta: (f32, f32),
        pressure: f32,
        window_id: u32,
    ) -> Self {
        assert!(
            matches!(
                event_type.to_raw(),
                SDL_FINGERDOWN | SDL_FINGERUP | SDL_FINGERMOTION
            ),
            "Not a touch finger event type"
        );

        Self {
            inner: SDL_TouchFingerEvent {
                type_: event_type.to_raw(),
                timestamp: 0,
                touchId: touch_id.0,
                fingerId: finger_id.0,
                x: position.0,
                y: position.1,
                dx: delta.0,
                dy: delta.1,
                pressure,
                windowID: window_id,
            },
        }
    }

    #[inline]
    pub const fn touch_id(&self) -> TouchId {
        TouchId(self.inner.touchId)
    }

    #[inline]
    pub const fn finger_id(&self) -> FingerId {
        FingerId(self.inner.fingerId)
    }

    #[inline]
    pub const fn position(&self) -> (f32, f32) {
        (self.inner.x, self.inner.y)
    }

    #[inline]
    pub const fn delta(&self) -> (f32, f32) {
        (self.inner.dx, self.inner.dy)
    }

    #[inline]
    pub const fn pressure(&self) -> f32 {
        self.inner.pressure
    }

    /// The window underneath the finger, or 0 if there is none.
    #[inline]
    pub const fn window_id(&self) -> u32 {
        self.inner.windowID
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_TouchFingerEvent {
        &self.inner
    }
}

impl Debug for TouchFingerEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TouchFingerEvent")
            .field("event_type", &EventType::from_raw(self.inner.type_))
            .field("timestamp", &self.inner.timestamp)
            .field("touch_id", &self.inner.touchId)
            .field("finger_id", &self.inner.fingerId)
            .field("position", &self.position())
            .field("delta", &self.delta())
            .field("pressure", &self.inner.pressure)
            .field("window_id", &self.inner.windowID)
            .finish()
    }
}

/// A pinch or rotation made with multiple fingers.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct MultiGestureEvent {
    inner: SDL_MultiGestureEvent,
}

impl_event_data!(MultiGestureEvent, |event_type| event_type
    == EventType::MULTI_GESTURE);

impl MultiGestureEvent {
    #[inline]
    pub const fn new(
        touch_id: TouchId,
        rotation: f32,
        pinch: f32,
        center: (f32, f32),
        finger_count: u16,
    ) -> Self {
        Self {
            inner: SDL_MultiGestureEvent {
                type_: SDL_MULTIGESTURE,
                timestamp: 0,
                touchId: touch_id.0,
                dTheta: rotation,
                dDist: pinch,
                x: center.0,
                y: center.1,
                numFingers: finger_count,
                padding: 0,
                tail_padding: [0; MULTIGESTURE_TAIL_PADDING],
            },
        }
    }

    #[inline]
    pub const fn touch_id(&self) -> TouchId {
        TouchId(self.inner.touchId)
    }

    /// The amount of rotation, in radians.
    #[inline]
    pub const fn rotation(&self) -> f32 {
        self.inner.dTheta
    }

    #[inline]
    pub const fn pinch(&self) -> f32 {
        self.inner.dDist
    }

    /// The normalized center of the gesture.
    #[inline]
    pub const fn center(&self) -> (f32, f32) {
        (self.inner.x, self.inner.y)
    }

    #[inline]
    pub const fn finger_count(&self) -> u16 {
        self.inner.numFingers
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_MultiGestureEvent {
        &self.inner
    }
}

impl Debug for MultiGestureEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiGestureEvent")
            .field("timestamp", &self.inner.timestamp)
            .field("touch_id", &self.inner.touchId)
            .field("rotation", &self.inner.dTheta)
            .field("pinch", &self.inner.dDist)
            .field("center", &self.center())
            .field("finger_count", &self.inner.numFingers)
            .finish()
    }
}

/// A dollar gesture being recognized ([`EventType::DOLLAR_GESTURE`]) or recorded
/// ([`EventType::DOLLAR_RECORD`]).
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct DollarGestureEvent {
    inner: SDL_DollarGestureEvent,
}

impl_event_data!(DollarGestureEvent, |event_type| matches!(
    event_type,
    EventType::DOLLAR_GESTURE | EventType::DOLLAR_RECORD
));

impl DollarGestureEvent {
    #[inline]
    pub const fn new(
        recorded: bool,
        touch_id: TouchId,
        gesture_id: GestureId,
        finger_count: u32,
        error: f32,
        center: (f32, f32),
    ) -> Self {
        Self {
            inner: SDL_DollarGestureEvent {
                type_: if recorded {
                    SDL_DOLLARRECORD
                } else {
                    SDL_DOLLARGESTURE
                },
                timestamp: 0,
                touchId: touch_id.0,
                gestureId: gesture_id.0,
                numFingers: finger_count,
                error,
                x: center.0,
                y: center.1,
            },
        }
    }

    #[inline]
    pub const fn is_record(&self) -> bool {
        self.inner.type_ == SDL_DOLLARRECORD
    }

    #[inline]
    pub const fn touch_id(&self) -> TouchId {
        TouchId(self.inner.touchId)
    }

    #[inline]
    pub const fn gesture_id(&self) -> GestureId {
        GestureId(self.inner.gestureId)
    }

    #[inline]
    pub const fn finger_count(&self) -> u32 {
        self.inner.numFingers
    }

    /// How far the performed gesture was from the template. Lower is closer.
    #[inline]
    pub const fn error(&self) -> f32 {
        self.inner.error
    }

    #[inline]
    pub const fn center(&self) -> (f32, f32) {
        (self.inner.x, self.inner.y)
    }

    #[inline]
    pub const fn as_raw(&self) -> &SDL_DollarGestureEvent {
        &self.inner
    }
}

impl Debug for DollarGestureEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DollarGestureEvent")
            .field("event_type", &EventType::from_raw(self.inner.type_))
            .field("timestamp", &self.inner.timestamp)
            .field("touch_id", &self.inner.touchId)
            .field("gesture_id", &self.inner.gestureId)
            .field("finger_count", &self.inner.numFingers)
            .field("error", &self.inner.error)
            .field("center", &self.center())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::{Event, EventData};

    #[test]
    fn multi_gesture_tail_is_zeroed() {
        let raw = MultiGestureEvent::new(TouchId(1), 0.5, -0.5, (0.25, 0.75), 3).to_raw();

        assert!(raw.as_bytes()[36..].iter().all(|b| *b == 0));
    }

    #[test]
    fn finger_fields_keep_their_offsets() {
        let raw = TouchFingerEvent::new(
            EventType::FINGER_MOTION,
            TouchId(-1),
            FingerId(1 << 40),
            (0.5, 0.25),
            (0.0, -0.125),
            1.0,
            12,
        )
        .to_raw();

        assert_eq!(raw.as_bytes()[8..16], (-1i64).to_ne_bytes());
        assert_eq!(raw.as_bytes()[16..24], (1i64 << 40).to_ne_bytes());
        assert_eq!(raw.as_bytes()[44..48], 12u32.to_ne_bytes());

        let Event::TouchFinger(finger) = raw.decode() else {
            panic!("expected a touch finger event")
        };
        assert_eq!(finger.finger_id(), FingerId(1 << 40));
        assert_eq!(finger.delta(), (0.0, -0.125));
        assert_eq!(finger.window_id(), 12);
    }

    #[test]
    fn dollar_record_shares_the_gesture_layout() {
        let raw = DollarGestureEvent::new(true, TouchId(1), GestureId(99), 3, 0.5, (0.1, 0.2))
            .to_raw();

        let Event::DollarGesture(gesture) = raw.decode() else {
            panic!("expected a dollar gesture event")
        };
        assert!(gesture.is_record());
        assert_eq!(gesture.gesture_id(), GestureId(99));
        assert_eq!(gesture.finger_count(), 3);
        assert_eq!(raw.as_bytes()[24..28], 3u32.to_ne_bytes());
    }

    #[test]
    fn multi_gesture_decodes() {
        let raw = MultiGestureEvent::new(TouchId(4), 0.5, -0.25, (0.5, 0.5), 2).to_raw();

        let Event::MultiGesture(gesture) = raw.decode() else {
            panic!("expected a multi gesture event")
        };
        assert_eq!(gesture.touch_id(), TouchId(4));
        assert_eq!(gesture.pinch(), -0.25);
        assert_eq!(gesture.finger_count(), 2);
    }
}
