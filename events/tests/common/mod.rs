use sdl_events::prelude::*;
use sdl_events_test_queue::TestQueue;
use std::ops::Deref;

/// An [`EventSubsystem`] over the emulated queue, which removes every filter and watch when it
/// goes out of scope, even if the test panicked.
///
/// It must be declared after the [`TestQueue`] guard, so it is dropped while the queue is still
/// held.
pub struct Subsystem(EventSubsystem<'static>);

impl Deref for Subsystem {
    type Target = EventSubsystem<'static>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for Subsystem {
    fn drop(&mut self) {
        self.0.clear_callbacks();
    }
}

pub fn subsystem(queue: &TestQueue) -> Subsystem {
    // SAFETY: the emulated queue implements the whole event API.
    Subsystem(unsafe { EventSubsystem::from_raw(queue.functions()) })
}
