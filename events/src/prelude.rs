//! Re-exports of the most commonly used types.

pub use crate::error::EventError;
pub use crate::event::{
    ButtonState, CommonEvent, Event, EventData, EventType, RawEvent, UserEvent,
};
pub use crate::filter::{EventFilter, EventWatchHandle};
#[cfg(feature = "libloading")]
pub use crate::library::{LibraryError, SdlLibrary};
pub use crate::subsystem::{EventState, EventSubsystem, PushStatus};
