use core::ffi::CStr;
use core::fmt;
use sdl_events_sys::SDL_EventFunctions;

/// Errors reported by SDL's event subsystem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EventError {
    /// An SDL function returned a negative error code.
    Native {
        /// The code SDL returned.
        code: i32,
        /// The message SDL reported through `SDL_GetError`.
        message: String,
    },
    /// Waiting for an event failed, with the message SDL reported.
    WaitFailed(String),
    /// The event subsystem could not be initialized, with the message SDL reported.
    InitFailed(String),
}

impl EventError {
    /// Builds a [`Native`](Self::Native) error from an SDL return code, capturing SDL's
    /// current error message.
    pub(crate) fn native(functions: &SDL_EventFunctions, code: i32) -> Self {
        Self::Native {
            code,
            message: last_error(functions),
        }
    }
}

/// Reads SDL's last error message for the current thread.
pub(crate) fn last_error(functions: &SDL_EventFunctions) -> String {
    // SAFETY: SDL_GetError has no preconditions.
    let message = unsafe { (functions.SDL_GetError)() };

    if message.is_null() {
        return String::new();
    }

    // SAFETY: SDL guarantees a non-null error message is a valid C string, which lives until the
    // next SDL call on this thread. It is copied right away.
    let message = unsafe { CStr::from_ptr(message) }
        .to_string_lossy()
        .into_owned();

    tracing::debug!(%message, "SDL reported an error");
    message
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Native { code, message } if message.is_empty() => {
                write!(f, "SDL call failed with code {code}")
            }
            Self::Native { code, message } => {
                write!(f, "SDL call failed with code {code}: {message}")
            }
            Self::WaitFailed(message) => write!(f, "Failed to wait for an event: {message}"),
            Self::InitFailed(message) => {
                write!(f, "Failed to initialize the SDL event subsystem: {message}")
            }
        }
    }
}

impl std::error::Error for EventError {}
