//! Loading SDL2 dynamically at runtime.
//!
//! This uses the [`libloading`] library under the hood. It will not be available if the associated
//! `libloading` Cargo feature of `sdl-events` is not enabled.

use crate::error::{EventError, last_error};
use crate::subsystem::EventSubsystem;
use libloading::Library;
use sdl_events_sys::{SDL_EventFunctions, SDL_INIT_EVENTS};
use std::error::Error;
use std::ffi::OsStr;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

mod paths;

pub use paths::{SDL2_LIBRARY_VAR, standard_sdl2_paths};

/// Errors that can occur while loading the SDL2 library.
#[derive(Debug)]
pub enum LibraryError {
    /// The dynamic library file could not be loaded.
    ///
    /// This contains the error type from the underlying
    /// [`libloading`](https://crates.io/crates/libloading) library.
    LoadingFailed(libloading::Error),
    /// The library was loaded, but lacks one of SDL's event functions.
    MissingSymbol {
        /// The name of the missing function.
        name: &'static str,
        /// The underlying error.
        source: libloading::Error,
    },
    /// None of the standard SDL2 library locations could be loaded.
    NotFound(Vec<PathBuf>),
}

impl Error for LibraryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LibraryError::LoadingFailed(e) => Some(e),
            LibraryError::MissingSymbol { source, .. } => Some(source),
            LibraryError::NotFound(_) => None,
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LibraryError::LoadingFailed(e) => write!(f, "Failed to load the SDL2 library: {e}"),
            LibraryError::MissingSymbol { name, source } => {
                write!(f, "SDL2 library has no '{name}' function: {source}")
            }
            LibraryError::NotFound(paths) => {
                write!(f, "Could not find the SDL2 library (tried: ")?;
                for (i, path) in paths.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", path.display())?;
                }
                f.write_str(")")
            }
        }
    }
}

/// # Safety
///
/// The symbol must be a function whose signature matches `T`.
unsafe fn symbol<T: Copy>(library: &Library, name: &'static str) -> Result<T, LibraryError> {
    library
        .get::<T>(name.as_bytes())
        .map(|symbol| *symbol)
        .map_err(|source| LibraryError::MissingSymbol { name, source })
}

macro_rules! load_functions {
    ($library:expr, $($name:ident),* $(,)?) => {
        SDL_EventFunctions {
            $($name: symbol($library, stringify!($name))?,)*
        }
    };
}

/// A dynamically loaded SDL2 library.
///
/// The event subsystem is initialized on the first call to [`events`](Self::events), and shut down
/// when this is dropped.
pub struct SdlLibrary {
    functions: SDL_EventFunctions,
    initialized: Mutex<bool>,
    _library: Library,
}

impl SdlLibrary {
    /// Loads SDL2 from the first location of [`standard_sdl2_paths`] that can be loaded.
    ///
    /// # Errors
    ///
    /// This function will return an error if no location could be loaded, or if the loaded
    /// library lacks any of SDL's event functions.
    ///
    /// # Safety
    ///
    /// This function loads an external library object file, which is inherently unsafe, as even
    /// just loading it can trigger any behavior in your application, including Undefined Behavior.
    ///
    /// The loaded library must also be a genuine SDL2 library.
    pub unsafe fn load() -> Result<Self, LibraryError> {
        let paths = standard_sdl2_paths();

        for path in &paths {
            match Library::new(path) {
                Ok(library) => {
                    tracing::debug!(path = %path.display(), "Loaded SDL2 library");
                    return Self::load_from_library(library);
                }
                Err(error) => {
                    tracing::debug!(path = %path.display(), %error, "Could not load SDL2 library");
                }
            }
        }

        Err(LibraryError::NotFound(paths))
    }

    /// Loads SDL2 from the dynamic library file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if the library file could not be loaded, or if it lacks
    /// any of SDL's event functions.
    ///
    /// # Safety
    ///
    /// Same as [`load`](Self::load).
    pub unsafe fn load_from_path(path: impl AsRef<OsStr>) -> Result<Self, LibraryError> {
        let library = Library::new(path).map_err(LibraryError::LoadingFailed)?;

        Self::load_from_library(library)
    }

    /// Wraps an already loaded SDL2 library, resolving all of its event functions.
    ///
    /// # Errors
    ///
    /// This function will return an error if the library lacks any of SDL's event functions.
    ///
    /// # Safety
    ///
    /// Users of this function must ensure the given library is a genuine SDL2 library, whose
    /// functions are ABI compatible with [`SDL_EventFunctions`].
    pub unsafe fn load_from_library(library: Library) -> Result<Self, LibraryError> {
        let functions = load_functions!(
            &library,
            SDL_InitSubSystem,
            SDL_QuitSubSystem,
            SDL_GetError,
            SDL_free,
            SDL_PumpEvents,
            SDL_PeepEvents,
            SDL_HasEvent,
            SDL_HasEvents,
            SDL_FlushEvent,
            SDL_FlushEvents,
            SDL_PollEvent,
            SDL_WaitEvent,
            SDL_WaitEventTimeout,
            SDL_PushEvent,
            SDL_SetEventFilter,
            SDL_GetEventFilter,
            SDL_AddEventWatch,
            SDL_DelEventWatch,
            SDL_FilterEvents,
            SDL_EventState,
            SDL_RegisterEvents,
        );

        Ok(Self {
            functions,
            initialized: Mutex::new(false),
            _library: library,
        })
    }

    #[inline]
    pub fn functions(&self) -> &SDL_EventFunctions {
        &self.functions
    }

    /// Returns a handle to SDL's event subsystem, initializing it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InitFailed`] if SDL could not initialize its event subsystem.
    pub fn events(&self) -> Result<EventSubsystem<'_>, EventError> {
        let mut initialized = self.initialized.lock().unwrap_or_else(PoisonError::into_inner);

        if !*initialized {
            // SAFETY: the function comes from a genuine SDL2 library, as guaranteed by the loader.
            let result = unsafe { (self.functions.SDL_InitSubSystem)(SDL_INIT_EVENTS) };
            if result < 0 {
                return Err(EventError::InitFailed(last_error(&self.functions)));
            }

            tracing::debug!("Initialized the SDL event subsystem");
            *initialized = true;
        }

        // SAFETY: the event subsystem is initialized until this library is dropped, which the
        // returned handle cannot outlive.
        Ok(unsafe { EventSubsystem::from_raw(&self.functions) })
    }
}

impl Drop for SdlLibrary {
    fn drop(&mut self) {
        let initialized = self.initialized.get_mut().unwrap_or_else(PoisonError::into_inner);

        if *initialized {
            // SAFETY: InitSubSystem was successfully called once, and is balanced here.
            unsafe { (self.functions.SDL_QuitSubSystem)(SDL_INIT_EVENTS) };
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_file_fails_to_load() {
        // SAFETY: the file doesn't exist, so nothing gets loaded.
        let result = unsafe { SdlLibrary::load_from_path("/nonexistent/libSDL2-missing.so") };

        assert!(matches!(result, Err(LibraryError::LoadingFailed(_))));
    }

    #[test]
    fn not_found_lists_every_tried_path() {
        let error = LibraryError::NotFound(vec!["a.so".into(), "b.so".into()]);

        assert_eq!(
            error.to_string(),
            "Could not find the SDL2 library (tried: a.so, b.so)"
        );
        assert!(error.source().is_none());
    }
}
