//! Safe bindings to SDL2's event subsystem.
//!
//! This crate covers everything in `SDL_events.h`:
//! * Decoding SDL's raw event union into typed, zero-copy views (see the [`event`] module);
//! * The event queue itself: pumping, polling, waiting, peeking and pushing events
//!   ([`EventSubsystem`](subsystem::EventSubsystem));
//! * Event filters and event watches, which let Rust closures observe (and drop) events as SDL
//!   queues them (see the [`filter`] module).
//!
//! SDL2 itself is loaded at runtime (see [`SdlLibrary`](library::SdlLibrary)), so no SDL2
//! development files are needed to build this crate. Any other implementation of SDL's C API can
//! also be plugged in through [`EventSubsystem::from_raw`](subsystem::EventSubsystem::from_raw).
//!
//! ```no_run
//! use sdl_events::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // SAFETY: this loads the system's SDL2 library.
//! let sdl = unsafe { SdlLibrary::load()? };
//! let events = sdl.events()?;
//!
//! events.set_filter_fn(|event: &Event<'_>| !matches!(event, Event::MouseMotion(_)));
//!
//! while let Ok(raw) = events.wait_event() {
//!     match raw.decode() {
//!         Event::Quit(_) => break,
//!         Event::KeyDown(key) => println!("Pressed {:?}", key.keysym().keycode()),
//!         other => println!("{other:?}"),
//!     }
//! }
//!
//! events.clear_filter();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod event;
pub mod filter;
#[cfg(feature = "libloading")]
pub mod library;
pub mod subsystem;

pub mod prelude;

pub use sdl_events_sys as sys;
