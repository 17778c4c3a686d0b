//! Raw C layouts for the SDL2 event subsystem (`SDL_events.h`).
//!
//! Every struct in this crate is ABI-compatible with its SDL2 counterpart, and keeps SDL's own
//! field names. Nothing here is safe to use on its own: see the `sdl-events` crate for the safe
//! wrappers.

#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]

pub mod events;
pub mod functions;
pub mod keyboard;

pub use events::*;
pub use functions::*;
pub use keyboard::*;

pub type SDL_bool = core::ffi::c_int;
pub const SDL_FALSE: SDL_bool = 0;
pub const SDL_TRUE: SDL_bool = 1;

pub type SDL_JoystickID = i32;
pub type SDL_TouchID = i64;
pub type SDL_FingerID = i64;
pub type SDL_GestureID = i64;

pub const SDL_RELEASED: u8 = 0;
pub const SDL_PRESSED: u8 = 1;

pub const SDL_INIT_EVENTS: u32 = 0x0000_4000;
