use crate::events::{SDL_Event, SDL_eventaction};
use crate::SDL_bool;
use core::ffi::{c_char, c_int, c_void};

pub type SDL_EventFilter =
    Option<unsafe extern "C" fn(userdata: *mut c_void, event: *mut SDL_Event) -> c_int>;

/// The set of SDL2 entry points the event subsystem relies on.
///
/// Every field is named after, and has the exact signature of, the SDL2 function of the same name.
/// A table can be filled from a dynamically loaded SDL2 library, or by any other implementation of
/// the same C API.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_EventFunctions {
    pub SDL_InitSubSystem: unsafe extern "C" fn(flags: u32) -> c_int,
    pub SDL_QuitSubSystem: unsafe extern "C" fn(flags: u32),
    pub SDL_GetError: unsafe extern "C" fn() -> *const c_char,
    pub SDL_free: unsafe extern "C" fn(mem: *mut c_void),

    pub SDL_PumpEvents: unsafe extern "C" fn(),
    pub SDL_PeepEvents: unsafe extern "C" fn(
        events: *mut SDL_Event,
        numevents: c_int,
        action: SDL_eventaction,
        minType: u32,
        maxType: u32,
    ) -> c_int,
    pub SDL_HasEvent: unsafe extern "C" fn(type_: u32) -> SDL_bool,
    pub SDL_HasEvents: unsafe extern "C" fn(minType: u32, maxType: u32) -> SDL_bool,
    pub SDL_FlushEvent: unsafe extern "C" fn(type_: u32),
    pub SDL_FlushEvents: unsafe extern "C" fn(minType: u32, maxType: u32),
    pub SDL_PollEvent: unsafe extern "C" fn(event: *mut SDL_Event) -> c_int,
    pub SDL_WaitEvent: unsafe extern "C" fn(event: *mut SDL_Event) -> c_int,
    pub SDL_WaitEventTimeout: unsafe extern "C" fn(event: *mut SDL_Event, timeout: c_int) -> c_int,
    pub SDL_PushEvent: unsafe extern "C" fn(event: *mut SDL_Event) -> c_int,

    pub SDL_SetEventFilter: unsafe extern "C" fn(filter: SDL_EventFilter, userdata: *mut c_void),
    pub SDL_GetEventFilter:
        unsafe extern "C" fn(filter: *mut SDL_EventFilter, userdata: *mut *mut c_void) -> SDL_bool,
    pub SDL_AddEventWatch: unsafe extern "C" fn(filter: SDL_EventFilter, userdata: *mut c_void),
    pub SDL_DelEventWatch: unsafe extern "C" fn(filter: SDL_EventFilter, userdata: *mut c_void),
    pub SDL_FilterEvents: unsafe extern "C" fn(filter: SDL_EventFilter, userdata: *mut c_void),

    pub SDL_EventState: unsafe extern "C" fn(type_: u32, state: c_int) -> u8,
    pub SDL_RegisterEvents: unsafe extern "C" fn(numevents: c_int) -> u32,
}
