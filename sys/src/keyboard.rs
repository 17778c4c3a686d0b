use core::ffi::c_int;
use core::mem::size_of;

pub type SDL_Scancode = c_int;
pub type SDL_Keycode = i32;
pub type SDL_Keymod = u16;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_Keysym {
    pub scancode: SDL_Scancode,
    pub sym: SDL_Keycode,
    pub mod_: u16,
    pub padding: u16,
    pub unused: u32,
}

pub const KMOD_NONE: SDL_Keymod = 0x0000;
pub const KMOD_LSHIFT: SDL_Keymod = 0x0001;
pub const KMOD_RSHIFT: SDL_Keymod = 0x0002;
pub const KMOD_LCTRL: SDL_Keymod = 0x0040;
pub const KMOD_RCTRL: SDL_Keymod = 0x0080;
pub const KMOD_LALT: SDL_Keymod = 0x0100;
pub const KMOD_RALT: SDL_Keymod = 0x0200;
pub const KMOD_LGUI: SDL_Keymod = 0x0400;
pub const KMOD_RGUI: SDL_Keymod = 0x0800;
pub const KMOD_NUM: SDL_Keymod = 0x1000;
pub const KMOD_CAPS: SDL_Keymod = 0x2000;
pub const KMOD_MODE: SDL_Keymod = 0x4000;
pub const KMOD_SCROLL: SDL_Keymod = 0x8000;

pub const SDLK_SCANCODE_MASK: SDL_Keycode = 1 << 30;

static_assertions::assert_eq_size!(SDL_Keysym, [u8; 16]);
// No implicit padding: every byte belongs to a field.
static_assertions::const_assert_eq!(size_of::<SDL_Keysym>(), 4 + 4 + 2 + 2 + 4);
