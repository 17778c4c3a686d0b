use crate::keyboard::SDL_Keysym;
use crate::{SDL_FingerID, SDL_GestureID, SDL_JoystickID, SDL_TouchID};
use core::ffi::{c_char, c_int, c_void};
use core::mem::{align_of, offset_of, size_of};

pub type SDL_EventType = u32;

pub const SDL_FIRSTEVENT: SDL_EventType = 0;

pub const SDL_QUIT: SDL_EventType = 0x100;
pub const SDL_APP_TERMINATING: SDL_EventType = 0x101;
pub const SDL_APP_LOWMEMORY: SDL_EventType = 0x102;
pub const SDL_APP_WILLENTERBACKGROUND: SDL_EventType = 0x103;
pub const SDL_APP_DIDENTERBACKGROUND: SDL_EventType = 0x104;
pub const SDL_APP_WILLENTERFOREGROUND: SDL_EventType = 0x105;
pub const SDL_APP_DIDENTERFOREGROUND: SDL_EventType = 0x106;
pub const SDL_LOCALECHANGED: SDL_EventType = 0x107;

pub const SDL_DISPLAYEVENT: SDL_EventType = 0x150;

pub const SDL_WINDOWEVENT: SDL_EventType = 0x200;
pub const SDL_SYSWMEVENT: SDL_EventType = 0x201;

pub const SDL_KEYDOWN: SDL_EventType = 0x300;
pub const SDL_KEYUP: SDL_EventType = 0x301;
pub const SDL_TEXTEDITING: SDL_EventType = 0x302;
pub const SDL_TEXTINPUT: SDL_EventType = 0x303;
pub const SDL_KEYMAPCHANGED: SDL_EventType = 0x304;
pub const SDL_TEXTEDITING_EXT: SDL_EventType = 0x305;

pub const SDL_MOUSEMOTION: SDL_EventType = 0x400;
pub const SDL_MOUSEBUTTONDOWN: SDL_EventType = 0x401;
pub const SDL_MOUSEBUTTONUP: SDL_EventType = 0x402;
pub const SDL_MOUSEWHEEL: SDL_EventType = 0x403;

pub const SDL_JOYAXISMOTION: SDL_EventType = 0x600;
pub const SDL_JOYBALLMOTION: SDL_EventType = 0x601;
pub const SDL_JOYHATMOTION: SDL_EventType = 0x602;
pub const SDL_JOYBUTTONDOWN: SDL_EventType = 0x603;
pub const SDL_JOYBUTTONUP: SDL_EventType = 0x604;
pub const SDL_JOYDEVICEADDED: SDL_EventType = 0x605;
pub const SDL_JOYDEVICEREMOVED: SDL_EventType = 0x606;
pub const SDL_JOYBATTERYUPDATED: SDL_EventType = 0x607;

pub const SDL_CONTROLLERAXISMOTION: SDL_EventType = 0x650;
pub const SDL_CONTROLLERBUTTONDOWN: SDL_EventType = 0x651;
pub const SDL_CONTROLLERBUTTONUP: SDL_EventType = 0x652;
pub const SDL_CONTROLLERDEVICEADDED: SDL_EventType = 0x653;
pub const SDL_CONTROLLERDEVICEREMOVED: SDL_EventType = 0x654;
pub const SDL_CONTROLLERDEVICEREMAPPED: SDL_EventType = 0x655;
pub const SDL_CONTROLLERTOUCHPADDOWN: SDL_EventType = 0x656;
pub const SDL_CONTROLLERTOUCHPADMOTION: SDL_EventType = 0x657;
pub const SDL_CONTROLLERTOUCHPADUP: SDL_EventType = 0x658;
pub const SDL_CONTROLLERSENSORUPDATE: SDL_EventType = 0x659;

pub const SDL_FINGERDOWN: SDL_EventType = 0x700;
pub const SDL_FINGERUP: SDL_EventType = 0x701;
pub const SDL_FINGERMOTION: SDL_EventType = 0x702;

pub const SDL_DOLLARGESTURE: SDL_EventType = 0x800;
pub const SDL_DOLLARRECORD: SDL_EventType = 0x801;
pub const SDL_MULTIGESTURE: SDL_EventType = 0x802;

pub const SDL_CLIPBOARDUPDATE: SDL_EventType = 0x900;

pub const SDL_DROPFILE: SDL_EventType = 0x1000;
pub const SDL_DROPTEXT: SDL_EventType = 0x1001;
pub const SDL_DROPBEGIN: SDL_EventType = 0x1002;
pub const SDL_DROPCOMPLETE: SDL_EventType = 0x1003;

pub const SDL_AUDIODEVICEADDED: SDL_EventType = 0x1100;
pub const SDL_AUDIODEVICEREMOVED: SDL_EventType = 0x1101;

pub const SDL_SENSORUPDATE: SDL_EventType = 0x1200;

pub const SDL_RENDER_TARGETS_RESET: SDL_EventType = 0x2000;
pub const SDL_RENDER_DEVICE_RESET: SDL_EventType = 0x2001;

pub const SDL_POLLSENTINEL: SDL_EventType = 0x7F00;

pub const SDL_USEREVENT: SDL_EventType = 0x8000;
pub const SDL_LASTEVENT: SDL_EventType = 0xFFFF;

pub type SDL_eventaction = c_int;
pub const SDL_ADDEVENT: SDL_eventaction = 0;
pub const SDL_PEEKEVENT: SDL_eventaction = 1;
pub const SDL_GETEVENT: SDL_eventaction = 2;

pub const SDL_QUERY: c_int = -1;
pub const SDL_IGNORE: c_int = 0;
pub const SDL_DISABLE: c_int = 0;
pub const SDL_ENABLE: c_int = 1;

pub const SDL_TEXTEDITINGEVENT_TEXT_SIZE: usize = 32;
pub const SDL_TEXTINPUTEVENT_TEXT_SIZE: usize = 32;

pub const SDL_MOUSEWHEEL_NORMAL: u32 = 0;
pub const SDL_MOUSEWHEEL_FLIPPED: u32 = 1;

pub const SDL_WINDOWEVENT_NONE: u8 = 0;
pub const SDL_WINDOWEVENT_SHOWN: u8 = 1;
pub const SDL_WINDOWEVENT_HIDDEN: u8 = 2;
pub const SDL_WINDOWEVENT_EXPOSED: u8 = 3;
pub const SDL_WINDOWEVENT_MOVED: u8 = 4;
pub const SDL_WINDOWEVENT_RESIZED: u8 = 5;
pub const SDL_WINDOWEVENT_SIZE_CHANGED: u8 = 6;
pub const SDL_WINDOWEVENT_MINIMIZED: u8 = 7;
pub const SDL_WINDOWEVENT_MAXIMIZED: u8 = 8;
pub const SDL_WINDOWEVENT_RESTORED: u8 = 9;
pub const SDL_WINDOWEVENT_ENTER: u8 = 10;
pub const SDL_WINDOWEVENT_LEAVE: u8 = 11;
pub const SDL_WINDOWEVENT_FOCUS_GAINED: u8 = 12;
pub const SDL_WINDOWEVENT_FOCUS_LOST: u8 = 13;
pub const SDL_WINDOWEVENT_CLOSE: u8 = 14;
pub const SDL_WINDOWEVENT_TAKE_FOCUS: u8 = 15;
pub const SDL_WINDOWEVENT_HIT_TEST: u8 = 16;
pub const SDL_WINDOWEVENT_ICCPROF_CHANGED: u8 = 17;
pub const SDL_WINDOWEVENT_DISPLAY_CHANGED: u8 = 18;

pub const SDL_BUTTON_LEFT: u8 = 1;
pub const SDL_BUTTON_MIDDLE: u8 = 2;
pub const SDL_BUTTON_RIGHT: u8 = 3;
pub const SDL_BUTTON_X1: u8 = 4;
pub const SDL_BUTTON_X2: u8 = 5;

pub const SDL_BUTTON_LMASK: u32 = 1 << (SDL_BUTTON_LEFT - 1);
pub const SDL_BUTTON_MMASK: u32 = 1 << (SDL_BUTTON_MIDDLE - 1);
pub const SDL_BUTTON_RMASK: u32 = 1 << (SDL_BUTTON_RIGHT - 1);
pub const SDL_BUTTON_X1MASK: u32 = 1 << (SDL_BUTTON_X1 - 1);
pub const SDL_BUTTON_X2MASK: u32 = 1 << (SDL_BUTTON_X2 - 1);

pub const SDL_HAT_CENTERED: u8 = 0x00;
pub const SDL_HAT_UP: u8 = 0x01;
pub const SDL_HAT_RIGHT: u8 = 0x02;
pub const SDL_HAT_DOWN: u8 = 0x04;
pub const SDL_HAT_LEFT: u8 = 0x08;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_CommonEvent {
    pub type_: u32,
    pub timestamp: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_WindowEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub windowID: u32,
    pub event: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub data1: i32,
    pub data2: i32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_KeyboardEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub windowID: u32,
    pub state: u8,
    pub repeat: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub keysym: SDL_Keysym,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_TextEditingEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub windowID: u32,
    pub text: [c_char; SDL_TEXTEDITINGEVENT_TEXT_SIZE],
    pub start: i32,
    pub length: i32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_TextInputEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub windowID: u32,
    pub text: [c_char; SDL_TEXTINPUTEVENT_TEXT_SIZE],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_MouseMotionEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub windowID: u32,
    pub which: u32,
    pub state: u32,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_MouseButtonEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub windowID: u32,
    pub which: u32,
    pub button: u8,
    pub state: u8,
    pub clicks: u8,
    pub padding1: u8,
    pub x: i32,
    pub y: i32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_MouseWheelEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub windowID: u32,
    pub which: u32,
    pub x: i32,
    pub y: i32,
    pub direction: u32,
    pub preciseX: f32,
    pub preciseY: f32,
    pub mouseX: i32,
    pub mouseY: i32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_JoyAxisEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub which: SDL_JoystickID,
    pub axis: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub value: i16,
    pub padding4: u16,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_JoyBallEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub which: SDL_JoystickID,
    pub ball: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub xrel: i16,
    pub yrel: i16,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_JoyHatEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub which: SDL_JoystickID,
    pub hat: u8,
    pub value: u8,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_JoyButtonEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub which: SDL_JoystickID,
    pub button: u8,
    pub state: u8,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_JoyDeviceEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub which: i32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_ControllerAxisEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub which: SDL_JoystickID,
    pub axis: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub value: i16,
    pub padding4: u16,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_ControllerButtonEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub which: SDL_JoystickID,
    pub button: u8,
    pub state: u8,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_ControllerDeviceEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub which: i32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_TouchFingerEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub touchId: SDL_TouchID,
    pub fingerId: SDL_FingerID,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub pressure: f32,
    pub windowID: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_MultiGestureEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub touchId: SDL_TouchID,
    pub dTheta: f32,
    pub dDist: f32,
    pub x: f32,
    pub y: f32,
    pub numFingers: u16,
    pub padding: u16,
    pub tail_padding: [u8; MULTIGESTURE_TAIL_PADDING],
}

const MULTIGESTURE_FIELDS_SIZE: usize = 8 + size_of::<SDL_TouchID>() + 4 * 4 + 2 + 2;

/// The bytes C compilers add after `SDL_MultiGestureEvent`'s last field.
pub const MULTIGESTURE_TAIL_PADDING: usize =
    MULTIGESTURE_FIELDS_SIZE.next_multiple_of(align_of::<SDL_TouchID>()) - MULTIGESTURE_FIELDS_SIZE;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_DollarGestureEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub touchId: SDL_TouchID,
    pub gestureId: SDL_GestureID,
    pub numFingers: u32,
    pub error: f32,
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_DropEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub file: *mut c_char,
    pub windowID: u32,
    pub tail_padding: [u8; DROP_TAIL_PADDING],
}

const DROP_FIELDS_SIZE: usize = 8 + size_of::<*mut c_char>() + 4;

/// The bytes C compilers add after `SDL_DropEvent`'s last field.
pub const DROP_TAIL_PADDING: usize =
    DROP_FIELDS_SIZE.next_multiple_of(align_of::<*mut c_char>()) - DROP_FIELDS_SIZE;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_QuitEvent {
    pub type_: u32,
    pub timestamp: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_UserEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub windowID: u32,
    pub code: i32,
    pub data1: *mut c_void,
    pub data2: *mut c_void,
}

/// Opaque, platform-specific window manager message.
#[repr(C)]
pub struct SDL_SysWMmsg {
    _private: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_SysWMEvent {
    pub type_: u32,
    pub timestamp: u32,
    pub msg: *mut SDL_SysWMmsg,
}

pub const SDL_EVENT_PADDING_SIZE: usize = if size_of::<*const c_void>() <= 8 {
    56
} else if size_of::<*const c_void>() == 16 {
    64
} else {
    3 * size_of::<*const c_void>()
};

#[repr(C)]
#[derive(Copy, Clone)]
pub union SDL_Event {
    pub type_: u32,
    pub common: SDL_CommonEvent,
    pub window: SDL_WindowEvent,
    pub key: SDL_KeyboardEvent,
    pub edit: SDL_TextEditingEvent,
    pub text: SDL_TextInputEvent,
    pub motion: SDL_MouseMotionEvent,
    pub button: SDL_MouseButtonEvent,
    pub wheel: SDL_MouseWheelEvent,
    pub jaxis: SDL_JoyAxisEvent,
    pub jball: SDL_JoyBallEvent,
    pub jhat: SDL_JoyHatEvent,
    pub jbutton: SDL_JoyButtonEvent,
    pub jdevice: SDL_JoyDeviceEvent,
    pub caxis: SDL_ControllerAxisEvent,
    pub cbutton: SDL_ControllerButtonEvent,
    pub cdevice: SDL_ControllerDeviceEvent,
    pub quit: SDL_QuitEvent,
    pub user: SDL_UserEvent,
    pub syswm: SDL_SysWMEvent,
    pub tfinger: SDL_TouchFingerEvent,
    pub mgesture: SDL_MultiGestureEvent,
    pub dgesture: SDL_DollarGestureEvent,
    pub drop: SDL_DropEvent,
    pub padding: [u8; SDL_EVENT_PADDING_SIZE],
}

static_assertions::assert_eq_size!(SDL_Event, [u8; SDL_EVENT_PADDING_SIZE]);
#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
static_assertions::const_assert_eq!(size_of::<SDL_Event>(), 56);

static_assertions::const_assert_eq!(size_of::<SDL_CommonEvent>(), 8);
static_assertions::const_assert_eq!(size_of::<SDL_WindowEvent>(), 24);
static_assertions::const_assert_eq!(size_of::<SDL_KeyboardEvent>(), 32);
static_assertions::const_assert_eq!(size_of::<SDL_TextEditingEvent>(), 52);
static_assertions::const_assert_eq!(size_of::<SDL_TextInputEvent>(), 44);
static_assertions::const_assert_eq!(size_of::<SDL_MouseMotionEvent>(), 36);
static_assertions::const_assert_eq!(size_of::<SDL_MouseButtonEvent>(), 28);
static_assertions::const_assert_eq!(size_of::<SDL_MouseWheelEvent>(), 44);
static_assertions::const_assert_eq!(size_of::<SDL_JoyAxisEvent>(), 20);
static_assertions::const_assert_eq!(size_of::<SDL_JoyBallEvent>(), 20);
static_assertions::const_assert_eq!(size_of::<SDL_JoyHatEvent>(), 16);
static_assertions::const_assert_eq!(size_of::<SDL_JoyButtonEvent>(), 16);
static_assertions::const_assert_eq!(size_of::<SDL_JoyDeviceEvent>(), 12);
static_assertions::const_assert_eq!(size_of::<SDL_ControllerAxisEvent>(), 20);

static_assertions::const_assert_eq!(offset_of!(SDL_CommonEvent, timestamp), 4);
static_assertions::const_assert_eq!(offset_of!(SDL_KeyboardEvent, keysym), 16);
static_assertions::const_assert_eq!(offset_of!(SDL_TextEditingEvent, start), 44);
static_assertions::const_assert_eq!(offset_of!(SDL_MouseButtonEvent, x), 20);
static_assertions::const_assert_eq!(offset_of!(SDL_JoyAxisEvent, value), 16);
static_assertions::const_assert_eq!(offset_of!(SDL_TouchFingerEvent, touchId), 8);
static_assertions::const_assert_eq!(offset_of!(SDL_TouchFingerEvent, windowID), 44);
static_assertions::const_assert_eq!(offset_of!(SDL_DollarGestureEvent, numFingers), 24);
static_assertions::const_assert_eq!(offset_of!(SDL_UserEvent, code), 12);

// Structs built by safe code must not have implicit padding, which a typed copy leaves
// uninitialized.
static_assertions::const_assert_eq!(
    size_of::<SDL_MultiGestureEvent>(),
    MULTIGESTURE_FIELDS_SIZE + MULTIGESTURE_TAIL_PADDING
);
static_assertions::const_assert_eq!(
    size_of::<SDL_DropEvent>(),
    DROP_FIELDS_SIZE + DROP_TAIL_PADDING
);
static_assertions::const_assert_eq!(offset_of!(SDL_DropEvent, file), 8);
static_assertions::const_assert_eq!(offset_of!(SDL_MultiGestureEvent, dTheta), 16);
