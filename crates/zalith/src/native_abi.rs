//! C ABI consumed by the game runtime's GLFW shim.
//!
//! The shim polls forward events with [`zl_poll_event`] on its own thread and
//! calls the `zl_on_*` / `zl_access_clipboard` functions when the game wants
//! something from the host. Every entry point is a no-op (or returns a neutral
//! value) until the host has installed the bridge.

use std::ffi::{CStr, CString, c_char};
use std::ptr;

use zalith_bridge::NativeCommand;

use crate::runtime;

pub const ZL_EVENT_CHAR: i32 = 1;
pub const ZL_EVENT_CHAR_MODS: i32 = 2;
pub const ZL_EVENT_KEY: i32 = 3;
pub const ZL_EVENT_CURSOR_POS: i32 = 4;
pub const ZL_EVENT_MOUSE_BUTTON: i32 = 5;
pub const ZL_EVENT_SCROLL: i32 = 6;
pub const ZL_EVENT_SCREEN_SIZE: i32 = 7;
pub const ZL_EVENT_WINDOW_ATTRIB: i32 = 8;
pub const ZL_EVENT_INPUT_QUEUE_MODE: i32 = 9;

/// One forward event, flattened to plain numbers.
///
/// | kind | i1 | i2 | i3 | i4 | x | y |
/// |---|---|---|---|---|---|---|
/// | CHAR | codepoint | | | | | |
/// | CHAR_MODS | codepoint | mods | | | | |
/// | KEY | key | scancode | action | mods | | |
/// | CURSOR_POS | | | | | x | y |
/// | MOUSE_BUTTON | button | action | mods | | | |
/// | SCROLL | | | | | xoffset | yoffset |
/// | SCREEN_SIZE | width | height | | | | |
/// | WINDOW_ATTRIB | attrib | value | | | | |
/// | INPUT_QUEUE_MODE | use stack queue (0/1) | | | | | |
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZlInputEvent {
    pub kind: i32,
    pub i1: i32,
    pub i2: i32,
    pub i3: i32,
    pub i4: i32,
    pub x: f64,
    pub y: f64,
}

impl From<NativeCommand> for ZlInputEvent {
    fn from(command: NativeCommand) -> Self {
        let empty = ZlInputEvent::default();
        match command {
            NativeCommand::Char { codepoint } => ZlInputEvent {
                kind: ZL_EVENT_CHAR,
                i1: codepoint as i32,
                ..empty
            },
            NativeCommand::CharMods { codepoint, mods } => ZlInputEvent {
                kind: ZL_EVENT_CHAR_MODS,
                i1: codepoint as i32,
                i2: mods,
                ..empty
            },
            NativeCommand::Key {
                key,
                scancode,
                action,
                mods,
            } => ZlInputEvent {
                kind: ZL_EVENT_KEY,
                i1: key,
                i2: scancode,
                i3: action,
                i4: mods,
                ..empty
            },
            NativeCommand::CursorPos { x, y } => ZlInputEvent {
                kind: ZL_EVENT_CURSOR_POS,
                x: f64::from(x),
                y: f64::from(y),
                ..empty
            },
            NativeCommand::MouseButton {
                button,
                action,
                mods,
            } => ZlInputEvent {
                kind: ZL_EVENT_MOUSE_BUTTON,
                i1: button,
                i2: action,
                i3: mods,
                ..empty
            },
            NativeCommand::Scroll { x, y } => ZlInputEvent {
                kind: ZL_EVENT_SCROLL,
                x,
                y,
                ..empty
            },
            NativeCommand::ScreenSize { width, height } => ZlInputEvent {
                kind: ZL_EVENT_SCREEN_SIZE,
                i1: width,
                i2: height,
                ..empty
            },
            NativeCommand::WindowAttrib { attrib, value } => ZlInputEvent {
                kind: ZL_EVENT_WINDOW_ATTRIB,
                i1: attrib,
                i2: value,
                ..empty
            },
            NativeCommand::InputQueueMode { use_stack_queue } => ZlInputEvent {
                kind: ZL_EVENT_INPUT_QUEUE_MODE,
                i1: use_stack_queue as i32,
                ..empty
            },
        }
    }
}

/// Pop the oldest forward event into `out`. Returns false when the queue is
/// empty, the bridge is not installed, or `out` is null.
///
/// # Safety
/// `out` must be null or point to writable memory for one `ZlInputEvent`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zl_poll_event(out: *mut ZlInputEvent) -> bool {
    if out.is_null() {
        return false;
    }
    let Some(command) = runtime::runtime().and_then(|rt| rt.events.try_pop()) else {
        return false;
    };
    unsafe { out.write(ZlInputEvent::from(command)) };
    true
}

/// Report the frame rate measured by the runtime's buffer-swap loop.
#[unsafe(no_mangle)]
pub extern "C" fn zl_report_fps(fps: i32) {
    if let Some(rt) = runtime::runtime() {
        rt.events.report_fps(fps);
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn zl_on_grab_state_changed(grabbing: bool) {
    match runtime::bridge() {
        Some(bridge) => bridge.on_grab_state_changed(grabbing),
        None => log::warn!("Grab change before bridge init: {}", grabbing),
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn zl_on_cursor_shape_changed(shape: i32) {
    match runtime::bridge() {
        Some(bridge) => bridge.on_cursor_shape_changed(shape),
        None => log::warn!("Cursor shape change before bridge init: {:#x}", shape),
    }
}

/// Clipboard copy (2000), paste (2001) or open-link (2002).
///
/// Returns a string owned by the caller (free it with [`zl_free_string`]) for
/// paste, and null for everything else.
///
/// # Safety
/// `payload` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zl_access_clipboard(op: i32, payload: *const c_char) -> *mut c_char {
    let payload = if payload.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(payload) }.to_string_lossy().into_owned()
    };

    let Some(bridge) = runtime::bridge() else {
        log::warn!("Clipboard access before bridge init: {}", op);
        return ptr::null_mut();
    };

    match bridge.access_clipboard(op, &payload) {
        // Interior NULs cannot cross the C boundary; cut the text there.
        Some(text) => {
            let text = text.split('\0').next().unwrap_or_default();
            CString::new(text).map_or(ptr::null_mut(), CString::into_raw)
        }
        None => ptr::null_mut(),
    }
}

/// Release a string returned by [`zl_access_clipboard`].
///
/// # Safety
/// `text` must be null or a pointer previously returned by this library and
/// not yet freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zl_free_string(text: *mut c_char) {
    if !text.is_null() {
        drop(unsafe { CString::from_raw(text) });
    }
}
