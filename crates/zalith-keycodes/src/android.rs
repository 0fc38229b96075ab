// Android `KeyEvent` -> GLFW translation for hardware keyboards.

use crate::glfw;

// Android KeyEvent constants
const KEYCODE_DPAD_UP: i32 = 19;
const KEYCODE_DPAD_DOWN: i32 = 20;
const KEYCODE_DPAD_LEFT: i32 = 21;
const KEYCODE_DPAD_RIGHT: i32 = 22;
const KEYCODE_DPAD_CENTER: i32 = 23;
const KEYCODE_0: i32 = 7;
const KEYCODE_9: i32 = 16;
const KEYCODE_A: i32 = 29;
const KEYCODE_Z: i32 = 54;
const KEYCODE_COMMA: i32 = 55;
const KEYCODE_PERIOD: i32 = 56;
const KEYCODE_ALT_LEFT: i32 = 57;
const KEYCODE_ALT_RIGHT: i32 = 58;
const KEYCODE_SHIFT_LEFT: i32 = 59;
const KEYCODE_SHIFT_RIGHT: i32 = 60;
const KEYCODE_TAB: i32 = 61;
const KEYCODE_SPACE: i32 = 62;
const KEYCODE_ENTER: i32 = 66;
const KEYCODE_DEL: i32 = 67; // Backspace
const KEYCODE_GRAVE: i32 = 68;
const KEYCODE_MINUS: i32 = 69;
const KEYCODE_EQUALS: i32 = 70;
const KEYCODE_LEFT_BRACKET: i32 = 71;
const KEYCODE_RIGHT_BRACKET: i32 = 72;
const KEYCODE_BACKSLASH: i32 = 73;
const KEYCODE_SEMICOLON: i32 = 74;
const KEYCODE_APOSTROPHE: i32 = 75;
const KEYCODE_SLASH: i32 = 76;
const KEYCODE_MENU: i32 = 82;
const KEYCODE_PAGE_UP: i32 = 92;
const KEYCODE_PAGE_DOWN: i32 = 93;
const KEYCODE_ESCAPE: i32 = 111;
const KEYCODE_FORWARD_DEL: i32 = 112;
const KEYCODE_CTRL_LEFT: i32 = 113;
const KEYCODE_CTRL_RIGHT: i32 = 114;
const KEYCODE_CAPS_LOCK: i32 = 115;
const KEYCODE_SCROLL_LOCK: i32 = 116;
const KEYCODE_META_LEFT: i32 = 117;
const KEYCODE_META_RIGHT: i32 = 118;
const KEYCODE_SYSRQ: i32 = 120;
const KEYCODE_BREAK: i32 = 121;
const KEYCODE_MOVE_HOME: i32 = 122;
const KEYCODE_MOVE_END: i32 = 123;
const KEYCODE_INSERT: i32 = 124;
const KEYCODE_F1: i32 = 131;
const KEYCODE_F12: i32 = 142;
const KEYCODE_NUM_LOCK: i32 = 143;
const KEYCODE_NUMPAD_0: i32 = 144;
const KEYCODE_NUMPAD_9: i32 = 153;
const KEYCODE_NUMPAD_DIVIDE: i32 = 154;
const KEYCODE_NUMPAD_MULTIPLY: i32 = 155;
const KEYCODE_NUMPAD_SUBTRACT: i32 = 156;
const KEYCODE_NUMPAD_ADD: i32 = 157;
const KEYCODE_NUMPAD_DOT: i32 = 158;
const KEYCODE_NUMPAD_ENTER: i32 = 160;
const KEYCODE_NUMPAD_EQUALS: i32 = 161;

// Android KeyEvent meta state bits
pub const META_SHIFT_ON: i32 = 0x1;
pub const META_ALT_ON: i32 = 0x2;
pub const META_CTRL_ON: i32 = 0x1000;
pub const META_META_ON: i32 = 0x10000;
pub const META_CAPS_LOCK_ON: i32 = 0x100000;
pub const META_NUM_LOCK_ON: i32 = 0x200000;

/// Convert an Android keycode to the GLFW key the game expects.
///
/// Returns `None` for keys with no desktop counterpart (volume, back, gamepad
/// buttons); those stay with the host UI.
pub fn glfw_from_android(key_code: i32) -> Option<i32> {
    let key = match key_code {
        KEYCODE_0..=KEYCODE_9 => glfw::KEY_0 + (key_code - KEYCODE_0),
        KEYCODE_A..=KEYCODE_Z => glfw::KEY_A + (key_code - KEYCODE_A),
        KEYCODE_F1..=KEYCODE_F12 => glfw::KEY_F1 + (key_code - KEYCODE_F1),
        KEYCODE_NUMPAD_0..=KEYCODE_NUMPAD_9 => glfw::KEY_KP_0 + (key_code - KEYCODE_NUMPAD_0),
        KEYCODE_DPAD_UP => glfw::KEY_UP,
        KEYCODE_DPAD_DOWN => glfw::KEY_DOWN,
        KEYCODE_DPAD_LEFT => glfw::KEY_LEFT,
        KEYCODE_DPAD_RIGHT => glfw::KEY_RIGHT,
        KEYCODE_DPAD_CENTER | KEYCODE_ENTER => glfw::KEY_ENTER,
        KEYCODE_COMMA => glfw::KEY_COMMA,
        KEYCODE_PERIOD => glfw::KEY_PERIOD,
        KEYCODE_ALT_LEFT => glfw::KEY_LEFT_ALT,
        KEYCODE_ALT_RIGHT => glfw::KEY_RIGHT_ALT,
        KEYCODE_SHIFT_LEFT => glfw::KEY_LEFT_SHIFT,
        KEYCODE_SHIFT_RIGHT => glfw::KEY_RIGHT_SHIFT,
        KEYCODE_TAB => glfw::KEY_TAB,
        KEYCODE_SPACE => glfw::KEY_SPACE,
        KEYCODE_DEL => glfw::KEY_BACKSPACE,
        KEYCODE_GRAVE => glfw::KEY_GRAVE_ACCENT,
        KEYCODE_MINUS => glfw::KEY_MINUS,
        KEYCODE_EQUALS => glfw::KEY_EQUAL,
        KEYCODE_LEFT_BRACKET => glfw::KEY_LEFT_BRACKET,
        KEYCODE_RIGHT_BRACKET => glfw::KEY_RIGHT_BRACKET,
        KEYCODE_BACKSLASH => glfw::KEY_BACKSLASH,
        KEYCODE_SEMICOLON => glfw::KEY_SEMICOLON,
        KEYCODE_APOSTROPHE => glfw::KEY_APOSTROPHE,
        KEYCODE_SLASH => glfw::KEY_SLASH,
        KEYCODE_MENU => glfw::KEY_MENU,
        KEYCODE_PAGE_UP => glfw::KEY_PAGE_UP,
        KEYCODE_PAGE_DOWN => glfw::KEY_PAGE_DOWN,
        KEYCODE_ESCAPE => glfw::KEY_ESCAPE,
        KEYCODE_FORWARD_DEL => glfw::KEY_DELETE,
        KEYCODE_CTRL_LEFT => glfw::KEY_LEFT_CONTROL,
        KEYCODE_CTRL_RIGHT => glfw::KEY_RIGHT_CONTROL,
        KEYCODE_CAPS_LOCK => glfw::KEY_CAPS_LOCK,
        KEYCODE_SCROLL_LOCK => glfw::KEY_SCROLL_LOCK,
        KEYCODE_META_LEFT => glfw::KEY_LEFT_SUPER,
        KEYCODE_META_RIGHT => glfw::KEY_RIGHT_SUPER,
        KEYCODE_SYSRQ => glfw::KEY_PRINT_SCREEN,
        KEYCODE_BREAK => glfw::KEY_PAUSE,
        KEYCODE_MOVE_HOME => glfw::KEY_HOME,
        KEYCODE_MOVE_END => glfw::KEY_END,
        KEYCODE_INSERT => glfw::KEY_INSERT,
        KEYCODE_NUM_LOCK => glfw::KEY_NUM_LOCK,
        KEYCODE_NUMPAD_DIVIDE => glfw::KEY_KP_DIVIDE,
        KEYCODE_NUMPAD_MULTIPLY => glfw::KEY_KP_MULTIPLY,
        KEYCODE_NUMPAD_SUBTRACT => glfw::KEY_KP_SUBTRACT,
        KEYCODE_NUMPAD_ADD => glfw::KEY_KP_ADD,
        KEYCODE_NUMPAD_DOT => glfw::KEY_KP_DECIMAL,
        KEYCODE_NUMPAD_ENTER => glfw::KEY_KP_ENTER,
        KEYCODE_NUMPAD_EQUALS => glfw::KEY_KP_EQUAL,
        _ => return None,
    };
    Some(key)
}

/// Convert an Android `KeyEvent.getMetaState()` value to a GLFW modifier mask.
pub fn mods_from_android_meta(meta_state: i32) -> i32 {
    let mut mods = 0;
    if meta_state & META_SHIFT_ON != 0 {
        mods |= glfw::MOD_SHIFT;
    }
    if meta_state & META_CTRL_ON != 0 {
        mods |= glfw::MOD_CONTROL;
    }
    if meta_state & META_ALT_ON != 0 {
        mods |= glfw::MOD_ALT;
    }
    if meta_state & META_META_ON != 0 {
        mods |= glfw::MOD_SUPER;
    }
    if meta_state & META_CAPS_LOCK_ON != 0 {
        mods |= glfw::MOD_CAPS_LOCK;
    }
    if meta_state & META_NUM_LOCK_ON != 0 {
        mods |= glfw::MOD_NUM_LOCK;
    }
    mods
}
