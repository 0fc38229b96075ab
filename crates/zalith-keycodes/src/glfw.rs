// GLFW key, modifier and mouse-button constants, plus the two lookup tables
// the control layouts use: symbolic name -> code, and code -> display label.
//
// Control layouts store keys by their GLFW constant name ("GLFW_KEY_A") so the
// files stay readable and survive renumbering on the native side.

use std::collections::HashMap;

use once_cell::sync::Lazy;

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

pub const KEY_UNKNOWN: i32 = -1;
pub const KEY_SPACE: i32 = 32;
pub const KEY_APOSTROPHE: i32 = 39;
pub const KEY_COMMA: i32 = 44;
pub const KEY_MINUS: i32 = 45;
pub const KEY_PERIOD: i32 = 46;
pub const KEY_SLASH: i32 = 47;
pub const KEY_0: i32 = 48;
pub const KEY_1: i32 = 49;
pub const KEY_2: i32 = 50;
pub const KEY_3: i32 = 51;
pub const KEY_4: i32 = 52;
pub const KEY_5: i32 = 53;
pub const KEY_6: i32 = 54;
pub const KEY_7: i32 = 55;
pub const KEY_8: i32 = 56;
pub const KEY_9: i32 = 57;
pub const KEY_SEMICOLON: i32 = 59;
pub const KEY_EQUAL: i32 = 61;
pub const KEY_A: i32 = 65;
pub const KEY_B: i32 = 66;
pub const KEY_C: i32 = 67;
pub const KEY_D: i32 = 68;
pub const KEY_E: i32 = 69;
pub const KEY_F: i32 = 70;
pub const KEY_G: i32 = 71;
pub const KEY_H: i32 = 72;
pub const KEY_I: i32 = 73;
pub const KEY_J: i32 = 74;
pub const KEY_K: i32 = 75;
pub const KEY_L: i32 = 76;
pub const KEY_M: i32 = 77;
pub const KEY_N: i32 = 78;
pub const KEY_O: i32 = 79;
pub const KEY_P: i32 = 80;
pub const KEY_Q: i32 = 81;
pub const KEY_R: i32 = 82;
pub const KEY_S: i32 = 83;
pub const KEY_T: i32 = 84;
pub const KEY_U: i32 = 85;
pub const KEY_V: i32 = 86;
pub const KEY_W: i32 = 87;
pub const KEY_X: i32 = 88;
pub const KEY_Y: i32 = 89;
pub const KEY_Z: i32 = 90;
pub const KEY_LEFT_BRACKET: i32 = 91;
pub const KEY_BACKSLASH: i32 = 92;
pub const KEY_RIGHT_BRACKET: i32 = 93;
pub const KEY_GRAVE_ACCENT: i32 = 96;
pub const KEY_WORLD_1: i32 = 161;
pub const KEY_WORLD_2: i32 = 162;
pub const KEY_ESCAPE: i32 = 256;
pub const KEY_ENTER: i32 = 257;
pub const KEY_TAB: i32 = 258;
pub const KEY_BACKSPACE: i32 = 259;
pub const KEY_INSERT: i32 = 260;
pub const KEY_DELETE: i32 = 261;
pub const KEY_RIGHT: i32 = 262;
pub const KEY_LEFT: i32 = 263;
pub const KEY_DOWN: i32 = 264;
pub const KEY_UP: i32 = 265;
pub const KEY_PAGE_UP: i32 = 266;
pub const KEY_PAGE_DOWN: i32 = 267;
pub const KEY_HOME: i32 = 268;
pub const KEY_END: i32 = 269;
pub const KEY_CAPS_LOCK: i32 = 280;
pub const KEY_SCROLL_LOCK: i32 = 281;
pub const KEY_NUM_LOCK: i32 = 282;
pub const KEY_PRINT_SCREEN: i32 = 283;
pub const KEY_PAUSE: i32 = 284;
pub const KEY_F1: i32 = 290;
pub const KEY_F2: i32 = 291;
pub const KEY_F3: i32 = 292;
pub const KEY_F4: i32 = 293;
pub const KEY_F5: i32 = 294;
pub const KEY_F6: i32 = 295;
pub const KEY_F7: i32 = 296;
pub const KEY_F8: i32 = 297;
pub const KEY_F9: i32 = 298;
pub const KEY_F10: i32 = 299;
pub const KEY_F11: i32 = 300;
pub const KEY_F12: i32 = 301;
pub const KEY_F13: i32 = 302;
pub const KEY_F14: i32 = 303;
pub const KEY_F15: i32 = 304;
pub const KEY_F16: i32 = 305;
pub const KEY_F17: i32 = 306;
pub const KEY_F18: i32 = 307;
pub const KEY_F19: i32 = 308;
pub const KEY_F20: i32 = 309;
pub const KEY_F21: i32 = 310;
pub const KEY_F22: i32 = 311;
pub const KEY_F23: i32 = 312;
pub const KEY_F24: i32 = 313;
pub const KEY_F25: i32 = 314;
pub const KEY_KP_0: i32 = 320;
pub const KEY_KP_1: i32 = 321;
pub const KEY_KP_2: i32 = 322;
pub const KEY_KP_3: i32 = 323;
pub const KEY_KP_4: i32 = 324;
pub const KEY_KP_5: i32 = 325;
pub const KEY_KP_6: i32 = 326;
pub const KEY_KP_7: i32 = 327;
pub const KEY_KP_8: i32 = 328;
pub const KEY_KP_9: i32 = 329;
pub const KEY_KP_DECIMAL: i32 = 330;
pub const KEY_KP_DIVIDE: i32 = 331;
pub const KEY_KP_MULTIPLY: i32 = 332;
pub const KEY_KP_SUBTRACT: i32 = 333;
pub const KEY_KP_ADD: i32 = 334;
pub const KEY_KP_ENTER: i32 = 335;
pub const KEY_KP_EQUAL: i32 = 336;
pub const KEY_LEFT_SHIFT: i32 = 340;
pub const KEY_LEFT_CONTROL: i32 = 341;
pub const KEY_LEFT_ALT: i32 = 342;
pub const KEY_LEFT_SUPER: i32 = 343;
pub const KEY_RIGHT_SHIFT: i32 = 344;
pub const KEY_RIGHT_CONTROL: i32 = 345;
pub const KEY_RIGHT_ALT: i32 = 346;
pub const KEY_RIGHT_SUPER: i32 = 347;
pub const KEY_MENU: i32 = 348;
pub const KEY_LAST: i32 = 348;

// ---------------------------------------------------------------------------
// Modifier bits
// ---------------------------------------------------------------------------

pub const MOD_SHIFT: i32 = 0x0001;
pub const MOD_CONTROL: i32 = 0x0002;
pub const MOD_ALT: i32 = 0x0004;
pub const MOD_SUPER: i32 = 0x0008;
pub const MOD_CAPS_LOCK: i32 = 0x0010;
pub const MOD_NUM_LOCK: i32 = 0x0020;

// ---------------------------------------------------------------------------
// Mouse buttons
// ---------------------------------------------------------------------------

pub const MOUSE_BUTTON_1: i32 = 0;
pub const MOUSE_BUTTON_2: i32 = 1;
pub const MOUSE_BUTTON_3: i32 = 2;
pub const MOUSE_BUTTON_4: i32 = 3;
pub const MOUSE_BUTTON_5: i32 = 4;
pub const MOUSE_BUTTON_6: i32 = 5;
pub const MOUSE_BUTTON_7: i32 = 6;
pub const MOUSE_BUTTON_8: i32 = 7;
pub const MOUSE_BUTTON_LAST: i32 = 7;
pub const MOUSE_BUTTON_LEFT: i32 = 0;
pub const MOUSE_BUTTON_RIGHT: i32 = 1;
pub const MOUSE_BUTTON_MIDDLE: i32 = 2;

// ---------------------------------------------------------------------------
// Window attributes and actions
// ---------------------------------------------------------------------------

pub const HOVERED: i32 = 0x0002_000B;

pub const RELEASE: i32 = 0;
pub const PRESS: i32 = 1;

/// Every named constant a control layout may reference.
///
/// Modifier bits and mouse buttons share numeric values with some keys, so the
/// reverse direction only exists for keys (see [`label_for_key`]).
const NAMED: &[(&str, i32)] = &[
    ("GLFW_KEY_UNKNOWN", KEY_UNKNOWN),
    ("GLFW_KEY_SPACE", KEY_SPACE),
    ("GLFW_KEY_APOSTROPHE", KEY_APOSTROPHE),
    ("GLFW_KEY_COMMA", KEY_COMMA),
    ("GLFW_KEY_MINUS", KEY_MINUS),
    ("GLFW_KEY_PERIOD", KEY_PERIOD),
    ("GLFW_KEY_SLASH", KEY_SLASH),
    ("GLFW_KEY_0", KEY_0),
    ("GLFW_KEY_1", KEY_1),
    ("GLFW_KEY_2", KEY_2),
    ("GLFW_KEY_3", KEY_3),
    ("GLFW_KEY_4", KEY_4),
    ("GLFW_KEY_5", KEY_5),
    ("GLFW_KEY_6", KEY_6),
    ("GLFW_KEY_7", KEY_7),
    ("GLFW_KEY_8", KEY_8),
    ("GLFW_KEY_9", KEY_9),
    ("GLFW_KEY_SEMICOLON", KEY_SEMICOLON),
    ("GLFW_KEY_EQUAL", KEY_EQUAL),
    ("GLFW_KEY_A", KEY_A),
    ("GLFW_KEY_B", KEY_B),
    ("GLFW_KEY_C", KEY_C),
    ("GLFW_KEY_D", KEY_D),
    ("GLFW_KEY_E", KEY_E),
    ("GLFW_KEY_F", KEY_F),
    ("GLFW_KEY_G", KEY_G),
    ("GLFW_KEY_H", KEY_H),
    ("GLFW_KEY_I", KEY_I),
    ("GLFW_KEY_J", KEY_J),
    ("GLFW_KEY_K", KEY_K),
    ("GLFW_KEY_L", KEY_L),
    ("GLFW_KEY_M", KEY_M),
    ("GLFW_KEY_N", KEY_N),
    ("GLFW_KEY_O", KEY_O),
    ("GLFW_KEY_P", KEY_P),
    ("GLFW_KEY_Q", KEY_Q),
    ("GLFW_KEY_R", KEY_R),
    ("GLFW_KEY_S", KEY_S),
    ("GLFW_KEY_T", KEY_T),
    ("GLFW_KEY_U", KEY_U),
    ("GLFW_KEY_V", KEY_V),
    ("GLFW_KEY_W", KEY_W),
    ("GLFW_KEY_X", KEY_X),
    ("GLFW_KEY_Y", KEY_Y),
    ("GLFW_KEY_Z", KEY_Z),
    ("GLFW_KEY_LEFT_BRACKET", KEY_LEFT_BRACKET),
    ("GLFW_KEY_BACKSLASH", KEY_BACKSLASH),
    ("GLFW_KEY_RIGHT_BRACKET", KEY_RIGHT_BRACKET),
    ("GLFW_KEY_GRAVE_ACCENT", KEY_GRAVE_ACCENT),
    ("GLFW_KEY_WORLD_1", KEY_WORLD_1),
    ("GLFW_KEY_WORLD_2", KEY_WORLD_2),
    ("GLFW_KEY_ESCAPE", KEY_ESCAPE),
    ("GLFW_KEY_ENTER", KEY_ENTER),
    ("GLFW_KEY_TAB", KEY_TAB),
    ("GLFW_KEY_BACKSPACE", KEY_BACKSPACE),
    ("GLFW_KEY_INSERT", KEY_INSERT),
    ("GLFW_KEY_DELETE", KEY_DELETE),
    ("GLFW_KEY_RIGHT", KEY_RIGHT),
    ("GLFW_KEY_LEFT", KEY_LEFT),
    ("GLFW_KEY_DOWN", KEY_DOWN),
    ("GLFW_KEY_UP", KEY_UP),
    ("GLFW_KEY_PAGE_UP", KEY_PAGE_UP),
    ("GLFW_KEY_PAGE_DOWN", KEY_PAGE_DOWN),
    ("GLFW_KEY_HOME", KEY_HOME),
    ("GLFW_KEY_END", KEY_END),
    ("GLFW_KEY_CAPS_LOCK", KEY_CAPS_LOCK),
    ("GLFW_KEY_SCROLL_LOCK", KEY_SCROLL_LOCK),
    ("GLFW_KEY_NUM_LOCK", KEY_NUM_LOCK),
    ("GLFW_KEY_PRINT_SCREEN", KEY_PRINT_SCREEN),
    ("GLFW_KEY_PAUSE", KEY_PAUSE),
    ("GLFW_KEY_F1", KEY_F1),
    ("GLFW_KEY_F2", KEY_F2),
    ("GLFW_KEY_F3", KEY_F3),
    ("GLFW_KEY_F4", KEY_F4),
    ("GLFW_KEY_F5", KEY_F5),
    ("GLFW_KEY_F6", KEY_F6),
    ("GLFW_KEY_F7", KEY_F7),
    ("GLFW_KEY_F8", KEY_F8),
    ("GLFW_KEY_F9", KEY_F9),
    ("GLFW_KEY_F10", KEY_F10),
    ("GLFW_KEY_F11", KEY_F11),
    ("GLFW_KEY_F12", KEY_F12),
    ("GLFW_KEY_F13", KEY_F13),
    ("GLFW_KEY_F14", KEY_F14),
    ("GLFW_KEY_F15", KEY_F15),
    ("GLFW_KEY_F16", KEY_F16),
    ("GLFW_KEY_F17", KEY_F17),
    ("GLFW_KEY_F18", KEY_F18),
    ("GLFW_KEY_F19", KEY_F19),
    ("GLFW_KEY_F20", KEY_F20),
    ("GLFW_KEY_F21", KEY_F21),
    ("GLFW_KEY_F22", KEY_F22),
    ("GLFW_KEY_F23", KEY_F23),
    ("GLFW_KEY_F24", KEY_F24),
    ("GLFW_KEY_F25", KEY_F25),
    ("GLFW_KEY_KP_0", KEY_KP_0),
    ("GLFW_KEY_KP_1", KEY_KP_1),
    ("GLFW_KEY_KP_2", KEY_KP_2),
    ("GLFW_KEY_KP_3", KEY_KP_3),
    ("GLFW_KEY_KP_4", KEY_KP_4),
    ("GLFW_KEY_KP_5", KEY_KP_5),
    ("GLFW_KEY_KP_6", KEY_KP_6),
    ("GLFW_KEY_KP_7", KEY_KP_7),
    ("GLFW_KEY_KP_8", KEY_KP_8),
    ("GLFW_KEY_KP_9", KEY_KP_9),
    ("GLFW_KEY_KP_DECIMAL", KEY_KP_DECIMAL),
    ("GLFW_KEY_KP_DIVIDE", KEY_KP_DIVIDE),
    ("GLFW_KEY_KP_MULTIPLY", KEY_KP_MULTIPLY),
    ("GLFW_KEY_KP_SUBTRACT", KEY_KP_SUBTRACT),
    ("GLFW_KEY_KP_ADD", KEY_KP_ADD),
    ("GLFW_KEY_KP_ENTER", KEY_KP_ENTER),
    ("GLFW_KEY_KP_EQUAL", KEY_KP_EQUAL),
    ("GLFW_KEY_LEFT_SHIFT", KEY_LEFT_SHIFT),
    ("GLFW_KEY_LEFT_CONTROL", KEY_LEFT_CONTROL),
    ("GLFW_KEY_LEFT_ALT", KEY_LEFT_ALT),
    ("GLFW_KEY_LEFT_SUPER", KEY_LEFT_SUPER),
    ("GLFW_KEY_RIGHT_SHIFT", KEY_RIGHT_SHIFT),
    ("GLFW_KEY_RIGHT_CONTROL", KEY_RIGHT_CONTROL),
    ("GLFW_KEY_RIGHT_ALT", KEY_RIGHT_ALT),
    ("GLFW_KEY_RIGHT_SUPER", KEY_RIGHT_SUPER),
    ("GLFW_KEY_MENU", KEY_MENU),
    ("GLFW_KEY_LAST", KEY_LAST),
    ("GLFW_MOD_SHIFT", MOD_SHIFT),
    ("GLFW_MOD_CONTROL", MOD_CONTROL),
    ("GLFW_MOD_ALT", MOD_ALT),
    ("GLFW_MOD_SUPER", MOD_SUPER),
    ("GLFW_MOD_CAPS_LOCK", MOD_CAPS_LOCK),
    ("GLFW_MOD_NUM_LOCK", MOD_NUM_LOCK),
    ("GLFW_MOUSE_BUTTON_1", MOUSE_BUTTON_1),
    ("GLFW_MOUSE_BUTTON_2", MOUSE_BUTTON_2),
    ("GLFW_MOUSE_BUTTON_3", MOUSE_BUTTON_3),
    ("GLFW_MOUSE_BUTTON_4", MOUSE_BUTTON_4),
    ("GLFW_MOUSE_BUTTON_5", MOUSE_BUTTON_5),
    ("GLFW_MOUSE_BUTTON_6", MOUSE_BUTTON_6),
    ("GLFW_MOUSE_BUTTON_7", MOUSE_BUTTON_7),
    ("GLFW_MOUSE_BUTTON_8", MOUSE_BUTTON_8),
    ("GLFW_MOUSE_BUTTON_LAST", MOUSE_BUTTON_LAST),
    ("GLFW_MOUSE_BUTTON_LEFT", MOUSE_BUTTON_LEFT),
    ("GLFW_MOUSE_BUTTON_RIGHT", MOUSE_BUTTON_RIGHT),
    ("GLFW_MOUSE_BUTTON_MIDDLE", MOUSE_BUTTON_MIDDLE),
];

/// Short labels shown on virtual buttons. Keys without an entry have no label.
const LABELS: &[(&str, &str)] = &[
    ("GLFW_KEY_SPACE", "Space"),
    ("GLFW_KEY_APOSTROPHE", "'"),
    ("GLFW_KEY_COMMA", ","),
    ("GLFW_KEY_MINUS", "-"),
    ("GLFW_KEY_PERIOD", "."),
    ("GLFW_KEY_SLASH", "/"),
    ("GLFW_KEY_0", "0"),
    ("GLFW_KEY_1", "1"),
    ("GLFW_KEY_2", "2"),
    ("GLFW_KEY_3", "3"),
    ("GLFW_KEY_4", "4"),
    ("GLFW_KEY_5", "5"),
    ("GLFW_KEY_6", "6"),
    ("GLFW_KEY_7", "7"),
    ("GLFW_KEY_8", "8"),
    ("GLFW_KEY_9", "9"),
    ("GLFW_KEY_SEMICOLON", ";"),
    ("GLFW_KEY_EQUAL", "+"),
    ("GLFW_KEY_A", "A"),
    ("GLFW_KEY_B", "B"),
    ("GLFW_KEY_C", "C"),
    ("GLFW_KEY_D", "D"),
    ("GLFW_KEY_E", "E"),
    ("GLFW_KEY_F", "F"),
    ("GLFW_KEY_G", "G"),
    ("GLFW_KEY_H", "H"),
    ("GLFW_KEY_I", "I"),
    ("GLFW_KEY_J", "J"),
    ("GLFW_KEY_K", "K"),
    ("GLFW_KEY_L", "L"),
    ("GLFW_KEY_M", "M"),
    ("GLFW_KEY_N", "N"),
    ("GLFW_KEY_O", "O"),
    ("GLFW_KEY_P", "P"),
    ("GLFW_KEY_Q", "Q"),
    ("GLFW_KEY_R", "R"),
    ("GLFW_KEY_S", "S"),
    ("GLFW_KEY_T", "T"),
    ("GLFW_KEY_U", "U"),
    ("GLFW_KEY_V", "V"),
    ("GLFW_KEY_W", "W"),
    ("GLFW_KEY_X", "X"),
    ("GLFW_KEY_Y", "Y"),
    ("GLFW_KEY_Z", "Z"),
    ("GLFW_KEY_LEFT_BRACKET", "["),
    ("GLFW_KEY_BACKSLASH", "\\"),
    ("GLFW_KEY_RIGHT_BRACKET", "]"),
    ("GLFW_KEY_GRAVE_ACCENT", "`"),
    ("GLFW_KEY_ESCAPE", "Esc"),
    ("GLFW_KEY_ENTER", "Enter"),
    ("GLFW_KEY_TAB", "Tab"),
    ("GLFW_KEY_BACKSPACE", "Backspace"),
    ("GLFW_KEY_INSERT", "Insert"),
    ("GLFW_KEY_DELETE", "Delete"),
    ("GLFW_KEY_RIGHT", "→"),
    ("GLFW_KEY_LEFT", "←"),
    ("GLFW_KEY_DOWN", "↓"),
    ("GLFW_KEY_UP", "↑"),
    ("GLFW_KEY_PAGE_UP", "Page Up"),
    ("GLFW_KEY_PAGE_DOWN", "Page Down"),
    ("GLFW_KEY_HOME", "Home"),
    ("GLFW_KEY_END", "End"),
    ("GLFW_KEY_CAPS_LOCK", "Caps Lock"),
    ("GLFW_KEY_SCROLL_LOCK", "Scroll Lock"),
    ("GLFW_KEY_NUM_LOCK", "Num lock"),
    ("GLFW_KEY_PRINT_SCREEN", "Print Screen"),
    ("GLFW_KEY_PAUSE", "Pause"),
    ("GLFW_KEY_F1", "F1"),
    ("GLFW_KEY_F2", "F2"),
    ("GLFW_KEY_F3", "F3"),
    ("GLFW_KEY_F4", "F4"),
    ("GLFW_KEY_F5", "F5"),
    ("GLFW_KEY_F6", "F6"),
    ("GLFW_KEY_F7", "F7"),
    ("GLFW_KEY_F8", "F8"),
    ("GLFW_KEY_F9", "F9"),
    ("GLFW_KEY_F10", "F10"),
    ("GLFW_KEY_F11", "F11"),
    ("GLFW_KEY_F12", "F12"),
    ("GLFW_KEY_F13", "F13"),
    ("GLFW_KEY_F14", "F14"),
    ("GLFW_KEY_F15", "F15"),
    ("GLFW_KEY_F16", "F16"),
    ("GLFW_KEY_F17", "F17"),
    ("GLFW_KEY_F18", "F18"),
    ("GLFW_KEY_F19", "F19"),
    ("GLFW_KEY_F20", "F20"),
    ("GLFW_KEY_F21", "F21"),
    ("GLFW_KEY_F22", "F22"),
    ("GLFW_KEY_F23", "F23"),
    ("GLFW_KEY_F24", "F24"),
    ("GLFW_KEY_F25", "F25"),
    ("GLFW_KEY_KP_0", "Num 0"),
    ("GLFW_KEY_KP_1", "Num 1"),
    ("GLFW_KEY_KP_2", "Num 2"),
    ("GLFW_KEY_KP_3", "Num 3"),
    ("GLFW_KEY_KP_4", "Num 4"),
    ("GLFW_KEY_KP_5", "Num 5"),
    ("GLFW_KEY_KP_6", "Num 6"),
    ("GLFW_KEY_KP_7", "Num 7"),
    ("GLFW_KEY_KP_8", "Num 8"),
    ("GLFW_KEY_KP_9", "Num 9"),
    ("GLFW_KEY_KP_DECIMAL", "Num ."),
    ("GLFW_KEY_KP_DIVIDE", "Num /"),
    ("GLFW_KEY_KP_MULTIPLY", "Num *"),
    ("GLFW_KEY_KP_SUBTRACT", "Num -"),
    ("GLFW_KEY_KP_ADD", "Num +"),
    ("GLFW_KEY_KP_ENTER", "Num Enter"),
    ("GLFW_KEY_LEFT_SHIFT", "Left Shift"),
    ("GLFW_KEY_LEFT_CONTROL", "Left Control"),
    ("GLFW_KEY_LEFT_ALT", "Left Alt"),
    ("GLFW_KEY_RIGHT_SHIFT", "Right Shift"),
    ("GLFW_KEY_RIGHT_CONTROL", "Right Ctrl"),
    ("GLFW_KEY_RIGHT_ALT", "Right Alt"),
];

static CODES_BY_NAME: Lazy<HashMap<&'static str, i32>> =
    Lazy::new(|| NAMED.iter().copied().collect());

static LABELS_BY_NAME: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LABELS.iter().copied().collect());

// First label wins if two names ever share a code.
static LABELS_BY_CODE: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(LABELS.len());
    for (name, label) in LABELS {
        if let Some(code) = CODES_BY_NAME.get(name) {
            map.entry(*code).or_insert(*label);
        }
    }
    map
});

/// Resolve a GLFW constant name (`"GLFW_KEY_SPACE"`, `"GLFW_MOUSE_BUTTON_LEFT"`)
/// to its numeric value.
pub fn keycode_from_name(name: &str) -> Option<i32> {
    CODES_BY_NAME.get(name).copied()
}

/// Display label for a GLFW key code, or `None` when the key has no label.
pub fn label_for_key(code: i32) -> Option<&'static str> {
    LABELS_BY_CODE.get(&code).copied()
}

/// Display label for a GLFW key name.
pub fn label_for_name(name: &str) -> Option<&'static str> {
    LABELS_BY_NAME.get(name).copied()
}

/// Whether the name refers to a mouse button rather than a keyboard key.
pub fn is_mouse_name(name: &str) -> bool {
    name.starts_with("GLFW_MOUSE_")
}
