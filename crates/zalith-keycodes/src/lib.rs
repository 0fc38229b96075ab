// Static key tables shared by the input bridge and the control layout editor.
//
// `glfw` holds the GLFW constants, the symbolic-name table and the display
// labels. `android` translates Android `KeyEvent` codes into GLFW codes.

pub mod android;
pub mod glfw;

pub use android::{glfw_from_android, mods_from_android_meta};
pub use glfw::{keycode_from_name, label_for_key, label_for_name};
