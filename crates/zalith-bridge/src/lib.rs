// GLFW-style event bridge between the Android host UI and the game runtime.

pub mod bridge;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod cursor;
pub mod scheduler;
pub mod state;

pub use bridge::{CallbackBridge, HostServices};
pub use clipboard::{Clipboard, ClipboardOp, UrlOpener};
pub use command::{EventQueue, NativeCommand, NativeSink};
pub use config::BridgeConfig;
pub use cursor::{CursorMode, CursorShape, StateListener};
pub use scheduler::{FrameCallback, FrameQueue, FrameScheduler};

pub use zalith_keycodes as keycodes;
