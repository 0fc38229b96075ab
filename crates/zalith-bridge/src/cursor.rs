// Cursor mode and shape as the host UI sees them.

/// Native GLFW standard cursor shapes
pub const GLFW_ARROW_CURSOR: i32 = 0x36001;
pub const GLFW_IBEAM_CURSOR: i32 = 0x36002;
pub const GLFW_CROSSHAIR_CURSOR: i32 = 0x36003;
pub const GLFW_HAND_CURSOR: i32 = 0x36004;
pub const GLFW_RESIZE_EW_CURSOR: i32 = 0x36005;
pub const GLFW_RESIZE_NS_CURSOR: i32 = 0x36006;
pub const GLFW_RESIZE_ALL_CURSOR: i32 = 0x36009;
pub const GLFW_NOT_ALLOWED_CURSOR: i32 = 0x3600A;

/// Whether the on-screen pointer is free or captured by the game.
///
/// The discriminants are what the host UI layer stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CursorMode {
    /// Pointer captured: hidden, relative motion only
    Disabled = 0,
    /// Pointer free: visible, absolute positioning
    Enabled = 1,
}

impl CursorMode {
    pub fn from_grabbing(grabbing: bool) -> Self {
        if grabbing {
            CursorMode::Disabled
        } else {
            CursorMode::Enabled
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    #[default]
    Arrow,
    IBeam,
    Hand,
    CrossHair,
    ResizeNS,
    ResizeEW,
    ResizeAll,
    NotAllowed,
}

impl CursorShape {
    /// Map a GLFW standard cursor code. Anything unrecognised is an arrow.
    pub fn from_glfw(code: i32) -> Self {
        match code {
            GLFW_IBEAM_CURSOR => CursorShape::IBeam,
            GLFW_HAND_CURSOR => CursorShape::Hand,
            GLFW_CROSSHAIR_CURSOR => CursorShape::CrossHair,
            GLFW_RESIZE_NS_CURSOR => CursorShape::ResizeNS,
            GLFW_RESIZE_EW_CURSOR => CursorShape::ResizeEW,
            GLFW_RESIZE_ALL_CURSOR => CursorShape::ResizeAll,
            GLFW_NOT_ALLOWED_CURSOR => CursorShape::NotAllowed,
            _ => CursorShape::Arrow,
        }
    }

    /// Stable index for the host side (`ordinal()` of its enum).
    pub fn ordinal(self) -> i32 {
        self as i32
    }
}

/// Receives the debounced native-originated notifications.
///
/// Calls for one kind never overlap; the two kinds may run concurrently.
pub trait StateListener: Send + Sync {
    fn cursor_mode_changed(&self, mode: CursorMode);
    fn cursor_shape_changed(&self, shape: CursorShape);
}

/// Listener that only logs; used until the host UI attaches.
pub struct LoggingListener;

impl StateListener for LoggingListener {
    fn cursor_mode_changed(&self, mode: CursorMode) {
        tracing::info!("Cursor mode changed: {:?}", mode);
    }

    fn cursor_shape_changed(&self, shape: CursorShape) {
        tracing::info!("Cursor shape changed: {:?}", shape);
    }
}
