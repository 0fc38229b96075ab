//! Native event queue shared between the host input threads and the game runtime
//!
//! Every forward call the bridge makes lands here as a `NativeCommand`. The
//! runtime's GLFW shim drains the queue on its own thread, so the host side
//! never blocks on the game.
//!
//! Architecture: Host input thread → CallbackBridge → EventQueue → GLFW shim
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::atomic::{AtomicI32, Ordering};

/// One call into the native GLFW event layer.
///
/// Absent data is encoded with sentinels (`'\0'` character, key code 0) rather
/// than options, matching the fixed native signatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeCommand {
    /// glfwSetCharCallback
    Char { codepoint: char },
    /// glfwSetCharModsCallback
    CharMods { codepoint: char, mods: i32 },
    /// glfwSetKeyCallback
    Key {
        key: i32,
        scancode: i32,
        action: i32,
        mods: i32,
    },
    /// glfwSetCursorPosCallback, window coordinates
    CursorPos { x: f32, y: f32 },
    /// glfwSetMouseButtonCallback
    MouseButton { button: i32, action: i32, mods: i32 },
    /// glfwSetScrollCallback
    Scroll { x: f64, y: f64 },
    /// Framebuffer and window size change
    ScreenSize { width: i32, height: i32 },
    /// glfwSetWindowAttrib (focus, hover, ...)
    WindowAttrib { attrib: i32, value: i32 },
    /// Switch the runtime between the stack-based and the ring-buffer input queue
    InputQueueMode { use_stack_queue: bool },
}

/// Destination for forward commands.
///
/// The bridge treats delivery as infallible: implementations log their own
/// failures because the host has nothing useful to do with them.
pub trait NativeSink: Send + Sync {
    fn send(&self, command: NativeCommand);

    /// Last frame rate reported by the runtime.
    fn current_fps(&self) -> i32 {
        0
    }
}

/// Thread-safe queue of native commands
pub struct EventQueue {
    sender: Sender<NativeCommand>,
    receiver: Receiver<NativeCommand>,
    fps: AtomicI32,
}

impl EventQueue {
    /// Create a new, empty queue
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            fps: AtomicI32::new(0),
        }
    }

    /// Push a command from any thread
    pub fn push(&self, command: NativeCommand) -> Result<()> {
        self.sender
            .send(command)
            .map_err(|e| anyhow::anyhow!("Failed to queue native command: {}", e))
    }

    /// Pop the oldest pending command, if any
    pub fn try_pop(&self) -> Option<NativeCommand> {
        self.receiver.try_recv().ok()
    }

    /// Drain all pending commands in the order they were pushed
    pub fn drain(&self) -> Vec<NativeCommand> {
        self.receiver.try_iter().collect()
    }

    /// Number of commands waiting to be consumed
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Record the frame rate measured by the runtime's swap loop
    pub fn report_fps(&self, fps: i32) {
        self.fps.store(fps, Ordering::Relaxed);
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeSink for EventQueue {
    fn send(&self, command: NativeCommand) {
        tracing::trace!(?command, "native command");
        if let Err(e) = self.push(command) {
            tracing::error!("Dropping native command {:?}: {}", command, e);
        }
    }

    fn current_fps(&self) -> i32 {
        self.fps.load(Ordering::Relaxed)
    }
}
