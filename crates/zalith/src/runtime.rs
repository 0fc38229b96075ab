//! Process-wide bridge instance shared by the JNI and native entry points
//!
//! Both sides of the FFI need to reach the same bridge without passing handles
//! through code they don't own, so it is installed once per process here.
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Instant;

use zalith_bridge::{BridgeConfig, CallbackBridge, EventQueue, FrameQueue, HostServices};

pub struct BridgeRuntime {
    pub bridge: CallbackBridge,
    /// Forward commands waiting for the runtime's GLFW shim
    pub events: Arc<EventQueue>,
    /// Deferred work, pumped from the host's frame callback
    pub frames: Arc<FrameQueue>,
}

impl BridgeRuntime {
    pub fn new(config: BridgeConfig, host: HostServices) -> Self {
        let events = Arc::new(EventQueue::new());
        let frames = Arc::new(FrameQueue::new());
        let bridge = CallbackBridge::new(config, events.clone(), frames.clone(), host);
        Self {
            bridge,
            events,
            frames,
        }
    }

    /// Run the frame callbacks that are due. Called once per display refresh.
    pub fn do_frame(&self) -> usize {
        self.frames.do_frame(Instant::now())
    }
}

static RUNTIME: OnceCell<BridgeRuntime> = OnceCell::new();

/// Install the process bridge. Later calls keep the first instance.
pub fn install(config: BridgeConfig, host: HostServices) -> &'static BridgeRuntime {
    let mut created = false;
    let runtime = RUNTIME.get_or_init(|| {
        created = true;
        BridgeRuntime::new(config, host)
    });
    if created {
        tracing::info!("Bridge runtime installed: {:?}", runtime.bridge.config());
    } else {
        tracing::warn!("Bridge runtime already installed, keeping existing instance");
    }
    runtime
}

/// The installed runtime, if the host has initialised it.
pub fn runtime() -> Option<&'static BridgeRuntime> {
    RUNTIME.get()
}

/// Shorthand for the installed bridge.
pub fn bridge() -> Option<&'static CallbackBridge> {
    RUNTIME.get().map(|runtime| &runtime.bridge)
}
