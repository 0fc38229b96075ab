// Zalith input bridge: JNI exports for the launcher UI and C exports for the
// game runtime, both driving one process-wide `CallbackBridge`.

pub mod native_abi;
pub mod runtime;

#[cfg(target_os = "android")]
mod android_host;
#[cfg(target_os = "android")]
mod android_jni;

pub use zalith_bridge::{BridgeConfig, CallbackBridge, HostServices};
