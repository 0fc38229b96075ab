use jni::{
    JNIEnv,
    objects::{JClass, JObject, JString},
    sys::{JNI_FALSE, JNI_TRUE, jboolean, jchar, jdouble, jfloat, jint, jlong},
};
use std::sync::{Arc, Once};

use zalith_bridge::{BridgeConfig, CallbackBridge, HostServices};

use crate::android_host::JniHost;
use crate::runtime;

// Static initialization for logging
static INIT: Once = Once::new();

/// Initialize logging and panic hook for Android
fn init_logging() {
    INIT.call_once(|| {
        let level = if cfg!(feature = "debug-logs") {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(level)
                .with_tag("zalith"),
        );

        std::panic::set_hook(Box::new(|info| {
            let payload = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "Unknown panic".to_string());

            let location = info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown".to_string());

            log::error!("PANIC at {}: {}", location, payload);
        }));
    });
}

fn as_bool(value: jboolean) -> bool {
    value != JNI_FALSE
}

fn to_jboolean(value: bool) -> jboolean {
    if value { JNI_TRUE } else { JNI_FALSE }
}

/// UTF-16 unit to `char`. Lone surrogates carry no character and become NUL.
fn to_char(unit: jchar) -> char {
    char::from_u32(u32::from(unit)).unwrap_or('\0')
}

fn read_string(env: &mut JNIEnv, value: &JString) -> Option<String> {
    if value.is_null() {
        return None;
    }
    match env.get_string(value) {
        Ok(s) => Some(s.into()),
        Err(e) => {
            log::error!("Failed to read Java string: {:?}", e);
            None
        }
    }
}

/// Run `f` against the installed bridge, or log and skip before `nativeInit`.
fn with_bridge(what: &str, f: impl FnOnce(&CallbackBridge)) {
    match runtime::bridge() {
        Some(bridge) => f(bridge),
        None => log::warn!("{} before nativeInit, dropped", what),
    }
}

/// Install the bridge for this process
///
/// Called from the launcher's Application/Activity before the game starts.
///
/// # Arguments
/// * `context` - Application context, kept for clipboard access
/// * `config_json` - `BridgeConfig` as JSON; null or invalid uses defaults
///
/// # Returns
/// `true` when the JNI-backed host services were set up
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_nativeInit(
    mut env: JNIEnv,
    _class: JClass,
    context: JObject,
    config_json: JString,
) -> jboolean {
    init_logging();
    log::info!("nativeInit called");

    let config = read_string(&mut env, &config_json)
        .map(|json| BridgeConfig::from_json(&json))
        .unwrap_or_default();

    let host = match JniHost::new(&mut env, &context) {
        Ok(host) => Arc::new(host),
        Err(e) => {
            log::error!("Failed to set up JNI host services: {:#}", e);
            return JNI_FALSE;
        }
    };

    runtime::install(
        config,
        HostServices {
            clipboard: host.clone(),
            url_opener: host.clone(),
            listener: host,
        },
    );
    log::info!("nativeInit completed");
    JNI_TRUE
}

/// Run due frame callbacks
///
/// Called from the host's Choreographer frame callback on the UI thread.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_nativeOnFrame(
    _env: JNIEnv,
    _class: JClass,
    _frame_time_nanos: jlong,
) {
    if let Some(rt) = runtime::runtime() {
        let ran = rt.do_frame();
        if ran > 0 {
            log::trace!("Ran {} frame callbacks", ran);
        }
    }
}

// ---------------------------------------------------------------------------
// Pointer
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_sendCursorPos(
    _env: JNIEnv,
    _class: JClass,
    x: jfloat,
    y: jfloat,
) {
    with_bridge("sendCursorPos", |bridge| bridge.send_cursor_pos(x, y));
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_sendCursorDelta(
    _env: JNIEnv,
    _class: JClass,
    dx: jfloat,
    dy: jfloat,
) {
    with_bridge("sendCursorDelta", |bridge| bridge.send_cursor_delta(dx, dy));
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_sendMouseButton(
    _env: JNIEnv,
    _class: JClass,
    button: jint,
    down: jboolean,
) {
    with_bridge("sendMouseButton", |bridge| {
        bridge.send_mouse_button(button, as_bool(down))
    });
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_sendMouseClick(
    _env: JNIEnv,
    _class: JClass,
    button: jint,
) {
    with_bridge("sendMouseClick", |bridge| bridge.send_mouse_click(button));
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_putMouseEvent(
    _env: JNIEnv,
    _class: JClass,
    button: jint,
) {
    with_bridge("putMouseEvent", |bridge| bridge.put_mouse_event(button));
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_putMouseEventWithCoords(
    _env: JNIEnv,
    _class: JClass,
    button: jint,
    x: jfloat,
    y: jfloat,
) {
    with_bridge("putMouseEventWithCoords", |bridge| {
        bridge.put_mouse_event_at(button, x, y)
    });
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_sendScroll(
    _env: JNIEnv,
    _class: JClass,
    x_offset: jdouble,
    y_offset: jdouble,
) {
    with_bridge("sendScroll", |bridge| bridge.send_scroll(x_offset, y_offset));
}

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_sendKeycode(
    _env: JNIEnv,
    _class: JClass,
    keycode: jint,
    key_char: jchar,
    scancode: jint,
    mods: jint,
    down: jboolean,
) {
    with_bridge("sendKeycode", |bridge| {
        bridge.send_keycode(keycode, to_char(key_char), scancode, mods, as_bool(down))
    });
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_sendChar(
    _env: JNIEnv,
    _class: JClass,
    key_char: jchar,
    mods: jint,
) {
    let ch = to_char(key_char);
    if ch == '\0' {
        log::debug!("sendChar: unpaired surrogate {:#x} dropped", key_char);
        return;
    }
    with_bridge("sendChar", |bridge| bridge.send_char(ch, mods));
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_sendKeyPress(
    _env: JNIEnv,
    _class: JClass,
    keycode: jint,
) {
    with_bridge("sendKeyPress", |bridge| bridge.send_key_press(keycode));
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_setModifiers(
    _env: JNIEnv,
    _class: JClass,
    keycode: jint,
    down: jboolean,
) {
    with_bridge("setModifiers", |bridge| {
        bridge.set_modifiers(keycode, as_bool(down))
    });
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_getCurrentMods(
    _env: JNIEnv,
    _class: JClass,
) -> jint {
    runtime::bridge().map_or(0, CallbackBridge::current_mods)
}

/// Press or release a control-layout key by its GLFW name
///
/// # Returns
/// `true` if the name resolved to a key or mouse button
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_sendControlEvent(
    mut env: JNIEnv,
    _class: JClass,
    name: JString,
    down: jboolean,
) -> jboolean {
    let Some(name) = read_string(&mut env, &name) else {
        return JNI_FALSE;
    };
    let handled = runtime::bridge()
        .map(|bridge| bridge.dispatch_control_event(&name, as_bool(down)))
        .unwrap_or(false);
    to_jboolean(handled)
}

/// Forward a hardware `KeyEvent`
///
/// # Returns
/// `true` if the key code has a GLFW counterpart and was consumed
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_sendAndroidKey(
    _env: JNIEnv,
    _class: JClass,
    android_key_code: jint,
    unicode_char: jint,
    meta_state: jint,
    down: jboolean,
) -> jboolean {
    let handled = runtime::bridge()
        .map(|bridge| {
            // getUnicodeChar() reports 0 for non-printing keys; negatives never carry text
            let unicode = u32::try_from(unicode_char).unwrap_or(0);
            bridge.send_android_key(android_key_code, unicode, meta_state, as_bool(down))
        })
        .unwrap_or(false);
    to_jboolean(handled)
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_sendUpdateWindowSize(
    _env: JNIEnv,
    _class: JClass,
    width: jint,
    height: jint,
) {
    with_bridge("sendUpdateWindowSize", |bridge| {
        bridge.send_update_window_size(width, height)
    });
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_updatePhysicalSize(
    _env: JNIEnv,
    _class: JClass,
    width: jint,
    height: jint,
) {
    with_bridge("updatePhysicalSize", |bridge| {
        bridge.update_physical_size(width, height)
    });
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_getWindowWidth(
    _env: JNIEnv,
    _class: JClass,
) -> jint {
    runtime::bridge().map_or(0, |bridge| bridge.effective_window_size().0)
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_getWindowHeight(
    _env: JNIEnv,
    _class: JClass,
) -> jint {
    runtime::bridge().map_or(0, |bridge| bridge.effective_window_size().1)
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_nativeSetWindowAttrib(
    _env: JNIEnv,
    _class: JClass,
    attrib: jint,
    value: jint,
) {
    with_bridge("nativeSetWindowAttrib", |bridge| {
        bridge.set_window_attrib(attrib, value)
    });
}

/// Called on activity resume/start (`true`) and pause/stop (`false`)
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_setWindowHovered(
    _env: JNIEnv,
    _class: JClass,
    hovered: jboolean,
) {
    with_bridge("setWindowHovered", |bridge| {
        bridge.set_window_hovered(as_bool(hovered))
    });
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_nativeSetUseInputStackQueue(
    _env: JNIEnv,
    _class: JClass,
    use_stack_queue: jboolean,
) {
    with_bridge("nativeSetUseInputStackQueue", |bridge| {
        bridge.set_use_input_stack_queue(as_bool(use_stack_queue))
    });
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_getCurrentFps(
    _env: JNIEnv,
    _class: JClass,
) -> jint {
    runtime::bridge().map_or(0, CallbackBridge::current_fps)
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_org_lwjgl_glfw_CallbackBridge_isGrabbing(
    _env: JNIEnv,
    _class: JClass,
) -> jboolean {
    to_jboolean(runtime::bridge().is_some_and(CallbackBridge::is_grabbing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jchar_conversion_drops_lone_surrogates() {
        assert_eq!(to_char(0x41), 'A');
        assert_eq!(to_char(0x0436), 'ж');
        assert_eq!(to_char(0xD83D), '\0');
        assert_eq!(to_char(0), '\0');
    }

    #[test]
    fn jboolean_conversion() {
        assert!(as_bool(JNI_TRUE));
        assert!(as_bool(2));
        assert!(!as_bool(JNI_FALSE));
        assert_eq!(to_jboolean(true), JNI_TRUE);
    }
}
