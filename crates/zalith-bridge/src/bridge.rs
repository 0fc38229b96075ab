//! Input/window event bridge between the Android host and the game runtime
//!
//! Forward direction: host UI callbacks (touch, keys, surface size) become
//! `NativeCommand`s on the native sink, stamped with the tracked modifiers.
//! Reverse direction: the runtime's clipboard, grab and cursor-shape calls
//! reach host collaborators, the last two debounced through the frame scheduler.
//!
//! Nothing in here returns an error: the runtime has no recovery path for a
//! failed input call, so degenerate input degrades to a no-op or a default.
use std::sync::{Arc, Mutex, PoisonError, Weak};

use zalith_keycodes::{glfw, glfw_from_android, keycode_from_name, mods_from_android_meta};

use crate::clipboard::{Clipboard, ClipboardOp, LoggingUrlOpener, MemoryClipboard, UrlOpener};
use crate::command::{NativeCommand, NativeSink};
use crate::config::BridgeConfig;
use crate::cursor::{CursorMode, CursorShape, LoggingListener, StateListener};
use crate::scheduler::FrameScheduler;
use crate::state::{Latest, ModifierState, PointerState};

/// Host-side collaborators the runtime calls back into.
#[derive(Clone)]
pub struct HostServices {
    pub clipboard: Arc<dyn Clipboard>,
    pub url_opener: Arc<dyn UrlOpener>,
    pub listener: Arc<dyn StateListener>,
}

impl Default for HostServices {
    /// In-memory clipboard and logging stand-ins, for headless runs.
    fn default() -> Self {
        Self {
            clipboard: Arc::new(MemoryClipboard::default()),
            url_opener: Arc::new(LoggingUrlOpener),
            listener: Arc::new(LoggingListener),
        }
    }
}

struct Inner {
    config: BridgeConfig,
    sink: Arc<dyn NativeSink>,
    scheduler: Arc<dyn FrameScheduler>,
    host: HostServices,
    modifiers: ModifierState,
    pointer: PointerState,
    grab: Latest<bool>,
    cursor_shape: Latest<CursorShape>,
    // Serialize listener delivery per notification kind
    grab_delivery: Mutex<()>,
    shape_delivery: Mutex<()>,
}

/// Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct CallbackBridge {
    inner: Arc<Inner>,
}

fn action(down: bool) -> i32 {
    if down { glfw::PRESS } else { glfw::RELEASE }
}

impl CallbackBridge {
    pub fn new(
        config: BridgeConfig,
        sink: Arc<dyn NativeSink>,
        scheduler: Arc<dyn FrameScheduler>,
        host: HostServices,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                sink,
                scheduler,
                host,
                modifiers: ModifierState::default(),
                pointer: PointerState::default(),
                grab: Latest::new(false),
                cursor_shape: Latest::new(CursorShape::Arrow),
                grab_delivery: Mutex::new(()),
                shape_delivery: Mutex::new(()),
            }),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.inner.config
    }

    fn send(&self, command: NativeCommand) {
        self.inner.sink.send(command);
    }

    fn downgrade(&self) -> Weak<Inner> {
        Arc::downgrade(&self.inner)
    }

    fn upgrade(weak: &Weak<Inner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    // -----------------------------------------------------------------------
    // Pointer
    // -----------------------------------------------------------------------

    /// Move the cursor to an absolute window position. No clamping.
    pub fn send_cursor_pos(&self, x: f32, y: f32) {
        self.inner.pointer.set_position(x, y);
        self.send(NativeCommand::CursorPos { x, y });
    }

    /// Move the cursor relative to the last position sent.
    pub fn send_cursor_delta(&self, dx: f32, dy: f32) {
        let (x, y) = self.inner.pointer.offset(dx, dy);
        self.send(NativeCommand::CursorPos { x, y });
    }

    pub fn mouse_position(&self) -> (f32, f32) {
        self.inner.pointer.position()
    }

    /// Press or release a mouse button with the currently held modifiers.
    pub fn send_mouse_button(&self, button: i32, down: bool) {
        self.send_mouse_keycode(button, self.current_mods(), down);
    }

    pub fn send_mouse_keycode(&self, button: i32, mods: i32, down: bool) {
        self.send(NativeCommand::MouseButton {
            button,
            action: action(down),
            mods,
        });
    }

    /// Press and immediately release a mouse button.
    pub fn send_mouse_click(&self, button: i32) {
        self.send_mouse_keycode(button, self.current_mods(), true);
        self.send_mouse_keycode(button, self.current_mods(), false);
    }

    /// Synthetic click for gestures with no natural release.
    ///
    /// The press goes out now; the release is posted to the frame scheduler
    /// and always fires, even if other input arrives in between.
    pub fn put_mouse_event(&self, button: i32) {
        self.send_mouse_button(button, true);

        let weak = self.downgrade();
        self.inner.scheduler.post_frame_callback_delayed(
            self.inner.config.click_release_delay(),
            Box::new(move || {
                if let Some(bridge) = Self::upgrade(&weak) {
                    bridge.send_mouse_button(button, false);
                }
            }),
        );
    }

    /// Move to `(x, y)`, then perform a synthetic click there.
    pub fn put_mouse_event_at(&self, button: i32, x: f32, y: f32) {
        self.send_cursor_pos(x, y);
        self.put_mouse_event(button);
    }

    pub fn send_scroll(&self, x_offset: f64, y_offset: f64) {
        self.send(NativeCommand::Scroll {
            x: x_offset,
            y: y_offset,
        });
    }

    // -----------------------------------------------------------------------
    // Keyboard
    // -----------------------------------------------------------------------

    /// Forward a key transition and, on press, its character.
    ///
    /// `key == 0` skips the raw key event and `ch == '\0'` skips the character,
    /// so one call may produce either, both or neither.
    pub fn send_keycode(&self, key: i32, ch: char, scancode: i32, mods: i32, down: bool) {
        if key != 0 {
            self.send(NativeCommand::Key {
                key,
                scancode,
                action: action(down),
                mods,
            });
        }
        if down && ch != '\0' {
            self.send_char(ch, mods);
        }
    }

    /// Character input, delivered through both GLFW char callbacks.
    pub fn send_char(&self, ch: char, mods: i32) {
        self.send(NativeCommand::CharMods { codepoint: ch, mods });
        self.send(NativeCommand::Char { codepoint: ch });
    }

    /// Press and release a key with the currently held modifiers.
    pub fn send_key_press(&self, key: i32) {
        self.send_keycode(key, '\0', 0, self.current_mods(), true);
        self.send_keycode(key, '\0', 0, self.current_mods(), false);
    }

    /// Track a modifier key transition; other keys are ignored.
    pub fn set_modifiers(&self, key: i32, down: bool) {
        if self.inner.modifiers.update(key, down) {
            tracing::debug!("Modifier {} {}", key, if down { "held" } else { "released" });
        }
    }

    /// GLFW modifier bitmask of the tracked keys currently held.
    pub fn current_mods(&self) -> i32 {
        self.inner.modifiers.mods()
    }

    /// Forward a virtual control by its GLFW constant name.
    ///
    /// Mouse names become button events; key names become key events followed
    /// by modifier tracking. Returns `false` for names that do not resolve.
    pub fn dispatch_control_event(&self, name: &str, down: bool) -> bool {
        let Some(code) = keycode_from_name(name) else {
            tracing::debug!("Ignoring unknown control event {}", name);
            return false;
        };

        if glfw::is_mouse_name(name) {
            self.send_mouse_button(code, down);
        } else {
            self.send_keycode(code, '\0', 0, self.current_mods(), down);
            self.set_modifiers(code, down);
        }
        true
    }

    /// Forward a hardware key from an Android `KeyEvent`.
    ///
    /// `meta_state` is `KeyEvent.getMetaState()`. Its modifiers (lock toggles,
    /// right-hand keys) are stamped on the events together with the tracked
    /// ones, but do not change the tracked mask. Keys without a GLFW
    /// counterpart are ignored. Returns whether the key was forwarded.
    pub fn send_android_key(
        &self,
        android_key_code: i32,
        unicode: u32,
        meta_state: i32,
        down: bool,
    ) -> bool {
        let Some(key) = glfw_from_android(android_key_code) else {
            tracing::trace!("Ignoring unmapped Android key {}", android_key_code);
            return false;
        };

        let ch = char::from_u32(unicode).unwrap_or('\0');
        let mods = self.current_mods() | mods_from_android_meta(meta_state);
        self.send_keycode(key, ch, 0, mods, down);
        self.set_modifiers(key, down);
        true
    }

    // -----------------------------------------------------------------------
    // Window
    // -----------------------------------------------------------------------

    /// Record and forward a new game window size.
    pub fn send_update_window_size(&self, width: i32, height: i32) {
        self.inner.pointer.window.set(width, height);
        tracing::info!("Window size: {}x{}", width, height);
        self.send(NativeCommand::ScreenSize { width, height });
    }

    pub fn window_size(&self) -> (i32, i32) {
        self.inner.pointer.window.get()
    }

    /// Record the surface size in physical pixels. Not forwarded.
    pub fn update_physical_size(&self, width: i32, height: i32) {
        self.inner.pointer.physical.set(width, height);
    }

    pub fn physical_size(&self) -> (i32, i32) {
        self.inner.pointer.physical.get()
    }

    /// Window size if one has been set, else the physical surface size.
    pub fn effective_window_size(&self) -> (i32, i32) {
        let (width, height) = self.window_size();
        let (physical_width, physical_height) = self.physical_size();
        (
            if width > 0 { width } else { physical_width },
            if height > 0 { height } else { physical_height },
        )
    }

    pub fn set_window_attrib(&self, attrib: i32, value: i32) {
        self.send(NativeCommand::WindowAttrib { attrib, value });
    }

    /// Host visibility changes (resume/pause, start/stop) map to GLFW hover.
    pub fn set_window_hovered(&self, hovered: bool) {
        self.set_window_attrib(glfw::HOVERED, hovered as i32);
    }

    pub fn set_use_input_stack_queue(&self, use_stack_queue: bool) {
        self.send(NativeCommand::InputQueueMode { use_stack_queue });
    }

    pub fn current_fps(&self) -> i32 {
        self.inner.sink.current_fps()
    }

    // -----------------------------------------------------------------------
    // Runtime -> host
    // -----------------------------------------------------------------------

    /// Clipboard request from the runtime. Blocks until the host answers.
    ///
    /// Paste always yields a string (empty when there is no text clip); every
    /// other operation, including unknown ones, yields `None`.
    pub fn access_clipboard(&self, op: i32, payload: &str) -> Option<String> {
        match ClipboardOp::from_code(op) {
            Some(ClipboardOp::Copy) => {
                self.inner.host.clipboard.set_text(payload);
                None
            }
            Some(ClipboardOp::Paste) => Some(self.inner.host.clipboard.text().unwrap_or_default()),
            Some(ClipboardOp::OpenLink) => {
                self.inner.host.url_opener.open(payload);
                None
            }
            None => {
                tracing::warn!("Unknown clipboard operation {}", op);
                None
            }
        }
    }

    pub fn is_grabbing(&self) -> bool {
        self.inner.grab.get()
    }

    pub fn cursor_shape(&self) -> CursorShape {
        self.inner.cursor_shape.get()
    }

    /// The runtime grabbed or released the pointer.
    ///
    /// The new state is visible to `is_grabbing` immediately; the host listener
    /// hears about it a frame later, and only if nothing newer arrived first.
    pub fn on_grab_state_changed(&self, grabbing: bool) {
        let generation = self.inner.grab.set(grabbing);

        let weak = self.downgrade();
        self.inner.scheduler.post_frame_callback_delayed(
            self.inner.config.notify_delay(),
            Box::new(move || {
                if let Some(bridge) = Self::upgrade(&weak) {
                    bridge.deliver_grab(generation, grabbing);
                }
            }),
        );
    }

    fn deliver_grab(&self, generation: u64, grabbing: bool) {
        if !self.inner.grab.is_current(generation) {
            tracing::trace!("Grab notification {} superseded", generation);
            return;
        }

        let _delivery = self
            .inner
            .grab_delivery
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        tracing::info!("Grab changed: {}", grabbing);
        self.inner
            .host
            .listener
            .cursor_mode_changed(CursorMode::from_grabbing(grabbing));
    }

    /// The runtime asked for a standard cursor shape. Same debounce as grabs.
    pub fn on_cursor_shape_changed(&self, code: i32) {
        let shape = CursorShape::from_glfw(code);
        let generation = self.inner.cursor_shape.set(shape);

        let weak = self.downgrade();
        self.inner.scheduler.post_frame_callback_delayed(
            self.inner.config.notify_delay(),
            Box::new(move || {
                if let Some(bridge) = Self::upgrade(&weak) {
                    bridge.deliver_cursor_shape(generation, shape);
                }
            }),
        );
    }

    fn deliver_cursor_shape(&self, generation: u64, shape: CursorShape) {
        if !self.inner.cursor_shape.is_current(generation) {
            tracing::trace!("Cursor shape notification {} superseded", generation);
            return;
        }

        let _delivery = self
            .inner
            .shape_delivery
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        tracing::debug!("Cursor shape: {:?}", shape);
        self.inner.host.listener.cursor_shape_changed(shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::EventQueue;
    use crate::scheduler::FrameQueue;
    use zalith_keycodes::android;
    use std::time::{Duration, Instant};

    fn bridge() -> (CallbackBridge, Arc<EventQueue>, Arc<FrameQueue>) {
        let queue = Arc::new(EventQueue::new());
        let frames = Arc::new(FrameQueue::new());
        let bridge = CallbackBridge::new(
            BridgeConfig::default(),
            queue.clone(),
            frames.clone(),
            HostServices::default(),
        );
        (bridge, queue, frames)
    }

    #[test]
    fn key_with_char_emits_key_and_char() {
        let (bridge, queue, _) = bridge();
        bridge.send_keycode(glfw::KEY_A, 'a', 30, glfw::MOD_SHIFT, true);
        assert_eq!(
            queue.drain(),
            vec![
                NativeCommand::Key {
                    key: glfw::KEY_A,
                    scancode: 30,
                    action: glfw::PRESS,
                    mods: glfw::MOD_SHIFT,
                },
                NativeCommand::CharMods {
                    codepoint: 'a',
                    mods: glfw::MOD_SHIFT,
                },
                NativeCommand::Char { codepoint: 'a' },
            ]
        );
    }

    #[test]
    fn key_release_never_sends_char() {
        let (bridge, queue, _) = bridge();
        bridge.send_keycode(glfw::KEY_A, 'a', 0, 0, false);
        assert_eq!(
            queue.drain(),
            vec![NativeCommand::Key {
                key: glfw::KEY_A,
                scancode: 0,
                action: glfw::RELEASE,
                mods: 0,
            }]
        );
    }

    #[test]
    fn zero_keycode_sends_only_char() {
        let (bridge, queue, _) = bridge();
        bridge.send_keycode(0, 'é', 0, 0, true);
        assert_eq!(
            queue.drain(),
            vec![
                NativeCommand::CharMods { codepoint: 'é', mods: 0 },
                NativeCommand::Char { codepoint: 'é' },
            ]
        );

        bridge.send_keycode(0, '\0', 0, 0, true);
        assert!(queue.is_empty());
    }

    #[test]
    fn key_press_uses_current_mods() {
        let (bridge, queue, _) = bridge();
        bridge.set_modifiers(glfw::KEY_LEFT_CONTROL, true);
        bridge.send_key_press(glfw::KEY_C);
        let mods = glfw::MOD_CONTROL;
        assert_eq!(
            queue.drain(),
            vec![
                NativeCommand::Key { key: glfw::KEY_C, scancode: 0, action: glfw::PRESS, mods },
                NativeCommand::Key { key: glfw::KEY_C, scancode: 0, action: glfw::RELEASE, mods },
            ]
        );
    }

    #[test]
    fn control_event_tracks_modifiers_after_sending() {
        let (bridge, queue, _) = bridge();
        assert!(bridge.dispatch_control_event("GLFW_KEY_LEFT_SHIFT", true));
        // The shift press itself goes out before shift counts as held.
        assert_eq!(
            queue.drain(),
            vec![NativeCommand::Key {
                key: glfw::KEY_LEFT_SHIFT,
                scancode: 0,
                action: glfw::PRESS,
                mods: 0,
            }]
        );
        assert_eq!(bridge.current_mods(), glfw::MOD_SHIFT);

        assert!(bridge.dispatch_control_event("GLFW_MOUSE_BUTTON_LEFT", true));
        assert_eq!(
            queue.drain(),
            vec![NativeCommand::MouseButton {
                button: glfw::MOUSE_BUTTON_LEFT,
                action: glfw::PRESS,
                mods: glfw::MOD_SHIFT,
            }]
        );

        assert!(!bridge.dispatch_control_event("launcher.event.switch_ime", true));
        assert!(queue.is_empty());
    }

    #[test]
    fn android_keys_translate() {
        let (bridge, queue, _) = bridge();
        // KEYCODE_A with unicode 'a'
        assert!(bridge.send_android_key(29, 'a' as u32, 0, true));
        assert_eq!(queue.drain().len(), 3);

        // KEYCODE_SHIFT_LEFT is tracked as a modifier
        assert!(bridge.send_android_key(59, 0, android::META_SHIFT_ON, true));
        assert_eq!(bridge.current_mods(), glfw::MOD_SHIFT);
        queue.drain();

        // KEYCODE_AT has no GLFW key, so even its character is dropped
        assert!(!bridge.send_android_key(77, '@' as u32, 0, true));
        assert!(queue.is_empty());

        // KEYCODE_VOLUME_UP: nothing to forward
        assert!(!bridge.send_android_key(24, 0, 0, true));
        assert!(queue.is_empty());
    }

    #[test]
    fn android_meta_state_stamps_lock_modifiers() {
        let (bridge, queue, _) = bridge();
        // Caps Lock toggled on: press and release leave no tracked key held
        assert!(bridge.send_android_key(115, 0, android::META_CAPS_LOCK_ON, true));
        assert!(bridge.send_android_key(115, 0, android::META_CAPS_LOCK_ON, false));
        queue.drain();

        assert!(bridge.send_android_key(29, 'A' as u32, android::META_CAPS_LOCK_ON, true));
        assert_eq!(
            queue.drain(),
            vec![
                NativeCommand::Key {
                    key: glfw::KEY_A,
                    scancode: 0,
                    action: glfw::PRESS,
                    mods: glfw::MOD_CAPS_LOCK,
                },
                NativeCommand::CharMods { codepoint: 'A', mods: glfw::MOD_CAPS_LOCK },
                NativeCommand::Char { codepoint: 'A' },
            ]
        );
        assert_eq!(bridge.current_mods(), 0);
    }

    #[test]
    fn android_meta_state_adds_to_tracked_mods() {
        let (bridge, queue, _) = bridge();
        bridge.set_modifiers(glfw::KEY_LEFT_CONTROL, true);
        // Right shift is not tracked, but the meta state reports it
        assert!(bridge.send_android_key(
            29,
            'a' as u32,
            android::META_SHIFT_ON | android::META_CTRL_ON,
            false,
        ));
        assert_eq!(
            queue.drain(),
            vec![NativeCommand::Key {
                key: glfw::KEY_A,
                scancode: 0,
                action: glfw::RELEASE,
                mods: glfw::MOD_CONTROL | glfw::MOD_SHIFT,
            }]
        );
    }

    #[test]
    fn window_sizes() {
        let (bridge, queue, _) = bridge();
        bridge.update_physical_size(2400, 1080);
        assert!(queue.is_empty());
        assert_eq!(bridge.effective_window_size(), (2400, 1080));

        bridge.send_update_window_size(1920, 864);
        assert_eq!(
            queue.drain(),
            vec![NativeCommand::ScreenSize { width: 1920, height: 864 }]
        );
        assert_eq!(bridge.window_size(), (1920, 864));
        assert_eq!(bridge.effective_window_size(), (1920, 864));
    }

    #[test]
    fn hover_and_queue_mode_pass_through() {
        let (bridge, queue, _) = bridge();
        bridge.set_window_hovered(true);
        bridge.set_window_hovered(false);
        bridge.set_use_input_stack_queue(true);
        assert_eq!(
            queue.drain(),
            vec![
                NativeCommand::WindowAttrib { attrib: glfw::HOVERED, value: 1 },
                NativeCommand::WindowAttrib { attrib: glfw::HOVERED, value: 0 },
                NativeCommand::InputQueueMode { use_stack_queue: true },
            ]
        );
    }

    #[test]
    fn fps_comes_from_sink() {
        let (bridge, queue, _) = bridge();
        queue.report_fps(60);
        assert_eq!(bridge.current_fps(), 60);
    }

    #[test]
    fn dropped_bridge_skips_pending_release() {
        let (bridge, queue, frames) = bridge();
        bridge.put_mouse_event(glfw::MOUSE_BUTTON_LEFT);
        drop(bridge);

        assert_eq!(frames.do_frame(Instant::now() + Duration::from_secs(1)), 1);
        // Only the press made it out.
        assert_eq!(queue.drain().len(), 1);
    }

    #[test]
    fn grab_is_visible_before_notification() {
        let (bridge, _, frames) = bridge();
        bridge.on_grab_state_changed(true);
        assert!(bridge.is_grabbing());
        assert_eq!(frames.pending(), 1);
    }
}
