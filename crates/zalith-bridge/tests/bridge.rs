// End-to-end behaviour of the event bridge.
//
// Builds a bridge over a real EventQueue and a manually driven FrameQueue, with
// recording host collaborators, and checks what reaches each side.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use zalith_bridge::keycodes::glfw;
use zalith_bridge::{
    BridgeConfig, CallbackBridge, Clipboard, CursorMode, CursorShape, EventQueue, FrameCallback,
    FrameQueue, FrameScheduler, HostServices, NativeCommand, StateListener, UrlOpener,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum HostEvent {
    Mode(CursorMode),
    Shape(CursorShape),
    Open(String),
}

#[derive(Default)]
struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
    clip: Mutex<Option<String>>,
}

impl RecordingHost {
    fn events(&self) -> Vec<HostEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl StateListener for RecordingHost {
    fn cursor_mode_changed(&self, mode: CursorMode) {
        self.events.lock().unwrap().push(HostEvent::Mode(mode));
    }

    fn cursor_shape_changed(&self, shape: CursorShape) {
        self.events.lock().unwrap().push(HostEvent::Shape(shape));
    }
}

impl Clipboard for RecordingHost {
    fn set_text(&self, text: &str) {
        *self.clip.lock().unwrap() = Some(text.to_string());
    }

    fn text(&self) -> Option<String> {
        self.clip.lock().unwrap().clone()
    }
}

impl UrlOpener for RecordingHost {
    fn open(&self, url: &str) {
        self.events.lock().unwrap().push(HostEvent::Open(url.to_string()));
    }
}

struct Harness {
    bridge: CallbackBridge,
    queue: Arc<EventQueue>,
    frames: Arc<FrameQueue>,
    host: Arc<RecordingHost>,
}

impl Harness {
    fn new() -> Self {
        let queue = Arc::new(EventQueue::new());
        let frames = Arc::new(FrameQueue::new());
        let host = Arc::new(RecordingHost::default());
        let bridge = CallbackBridge::new(
            BridgeConfig::default(),
            queue.clone(),
            frames.clone(),
            HostServices {
                clipboard: host.clone(),
                url_opener: host.clone(),
                listener: host.clone(),
            },
        );
        Self {
            bridge,
            queue,
            frames,
            host,
        }
    }

    /// Run a frame far enough in the future that everything posted is due.
    fn run_frame(&self) -> usize {
        self.frames.do_frame(Instant::now() + Duration::from_secs(1))
    }
}

const TRACKED: [(i32, i32); 5] = [
    (glfw::KEY_LEFT_SHIFT, glfw::MOD_SHIFT),
    (glfw::KEY_LEFT_CONTROL, glfw::MOD_CONTROL),
    (glfw::KEY_LEFT_ALT, glfw::MOD_ALT),
    (glfw::KEY_CAPS_LOCK, glfw::MOD_CAPS_LOCK),
    (glfw::KEY_NUM_LOCK, glfw::MOD_NUM_LOCK),
];

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

#[test]
fn modifier_mask_reflects_last_transition_per_key() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..200 {
        let h = Harness::new();
        let mut held = [false; 5];
        let len = rng.gen_range(0..40);
        for _ in 0..len {
            let index = rng.gen_range(0..TRACKED.len());
            let down = rng.gen_bool(0.5);
            h.bridge.set_modifiers(TRACKED[index].0, down);
            held[index] = down;
        }

        let expected = TRACKED
            .iter()
            .zip(held)
            .filter(|(_, down)| *down)
            .fold(0, |mask, ((_, bit), _)| mask | bit);
        assert_eq!(h.bridge.current_mods(), expected);
    }
}

#[test]
fn untracked_modifiers_do_not_change_mask() {
    let h = Harness::new();
    h.bridge.set_modifiers(glfw::KEY_LEFT_ALT, true);
    h.bridge.set_modifiers(glfw::KEY_RIGHT_ALT, false);
    h.bridge.set_modifiers(glfw::KEY_LEFT_SUPER, true);
    h.bridge.set_modifiers(glfw::KEY_SPACE, true);
    assert_eq!(h.bridge.current_mods(), glfw::MOD_ALT);
}

#[test]
fn mouse_buttons_carry_current_mods() {
    let h = Harness::new();
    h.bridge.set_modifiers(glfw::KEY_LEFT_SHIFT, true);
    h.bridge.send_mouse_button(glfw::MOUSE_BUTTON_RIGHT, true);
    assert_eq!(
        h.queue.drain(),
        vec![NativeCommand::MouseButton {
            button: glfw::MOUSE_BUTTON_RIGHT,
            action: glfw::PRESS,
            mods: glfw::MOD_SHIFT,
        }]
    );
    assert_eq!(h.bridge.mouse_position(), (0.0, 0.0));
}

// ---------------------------------------------------------------------------
// Pointer
// ---------------------------------------------------------------------------

#[test]
fn relative_motion_builds_on_last_position() {
    let h = Harness::new();
    h.bridge.send_cursor_pos(100.0, 100.0);
    h.bridge.send_cursor_delta(5.0, -3.0);
    h.bridge.send_cursor_delta(1.0, 1.0);

    assert_eq!(
        h.queue.drain(),
        vec![
            NativeCommand::CursorPos { x: 100.0, y: 100.0 },
            NativeCommand::CursorPos { x: 105.0, y: 97.0 },
            NativeCommand::CursorPos { x: 106.0, y: 98.0 },
        ]
    );
    assert_eq!(h.bridge.mouse_position(), (106.0, 98.0));
}

#[test]
fn out_of_window_positions_pass_through() {
    let h = Harness::new();
    h.bridge.send_update_window_size(800, 600);
    h.queue.drain();

    h.bridge.send_cursor_pos(-20.0, 9000.0);
    assert_eq!(
        h.queue.drain(),
        vec![NativeCommand::CursorPos { x: -20.0, y: 9000.0 }]
    );
}

#[test]
fn concurrent_deltas_all_land() {
    let h = Harness::new();
    let threads: Vec<_> = (0..4)
        .map(|_| {
            let bridge = h.bridge.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    bridge.send_cursor_delta(1.0, 2.0);
                }
            })
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }

    assert_eq!(h.bridge.mouse_position(), (1000.0, 2000.0));
    assert_eq!(h.queue.len(), 1000);
}

// ---------------------------------------------------------------------------
// Synthetic click
// ---------------------------------------------------------------------------

#[test]
fn synthetic_click_releases_on_a_later_frame() {
    let h = Harness::new();
    h.bridge.put_mouse_event(glfw::MOUSE_BUTTON_LEFT);
    h.bridge.send_cursor_pos(10.0, 20.0);

    // Not due yet on a frame right now.
    assert_eq!(h.frames.do_frame(Instant::now()), 0);

    h.bridge.send_scroll(0.0, 1.0);
    assert_eq!(h.run_frame(), 1);

    assert_eq!(
        h.queue.drain(),
        vec![
            NativeCommand::MouseButton {
                button: glfw::MOUSE_BUTTON_LEFT,
                action: glfw::PRESS,
                mods: 0,
            },
            NativeCommand::CursorPos { x: 10.0, y: 20.0 },
            NativeCommand::Scroll { x: 0.0, y: 1.0 },
            NativeCommand::MouseButton {
                button: glfw::MOUSE_BUTTON_LEFT,
                action: glfw::RELEASE,
                mods: 0,
            },
        ]
    );
}

#[test]
fn repeated_synthetic_clicks_all_release() {
    // No supersede check on the release half: every click gets its release.
    let h = Harness::new();
    h.bridge.put_mouse_event(glfw::MOUSE_BUTTON_LEFT);
    h.bridge.put_mouse_event(glfw::MOUSE_BUTTON_LEFT);
    assert_eq!(h.run_frame(), 2);

    let releases = h
        .queue
        .drain()
        .into_iter()
        .filter(|c| matches!(c, NativeCommand::MouseButton { action, .. } if *action == glfw::RELEASE))
        .count();
    assert_eq!(releases, 2);
}

#[test]
fn click_at_moves_first() {
    let h = Harness::new();
    h.bridge.put_mouse_event_at(glfw::MOUSE_BUTTON_RIGHT, 42.0, 24.0);
    let commands = h.queue.drain();
    assert_eq!(commands[0], NativeCommand::CursorPos { x: 42.0, y: 24.0 });
    assert!(matches!(
        commands[1],
        NativeCommand::MouseButton { button, action, .. }
            if button == glfw::MOUSE_BUTTON_RIGHT && action == glfw::PRESS
    ));
    assert_eq!(h.bridge.mouse_position(), (42.0, 24.0));
}

#[test]
fn immediate_click_sends_both_halves() {
    let h = Harness::new();
    h.bridge.send_mouse_click(glfw::MOUSE_BUTTON_MIDDLE);
    assert_eq!(h.queue.len(), 2);
    assert_eq!(h.frames.pending(), 0);
}

// ---------------------------------------------------------------------------
// Grab and cursor shape
// ---------------------------------------------------------------------------

#[test]
fn back_to_back_grab_changes_notify_once_with_latest() {
    let h = Harness::new();
    h.bridge.on_grab_state_changed(true);
    h.bridge.on_grab_state_changed(false);
    assert!(!h.bridge.is_grabbing());

    assert_eq!(h.run_frame(), 2);
    assert_eq!(h.host.events(), vec![HostEvent::Mode(CursorMode::Enabled)]);
}

#[test]
fn grab_flip_flop_only_reports_final_state() {
    let h = Harness::new();
    h.bridge.on_grab_state_changed(true);
    h.bridge.on_grab_state_changed(false);
    h.bridge.on_grab_state_changed(true);
    h.run_frame();
    assert_eq!(h.host.events(), vec![HostEvent::Mode(CursorMode::Disabled)]);
}

#[test]
fn separated_grab_changes_each_notify() {
    let h = Harness::new();
    h.bridge.on_grab_state_changed(true);
    h.run_frame();
    h.bridge.on_grab_state_changed(false);
    h.run_frame();
    assert_eq!(
        h.host.events(),
        vec![
            HostEvent::Mode(CursorMode::Disabled),
            HostEvent::Mode(CursorMode::Enabled),
        ]
    );
}

#[test]
fn unknown_cursor_shape_notifies_arrow() {
    let h = Harness::new();
    h.bridge.on_cursor_shape_changed(zalith_bridge::cursor::GLFW_HAND_CURSOR);
    h.run_frame();
    h.bridge.on_cursor_shape_changed(0x1234);
    assert_eq!(h.bridge.cursor_shape(), CursorShape::Arrow);
    h.run_frame();

    assert_eq!(
        h.host.events(),
        vec![
            HostEvent::Shape(CursorShape::Hand),
            HostEvent::Shape(CursorShape::Arrow),
        ]
    );
}

#[test]
fn cursor_shape_changes_are_debounced() {
    let h = Harness::new();
    h.bridge.on_cursor_shape_changed(zalith_bridge::cursor::GLFW_IBEAM_CURSOR);
    h.bridge.on_cursor_shape_changed(zalith_bridge::cursor::GLFW_RESIZE_EW_CURSOR);
    h.run_frame();
    assert_eq!(h.host.events(), vec![HostEvent::Shape(CursorShape::ResizeEW)]);
}

#[test]
fn grab_and_shape_do_not_supersede_each_other() {
    let h = Harness::new();
    h.bridge.on_grab_state_changed(true);
    h.bridge.on_cursor_shape_changed(zalith_bridge::cursor::GLFW_CROSSHAIR_CURSOR);
    h.run_frame();
    let events = h.host.events();
    assert_eq!(events.len(), 2);
    assert!(events.contains(&HostEvent::Mode(CursorMode::Disabled)));
    assert!(events.contains(&HostEvent::Shape(CursorShape::CrossHair)));
}

// ---------------------------------------------------------------------------
// Clipboard
// ---------------------------------------------------------------------------

#[test]
fn paste_without_text_is_empty_string() {
    let h = Harness::new();
    assert_eq!(
        h.bridge.access_clipboard(zalith_bridge::clipboard::CLIPBOARD_PASTE, ""),
        Some(String::new())
    );
}

#[test]
fn copy_then_paste() {
    let h = Harness::new();
    assert_eq!(
        h.bridge
            .access_clipboard(zalith_bridge::clipboard::CLIPBOARD_COPY, "/tp 0 64 0"),
        None
    );
    assert_eq!(
        h.bridge
            .access_clipboard(zalith_bridge::clipboard::CLIPBOARD_PASTE, "ignored"),
        Some("/tp 0 64 0".to_string())
    );
}

#[test]
fn open_link_goes_to_opener() {
    let h = Harness::new();
    assert_eq!(
        h.bridge
            .access_clipboard(zalith_bridge::clipboard::CLIPBOARD_OPEN, "https://minecraft.net"),
        None
    );
    assert_eq!(
        h.host.events(),
        vec![HostEvent::Open("https://minecraft.net".to_string())]
    );
}

#[test]
fn unknown_clipboard_op_is_noop() {
    let h = Harness::new();
    h.bridge
        .access_clipboard(zalith_bridge::clipboard::CLIPBOARD_COPY, "keep");
    assert_eq!(h.bridge.access_clipboard(1999, "overwrite"), None);
    assert_eq!(h.host.text().as_deref(), Some("keep"));
    assert!(h.host.events().is_empty());
}

// ---------------------------------------------------------------------------
// Keycode tables via the bridge re-export
// ---------------------------------------------------------------------------

#[test]
fn label_lookup_distinguishes_absent_from_present() {
    use zalith_bridge::keycodes::{keycode_from_name, label_for_key};

    let menu = keycode_from_name("GLFW_KEY_MENU").unwrap();
    assert_eq!(label_for_key(menu), None);
    assert_eq!(label_for_key(glfw::KEY_SPACE), Some("Space"));
}

#[test]
fn custom_config_changes_delays() {
    let queue = Arc::new(EventQueue::new());
    let frames = Arc::new(FrameQueue::new());
    let bridge = CallbackBridge::new(
        BridgeConfig::from_json(r#"{"click_release_delay_ms": 10000}"#),
        queue.clone(),
        frames.clone(),
        HostServices::default(),
    );
    bridge.put_mouse_event(glfw::MOUSE_BUTTON_LEFT);

    assert_eq!(frames.do_frame(Instant::now() + Duration::from_secs(1)), 0);
    assert_eq!(frames.do_frame(Instant::now() + Duration::from_secs(11)), 1);
    assert_eq!(queue.len(), 2);
}

// ---------------------------------------------------------------------------
// Delivery from concurrent frame threads
// ---------------------------------------------------------------------------

/// Runs every callback on its own thread once its delay has passed.
#[derive(Default)]
struct ThreadScheduler {
    handles: Mutex<Vec<thread::JoinHandle<()>>>,
}

impl ThreadScheduler {
    fn join_all(&self) {
        let handles: Vec<_> = self.handles.lock().unwrap().drain(..).collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}

impl FrameScheduler for ThreadScheduler {
    fn post_frame_callback_delayed(&self, delay: Duration, callback: FrameCallback) {
        let handle = thread::spawn(move || {
            thread::sleep(delay);
            callback();
        });
        self.handles.lock().unwrap().push(handle);
    }
}

/// Listener that stays inside each callback for a while and records overlap.
#[derive(Default)]
struct SlowListener {
    mode_busy: AtomicBool,
    shape_busy: AtomicBool,
    overlapped: AtomicBool,
    delivered: AtomicUsize,
}

impl SlowListener {
    fn hold(&self, busy: &AtomicBool) {
        if busy.swap(true, Ordering::SeqCst) {
            self.overlapped.store(true, Ordering::SeqCst);
        }
        thread::sleep(Duration::from_millis(30));
        busy.store(false, Ordering::SeqCst);
        self.delivered.fetch_add(1, Ordering::SeqCst);
    }
}

impl StateListener for SlowListener {
    fn cursor_mode_changed(&self, _mode: CursorMode) {
        self.hold(&self.mode_busy);
    }

    fn cursor_shape_changed(&self, _shape: CursorShape) {
        self.hold(&self.shape_busy);
    }
}

fn threaded_bridge() -> (CallbackBridge, Arc<ThreadScheduler>, Arc<SlowListener>) {
    let scheduler = Arc::new(ThreadScheduler::default());
    let listener = Arc::new(SlowListener::default());
    let bridge = CallbackBridge::new(
        BridgeConfig {
            notify_delay_ms: 0,
            ..BridgeConfig::default()
        },
        Arc::new(EventQueue::new()),
        scheduler.clone(),
        HostServices {
            listener: listener.clone(),
            ..HostServices::default()
        },
    );
    (bridge, scheduler, listener)
}

/// Wait until a delivery is inside the listener (or already done with it).
fn wait_for_delivery(listener: &SlowListener, busy: &AtomicBool, delivered_before: usize) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !busy.load(Ordering::SeqCst)
        && listener.delivered.load(Ordering::SeqCst) == delivered_before
    {
        assert!(Instant::now() < deadline, "delivery never started");
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn grab_deliveries_never_overlap() {
    let (bridge, scheduler, listener) = threaded_bridge();

    for round in 0..5 {
        bridge.on_grab_state_changed(true);
        // A newer state arrives while the older one is still being delivered
        wait_for_delivery(&listener, &listener.mode_busy, round * 2);
        bridge.on_grab_state_changed(false);
        scheduler.join_all();
        assert_eq!(listener.delivered.load(Ordering::SeqCst), (round + 1) * 2);
    }

    assert!(!listener.overlapped.load(Ordering::SeqCst));
}

#[test]
fn cursor_shape_deliveries_never_overlap() {
    let (bridge, scheduler, listener) = threaded_bridge();

    for round in 0..5 {
        bridge.on_cursor_shape_changed(0x36004);
        wait_for_delivery(&listener, &listener.shape_busy, round * 2);
        bridge.on_cursor_shape_changed(0x36002);
        scheduler.join_all();
        assert_eq!(listener.delivered.load(Ordering::SeqCst), (round + 1) * 2);
    }

    assert!(!listener.overlapped.load(Ordering::SeqCst));
}
