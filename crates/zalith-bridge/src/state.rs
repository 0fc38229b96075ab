// Derived input state the bridge keeps between events.
//
// Each field is individually atomic or mutex-guarded. Nothing here needs
// cross-field consistency: a reader may observe shift updated before control.

use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use zalith_keycodes::glfw;

/// The five modifier keys the game cares about.
#[derive(Debug, Default)]
pub struct ModifierState {
    shift: AtomicBool,
    control: AtomicBool,
    alt: AtomicBool,
    caps_lock: AtomicBool,
    num_lock: AtomicBool,
}

impl ModifierState {
    /// Record a key transition. Returns `false` for keys that are not tracked.
    ///
    /// Only the left-hand modifier keys are tracked; the on-screen controls
    /// never emit the right-hand variants as modifiers.
    pub fn update(&self, key: i32, down: bool) -> bool {
        let cell = match key {
            glfw::KEY_LEFT_SHIFT => &self.shift,
            glfw::KEY_LEFT_CONTROL => &self.control,
            glfw::KEY_LEFT_ALT => &self.alt,
            glfw::KEY_CAPS_LOCK => &self.caps_lock,
            glfw::KEY_NUM_LOCK => &self.num_lock,
            _ => return false,
        };
        cell.store(down, Ordering::Relaxed);
        true
    }

    /// GLFW modifier bitmask of the keys currently held.
    pub fn mods(&self) -> i32 {
        let mut mods = 0;
        if self.alt.load(Ordering::Relaxed) {
            mods |= glfw::MOD_ALT;
        }
        if self.caps_lock.load(Ordering::Relaxed) {
            mods |= glfw::MOD_CAPS_LOCK;
        }
        if self.control.load(Ordering::Relaxed) {
            mods |= glfw::MOD_CONTROL;
        }
        if self.num_lock.load(Ordering::Relaxed) {
            mods |= glfw::MOD_NUM_LOCK;
        }
        if self.shift.load(Ordering::Relaxed) {
            mods |= glfw::MOD_SHIFT;
        }
        mods
    }
}

/// Width/height pair stored as two atomics.
#[derive(Debug, Default)]
pub struct Size {
    width: AtomicI32,
    height: AtomicI32,
}

impl Size {
    pub fn set(&self, width: i32, height: i32) {
        self.width.store(width, Ordering::Relaxed);
        self.height.store(height, Ordering::Relaxed);
    }

    pub fn get(&self) -> (i32, i32) {
        (
            self.width.load(Ordering::Relaxed),
            self.height.load(Ordering::Relaxed),
        )
    }
}

/// Cursor position last sent to the runtime, plus window and surface sizes.
#[derive(Debug, Default)]
pub struct PointerState {
    position: Mutex<(f32, f32)>,
    pub window: Size,
    pub physical: Size,
}

impl PointerState {
    pub fn position(&self) -> (f32, f32) {
        *self.position.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_position(&self, x: f32, y: f32) {
        *self.position.lock().unwrap_or_else(PoisonError::into_inner) = (x, y);
    }

    /// Move by a delta relative to the cached position and return the result.
    ///
    /// Read and write happen under one lock so two concurrent deltas both land.
    pub fn offset(&self, dx: f32, dy: f32) -> (f32, f32) {
        let mut position = self.position.lock().unwrap_or_else(PoisonError::into_inner);
        *position = (position.0 + dx, position.1 + dy);
        *position
    }
}

/// A value whose change notifications are delivered late and may go stale.
///
/// Every `set` bumps a generation counter. A deferred notification captures the
/// generation it was scheduled for and compares it against the live counter
/// when it fires; any newer `set` in between makes it stale.
#[derive(Debug)]
pub struct Latest<T> {
    value: Mutex<T>,
    generation: AtomicU64,
}

impl<T: Copy> Latest<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Mutex::new(value),
            generation: AtomicU64::new(0),
        }
    }

    /// Store a new value and return the generation that identifies it.
    pub fn set(&self, value: T) -> u64 {
        // Value and generation move together so the newest generation always
        // names the stored value.
        let mut guard = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = value;
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn get(&self) -> T {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether `generation` is still the latest change.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::Acquire) == generation
    }
}
