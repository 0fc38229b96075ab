// Frame-callback scheduling.
//
// The host drives `FrameQueue::do_frame` from its display refresh callback
// (Choreographer on Android). Callbacks are one-shot and run on the first frame
// at or after their due time. Nothing is ever removed once posted: a deferred
// action that may become stale checks for that itself when it runs.

use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

pub type FrameCallback = Box<dyn FnOnce() + Send + 'static>;

/// Schedules one-shot work on a future display frame.
pub trait FrameScheduler: Send + Sync {
    fn post_frame_callback_delayed(&self, delay: Duration, callback: FrameCallback);
}

struct Pending {
    due: Instant,
    callback: FrameCallback,
}

/// Frame scheduler backed by a channel inbox and a backlog of not-yet-due work.
///
/// Posting is lock-free from any thread; only the frame thread touches the
/// backlog. Callbacks posted while a frame is running wait for the next frame.
pub struct FrameQueue {
    sender: Sender<Pending>,
    receiver: Receiver<Pending>,
    backlog: Mutex<Vec<Pending>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            backlog: Mutex::new(Vec::new()),
        }
    }

    /// Run every callback due at `now`, earliest due time first, and return
    /// how many ran.
    ///
    /// Callbacks run without the backlog lock held, so they may post again.
    pub fn do_frame(&self, now: Instant) -> usize {
        let mut due = {
            let mut backlog = self.backlog.lock().unwrap_or_else(PoisonError::into_inner);
            backlog.extend(self.receiver.try_iter());
            let (due, waiting): (Vec<_>, Vec<_>) =
                backlog.drain(..).partition(|pending| pending.due <= now);
            *backlog = waiting;
            due
        };

        // Stable: equal due times keep posting order.
        due.sort_by_key(|pending| pending.due);

        let count = due.len();
        for pending in due {
            (pending.callback)();
        }
        count
    }

    /// Number of callbacks posted but not yet run
    pub fn pending(&self) -> usize {
        let backlog = self.backlog.lock().unwrap_or_else(PoisonError::into_inner);
        backlog.len() + self.receiver.len()
    }
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for FrameQueue {
    fn post_frame_callback_delayed(&self, delay: Duration, callback: FrameCallback) {
        let pending = Pending {
            due: Instant::now() + delay,
            callback,
        };
        if self.sender.send(pending).is_err() {
            // Receiver lives in `self`, so this only happens mid-drop.
            tracing::warn!("Frame queue closed, dropping callback");
        }
    }
}
