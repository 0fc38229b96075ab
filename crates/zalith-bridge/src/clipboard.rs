// Clipboard and link requests coming from the runtime.

use std::sync::{Mutex, PoisonError};

pub const CLIPBOARD_COPY: i32 = 2000;
pub const CLIPBOARD_PASTE: i32 = 2001;
pub const CLIPBOARD_OPEN: i32 = 2002;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOp {
    Copy,
    Paste,
    OpenLink,
}

impl ClipboardOp {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            CLIPBOARD_COPY => Some(ClipboardOp::Copy),
            CLIPBOARD_PASTE => Some(ClipboardOp::Paste),
            CLIPBOARD_OPEN => Some(ClipboardOp::OpenLink),
            _ => None,
        }
    }
}

/// Host system clipboard.
pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str);

    /// Plain-text content, or `None` when the clip is absent or not text.
    fn text(&self) -> Option<String>;
}

/// Opens links in the host browser (or file viewer for `file:` URLs).
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// In-process clipboard for headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) {
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
    }

    fn text(&self) -> Option<String> {
        self.text.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Opener that only logs the request.
pub struct LoggingUrlOpener;

impl UrlOpener for LoggingUrlOpener {
    fn open(&self, url: &str) {
        tracing::info!("Open link requested: {}", url);
    }
}
