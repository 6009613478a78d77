use crate::context::ContextDocument;
use crate::errors::ContextError;
use arboard::Clipboard;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

pub const FALLBACK_SEPARATOR: &str = "---------------------------";

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ContextError>;
}

/// The OS clipboard, opened fresh for each write.
///
/// On X11 and Wayland the selection belongs to the process that set it. When
/// the `Clipboard` is dropped arboard hands the text to a running clipboard
/// manager; without one the text disappears once this process exits. A
/// non-zero linger keeps serving the selection for up to that long, returning
/// early as soon as another program takes the clipboard over. Other platforms
/// ignore it.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    linger: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard::default()
    }

    pub fn with_linger(mut self, linger: Duration) -> Self {
        self.linger = (!linger.is_zero()).then_some(linger);
        self
    }

    pub fn linger(&self) -> Option<Duration> {
        self.linger
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ContextError> {
        debug!("Initializing clipboard");
        let mut clipboard =
            Clipboard::new().map_err(|e| ContextError::ClipboardInitError(e.to_string()))?;

        match self.linger {
            #[cfg(all(
                unix,
                not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
            ))]
            Some(linger) => {
                use arboard::SetExtLinux;
                debug!("Serving clipboard for up to {:?}", linger);
                clipboard
                    .set()
                    .wait_until(std::time::Instant::now() + linger)
                    .text(text.to_owned())
            }
            _ => clipboard.set_text(text.to_owned()),
        }
        .map_err(|e| ContextError::ClipboardWriteError(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Clipboard,
    Stdout,
}

/// Puts the document on the clipboard and reports to `out`. If the clipboard
/// is unusable the whole document is written to `out` instead.
pub fn deliver_document(
    clipboard: &mut dyn ClipboardSink,
    document: &ContextDocument,
    out: &mut dyn Write,
) -> Result<Delivery, ContextError> {
    match clipboard.set_text(&document.text) {
        Ok(()) => {
            writeln!(
                out,
                "✅ Copied {} files to clipboard ({} chars)!",
                document.file_count(),
                document.char_count()
            )?;
            Ok(Delivery::Clipboard)
        }
        Err(e) => {
            debug!("Clipboard unavailable, printing instead");
            writeln!(out, "⚠️  Failed to copy to clipboard: {}", e)?;
            writeln!(out, "Here is the output instead:")?;
            writeln!(out, "{}", FALLBACK_SEPARATOR)?;
            writeln!(out, "{}", document.text)?;
            Ok(Delivery::Stdout)
        }
    }
}
