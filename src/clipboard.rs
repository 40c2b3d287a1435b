use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

/// A write-only text sink.
pub trait Clipboard {
    /// Place `text` on the clipboard. Returns whether it was accepted.
    fn copy(&mut self, text: &str) -> bool;
}

/// The desktop clipboard.
///
/// Writes go through `arboard` first. When that is unavailable (no display
/// server connection, headless session) the text is piped into the first
/// selection helper found on `PATH`.
pub struct SystemClipboard {
    primary: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let primary = match arboard::Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                debug!(error = %e, "system clipboard unavailable, using selection helpers");
                None
            }
        };
        Self { primary }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        if let Some(cb) = self.primary.as_mut() {
            match cb.set_text(text) {
                Ok(()) => return true,
                Err(e) => debug!(error = %e, "clipboard write failed, trying selection helpers"),
            }
        }
        let copied = copy_with_helper(text);
        if !copied {
            warn!("no clipboard mechanism available");
        }
        copied
    }
}

#[cfg(target_os = "macos")]
const SELECTION_HELPERS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(not(target_os = "macos"))]
const SELECTION_HELPERS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// The helpers do not report whether the selection owner took the text, so a
/// successful hand-off counts as success.
fn copy_with_helper(text: &str) -> bool {
    for (program, args) in SELECTION_HELPERS {
        let child = Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match child {
            Ok(child) => child,
            Err(_) => continue,
        };

        let written = child
            .stdin
            .take()
            .map(|mut stdin| stdin.write_all(text.as_bytes()).is_ok())
            .unwrap_or(false);
        let _ = child.wait();

        if written {
            debug!(helper = *program, "copied via selection helper");
            return true;
        }
    }
    false
}

/// In-process clipboard for headless runs and tests.
#[derive(Debug, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub available: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self {
            contents: None,
            available: true,
        }
    }

    /// A clipboard that rejects every write.
    #[cfg(test)]
    pub fn unavailable() -> Self {
        Self {
            contents: None,
            available: false,
        }
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> bool {
        if self.available {
            self.contents = Some(text.to_string());
        }
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_write() {
        let mut cb = MemoryClipboard::new();
        assert!(cb.copy("#ff0000"));
        assert!(cb.copy("#00ff00"));
        assert_eq!(cb.contents.as_deref(), Some("#00ff00"));
    }

    #[test]
    fn unavailable_clipboard_reports_failure() {
        let mut cb = MemoryClipboard::unavailable();
        assert!(!cb.copy("#ff0000"));
        assert!(cb.contents.is_none());
    }

    #[test]
    fn helpers_are_listed_for_this_platform() {
        assert!(!SELECTION_HELPERS.is_empty());
    }
}
