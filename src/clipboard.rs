//! Clipboard access for cut, copy and paste.
//!
//! The editor never talks to the system clipboard directly; the host hands it
//! a [`Clipboard`] implementation. [`MemoryClipboard`] keeps the contents in
//! process and is the default.

/// Clipboard backend supplied by the host.
pub trait Clipboard {
    /// Current clipboard text, if any.
    fn read(&mut self) -> Option<String>;

    /// Replace the clipboard text.
    fn write(&mut self, text: &str);
}

/// In-process clipboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> Option<String> {
        self.contents.clone()
    }

    fn write(&mut self, text: &str) {
        self.contents = Some(text.to_owned());
    }
}
