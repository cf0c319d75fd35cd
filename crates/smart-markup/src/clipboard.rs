//! System clipboard access.
//!
//! Reading the clipboard is the only asynchronous step of a command. Hosts implement
//! [`Clipboard`] over whatever their platform offers; [`MemoryClipboard`] is a plain in-process
//! implementation.

use crate::error::EngineError;
use std::cell::RefCell;

/// Asynchronous clipboard collaborator.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    /// Current clipboard text.
    async fn read_text(&self) -> Result<String, EngineError>;

    /// Replace the clipboard text.
    async fn write_text(&self, text: &str) -> Result<(), EngineError>;
}

/// In-memory clipboard. An unavailable clipboard fails every read and write.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RefCell<Option<String>>,
}

impl MemoryClipboard {
    /// Clipboard holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(text.into())),
        }
    }

    /// Clipboard that refuses access.
    pub fn unavailable() -> Self {
        Self {
            contents: RefCell::new(None),
        }
    }

    /// Current contents, `None` if unavailable.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    async fn read_text(&self) -> Result<String, EngineError> {
        self.contents
            .borrow()
            .clone()
            .ok_or_else(|| EngineError::ClipboardUnavailable("clipboard access denied".to_string()))
    }

    async fn write_text(&self, text: &str) -> Result<(), EngineError> {
        let mut contents = self.contents.borrow_mut();
        match contents.as_mut() {
            Some(current) => {
                *current = text.to_string();
                Ok(())
            }
            None => Err(EngineError::ClipboardUnavailable(
                "clipboard access denied".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_roundtrip() {
        let clipboard = MemoryClipboard::new("first");
        assert_eq!(pollster::block_on(clipboard.read_text()).unwrap(), "first");
        pollster::block_on(clipboard.write_text("second")).unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("second"));
    }

    #[test]
    fn test_unavailable_clipboard_fails() {
        let clipboard = MemoryClipboard::unavailable();
        assert!(matches!(
            pollster::block_on(clipboard.read_text()),
            Err(EngineError::ClipboardUnavailable(_))
        ));
        assert!(pollster::block_on(clipboard.write_text("x")).is_err());
    }
}
