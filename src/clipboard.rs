//! Clipboard backends for the desktop app.
//!
//! The native OS clipboard (arboard) is the primary path; the webview's
//! async clipboard API is the fallback.

use dioxus::prelude::*;
use promptgallery_core::clipboard::{copy_text, ClipboardError, ClipboardWriter, CopyOutcome};

/// OS clipboard via arboard
pub struct NativeClipboard {
    inner: Option<arboard::Clipboard>,
}

impl NativeClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("Native clipboard not available: {}", e);
                None
            }
        };
        Self { inner }
    }
}

impl ClipboardWriter for NativeClipboard {
    fn name(&self) -> &'static str {
        "native"
    }

    fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("native".to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

const WEBVIEW_COPY_JS: &str = r#"
const text = await dioxus.recv();
if (!navigator.clipboard || !navigator.clipboard.writeText) {
    return "unavailable";
}
try {
    await navigator.clipboard.writeText(text);
    return "ok";
} catch (e) {
    return String(e);
}
"#;

/// `navigator.clipboard.writeText` inside the webview
pub struct WebviewClipboard;

impl ClipboardWriter for WebviewClipboard {
    fn name(&self) -> &'static str {
        "webview"
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let eval = document::eval(WEBVIEW_COPY_JS);
        eval.send(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        let result: String = eval
            .join()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        match result.as_str() {
            "ok" => Ok(()),
            "unavailable" => Err(ClipboardError::Unavailable("webview".to_string())),
            other => Err(ClipboardError::WriteFailed(other.to_string())),
        }
    }
}

/// Copy with the native clipboard, falling back to the webview.
pub async fn copy_to_clipboard(text: &str) -> CopyOutcome {
    let mut primary = NativeClipboard::new();
    let mut fallback = WebviewClipboard;
    copy_text(&mut primary, &mut fallback, text).await
}
