//! Clipboard helper with a primary and a fallback writer.
//!
//! Writers are feature-detected through [`ClipboardWriter::is_available`] and
//! report failures as values. [`copy_text`] never propagates an error: the
//! caller only gets a [`CopyOutcome`] to turn into button feedback.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// How long success/failure feedback stays on the triggering control
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Clipboard write failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard backend on this platform/renderer
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected the write
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// A clipboard backend
pub trait ClipboardWriter {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Whether the backend can be used at all
    fn is_available(&self) -> bool;

    /// Write `text` to the clipboard
    fn write_text(&mut self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Which path completed the copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Fallback,
}

/// Result of a copy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyPath),
    Failed(ClipboardError),
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }

    /// Feedback to show on the triggering control
    pub fn feedback(&self) -> CopyFeedback {
        match self {
            CopyOutcome::Copied(_) => CopyFeedback::Copied,
            CopyOutcome::Failed(_) => CopyFeedback::Failed,
        }
    }
}

/// Label state of a copy button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyFeedback {
    pub fn icon(&self) -> &'static str {
        match self {
            CopyFeedback::Copied => "✅",
            CopyFeedback::Idle | CopyFeedback::Failed => "📋",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            CopyFeedback::Idle => "Copy",
            CopyFeedback::Copied => "Copied!",
            CopyFeedback::Failed => "Copy failed",
        }
    }

    /// Extra CSS class for the button
    pub fn class(&self) -> &'static str {
        match self {
            CopyFeedback::Idle => "",
            CopyFeedback::Copied => "success",
            CopyFeedback::Failed => "failure",
        }
    }
}

/// Feedback state of one copy button.
///
/// Every outcome starts a new generation. Only the revert for the latest
/// generation returns the label to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyButtonState {
    feedback: CopyFeedback,
    generation: u64,
}

impl CopyButtonState {
    pub fn feedback(&self) -> CopyFeedback {
        self.feedback
    }

    /// Show the feedback for `outcome`; returns the generation to revert.
    pub fn on_outcome(&mut self, outcome: &CopyOutcome) -> u64 {
        self.generation += 1;
        self.feedback = outcome.feedback();
        self.generation
    }

    /// Return to idle if `generation` is still the latest. Returns whether
    /// the label changed.
    pub fn revert(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.feedback == CopyFeedback::Idle {
            return false;
        }
        self.feedback = CopyFeedback::Idle;
        true
    }
}

/// Wait [`FEEDBACK_DURATION`], then hand `generation` to `revert`.
pub async fn revert_after<F>(generation: u64, revert: F) -> bool
where
    F: FnOnce(u64) -> bool,
{
    tokio::time::sleep(FEEDBACK_DURATION).await;
    revert(generation)
}

async fn try_writer<W: ClipboardWriter>(writer: &mut W, text: &str) -> Result<(), ClipboardError> {
    if !writer.is_available() {
        return Err(ClipboardError::Unavailable(writer.name().to_string()));
    }
    writer.write_text(text).await
}

/// Copy `text`, trying `primary` first and `fallback` when the primary is
/// unavailable or fails.
pub async fn copy_text<P, F>(primary: &mut P, fallback: &mut F, text: &str) -> CopyOutcome
where
    P: ClipboardWriter,
    F: ClipboardWriter,
{
    match try_writer(primary, text).await {
        Ok(()) => return CopyOutcome::Copied(CopyPath::Primary),
        Err(e) => {
            tracing::debug!(writer = primary.name(), error = %e, "Primary clipboard failed, using fallback");
        }
    }

    match try_writer(fallback, text).await {
        Ok(()) => CopyOutcome::Copied(CopyPath::Fallback),
        Err(e) => {
            tracing::warn!(writer = fallback.name(), error = %e, "Copy failed");
            CopyOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeWriter {
        available: bool,
        fail: bool,
        written: Vec<String>,
    }

    impl FakeWriter {
        fn new(available: bool, fail: bool) -> Self {
            Self {
                available,
                fail,
                written: Vec::new(),
            }
        }
    }

    impl ClipboardWriter for FakeWriter {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn is_available(&self) -> bool {
            self.available
        }

        async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::WriteFailed("denied".to_string()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn primary_path_wins() {
        let mut primary = FakeWriter::new(true, false);
        let mut fallback = FakeWriter::new(true, false);
        let outcome = copy_text(&mut primary, &mut fallback, "hello").await;
        assert_eq!(outcome, CopyOutcome::Copied(CopyPath::Primary));
        assert_eq!(primary.written, vec!["hello"]);
        assert!(fallback.written.is_empty());
    }

    #[tokio::test]
    async fn unavailable_primary_uses_fallback() {
        let mut primary = FakeWriter::new(false, false);
        let mut fallback = FakeWriter::new(true, false);
        let outcome = copy_text(&mut primary, &mut fallback, "hello").await;
        assert_eq!(outcome, CopyOutcome::Copied(CopyPath::Fallback));
        assert_eq!(fallback.written, vec!["hello"]);
    }

    #[tokio::test]
    async fn both_failing_reports_failure() {
        let mut primary = FakeWriter::new(true, true);
        let mut fallback = FakeWriter::new(true, true);
        let outcome = copy_text(&mut primary, &mut fallback, "hello").await;
        assert!(!outcome.is_success());
        assert_eq!(outcome.feedback(), CopyFeedback::Failed);
    }

    #[test]
    fn latest_outcome_owns_the_revert() {
        let mut button = CopyButtonState::default();
        let first = button.on_outcome(&CopyOutcome::Copied(CopyPath::Primary));
        let second = button.on_outcome(&CopyOutcome::Failed(ClipboardError::WriteFailed(
            "denied".to_string(),
        )));

        assert!(!button.revert(first));
        assert_eq!(button.feedback(), CopyFeedback::Failed);
        assert!(button.revert(second));
        assert_eq!(button.feedback(), CopyFeedback::Idle);
        // Reverting twice is harmless
        assert!(!button.revert(second));
    }

    #[test]
    fn feedback_labels_are_distinct() {
        assert_eq!(CopyFeedback::default(), CopyFeedback::Idle);
        assert_ne!(CopyFeedback::Copied.text(), CopyFeedback::Failed.text());
        assert_eq!(CopyFeedback::Copied.class(), "success");
        assert_eq!(CopyFeedback::Idle.text(), "Copy");
    }
}
