//! Detail modal state machine.
//!
//! ```text
//! Closed --open(known id)--> Open(record)
//! Open   --close-button | backdrop | Escape--> Closed
//! ```
//!
//! Page scroll lock is derived from the state, so every exit path releases it.

use crate::types::{PromptRecord, RecordId};

/// Why the modal was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

/// Modal state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(PromptRecord),
}

/// Controller for the single detail modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal for the record with `id`.
    ///
    /// Returns `false` and leaves the state untouched when no record has
    /// that id.
    pub fn open(&mut self, records: &[PromptRecord], id: &RecordId) -> bool {
        match records.iter().find(|r| &r.id == id) {
            Some(record) => {
                tracing::debug!(%id, "Opening prompt detail");
                self.state = ModalState::Open(record.clone());
                true
            }
            None => {
                tracing::debug!(%id, "Ignoring open for unknown prompt");
                false
            }
        }
    }

    /// Close the modal. Closing an already closed modal is a no-op.
    pub fn close(&mut self, trigger: CloseTrigger) {
        if self.is_open() {
            tracing::debug!(?trigger, "Closing prompt detail");
        }
        self.state = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Whether page scrolling is suppressed
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// The record shown, if open
    pub fn record(&self) -> Option<&PromptRecord> {
        match &self.state {
            ModalState::Open(record) => Some(record),
            ModalState::Closed => None,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }
}
