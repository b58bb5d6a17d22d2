//! End-to-end scenarios over the core state machines.

use std::time::Duration;

use promptgallery_core::clipboard::{
    copy_text, revert_after, ClipboardError, ClipboardWriter, CopyButtonState, CopyFeedback,
    CopyPath, FEEDBACK_DURATION,
};
use promptgallery_core::nav::{expire_after, NavController, LOADING_TIMEOUT};
use tokio::time::Instant;
use promptgallery_core::{CloseTrigger, CopyOutcome, GalleryStore, GalleryView, NavEntry, PromptRecord, RecordId};

// ============================================================================
// Test Utilities
// ============================================================================

fn cat_and_car() -> GalleryStore {
    GalleryStore::with_records(vec![
        PromptRecord::new(1, "Cat", "a fluffy cat", &["animal"]),
        PromptRecord::new(2, "Car", "a red car", &["vehicle"]),
    ])
}

/// Native clipboard that throws on every write
struct ThrowingClipboard;

impl ClipboardWriter for ThrowingClipboard {
    fn name(&self) -> &'static str {
        "native"
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::WriteFailed("permission denied".to_string()))
    }
}

/// Fallback writer recording whether it ran
struct RecordingClipboard {
    succeed: bool,
    attempts: usize,
}

impl ClipboardWriter for RecordingClipboard {
    fn name(&self) -> &'static str {
        "webview"
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        self.attempts += 1;
        if self.succeed {
            Ok(())
        } else {
            Err(ClipboardError::WriteFailed("no selection".to_string()))
        }
    }
}

// ============================================================================
// Gallery Scenarios
// ============================================================================

#[test]
fn test_cat_and_car_filtering() {
    let mut store = cat_and_car();

    store.set_search("cat");
    let ids: Vec<_> = store.visible_records().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![RecordId::Int(1)]);

    store.set_search("");
    store.select_category("vehicle");
    let ids: Vec<_> = store.visible_records().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![RecordId::Int(2)]);

    store.select_category("all");
    store.set_search("z");
    assert_eq!(store.visible_count(), 0);
    assert_eq!(store.gallery_view(), GalleryView::NoResults);
}

#[test]
fn test_escape_closes_modal_and_restores_scroll() {
    let mut store = cat_and_car();

    assert!(store.open_modal(&RecordId::Int(1)));
    assert!(store.modal().scroll_locked());

    store.close_modal(CloseTrigger::Escape);
    assert!(!store.modal().is_open());
    assert!(!store.modal().scroll_locked());

    // Closing again changes nothing
    store.close_modal(CloseTrigger::Escape);
    assert!(!store.modal().is_open());
}

#[test]
fn test_unknown_id_shows_no_modal() {
    let mut store = cat_and_car();
    assert!(!store.open_modal(&RecordId::Text("missing".to_string())));
    assert!(store.selected_record().is_none());
}

// ============================================================================
// Clipboard Scenarios
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_clipboard_throw_runs_fallback_then_reverts() {
    let mut primary = ThrowingClipboard;
    let mut fallback = RecordingClipboard {
        succeed: false,
        attempts: 0,
    };
    let mut button = CopyButtonState::default();

    let outcome = copy_text(&mut primary, &mut fallback, "a fluffy cat").await;
    assert_eq!(fallback.attempts, 1);
    assert!(matches!(outcome, CopyOutcome::Failed(_)));

    let generation = button.on_outcome(&outcome);
    assert_eq!(button.feedback(), CopyFeedback::Failed);

    let started = Instant::now();
    let reverted = revert_after(generation, |g| button.revert(g)).await;
    assert!(reverted);
    assert!(started.elapsed() >= FEEDBACK_DURATION);
    assert_eq!(button.feedback(), CopyFeedback::Idle);
    assert_eq!(button.feedback().text(), "Copy");
}

#[tokio::test(start_paused = true)]
async fn test_older_click_revert_is_ignored() {
    let mut button = CopyButtonState::default();

    let first = button.on_outcome(&CopyOutcome::Copied(CopyPath::Primary));
    tokio::time::sleep(Duration::from_secs(1)).await;
    let second = button.on_outcome(&CopyOutcome::Copied(CopyPath::Fallback));

    // The first click's timer fires while the second feedback is showing
    assert!(!revert_after(first, |g| button.revert(g)).await);
    assert_eq!(button.feedback(), CopyFeedback::Copied);

    assert!(revert_after(second, |g| button.revert(g)).await);
    assert_eq!(button.feedback(), CopyFeedback::Idle);
}

#[test]
fn test_clipboard_fallback_success() {
    let mut primary = ThrowingClipboard;
    let mut fallback = RecordingClipboard {
        succeed: true,
        attempts: 0,
    };

    let outcome = futures::executor::block_on(copy_text(&mut primary, &mut fallback, "x"));
    assert_eq!(outcome, CopyOutcome::Copied(CopyPath::Fallback));
    assert_eq!(outcome.feedback(), CopyFeedback::Copied);
}

// ============================================================================
// Navigation Scenarios
// ============================================================================

#[test]
fn test_same_page_fragment_gets_fresh_cache_buster() {
    let mut nav = NavController::new(vec![
        NavEntry::new(0, "One", "/page?x=1#sec1"),
        NavEntry::new(1, "Two", "/page#sec2"),
    ]);

    nav.select(0, 100).unwrap();
    assert_eq!(nav.current_url(), Some("/page?x=1#sec1"));

    let first = nav.select(1, 200).unwrap();
    assert!(first.forced);
    assert_eq!(first.url, "/page?_t=200#sec2");

    // Selecting again within the same millisecond still changes the URL
    let second = nav.select(1, 200).unwrap();
    assert_ne!(second.url, first.url);
    assert!(second.url.ends_with("#sec2"));
}

#[tokio::test(start_paused = true)]
async fn test_loading_overlay_times_out() {
    let mut nav = NavController::new(vec![NavEntry::new(0, "Home", "https://wiki.example/")]);
    let load = nav.select(0, 1).unwrap();
    assert!(nav.is_loading());

    let started = Instant::now();
    let cleared = expire_after(&load, |g| nav.timeout_elapsed(g)).await;
    assert!(cleared);
    assert!(started.elapsed() >= LOADING_TIMEOUT);
    assert!(!nav.is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_timeout_from_earlier_selection_is_ignored() {
    let mut nav = NavController::new(vec![
        NavEntry::new(0, "Home", "https://wiki.example/"),
        NavEntry::new(0, "Other", "https://wiki.example/other"),
    ]);
    let first = nav.select(0, 1).unwrap();
    let second = nav.select(1, 2).unwrap();

    assert!(!expire_after(&first, |g| nav.timeout_elapsed(g)).await);
    assert!(nav.is_loading());

    nav.frame_loaded();
    // Load event came first; the pending timeout changes nothing
    assert!(!expire_after(&second, |g| nav.timeout_elapsed(g)).await);
    assert!(!nav.is_loading());
}
