//! Wiki viewer navigation state.
//!
//! Tracks which URL the embedded frame shows, which sidebar entry is active,
//! and whether the loading overlay is up. The frame is cross-origin, so the
//! only signals are its load event and elapsed time: the overlay clears on
//! whichever comes first.
//!
//! A fragment-only hop within the current document may not fire a load event
//! at all. For that case the controller inserts a cache-busting query
//! parameter before the fragment to force a real load.

use std::time::Duration;

use crate::types::NavEntry;

/// Safety timeout after which the loading overlay is cleared regardless
pub const LOADING_TIMEOUT: Duration = Duration::from_secs(3);

/// Query parameter used to force a fresh frame load
pub const CACHE_BUST_PARAM: &str = "_t";

/// URL without its query and fragment
pub fn url_base(url: &str) -> &str {
    match url.find(['?', '#']) {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Fragment of a URL (without `#`), if present and non-empty
pub fn url_fragment(url: &str) -> Option<&str> {
    url.split_once('#')
        .map(|(_, fragment)| fragment)
        .filter(|f| !f.is_empty())
}

/// Insert `_t=<stamp>` into the query, before any fragment.
pub fn with_cache_buster(url: &str, stamp: i64) -> String {
    let (head, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };
    let separator = if head.contains('?') { '&' } else { '?' };
    let mut busted = format!("{}{}{}={}", head, separator, CACHE_BUST_PARAM, stamp);
    if let Some(fragment) = fragment {
        busted.push('#');
        busted.push_str(fragment);
    }
    busted
}

/// Wait [`LOADING_TIMEOUT`] for `load`, then hand its generation to `expire`.
///
/// `expire` is normally [`NavController::timeout_elapsed`]; its result is
/// returned.
pub async fn expire_after<F>(load: &FrameLoad, expire: F) -> bool
where
    F: FnOnce(u64) -> bool,
{
    tokio::time::sleep(LOADING_TIMEOUT).await;
    expire(load.generation)
}

/// Instruction for the frame: load `url`, and arm the timeout for `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLoad {
    pub url: String,
    pub generation: u64,
    /// Whether a cache-busting parameter was inserted
    pub forced: bool,
}

/// Navigation controller of the wiki viewer
#[derive(Debug, Clone, Default)]
pub struct NavController {
    entries: Vec<NavEntry>,
    active: Option<usize>,
    current_url: Option<String>,
    loading: bool,
    generation: u64,
}

impl NavController {
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Index of the active entry
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Last URL loaded into the frame
    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Load the home URL without marking any entry active.
    pub fn load_home(&mut self, url: &str) -> FrameLoad {
        self.active = None;
        self.begin_load(url.to_string(), false)
    }

    /// Select the entry at `index`.
    ///
    /// `stamp` is the cache-busting value (milliseconds since the epoch in
    /// the app). Returns `None` for an out-of-range index.
    pub fn select(&mut self, index: usize, stamp: i64) -> Option<FrameLoad> {
        let target = self.entries.get(index)?.url.clone();
        self.active = Some(index);

        let same_document = self
            .current_url
            .as_deref()
            .is_some_and(|current| url_base(current) == url_base(&target));

        if same_document && url_fragment(&target).is_some() {
            let mut forced = with_cache_buster(&target, stamp);
            if self.current_url.as_deref() == Some(forced.as_str()) {
                forced = with_cache_buster(&target, stamp + 1);
            }
            tracing::debug!(url = %forced, "Forcing reload for same-document fragment");
            Some(self.begin_load(forced, true))
        } else {
            tracing::debug!(url = %target, "Loading nav entry");
            Some(self.begin_load(target, false))
        }
    }

    fn begin_load(&mut self, url: String, forced: bool) -> FrameLoad {
        self.generation += 1;
        self.loading = true;
        self.current_url = Some(url.clone());
        FrameLoad {
            url,
            generation: self.generation,
            forced,
        }
    }

    /// The frame reported load completion.
    pub fn frame_loaded(&mut self) {
        self.loading = false;
    }

    /// The safety timeout for `generation` elapsed.
    ///
    /// Timeouts armed by an earlier load are ignored. Returns whether the
    /// overlay was cleared by this call.
    pub fn timeout_elapsed(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.loading {
            return false;
        }
        tracing::debug!(generation, "Frame load timed out, clearing overlay");
        self.loading = false;
        true
    }
}
