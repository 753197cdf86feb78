//! View-state machines for the two loaders.
//!
//! The list loader walks `idle → loading → (idle | terminal)` per page; the
//! detail loader is the single-item variant. Both discard stale responses
//! through [`GenerationCounter`]: every fetch mints a token when it starts
//! and applies its result only if that token is still current.

use crate::error::ApiError;
use crate::models::Photo;

/// Monotonic token source used to discard stale fetch results.
///
/// Minting a new token invalidates every earlier one, so a slow response
/// from a superseded request can never overwrite newer state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationCounter(u64);

impl GenerationCounter {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

/// Outcome of applying one page result to the list state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// N items were appended; further pages may follow.
    Appended(usize),
    /// Empty page or fetch failure; pagination is over for this session.
    EndOfList,
}

/// State of the paginated photo list.
///
/// The collection is append-only in fetch-arrival order and performs no
/// deduplication; overlapping pages from upstream render as duplicates.
/// Once `has_more` drops to false it never comes back for the session —
/// a fetch failure is treated the same as an exhausted listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    photos: Vec<Photo>,
    loading: bool,
    has_more: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            photos: Vec::new(),
            loading: false,
            has_more: true,
        }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether the scroll trigger may advance the cursor. Disabled while a
    /// page is in flight so no two fetches overlap.
    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.loading
    }

    /// Entered whenever the page cursor changes; the cursor change is the
    /// single fetch trigger point.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_page(&mut self, result: Result<Vec<Photo>, ApiError>) -> PageOutcome {
        self.loading = false;
        match result {
            Ok(batch) if batch.is_empty() => {
                self.has_more = false;
                PageOutcome::EndOfList
            }
            Ok(batch) => {
                let count = batch.len();
                self.photos.extend(batch);
                PageOutcome::Appended(count)
            }
            Err(_) => {
                // End-of-list and fetch failure are indistinguishable here;
                // nothing is appended and no retry ever happens.
                self.has_more = false;
                PageOutcome::EndOfList
            }
        }
    }
}

/// State of the single-photo detail loader.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    photo: Option<Photo>,
    loading: bool,
    error: Option<String>,
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailState {
    /// Initial state is loading; with no identifier supplied the loader
    /// never leaves it.
    pub fn new() -> Self {
        Self {
            photo: None,
            loading: true,
            error: None,
        }
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Entered on mount and on every identifier change.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply(&mut self, result: Result<Photo, ApiError>) {
        self.loading = false;
        match result {
            Ok(photo) => self.photo = Some(photo),
            Err(e) => self.error = Some(e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            author: format!("Author {}", id),
            width: 100,
            height: 100,
            url: format!("https://example.com/{}", id),
            download_url: format!("https://example.com/{}/full", id),
            title: None,
            description: None,
        }
    }

    fn page(ids: &[&str]) -> Vec<Photo> {
        ids.iter().map(|id| photo(id)).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = ListState::new();
        assert!(state.photos().is_empty());
        assert!(!state.is_loading());
        assert!(state.has_more());
        assert!(state.can_load_more());
    }

    #[test]
    fn test_loading_disables_trigger() {
        let mut state = ListState::new();
        state.begin_load();
        assert!(state.is_loading());
        assert!(!state.can_load_more());
    }

    #[test]
    fn test_pages_append_in_arrival_order() {
        let mut state = ListState::new();

        state.begin_load();
        let first: Vec<_> = (0..20).map(|i| photo(&i.to_string())).collect();
        assert_eq!(state.apply_page(Ok(first)), PageOutcome::Appended(20));
        assert_eq!(state.photos().len(), 20);
        assert!(state.has_more());
        assert!(state.can_load_more());

        state.begin_load();
        let second = page(&["20", "21", "22", "23", "24"]);
        assert_eq!(state.apply_page(Ok(second)), PageOutcome::Appended(5));
        assert_eq!(state.photos().len(), 25);
        assert_eq!(state.photos()[0].id, "0");
        assert_eq!(state.photos()[19].id, "19");
        assert_eq!(state.photos()[24].id, "24");
        assert!(state.has_more());
    }

    #[test]
    fn test_empty_page_is_terminal() {
        let mut state = ListState::new();
        state.begin_load();
        state.apply_page(Ok(page(&["1", "2"])));

        state.begin_load();
        assert_eq!(state.apply_page(Ok(Vec::new())), PageOutcome::EndOfList);
        assert!(!state.has_more());
        assert!(!state.can_load_more());
        assert_eq!(state.photos().len(), 2);
    }

    #[test]
    fn test_fetch_error_is_terminal_with_no_partial_append() {
        let mut state = ListState::new();
        state.begin_load();
        state.apply_page(Ok(page(&["1"])));

        state.begin_load();
        let outcome = state.apply_page(Err(ApiError::Transport("connection reset".to_string())));
        assert_eq!(outcome, PageOutcome::EndOfList);
        assert!(!state.has_more());
        assert!(!state.is_loading());
        assert_eq!(state.photos().len(), 1);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut state = ListState::new();
        state.begin_load();
        state.apply_page(Ok(page(&["7", "8"])));
        state.begin_load();
        state.apply_page(Ok(page(&["8", "9"])));

        let ids: Vec<_> = state.photos().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["7", "8", "8", "9"]);
    }

    #[test]
    fn test_generation_counter_discards_stale_tokens() {
        let mut counter = GenerationCounter::default();
        let first = counter.next();
        assert!(counter.is_current(first));

        let second = counter.next();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }

    #[test]
    fn test_detail_success() {
        let mut state = DetailState::new();
        assert!(state.is_loading());
        assert!(state.photo().is_none());

        state.begin_load();
        state.apply(Ok(photo("237")));
        assert!(!state.is_loading());
        assert_eq!(state.photo().unwrap().id, "237");
        assert!(state.error().is_none());
    }

    #[test]
    fn test_detail_not_found() {
        let mut state = DetailState::new();
        state.begin_load();
        state.apply(Err(ApiError::Status(404)));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Not found"));
        assert!(state.photo().is_none());
    }

    #[test]
    fn test_detail_reload_clears_error() {
        let mut state = DetailState::new();
        state.begin_load();
        state.apply(Err(ApiError::Status(404)));

        state.begin_load();
        assert!(state.is_loading());
        assert!(state.error().is_none());

        state.apply(Ok(photo("1")));
        assert_eq!(state.photo().unwrap().id, "1");
    }
}
