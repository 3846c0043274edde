//! Fail-open loading state shared by every section that shows remote collections.
//!
//! A section starts out showing catalog content. Each fetch takes a [`Ticket`] from
//! [`SectionState::begin`] and hands its outcome back through [`SectionState::settle`].
//! Only the newest ticket may settle; anything older is dropped so a slow response can
//! never overwrite the data for a filter the visitor has already moved away from.

/// Where the items currently on screen came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Catalog,
    Live,
}

/// Identifies one fetch. Handed out by [`SectionState::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct SectionState<T> {
    generation: u64,
    loading: bool,
    items: Vec<T>,
    source: Source,
    notice: Option<String>,
}

impl<T> SectionState<T> {
    /// A settled state showing `items` from the static catalog.
    #[must_use]
    pub const fn with_catalog(items: Vec<T>) -> Self {
        Self {
            generation: 0,
            loading: false,
            items,
            source: Source::Catalog,
            notice: None,
        }
    }

    /// Starts a fetch, superseding any that is still outstanding.
    pub fn begin(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        Ticket(self.generation)
    }

    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// A non-empty success is adopted as is. An empty success falls back to `catalog`
    /// silently, a failure falls back to `catalog` and keeps the error as a notice.
    /// Returns `false`, leaving everything untouched, if `ticket` has been superseded.
    pub fn settle<F>(&mut self, ticket: Ticket, outcome: Result<Vec<T>, String>, catalog: F) -> bool
    where
        F: FnOnce() -> Vec<T>,
    {
        if !self.is_current(ticket) {
            return false;
        }

        match outcome {
            Ok(items) if !items.is_empty() => {
                self.items = items;
                self.source = Source::Live;
                self.notice = None;
            }
            Ok(_) => {
                self.items = catalog();
                self.source = Source::Catalog;
                self.notice = None;
            }
            Err(message) => {
                self.items = catalog();
                self.source = Source::Catalog;
                self.notice = Some(message);
            }
        }
        self.loading = false;
        true
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub const fn source(&self) -> Source {
        self.source
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl<T> Default for SectionState<T> {
    fn default() -> Self {
        Self::with_catalog(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<&'static str> {
        vec!["static-a", "static-b"]
    }

    #[test]
    fn test_begin_sets_loading_and_keeps_items() {
        let mut state = SectionState::with_catalog(catalog());
        let _ticket = state.begin();

        assert!(state.is_loading());
        assert_eq!(state.items(), ["static-a", "static-b"]);
        assert_eq!(state.source(), Source::Catalog);
    }

    #[test]
    fn test_live_items_are_adopted() {
        let mut state = SectionState::with_catalog(catalog());
        let ticket = state.begin();

        assert!(state.settle(ticket, Ok(vec!["live"]), catalog));
        assert_eq!(state.items(), ["live"]);
        assert_eq!(state.source(), Source::Live);
        assert_eq!(state.notice(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_empty_success_falls_back_without_notice() {
        let mut state = SectionState::with_catalog(Vec::new());
        let ticket = state.begin();

        assert!(state.settle(ticket, Ok(Vec::new()), catalog));
        assert_eq!(state.items(), catalog());
        assert_eq!(state.source(), Source::Catalog);
        assert_eq!(state.notice(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failure_falls_back_with_notice() {
        let mut state = SectionState::with_catalog(Vec::new());
        let ticket = state.begin();

        assert!(state.settle(ticket, Err("Failed to fetch projects".to_owned()), catalog));
        assert_eq!(state.items(), catalog());
        assert_eq!(state.notice(), Some("Failed to fetch projects"));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_live_success_replaces_earlier_fallback_notice() {
        let mut state = SectionState::with_catalog(catalog());
        let first = state.begin();
        state.settle(first, Err("offline".to_owned()), catalog);

        let second = state.begin();
        state.settle(second, Ok(vec!["live"]), catalog);
        assert_eq!(state.notice(), None);
        assert_eq!(state.source(), Source::Live);
    }

    #[test]
    fn test_superseded_ticket_is_discarded() {
        let mut state = SectionState::with_catalog(catalog());
        let stale = state.begin();
        let fresh = state.begin();

        assert!(!state.is_current(stale));
        assert!(!state.settle(stale, Ok(vec!["stale"]), catalog));
        assert!(state.is_loading(), "a stale response must not end loading");
        assert_eq!(state.items(), ["static-a", "static-b"]);

        assert!(state.settle(fresh, Ok(vec!["fresh"]), catalog));
        assert_eq!(state.items(), ["fresh"]);
    }

    #[test]
    fn test_stale_failure_does_not_raise_notice() {
        let mut state = SectionState::with_catalog(catalog());
        let stale = state.begin();
        let fresh = state.begin();

        state.settle(fresh, Ok(vec!["fresh"]), catalog);
        state.settle(stale, Err("timed out".to_owned()), catalog);

        assert_eq!(state.notice(), None);
        assert_eq!(state.items(), ["fresh"]);
    }

    #[test]
    fn test_dismiss_notice() {
        let mut state = SectionState::<&str>::default();
        let ticket = state.begin();
        state.settle(ticket, Err("boom".to_owned()), Vec::new);
        state.dismiss_notice();
        assert_eq!(state.notice(), None);
    }
}
