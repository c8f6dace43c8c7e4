use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SearchStatus {
    Idle,
    Searching,
    Stopping,
}

impl SearchStatus {
    #[inline]
    const fn from_bits(bits: u8) -> SearchStatus {
        match bits {
            0 => SearchStatus::Idle,
            1 => SearchStatus::Searching,
            2 => SearchStatus::Stopping,
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            SearchStatus::Idle => "idle",
            SearchStatus::Searching => "searching",
            SearchStatus::Stopping => "stopping",
        })
    }
}

/*----------------------------------------------------------------*/

/// Lifecycle of a single search: `Idle -> Searching -> Stopping -> Idle`.
#[derive(Debug)]
pub struct SearchState(AtomicU8);

impl SearchState {
    #[inline]
    pub const fn new() -> SearchState {
        SearchState(AtomicU8::new(SearchStatus::Idle as u8))
    }

    #[inline]
    pub fn load(&self) -> SearchStatus {
        SearchStatus::from_bits(self.0.load(Ordering::Acquire))
    }

    /// Polled by searchers, true only until a stop has been requested.
    #[inline]
    pub fn keep_searching(&self) -> bool {
        self.load() == SearchStatus::Searching
    }

    #[inline]
    pub(crate) fn transition(&self, from: SearchStatus, to: SearchStatus) -> bool {
        self.0
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    #[inline]
    pub(crate) fn store(&self, status: SearchStatus) {
        self.0.store(status as u8, Ordering::Release);
    }
}

impl Default for SearchState {
    #[inline]
    fn default() -> Self {
        SearchState::new()
    }
}

#[test]
fn validate_search_state() {
    let state = SearchState::new();
    assert_eq!(state.load(), SearchStatus::Idle);
    assert!(!state.keep_searching());

    assert!(!state.transition(SearchStatus::Searching, SearchStatus::Stopping));
    assert!(state.transition(SearchStatus::Idle, SearchStatus::Searching));
    assert!(state.keep_searching());
    assert!(!state.transition(SearchStatus::Idle, SearchStatus::Searching));

    assert!(state.transition(SearchStatus::Searching, SearchStatus::Stopping));
    assert!(!state.keep_searching());
    assert_eq!(state.load().to_string(), "stopping");

    state.store(SearchStatus::Idle);
    assert_eq!(state.load(), SearchStatus::Idle);
}
