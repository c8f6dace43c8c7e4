use std::sync::{Arc, Mutex, PoisonError};
use std::sync::atomic::Ordering;
use std::time::Instant;
use atomic_time::AtomicInstant;
use tracing::{debug, trace};
use crate::*;

/*----------------------------------------------------------------*/

struct Shared<S> {
    searcher: Mutex<S>,
    state: SearchState,
    started: AtomicInstant,
}

/// Runs a [`Searcher`] in the background, at most one search at a time.
///
/// Neither starting nor stopping blocks. The result callback runs on a pool thread
/// after the state has returned to idle, so it may start the next search itself.
pub struct Controller<S: Searcher + 'static> {
    shared: Arc<Shared<S>>,
}

impl<S: Searcher + 'static> Controller<S> {
    pub fn new(searcher: S) -> Controller<S> {
        Controller {
            shared: Arc::new(Shared {
                searcher: Mutex::new(searcher),
                state: SearchState::new(),
                started: AtomicInstant::new(Instant::now()),
            }),
        }
    }

    /// Starts searching `position` unless a search is already running.
    pub fn start_searching<F>(&self, position: Position, callback: F) -> bool
    where
        F: FnOnce(Option<Move>) + Send + 'static,
    {
        if !self.shared.state.transition(SearchStatus::Idle, SearchStatus::Searching) {
            trace!(state = %self.state(), "rejected search start");
            return false;
        }

        self.shared.started.store(Instant::now(), Ordering::Relaxed);
        debug!(fen = %position, "search started");

        let shared = Arc::clone(&self.shared);
        rayon::spawn(move || {
            let best = shared
                .searcher
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .search(&position, &shared.state);

            let elapsed = shared.started.load(Ordering::Relaxed).elapsed();
            shared.state.store(SearchStatus::Idle);

            match best {
                Some(mv) => debug!(best = %mv, ?elapsed, "search finished"),
                None => debug!(?elapsed, "search finished without a move"),
            }

            callback(best);
        });

        true
    }

    /// Asks a running search to wrap up. Returns immediately.
    pub fn stop_searching(&self) -> bool {
        if !self.shared.state.transition(SearchStatus::Searching, SearchStatus::Stopping) {
            trace!(state = %self.state(), "rejected search stop");
            return false;
        }

        debug!("search stopping");
        true
    }

    #[inline]
    pub fn state(&self) -> SearchStatus {
        self.shared.state.load()
    }
}

impl<S: Searcher + 'static> Drop for Controller<S> {
    fn drop(&mut self) {
        self.stop_searching();
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;
    use std::sync::mpsc;
    use std::time::Duration;
    use super::*;

    static ZOBRIST: LazyLock<Zobrist> = LazyLock::new(|| Zobrist::from_seed(0));

    const E2E4: Move = Move::new(Square::E2, Square::E4, None);
    const TIMEOUT: Duration = Duration::from_secs(10);

    /// Holds out until told to stop, then answers with a fixed move.
    struct NoopSearcher {
        started: mpsc::Sender<()>,
    }

    impl Searcher for NoopSearcher {
        fn search(&mut self, _: &Position, state: &SearchState) -> Option<Move> {
            let _ = self.started.send(());

            while state.keep_searching() {
                std::thread::sleep(Duration::from_millis(10));
            }

            Some(E2E4)
        }
    }

    fn controller() -> (Controller<NoopSearcher>, mpsc::Receiver<()>) {
        let (started, started_rx) = mpsc::channel();
        (Controller::new(NoopSearcher { started }), started_rx)
    }

    #[test]
    fn start_while_searching() {
        let (controller, started) = controller();
        let (tx, rx) = mpsc::channel();
        let position = Position::starting_position(&ZOBRIST);

        let first = tx.clone();
        assert!(controller.start_searching(position, move |mv| { let _ = first.send(mv); }));
        started.recv_timeout(TIMEOUT).unwrap();
        assert_eq!(controller.state(), SearchStatus::Searching);

        let second = tx.clone();
        assert!(!controller.start_searching(position, move |mv| { let _ = second.send(mv); }));
        assert_eq!(controller.state(), SearchStatus::Searching);

        assert!(controller.stop_searching());
        assert_eq!(rx.recv_timeout(TIMEOUT).unwrap(), Some(E2E4));
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn stop_while_idle() {
        let (controller, _started) = controller();

        assert_eq!(controller.state(), SearchStatus::Idle);
        assert!(!controller.stop_searching());
        assert_eq!(controller.state(), SearchStatus::Idle);
    }

    #[test]
    fn search_twice() {
        let (controller, started) = controller();
        let (tx, rx) = mpsc::channel();
        let position = Position::starting_position(&ZOBRIST);

        for _ in 0..2 {
            let tx = tx.clone();
            assert!(controller.start_searching(position, move |mv| { let _ = tx.send(mv); }));
            started.recv_timeout(TIMEOUT).unwrap();

            assert!(controller.stop_searching());
            assert!(!controller.stop_searching());
            assert_eq!(rx.recv_timeout(TIMEOUT).unwrap(), Some(E2E4));
            assert_eq!(controller.state(), SearchStatus::Idle);
        }
    }

    #[test]
    fn random_searcher() {
        let tables = Arc::new(Tables::from_seed(0));
        let controller = Controller::new(RandomSearcher::new(Arc::clone(&tables)));
        let move_gen = MoveGenerator::new(tables);
        let (tx, rx) = mpsc::channel();
        let position = Position::starting_position(&ZOBRIST);

        assert!(controller.start_searching(position, move |mv| { let _ = tx.send(mv); }));
        let mv = rx.recv_timeout(TIMEOUT).unwrap().unwrap();
        assert!(move_gen.generate(&position).contains(&mv));
    }

    #[test]
    fn drop_stops_search() {
        let (controller, started) = controller();
        let (tx, rx) = mpsc::channel();

        assert!(controller.start_searching(Position::starting_position(&ZOBRIST), move |mv| { let _ = tx.send(mv); }));
        started.recv_timeout(TIMEOUT).unwrap();

        drop(controller);
        assert_eq!(rx.recv_timeout(TIMEOUT).unwrap(), Some(E2E4));
    }
}
