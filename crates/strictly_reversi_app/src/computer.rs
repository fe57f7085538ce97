//! Computer player: a uniformly random legal move after a delay.

use rand::seq::IndexedRandom;
use std::sync::Arc;
use std::time::Duration;
use strictly_reversi::{Board, Coordinate, Disk, Ruler};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, debug_span, instrument, warn};

/// Picks moves for a side set to [`PlayerKind::Computer`](strictly_reversi::PlayerKind::Computer).
#[derive(Debug, Clone)]
pub struct Computer {
    ruler: Arc<dyn Ruler>,
    delay: Duration,
}

impl Computer {
    /// Creates a computer that waits `delay` before answering.
    pub fn new(ruler: Arc<dyn Ruler>, delay: Duration) -> Self {
        Self { ruler, delay }
    }

    /// The simulated thinking time.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Chooses a move for `side` and hands it to `completion` after the delay.
    ///
    /// The move is drawn immediately from the current board; only the
    /// delivery is deferred. Must be called inside a tokio runtime.
    /// If `side` has no legal move the returned canceller is already
    /// finished and `completion` is dropped uncalled.
    #[instrument(skip(self, board, completion))]
    pub fn request_move<F>(&self, side: Disk, board: &Board, completion: F) -> Canceller
    where
        F: FnOnce(Coordinate) + Send + 'static,
    {
        let moves = self.ruler.valid_moves(side, board);
        let Some(&choice) = moves.choose(&mut rand::rng()) else {
            warn!("No valid moves to choose from");
            return Canceller::finished();
        };
        debug!(%choice, candidates = moves.len(), "Computer chose move");

        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        let delay = self.delay;
        let task = tokio::spawn(
            async move {
                tokio::select! {
                    biased;
                    // A dropped canceller disables this branch instead of cancelling.
                    Ok(()) = &mut cancel_rx => debug!("Move request cancelled"),
                    _ = tokio::time::sleep(delay) => {
                        debug!("Delivering computer move");
                        completion(choice);
                    }
                }
            }
            .instrument(debug_span!("computer_move", ?side, %choice)),
        );

        Canceller {
            cancel_tx: Some(cancel_tx),
            task: Some(task),
        }
    }
}

/// Handle to an outstanding [`Computer::request_move`].
#[derive(Debug)]
pub struct Canceller {
    cancel_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl Canceller {
    fn finished() -> Self {
        Self {
            cancel_tx: None,
            task: None,
        }
    }

    /// Cancels the request. If the move has not been delivered yet, the
    /// completion will never run.
    #[instrument(skip(self))]
    pub fn cancel(mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take()
            && cancel_tx.send(()).is_err()
        {
            debug!("Request already finished");
        }
    }

    /// Whether the request has delivered its move or stopped.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }
}
