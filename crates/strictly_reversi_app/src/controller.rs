//! Drives one game from user input and computer moves.
//!
//! The controller is the single writer for its [`Game`]: every input is
//! handled to completion before the next one, so no two placements are
//! ever in flight. Computer moves come back through the same input
//! channel, tagged with a [`RequestId`] so that replies to cancelled or
//! superseded requests are dropped.

use crate::{AppConfig, Canceller, Computer, GameRepository};
use std::collections::HashMap;
use std::sync::Arc;
use strictly_reversi::{
    Coordinate, Disk, Game, GamePhase, Placement, PlacementError, PlayerKind, Ruler, Score,
    TurnOutcome, advance_phase, place_disk, score, side_with_more_disks,
};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Identifies one computer move request.
pub type RequestId = u64;

/// Something the controller should act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A cell was selected by the human whose turn it is.
    Tap(Coordinate),
    /// Reset confirmed: discard the game and start over.
    NewGame,
    /// Change who plays `side`.
    SetPlayer {
        /// Side to reassign.
        side: Disk,
        /// New player kind.
        kind: PlayerKind,
    },
    /// A computer move request finished.
    ComputerMove {
        /// Side the move was chosen for.
        side: Disk,
        /// Request that produced it.
        request: RequestId,
        /// Chosen cell.
        coordinate: Coordinate,
    },
}

/// What the front end should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Redraw everything from this snapshot.
    Synced(Game),
    /// A disk was placed; redraw `placement.coordinates()` in order.
    DiskPlaced {
        /// The applied placement.
        placement: Placement,
        /// Counts after the placement.
        score: Score,
    },
    /// A tap was not a legal placement.
    Rejected(PlacementError),
    /// `side` had no legal move and passes.
    Passed {
        /// Side that passes.
        side: Disk,
    },
    /// `turn` is to move.
    TurnStarted {
        /// Side to move.
        turn: Disk,
        /// Who plays it.
        player: PlayerKind,
    },
    /// A side's player kind changed.
    PlayerChanged {
        /// Reassigned side.
        side: Disk,
        /// New kind.
        kind: PlayerKind,
    },
    /// The computer started or stopped thinking for `side`.
    ComputerThinking {
        /// Side being computed.
        side: Disk,
        /// True while a request is outstanding.
        thinking: bool,
    },
    /// Neither side can move.
    GameOver {
        /// Side with more disks; `None` on a tie.
        winner: Option<Disk>,
        /// Final counts.
        score: Score,
    },
}

#[derive(Debug)]
struct PendingMove {
    request: RequestId,
    canceller: Canceller,
}

/// Owns a game session and sequences every change to it.
#[derive(Debug)]
pub struct GameController {
    game: Game,
    rows: usize,
    columns: usize,
    ruler: Arc<dyn Ruler>,
    computer: Computer,
    repository: Option<GameRepository>,
    pending: HashMap<Disk, PendingMove>,
    next_request: RequestId,
    inputs: mpsc::WeakUnboundedSender<Input>,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl GameController {
    /// Creates a controller, restoring the saved game if there is one.
    ///
    /// A missing or malformed save falls back to a fresh game. Computer
    /// replies are posted to `inputs`; the controller holds only a weak
    /// handle, so the channel closes once the front end drops its sender.
    #[instrument(skip_all)]
    pub fn new(
        config: &AppConfig,
        ruler: Arc<dyn Ruler>,
        repository: Option<GameRepository>,
        inputs: &mpsc::UnboundedSender<Input>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let (rows, columns) = (*config.rows(), *config.columns());
        let game = match repository.as_ref().map(GameRepository::load_game) {
            Some(Ok(game)) => {
                info!(phase = %game.phase(), "Restored saved game");
                game
            }
            Some(Err(e)) => {
                warn!(error = %e, "Could not restore game, starting a new one");
                Game::with_size(rows, columns)
            }
            None => Game::with_size(rows, columns),
        };

        Self {
            game,
            rows,
            columns,
            computer: Computer::new(Arc::clone(&ruler), config.computer_delay()),
            ruler,
            repository,
            pending: HashMap::new(),
            next_request: 0,
            inputs: inputs.downgrade(),
            events,
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current disk counts.
    pub fn score(&self) -> Score {
        score(self.game.board())
    }

    /// Cells that would flip if the side to move played `at`.
    pub fn preview(&self, at: Coordinate) -> Vec<Coordinate> {
        match self.game.phase() {
            GamePhase::Ongoing { turn } => self.ruler.flipped_coordinates(turn, at, self.game.board()),
            GamePhase::Ended => Vec::new(),
        }
    }

    /// Whether a computer request is outstanding for `side`.
    pub fn is_thinking(&self, side: Disk) -> bool {
        self.pending.contains_key(&side)
    }

    /// Publishes the current state and starts the side to move.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.emit(GameEvent::Synced(self.game.clone()));
        match self.game.phase() {
            GamePhase::Ongoing { .. } => self.wait_for_player(),
            GamePhase::Ended => self.emit(GameEvent::GameOver {
                winner: side_with_more_disks(self.game.board()),
                score: self.score(),
            }),
        }
    }

    /// Handles one input to completion.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) {
        match input {
            Input::Tap(at) => self.tap(at),
            Input::NewGame => self.new_game(),
            Input::SetPlayer { side, kind } => self.set_player(side, kind),
            Input::ComputerMove {
                side,
                request,
                coordinate,
            } => self.computer_move(side, request, coordinate),
        }
    }

    /// Processes inputs until every sender is gone.
    pub async fn run(mut self, mut inputs: mpsc::UnboundedReceiver<Input>) {
        info!("Starting game controller");
        self.start();
        while let Some(input) = inputs.recv().await {
            self.handle(input);
        }
        self.cancel_all();
        info!("Game controller stopped");
    }

    fn tap(&mut self, at: Coordinate) {
        let GamePhase::Ongoing { turn } = self.game.phase() else {
            debug!("Game is over, ignoring tap");
            return;
        };
        if self.game.player(turn) != PlayerKind::Manual {
            debug!(?turn, "Side to move is not manual, ignoring tap");
            return;
        }
        self.play(turn, at);
    }

    fn play(&mut self, disk: Disk, at: Coordinate) {
        match place_disk(&mut self.game, self.ruler.as_ref(), disk, at) {
            Ok(placement) => {
                self.emit(GameEvent::DiskPlaced {
                    placement,
                    score: self.score(),
                });
                self.next_turn();
            }
            Err(e) => {
                debug!(error = %e, "Placement rejected");
                self.emit(GameEvent::Rejected(e));
            }
        }
    }

    /// Advances the phase after a placement, announcing passes and the end of the game.
    fn next_turn(&mut self) {
        match advance_phase(&mut self.game, self.ruler.as_ref()) {
            TurnOutcome::Continue(turn) => debug!(?turn, "Turn passes normally"),
            TurnOutcome::Pass { passed, turn } => {
                info!(?passed, ?turn, "Side cannot move and passes");
                self.emit(GameEvent::Passed { side: passed });
            }
            TurnOutcome::Ended { winner } => {
                info!(?winner, score = %self.score(), "Game over");
                self.emit(GameEvent::GameOver {
                    winner,
                    score: self.score(),
                });
            }
        }
        self.save();
        self.wait_for_player();
    }

    fn wait_for_player(&mut self) {
        let Some(turn) = self.game.phase().turn() else {
            return;
        };
        // Only a restored save can hand the turn to a side with no move.
        let board = self.game.board();
        if self.ruler.valid_moves(turn, board).is_empty() {
            warn!(?turn, "Side to move has no legal move");
            if !self.ruler.valid_moves(turn.flipped(), board).is_empty() {
                self.emit(GameEvent::Passed { side: turn });
            }
            self.next_turn();
            return;
        }

        let player = self.game.player(turn);
        self.emit(GameEvent::TurnStarted { turn, player });
        if player == PlayerKind::Computer {
            self.play_turn_of_computer(turn);
        }
    }

    fn play_turn_of_computer(&mut self, side: Disk) {
        self.cancel(side);

        let request = self.next_request;
        self.next_request += 1;

        let inputs = self.inputs.clone();
        let canceller = self
            .computer
            .request_move(side, self.game.board(), move |coordinate| {
                if let Some(inputs) = inputs.upgrade() {
                    let _ = inputs.send(Input::ComputerMove {
                        side,
                        request,
                        coordinate,
                    });
                }
            });
        if canceller.is_finished() {
            warn!(?side, "Computer has no move to make");
            return;
        }

        debug!(?side, request, "Computer is thinking");
        self.pending.insert(side, PendingMove { request, canceller });
        self.emit(GameEvent::ComputerThinking {
            side,
            thinking: true,
        });
    }

    fn computer_move(&mut self, side: Disk, request: RequestId, coordinate: Coordinate) {
        match self.pending.get(&side) {
            Some(pending) if pending.request == request => {
                self.pending.remove(&side);
            }
            _ => {
                debug!(?side, request, "Dropping stale computer move");
                return;
            }
        }
        self.emit(GameEvent::ComputerThinking {
            side,
            thinking: false,
        });

        if self.game.phase().turn() != Some(side) {
            warn!(?side, "Computer move arrived out of turn");
            return;
        }
        self.play(side, coordinate);
    }

    fn set_player(&mut self, side: Disk, kind: PlayerKind) {
        self.game.set_player(kind, side);
        self.save();
        self.emit(GameEvent::PlayerChanged { side, kind });

        self.cancel(side);
        if self.game.phase().turn() == Some(side) && kind == PlayerKind::Computer {
            self.play_turn_of_computer(side);
        }
    }

    fn new_game(&mut self) {
        info!(rows = self.rows, columns = self.columns, "Starting new game");
        self.cancel_all();
        self.game = Game::with_size(self.rows, self.columns);
        self.save();
        self.emit(GameEvent::Synced(self.game.clone()));
        self.wait_for_player();
    }

    fn cancel(&mut self, side: Disk) {
        if let Some(pending) = self.pending.remove(&side) {
            debug!(?side, request = pending.request, "Cancelling computer move");
            pending.canceller.cancel();
            self.emit(GameEvent::ComputerThinking {
                side,
                thinking: false,
            });
        }
    }

    fn cancel_all(&mut self) {
        for side in Disk::SIDES {
            self.cancel(side);
        }
    }

    fn save(&self) {
        if let Some(repository) = &self.repository
            && let Err(e) = repository.save_game(&self.game)
        {
            warn!(error = %e, "Failed to save game");
        }
    }

    fn emit(&self, event: GameEvent) {
        if self.events.send(event).is_err() {
            debug!("No event listener");
        }
    }
}
