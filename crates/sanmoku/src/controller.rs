//! The game loop: render, prompt, validate, apply, judge, repeat.

use crate::channel::InputChannel;
use crate::messages::Language;
use crate::parse::parse_move;
use sanmoku_core::{GameState, GameStatus, Mark, MoveError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Terminal state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// `Mark` completed a line.
    Won(Mark),
    /// Board full, no line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of submitting one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Input rejected; nothing changed. Carries the diagnostic to show.
    Retry(String),
    /// Move applied; the game continues with this player to move.
    Continue(Mark),
    /// Move applied and the game ended.
    Finished(Outcome),
}

/// Why a session stopped before reaching a terminal state.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input ended while a move was awaited.
    #[display("Input closed before the game finished")]
    #[from(ignore)]
    InputClosed,

    /// The engine refused a move the controller should never have sent.
    #[display("Controller invariant violated: {}", _0)]
    #[from(ignore)]
    Invariant(MoveError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(err) => Some(err),
            SessionError::Invariant(err) => Some(err),
            SessionError::InputClosed => None,
        }
    }
}

/// Drives one game from the empty board to a win or draw.
///
/// Owns the only [`GameState`] and the channel for the whole session;
/// both are released when [`GameController::run`] returns.
pub struct GameController<C: InputChannel> {
    state: GameState,
    channel: C,
    language: Language,
}

impl<C: InputChannel> GameController<C> {
    /// Starts a session on a fresh board.
    pub fn new(channel: C, language: Language) -> Self {
        Self {
            state: GameState::new(),
            channel,
            language,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one line of input for the player to move.
    ///
    /// Malformed input and illegal moves come back as [`Step::Retry`]
    /// with the state untouched.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn submit(&mut self, line: &str) -> Result<Step, SessionError> {
        let (row, col) = match parse_move(line) {
            Ok(coords) => coords,
            Err(err) => {
                warn!(%err, "Unparseable move");
                return Ok(Step::Retry(self.language.invalid_input(&err)));
            }
        };

        let mark = self.state.current_player();
        match self.state.place(row, col, mark) {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => {
                warn!(%err, row, col, "Illegal move");
                return Ok(Step::Retry(self.language.illegal_move(&err)));
            }
            Err(err) => return Err(SessionError::Invariant(err)),
        }

        let step = match self.state.status() {
            GameStatus::Won(winner) => Step::Finished(Outcome::Won(winner)),
            GameStatus::Draw => Step::Finished(Outcome::Draw),
            GameStatus::InProgress => Step::Continue(self.state.end_turn()),
        };
        debug!(?step, "Move applied");
        Ok(step)
    }

    /// Runs the session to completion.
    ///
    /// The board is drawn before every prompt and once more after the
    /// final move. Rejected input is reported and the same player is asked
    /// again, without limit.
    #[instrument(skip(self), fields(language = %self.language))]
    pub fn run(mut self) -> Result<Outcome, SessionError> {
        info!("Session started");
        let mut notice: Option<String> = None;

        loop {
            self.render_board()?;
            if let Some(text) = notice.take() {
                self.channel.show(&text)?;
            }

            let prompt = self.language.prompt(self.state.current_player());
            let Some(line) = self.channel.read_line(&prompt)? else {
                warn!(moves = self.state.history().len(), "Input closed mid-game");
                return Err(SessionError::InputClosed);
            };

            match self.submit(&line)? {
                Step::Retry(text) => notice = Some(text),
                Step::Continue(_) => {}
                Step::Finished(outcome) => {
                    self.render_board()?;
                    self.channel.show(&self.language.announce(outcome))?;
                    info!(%outcome, moves = self.state.history().len(), "Session finished");
                    return Ok(outcome);
                }
            }
        }
    }

    fn render_board(&mut self) -> Result<(), SessionError> {
        self.channel.clear()?;
        self.channel.show(&self.state.render())?;
        Ok(())
    }
}
