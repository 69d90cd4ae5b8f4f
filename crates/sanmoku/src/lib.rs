//! Sanmoku - console sanmoku-narabe (tic-tac-toe) for two players.
//!
//! # Architecture
//!
//! - **Controller**: the game loop and its state machine
//! - **Channel**: the console boundary the controller reads and writes
//! - **Messages**: prompts and announcements per language
//! - **Config / CLI**: session settings from TOML and flags
//!
//! Game rules live in [`sanmoku_core`].
//!
//! # Example
//!
//! ```
//! use sanmoku::{ConsoleChannel, GameController, Language, Outcome};
//! use sanmoku_core::Mark;
//!
//! let input = "0 0\n1 0\n0 1\n1 1\n0 2\n";
//! let mut output = Vec::new();
//! let channel = ConsoleChannel::new(input.as_bytes(), &mut output, false);
//! let outcome = GameController::new(channel, Language::En).run()?;
//! assert_eq!(outcome, Outcome::Won(Mark::X));
//! # Ok::<(), sanmoku::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod channel;
mod cli;
mod config;
mod controller;
mod messages;
mod parse;

pub use channel::{ConsoleChannel, InputChannel};
pub use cli::Cli;
pub use config::{ConfigError, SessionConfig};
pub use controller::{GameController, Outcome, SessionError, Step};
pub use messages::Language;
pub use parse::{ParseError, parse_move};
