//! Player-facing text in each supported language.

use crate::controller::Outcome;
use sanmoku_core::{Mark, MoveError};
use serde::{Deserialize, Serialize};

/// Language for prompts and announcements.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Japanese.
    Ja,
}

impl Language {
    /// Asks `mark` for a move.
    pub fn prompt(self, mark: Mark) -> String {
        match self {
            Language::En => format!("Player {mark}'s turn (row col): "),
            Language::Ja => format!("プレイヤー{mark}の番です (行 列): "),
        }
    }

    /// Diagnostic for a line that is not two numbers.
    ///
    /// The Japanese text is the reference game's single fixed message and
    /// omits `reason`.
    pub fn invalid_input(self, reason: &impl std::fmt::Display) -> String {
        match self {
            Language::En => {
                format!("Invalid input ({reason}). Enter a row and a column from 0 to 2.")
            }
            Language::Ja => "無効な入力です。行と列を0-2の数字で入力してください。".to_string(),
        }
    }

    /// Diagnostic for a well-formed but illegal move.
    pub fn illegal_move(self, err: &MoveError) -> String {
        match self {
            Language::En => format!("Invalid move ({err}). Choose an empty cell from 0 to 2."),
            Language::Ja => {
                "無効な入力です。0-2の範囲で空いているマスを選んでください。".to_string()
            }
        }
    }

    /// Final announcement.
    pub fn announce(self, outcome: Outcome) -> String {
        match (self, outcome) {
            (Language::En, Outcome::Won(mark)) => format!("Player {mark} wins!"),
            (Language::En, Outcome::Draw) => "It's a draw!".to_string(),
            (Language::Ja, Outcome::Won(mark)) => format!("プレイヤー{mark}の勝利！"),
            (Language::Ja, Outcome::Draw) => "引き分けです！".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_prompt_names_mark() {
        assert!(Language::En.prompt(Mark::O).contains("Player O"));
        assert!(Language::Ja.prompt(Mark::X).contains("プレイヤーX"));
    }

    #[test]
    fn test_announcements() {
        assert_eq!(Language::En.announce(Outcome::Won(Mark::X)), "Player X wins!");
        assert_eq!(Language::En.announce(Outcome::Draw), "It's a draw!");
        assert_eq!(Language::Ja.announce(Outcome::Draw), "引き分けです！");
    }

    #[test]
    fn test_parse_language() {
        assert_eq!(Language::from_str("ja"), Ok(Language::Ja));
        assert_eq!(Language::from_str("en"), Ok(Language::En));
        assert!(Language::from_str("fr").is_err());
        assert_eq!(Language::Ja.to_string(), "ja");
    }
}
