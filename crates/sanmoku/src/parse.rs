//! Parsing a typed move.

use tracing::instrument;

/// Why a line of input is not a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Blank line.
    #[display("no input")]
    Empty,
    /// Anything other than two tokens.
    #[display("expected 2 numbers, got {}", _0)]
    WrongTokenCount(usize),
    /// A token that is not a non-negative integer.
    #[display("'{}' is not a number", _0)]
    NotANumber(String),
}

impl std::error::Error for ParseError {}

/// Parses `"row col"` into a coordinate pair.
///
/// Exactly two whitespace-separated non-negative integers. Range checks
/// are left to move validation.
#[instrument]
pub fn parse_move(input: &str) -> Result<(usize, usize), ParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Err(ParseError::Empty),
        [row, col] => Ok((parse_index(row)?, parse_index(col)?)),
        other => Err(ParseError::WrongTokenCount(other.len())),
    }
}

fn parse_index(token: &str) -> Result<usize, ParseError> {
    token
        .parse::<usize>()
        .map_err(|_| ParseError::NotANumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_two_numbers() {
        assert_eq!(parse_move("1 2"), Ok((1, 2)));
        assert_eq!(parse_move("  0\t0 \n"), Ok((0, 0)));
    }

    #[test]
    fn test_out_of_range_still_parses() {
        assert_eq!(parse_move("3 0"), Ok((3, 0)));
    }

    #[test]
    fn test_rejects_blank() {
        assert_eq!(parse_move(""), Err(ParseError::Empty));
        assert_eq!(parse_move("   \n"), Err(ParseError::Empty));
    }

    #[test]
    fn test_rejects_wrong_token_count() {
        assert_eq!(parse_move("1"), Err(ParseError::WrongTokenCount(1)));
        assert_eq!(parse_move("1 2 3"), Err(ParseError::WrongTokenCount(3)));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(
            parse_move("a 1"),
            Err(ParseError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_move("1 -1"),
            Err(ParseError::NotANumber("-1".to_string()))
        );
        assert_eq!(
            parse_move("1,1 2"),
            Err(ParseError::NotANumber("1,1".to_string()))
        );
    }
}
