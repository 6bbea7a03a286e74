use thiserror::Error;

use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("syntax error, unexpected {found}, expecting {expected} at {position}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        position: Position,
    },

    #[error("unterminated comment starting at {position}")]
    UnterminatedComment { position: Position },

    #[error("syntax error, unexpected end of file, expecting {expected} at {position}")]
    UnexpectedEndOfFile {
        expected: &'static str,
        position: Position,
    },

    #[error("nesting deeper than {limit} levels at {position}")]
    NestingTooDeep { limit: usize, position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnterminatedComment { position }
            | ParseError::UnexpectedEndOfFile { position, .. }
            | ParseError::NestingTooDeep { position, .. } => *position,
        }
    }
}
