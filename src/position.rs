use std::fmt;

use serde::Serialize;

/// Source extent of a node.
///
/// Lines are 1-based. `start_pos` and `end_pos` are 0-based byte offsets into
/// the source, `end_pos` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub start_line: usize,
    pub end_line: usize,
    pub start_pos: usize,
    pub end_pos: usize,
}

impl Position {
    pub fn new(start_line: usize, end_line: usize, start_pos: usize, end_pos: usize) -> Self {
        Self {
            start_line,
            end_line,
            start_pos,
            end_pos,
        }
    }

    /// A cursor sitting right after the last byte still counts as inside.
    pub fn contains(&self, offset: usize) -> bool {
        self.start_pos <= offset && offset <= self.end_pos
    }

    pub fn len(&self) -> usize {
        self.end_pos - self.start_pos
    }

    pub fn is_empty(&self) -> bool {
        self.start_pos == self.end_pos
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start_line, self.start_pos, self.end_line, self.end_pos
        )
    }
}
