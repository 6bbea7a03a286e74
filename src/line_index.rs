use crate::position::Position;
use crate::span::Span;

/// Byte offset → line lookup, built once per source file.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &[u8]) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(memchr::memchr_iter(b'\n', source).map(|i| i + 1));
        Self { line_starts }
    }

    /// 1-based line containing `offset`.
    pub fn line(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn position(&self, span: Span) -> Position {
        let start_line = self.line(span.start);
        // the last byte of the span decides the end line, not the offset after it
        let end_line = if span.end > span.start {
            self.line(span.end - 1)
        } else {
            start_line
        };
        Position::new(start_line, end_line, span.start, span.end)
    }
}
