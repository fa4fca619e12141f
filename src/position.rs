use serde::Serialize;

/// Position in a text file (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in bytes)
    pub column: usize,
}

/// Byte span in a text file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Starting byte offset
    pub byte_start: usize,
    /// Ending byte offset (exclusive)
    pub byte_end: usize,
}

/// Byte offsets of every line start, for repeated offset lookups
/// against the same text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    /// Convert a byte offset to a 1-indexed line and column
    ///
    /// Offsets past the end resolve against the last line.
    pub fn position(&self, byte_offset: usize) -> Position {
        // Index of the last line start <= byte_offset
        let line = match self.line_starts.binary_search(&byte_offset) {
            Ok(exact) => exact,
            Err(insert_at) => insert_at - 1,
        };

        Position {
            line: line + 1,
            column: byte_offset - self.line_starts[line] + 1,
        }
    }

    pub fn span_positions(&self, span: Span) -> (Position, Position) {
        (self.position(span.byte_start), self.position(span.byte_end))
    }
}
