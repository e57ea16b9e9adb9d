//! Declaration positions reported by a syntax parser

/// Kind of a top-level function declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// Plain function: `func Name(...)`
    Function,
    /// Method with a receiver: `func (r T) Name(...)`
    Method,
}

/// Position of one declaration in a source file
///
/// Lines are 1-based and inclusive: `end_line` is the line holding the
/// declaration's closing boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationPosition {
    pub name: String,
    pub kind: DeclarationKind,
    /// Line number of the first line (1-indexed)
    pub start_line: usize,
    /// Line number of the last line (1-indexed)
    pub end_line: usize,
}

impl DeclarationPosition {
    /// Create a function declaration position
    pub fn new(name: impl Into<String>, start_line: usize, end_line: usize) -> Self {
        DeclarationPosition {
            name: name.into(),
            kind: DeclarationKind::Function,
            start_line,
            end_line,
        }
    }

    /// Create a method declaration position
    pub fn method(name: impl Into<String>, start_line: usize, end_line: usize) -> Self {
        DeclarationPosition {
            kind: DeclarationKind::Method,
            ..Self::new(name, start_line, end_line)
        }
    }

    /// 0-based index of the first line
    pub fn start_index(&self) -> usize {
        self.start_line.saturating_sub(1)
    }

    /// 0-based index of the last line
    pub fn end_index(&self) -> usize {
        self.end_line.saturating_sub(1)
    }

    /// Check if the position lies within a file of `line_count` lines
    pub fn is_valid_for(&self, line_count: usize) -> bool {
        self.start_line >= 1 && self.start_line <= self.end_line && self.end_line <= line_count
    }

    /// Check if the declaration name carries the test marker `prefix`
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix)
    }
}
