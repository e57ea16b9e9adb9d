//! Go language support
//!
//! This module provides Go declaration discovery using the tree-sitter-go
//! parser.

pub mod parser;

pub use parser::GoParser;
