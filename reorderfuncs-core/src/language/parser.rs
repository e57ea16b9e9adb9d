//! Syntax-parser abstraction

use crate::language::DeclarationPosition;
use anyhow::Result;

/// Source of declaration positions for a file
///
/// The reordering engine only needs names and line ranges, so anything that
/// can produce them (a real grammar parser, or fixed data in tests) can drive
/// it.
pub trait DeclarationSource {
    /// Discover top-level function declarations in `source`
    ///
    /// # Arguments
    ///
    /// * `source` - The complete file text
    /// * `filename` - Name of the file being parsed (for error messages)
    ///
    /// # Returns
    ///
    /// Declarations in source order, or an error if `source` is not
    /// syntactically valid
    fn declarations(&self, source: &str, filename: &str) -> Result<Vec<DeclarationPosition>>;
}
