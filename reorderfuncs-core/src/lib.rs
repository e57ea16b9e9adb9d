//! reorderfuncs core library - sorts the test functions of a Go source file

#![deny(warnings)]

// Global invariants enforced in this crate:
// - One file per invocation, processed synchronously
// - No global mutable state, no threads, no clocks
// - Non-test lines keep their original relative order
// - Every test function body appears exactly once in the output
// - Identical input yields byte-for-byte identical output

pub mod assemble;
pub mod boundary;
pub mod config;
pub mod extract;
pub mod io;
pub mod language;
pub mod lines;

pub use assemble::{assemble, reorder_lines, sort_blocks};
pub use config::ResolvedConfig;
pub use extract::{partition, FunctionBlock, LineOwner, OwnershipMap, Partition};
pub use language::{DeclarationPosition, DeclarationSource, GoParser};

use anyhow::Result;
use std::path::Path;

/// Outcome of reordering one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderSummary {
    /// Number of test functions found and reordered
    pub functions: usize,
    /// Whether the output text differs from the input text
    pub changed: bool,
}

/// Reorder the test functions of Go `source` text
pub fn reorder_source(source: &str, filename: &str, config: &ResolvedConfig) -> Result<String> {
    reorder_source_with(&GoParser::new(), source, filename, config).map(|(text, _)| text)
}

/// Reorder `source` using declarations reported by `parser`
///
/// Returns the output text and the number of test functions it contains.
pub fn reorder_source_with(
    parser: &dyn DeclarationSource,
    source: &str,
    filename: &str,
    config: &ResolvedConfig,
) -> Result<(String, usize)> {
    let decls = parser.declarations(source, filename)?;
    let tests = language::select_test_functions(decls, &config.prefix, config.include_methods);

    let lines: Vec<&str> = source.split('\n').collect();
    let mut result = partition(&lines, &tests);
    sort_blocks(&mut result.blocks);

    Ok((assemble(&result.blocks, &result.remainder), result.blocks.len()))
}

/// Reorder the test functions of the Go file at `input`, writing to `output`
///
/// Nothing is written unless reading and parsing succeed. `output` may equal
/// `input`.
pub fn exec(input: &Path, output: &Path, config: &ResolvedConfig) -> Result<ReorderSummary> {
    let source = io::read_source(input)?;
    let filename = input.display().to_string();

    let (text, functions) = reorder_source_with(&GoParser::new(), &source, &filename, config)?;
    let changed = text != source;

    io::write_output(output, &text)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        functions,
        changed,
        "reordered test functions"
    );

    Ok(ReorderSummary { functions, changed })
}
