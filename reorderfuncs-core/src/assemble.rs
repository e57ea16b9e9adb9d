//! Sorting and serialization of the final output
//!
//! Global invariants enforced:
//! - Blocks are emitted in byte-wise ascending name order
//! - Equal names keep their source order
//! - Output always ends with exactly one newline-terminated line

use crate::extract::{partition, FunctionBlock};
use crate::language::DeclarationPosition;
use crate::lines::is_blank;

/// Sort blocks by name, byte-wise ascending
pub fn sort_blocks(blocks: &mut [FunctionBlock]) {
    // Stable sort: duplicate names stay in source order
    blocks.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
}

/// Build the output text from remainder lines followed by the blocks
///
/// Trailing blank lines of the remainder and leading blank lines of each
/// block are dropped, then exactly one blank line is placed between the
/// remainder and the first block and between consecutive blocks. Blocks are
/// emitted in the order given.
pub fn assemble(blocks: &[FunctionBlock], remainder: &[String]) -> String {
    let mut output: Vec<&str> = remainder.iter().map(String::as_str).collect();
    while output.last().is_some_and(|line| is_blank(line)) {
        output.pop();
    }

    if !output.is_empty() && !blocks.is_empty() {
        output.push("");
    }

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            output.push("");
        }
        let visible = block
            .lines
            .iter()
            .skip_while(|line| is_blank(line))
            .map(String::as_str);
        output.extend(visible);
    }

    let mut text = output.join("\n");
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Reorder the test functions given by `decls` within `lines`
///
/// This is the whole transformation: partition, sort, assemble.
pub fn reorder_lines(lines: &[&str], decls: &[DeclarationPosition]) -> String {
    let mut result = partition(lines, decls);
    sort_blocks(&mut result.blocks);
    assemble(&result.blocks, &result.remainder)
}
