//! Partitioning of source lines into test function blocks and remainder
//!
//! Global invariants enforced:
//! - Every line index is owned by at most one block, and every block's text
//!   is copied from the lines it owns
//! - Unclaimed lines keep their original relative order
//! - Deterministic scan order: declarations by start line, ties in input order

use crate::boundary::{resolve_block_start, resolve_trailing_boundary};
use crate::language::DeclarationPosition;
use crate::lines::first_real_code_line;

/// One test function with its attributed leading comments and blank lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBlock {
    pub name: String,
    pub lines: Vec<String>,
}

/// Who a source line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOwner {
    /// Not claimed by any block; goes to the remainder
    Unclaimed,
    /// Visible content of the block at this index
    Block(usize),
    /// Trailing blank padding consumed by the block at this index
    ///
    /// Padding is removed from the remainder but not emitted with the block.
    Padding(usize),
}

impl LineOwner {
    /// Check if the line is claimed by a block, as content or padding
    pub fn is_claimed(&self) -> bool {
        !matches!(self, LineOwner::Unclaimed)
    }
}

/// Per-line ownership for one file
///
/// Block indices refer to the order of [`Partition::blocks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipMap {
    owners: Vec<LineOwner>,
}

impl OwnershipMap {
    fn new(line_count: usize) -> Self {
        OwnershipMap {
            owners: vec![LineOwner::Unclaimed; line_count],
        }
    }

    /// Claim `[start, end]` as block content; content claims always win
    fn claim_block(&mut self, start: usize, end: usize, block: usize) {
        for owner in &mut self.owners[start..=end] {
            *owner = LineOwner::Block(block);
        }
    }

    /// Block whose content already covers a line of `[start, end]`, if any
    fn block_within(&self, start: usize, end: usize) -> Option<usize> {
        self.owners[start..=end].iter().find_map(|owner| match owner {
            LineOwner::Block(block) => Some(*block),
            _ => None,
        })
    }

    /// Smallest index in `[start, limit]` with no block content between it and `limit`
    fn first_free_before(&self, start: usize, limit: usize) -> usize {
        (start..limit)
            .rev()
            .find(|&idx| matches!(self.owners[idx], LineOwner::Block(_)))
            .map_or(start, |idx| idx + 1)
    }

    /// Claim `(end, padding_end]` as padding where nothing claimed it yet
    fn claim_padding(&mut self, end: usize, padding_end: usize, block: usize) {
        for owner in &mut self.owners[end + 1..=padding_end] {
            if *owner == LineOwner::Unclaimed {
                *owner = LineOwner::Padding(block);
            }
        }
    }

    /// Owner of the line at `idx`; out-of-range indices are unclaimed
    pub fn owner(&self, idx: usize) -> LineOwner {
        self.owners.get(idx).copied().unwrap_or(LineOwner::Unclaimed)
    }

    /// Number of lines covered by the map
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Check if the map covers no lines
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Indices of lines not claimed by any block, in order
    pub fn unclaimed(&self) -> impl Iterator<Item = usize> + '_ {
        self.owners
            .iter()
            .enumerate()
            .filter(|(_, owner)| !owner.is_claimed())
            .map(|(idx, _)| idx)
    }
}

/// Result of splitting a file into test function blocks and everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Blocks in source order
    pub blocks: Vec<FunctionBlock>,
    /// Unclaimed lines in source order, followed by one blank separator line
    /// when non-empty
    pub remainder: Vec<String>,
    pub ownership: OwnershipMap,
}

/// Split `lines` into one block per declaration plus the unclaimed remainder
///
/// Each block spans from its resolved start (see
/// [`resolve_block_start`]) to the declaration's last line. Blank lines after
/// the declaration are consumed as padding: they leave the remainder but are
/// not part of the block. Declarations whose position does not fit the file,
/// or that share a line with an earlier block, are skipped; their text stays
/// inside whatever block or remainder already holds it.
pub fn partition(lines: &[&str], decls: &[DeclarationPosition]) -> Partition {
    let mut ordered: Vec<&DeclarationPosition> = decls
        .iter()
        .filter(|decl| {
            let valid = decl.is_valid_for(lines.len());
            if !valid {
                tracing::warn!(
                    name = %decl.name,
                    start_line = decl.start_line,
                    end_line = decl.end_line,
                    line_count = lines.len(),
                    "skipping declaration outside source range"
                );
            }
            valid
        })
        .collect();
    // Stable: equal start lines keep input order
    ordered.sort_by_key(|decl| decl.start_line);

    let first_real_code = first_real_code_line(lines);
    let mut ownership = OwnershipMap::new(lines.len());
    let mut blocks: Vec<FunctionBlock> = Vec::with_capacity(ordered.len());

    for decl in ordered {
        let decl_start = decl.start_index();
        let end = decl.end_index();

        if let Some(earlier) = ownership.block_within(decl_start, end) {
            tracing::warn!(
                name = %decl.name,
                start_line = decl.start_line,
                end_line = decl.end_line,
                overlaps = %blocks[earlier].name,
                "skipping declaration that shares lines with an earlier block"
            );
            continue;
        }

        let block = blocks.len();
        let leading = resolve_block_start(lines, decl_start, first_real_code);
        let start = ownership.first_free_before(leading, decl_start);
        let padding_end = resolve_trailing_boundary(lines, end);

        tracing::debug!(
            name = %decl.name,
            block_start = start + 1,
            block_end = end + 1,
            padding_end = padding_end + 1,
            "resolved block"
        );

        ownership.claim_block(start, end, block);
        ownership.claim_padding(end, padding_end, block);

        blocks.push(FunctionBlock {
            name: decl.name.clone(),
            lines: lines[start..=end].iter().map(|l| l.to_string()).collect(),
        });
    }

    let mut remainder: Vec<String> = ownership
        .unclaimed()
        .map(|idx| lines[idx].to_string())
        .collect();
    if !remainder.is_empty() {
        remainder.push(String::new());
    }

    Partition {
        blocks,
        remainder,
        ownership,
    }
}
