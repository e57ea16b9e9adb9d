//! Block boundary resolution
//!
//! Decides which lines around a declaration belong to its block: the comments
//! and blank lines above it, and the blank padding below it.
//!
//! Global invariants enforced:
//! - Boundaries are 0-based inclusive indices
//! - The leading boundary never passes a line that is real code or boilerplate
//! - The trailing boundary only ever covers blank lines

use crate::lines::{first_real_code_line, is_blank, is_blank_or_comment, is_comment};

/// Walk upward from `start` through contiguous blank and comment lines
///
/// Returns the index of the first line of that run, or `start` itself when
/// the line above is neither blank nor a comment.
pub fn resolve_leading_boundary(lines: &[&str], start: usize) -> usize {
    let mut boundary = start.min(lines.len());
    while boundary > 0 && is_blank_or_comment(lines[boundary - 1]) {
        boundary -= 1;
    }
    boundary
}

/// Walk downward from `end` through contiguous blank lines
///
/// Returns the index of the last blank line of that run, or `end` itself
/// when the next line is not blank.
pub fn resolve_trailing_boundary(lines: &[&str], end: usize) -> usize {
    let mut boundary = end;
    while boundary + 1 < lines.len() && is_blank(lines[boundary + 1]) {
        boundary += 1;
    }
    boundary
}

/// Start of the comment group touching `start` with no blank line in between
fn resolve_attached_comments(lines: &[&str], start: usize) -> usize {
    let mut boundary = start.min(lines.len());
    while boundary > 0 && is_comment(lines[boundary - 1]) {
        boundary -= 1;
    }
    boundary
}

/// Check if the comment at `comment_idx` belongs to the declaration at `decl_start`
///
/// A comment directly above the declaration always belongs to it. A comment
/// separated from it by blank lines belongs to it only if every line in
/// between is blank and nothing above the comment is real code. Blank lines
/// are never owned through this rule.
pub fn is_orphan_comment_owned(lines: &[&str], comment_idx: usize, decl_start: usize) -> bool {
    is_comment_owned_with(lines, comment_idx, decl_start, first_real_code_line(lines))
}

/// [`is_orphan_comment_owned`] with the file's first real-code line precomputed
fn is_comment_owned_with(
    lines: &[&str],
    comment_idx: usize,
    decl_start: usize,
    first_real_code: Option<usize>,
) -> bool {
    if comment_idx >= decl_start || decl_start > lines.len() {
        return false;
    }
    if !is_comment(lines[comment_idx]) {
        return false;
    }
    if comment_idx + 1 == decl_start {
        return true;
    }
    if !lines[comment_idx + 1..decl_start].iter().all(|l| is_blank(l)) {
        return false;
    }
    // Real code before comment_idx exists iff the first one sits above it
    !first_real_code.is_some_and(|first| first < comment_idx)
}

/// First line of the visible block for the declaration starting at `start`
///
/// The contiguous blank/comment run above the declaration is claimed as a
/// whole unless it contains comments detached from the declaration by a
/// blank line that fail [`is_orphan_comment_owned`]. In that case the block
/// begins at the comment group that touches the declaration, and the detached
/// comments stay with the surrounding code.
///
/// `first_real_code` is [`first_real_code_line`] of `lines`, computed once
/// per file by the caller.
pub fn resolve_block_start(lines: &[&str], start: usize, first_real_code: Option<usize>) -> usize {
    let leading = resolve_leading_boundary(lines, start);
    let attached = resolve_attached_comments(lines, start);

    let nearest_detached = (leading..attached).rev().find(|&i| is_comment(lines[i]));

    match nearest_detached {
        Some(idx) if !is_comment_owned_with(lines, idx, attached, first_real_code) => {
            tracing::debug!(
                comment_line = idx + 1,
                decl_line = start + 1,
                "detached comment follows real code; leaving it in place"
            );
            attached
        }
        _ => leading,
    }
}
