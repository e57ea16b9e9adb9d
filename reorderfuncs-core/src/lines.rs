//! Line classification for Go source text
//!
//! Every predicate here looks only at the trimmed prefix of a line (and, for
//! import blocks, at the lines above it). There is no lexer: a block comment
//! is recognized by its opening marker on each line, not tracked across lines.
//!
//! Global invariants enforced:
//! - All predicates are pure functions of `(lines, idx)`
//! - Indices are 0-based

/// Opening token of a multi-line import block
const IMPORT_BLOCK_START: &str = "import (";

/// Check if a line is empty or whitespace-only
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Check if a line starts with a line-comment or block-comment marker
pub fn is_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("//") || trimmed.starts_with("/*")
}

/// Check if a line is blank or a comment
pub fn is_blank_or_comment(line: &str) -> bool {
    is_blank(line) || is_comment(line)
}

/// Check if a line is boilerplate that never counts as "real code"
///
/// Boilerplate is a blank line, a comment, a `package` clause, a single-line
/// `import` statement, or the exact `import (` opener.
pub fn is_boilerplate(line: &str) -> bool {
    let trimmed = line.trim();
    is_blank_or_comment(trimmed)
        || trimmed.starts_with("package ")
        || trimmed.starts_with("import ")
        || trimmed == IMPORT_BLOCK_START
}

/// Check if the `)` at `idx` closes a multi-line import block
pub fn is_import_block_close(lines: &[&str], idx: usize) -> bool {
    match lines.get(idx) {
        Some(line) if line.trim() == ")" => opens_import_block_above(lines, idx),
        _ => false,
    }
}

/// Check if the quoted line at `idx` is an import spec inside an import block
pub fn is_inside_import_block(lines: &[&str], idx: usize) -> bool {
    match lines.get(idx) {
        Some(line) if line.contains('"') => opens_import_block_above(lines, idx),
        _ => false,
    }
}

/// Scan upward from `idx` for an `import (` opener.
///
/// Blank lines, comments and quoted import specs are skipped. Any other line
/// (a `package` clause included) ends the scan without a match.
fn opens_import_block_above(lines: &[&str], idx: usize) -> bool {
    for line in lines[..idx.min(lines.len())].iter().rev() {
        let trimmed = line.trim();
        if is_blank_or_comment(trimmed) || trimmed.contains('"') {
            continue;
        }
        return trimmed == IMPORT_BLOCK_START;
    }
    false
}

/// Check if the line at `idx` is real code, i.e. neither boilerplate nor
/// part of a multi-line import block
pub fn is_real_code_at(lines: &[&str], idx: usize) -> bool {
    let Some(line) = lines.get(idx) else {
        return false;
    };
    let trimmed = line.trim();

    if is_boilerplate(trimmed) {
        return false;
    }
    if trimmed == ")" {
        return !is_import_block_close(lines, idx);
    }
    if trimmed.contains('"') {
        return !is_inside_import_block(lines, idx);
    }
    true
}

/// Check if any line strictly above `idx` is real code
pub fn has_real_code_before(lines: &[&str], idx: usize) -> bool {
    (0..idx.min(lines.len()))
        .rev()
        .any(|i| is_real_code_at(lines, i))
}

/// Index of the first real-code line in the file, if any
///
/// `has_real_code_before(lines, idx)` is equivalent to
/// `first_real_code_line(lines).is_some_and(|first| first < idx)`, so callers
/// that answer the question for many indices compute this once.
pub fn first_real_code_line(lines: &[&str]) -> Option<usize> {
    (0..lines.len()).find(|&i| is_real_code_at(lines, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank_or_comment() {
        assert!(is_blank_or_comment(""));
        assert!(is_blank_or_comment("   \t"));
        assert!(is_blank_or_comment("// comment"));
        assert!(is_blank_or_comment("    // indented comment"));
        assert!(is_blank_or_comment("/* block */"));
        assert!(is_blank_or_comment("/* open block"));
        assert!(!is_blank_or_comment("func Test_x(t *testing.T) {"));
        assert!(!is_blank_or_comment(r#"s := "// not a comment""#));
        assert!(!is_blank_or_comment(" * continuation of a block comment"));
    }

    #[test]
    fn test_is_boilerplate() {
        assert!(is_boilerplate(""));
        assert!(is_boilerplate("// comment"));
        assert!(is_boilerplate("package main"));
        assert!(is_boilerplate(r#"import "testing""#));
        assert!(is_boilerplate(r#"import f "fmt""#));
        assert!(is_boilerplate("import ("));
        assert!(is_boilerplate("  import (  "));
        assert!(!is_boilerplate(")"));
        assert!(!is_boilerplate(r#"	"testing""#));
        assert!(!is_boilerplate("func helper() {}"));
        assert!(!is_boilerplate("var x = 1"));
        assert!(!is_boilerplate("packages := 3"));
    }

    #[test]
    fn test_import_block_close() {
        let lines = [
            "package main",
            "",
            "import (",
            r#"	"fmt""#,
            "",
            "	// standard library",
            r#"	"testing""#,
            ")",
        ];
        assert!(is_import_block_close(&lines, 7));
        assert!(!is_import_block_close(&lines, 6), "not a closing paren");
    }

    #[test]
    fn test_paren_after_code_is_not_import_close() {
        let lines = ["package main", "", "var (", "	x = 1", ")"];
        assert!(!is_import_block_close(&lines, 4));
        assert!(is_real_code_at(&lines, 4));
    }

    #[test]
    fn test_paren_after_package_is_not_import_close() {
        let lines = ["package main", ")"];
        assert!(!is_import_block_close(&lines, 1));
    }

    #[test]
    fn test_inside_import_block() {
        let lines = [
            "package main",
            "import (",
            r#"	"fmt""#,
            r#"	tst "testing""#,
            ")",
            r#"var s = "text""#,
        ];
        assert!(is_inside_import_block(&lines, 2));
        assert!(is_inside_import_block(&lines, 3));
        assert!(!is_inside_import_block(&lines, 5), "quoted after close");
        assert!(!is_inside_import_block(&lines, 1), "no quote on opener");
    }

    #[test]
    fn test_quoted_line_after_package_is_code() {
        let lines = ["package main", r#"	"fmt""#];
        assert!(!is_inside_import_block(&lines, 1));
        assert!(is_real_code_at(&lines, 1));
    }

    #[test]
    fn test_has_real_code_before_skips_boilerplate() {
        let lines = [
            "package main",
            "",
            "import (",
            r#"	"fmt""#,
            r#"	"testing""#,
            ")",
            "",
            "// doc",
            "func Test_x(t *testing.T) {",
            "}",
            "// trailing",
        ];
        assert!(!has_real_code_before(&lines, 7));
        assert!(!has_real_code_before(&lines, 8));
        assert!(has_real_code_before(&lines, 9));
        assert!(has_real_code_before(&lines, 10));
        assert!(!has_real_code_before(&lines, 0));
    }

    #[test]
    fn test_has_real_code_before_out_of_range() {
        let lines = ["package main", "func f() {}"];
        assert!(has_real_code_before(&lines, 99));
        assert!(!is_real_code_at(&lines, 99));
    }

    #[test]
    fn test_first_real_code_line_matches_scan() {
        let lines = [
            "package main",
            r#"import "testing""#,
            "",
            "// doc",
            "type fixture struct{}",
            "",
            "func Test_x(t *testing.T) {}",
        ];
        let first = first_real_code_line(&lines);
        assert_eq!(first, Some(4));
        for idx in 0..=lines.len() {
            assert_eq!(
                has_real_code_before(&lines, idx),
                first.is_some_and(|f| f < idx),
                "mismatch at {}",
                idx
            );
        }
    }

    #[test]
    fn test_first_real_code_line_none_for_header_only() {
        let lines = ["package main", "", r#"import "testing""#, ""];
        assert_eq!(first_real_code_line(&lines), None);
    }
}
