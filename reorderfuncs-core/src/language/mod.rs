//! Language abstraction layer
//!
//! The reordering engine consumes [`DeclarationPosition`]s through the
//! [`DeclarationSource`] trait; Go is the only grammar wired in.

pub mod declaration;
pub mod go;
pub mod parser;

pub use declaration::{DeclarationKind, DeclarationPosition};
pub use go::GoParser;
pub use parser::DeclarationSource;

/// Keep only declarations recognized as test functions
///
/// A declaration qualifies when its name starts with `prefix`. Methods
/// qualify only when `include_methods` is set. Source order is preserved.
pub fn select_test_functions(
    decls: Vec<DeclarationPosition>,
    prefix: &str,
    include_methods: bool,
) -> Vec<DeclarationPosition> {
    decls
        .into_iter()
        .filter(|d| d.has_prefix(prefix))
        .filter(|d| include_methods || d.kind == DeclarationKind::Function)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DeclarationPosition> {
        vec![
            DeclarationPosition::new("Test_charlie", 5, 7),
            DeclarationPosition::new("helper", 9, 11),
            DeclarationPosition::method("TestMethod", 13, 15),
            DeclarationPosition::new("Test_alice", 17, 19),
            DeclarationPosition::new("BenchmarkX", 21, 23),
        ]
    }

    #[test]
    fn test_select_by_prefix_keeps_source_order() {
        let names: Vec<String> = select_test_functions(sample(), "Test", true)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Test_charlie", "TestMethod", "Test_alice"]);
    }

    #[test]
    fn test_select_excludes_methods() {
        let names: Vec<String> = select_test_functions(sample(), "Test", false)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Test_charlie", "Test_alice"]);
    }

    #[test]
    fn test_select_custom_prefix() {
        let selected = select_test_functions(sample(), "Benchmark", true);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "BenchmarkX");
    }
}
