//! Configuration file support for reorderfuncs
//!
//! Loads per-directory configuration from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.reorderfuncsrc.json` next to the input file
//! 3. `reorderfuncs.config.json` next to the input file
//!
//! All fields are optional. CLI flags take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name prefix that marks a Go test function
pub const DEFAULT_PREFIX: &str = "Test";

/// Config file names checked during discovery, in priority order
const CONFIG_FILE_NAMES: &[&str] = &[".reorderfuncsrc.json", "reorderfuncs.config.json"];

/// reorderfuncs configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReorderConfig {
    /// Name prefix of functions to reorder (default: "Test")
    #[serde(default)]
    pub prefix: Option<String>,

    /// Also reorder methods whose name carries the prefix (default: true)
    #[serde(default)]
    pub include_methods: Option<bool>,
}

/// Resolved configuration with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub prefix: String,
    pub include_methods: bool,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl ReorderConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(prefix) = &self.prefix {
            if prefix.is_empty() {
                anyhow::bail!("prefix must not be empty");
            }
            if prefix.chars().any(char::is_whitespace) {
                anyhow::bail!("prefix must not contain whitespace (got {:?})", prefix);
            }
        }
        Ok(())
    }

    /// Resolve config into its effective form
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        Ok(ResolvedConfig {
            prefix: self
                .prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            include_methods: self.include_methods.unwrap_or(true),
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Self {
        ResolvedConfig {
            prefix: DEFAULT_PREFIX.to_string(),
            include_methods: true,
            config_path: None,
        }
    }

    /// Override the prefix, validating it like a config value
    pub fn with_prefix(mut self, prefix: &str) -> Result<Self> {
        ReorderConfig {
            prefix: Some(prefix.to_string()),
            include_methods: None,
        }
        .validate()?;
        self.prefix = prefix.to_string();
        Ok(self)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Discover and load a config file from `dir`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(dir: &Path) -> Result<Option<(ReorderConfig, PathBuf)>> {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if path.exists() {
            let config = load_config_file(&path)?;
            return Ok(Some((config, path)));
        }
    }
    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<ReorderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: ReorderConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve config for a directory
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config in `dir`.
/// Returns default config if nothing is found.
pub fn load_and_resolve(dir: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(dir)? {
            Some((config, path)) => (config, Some(path)),
            None => (ReorderConfig::default(), None),
        }
    };

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    Ok(resolved)
}
