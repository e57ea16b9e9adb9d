//! File input and atomic output

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Permission bits of written files
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Read a source file as text
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read input file: {}", path.display()))
}

/// Temporary sibling path used while writing `path`
fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let Some(name) = path.file_name() else {
        anyhow::bail!("output path has no file name: {}", path.display());
    };
    Ok(path.with_file_name(format!(
        ".{}.reorderfuncs.tmp",
        name.to_string_lossy()
    )))
}

/// Write `contents` to `path` atomically
///
/// The text goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers see either the old file or the complete
/// new one. The parent directory must already exist. The temporary file is
/// removed if any step fails.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let temp_path = temp_path_for(path)
        .with_context(|| format!("failed to write output file: {}", path.display()))?;

    let result = write_and_rename(&temp_path, path, contents);
    if result.is_err() {
        // Nothing may be left behind on failure; the temp file may not exist
        let _ = fs::remove_file(&temp_path);
    }
    result.with_context(|| format!("failed to write output file: {}", path.display()))
}

fn write_and_rename(temp_path: &Path, path: &Path, contents: &str) -> Result<()> {
    let mut file = fs::File::create(temp_path)
        .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write to temp file: {}", temp_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(OUTPUT_MODE))
            .with_context(|| format!("failed to set permissions: {}", temp_path.display()))?;
    }

    file.sync_all()
        .with_context(|| format!("failed to sync temp file: {}", temp_path.display()))?;
    drop(file);

    fs::rename(temp_path, path)
        .with_context(|| format!("failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
