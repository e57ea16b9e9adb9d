// Build script to inject version information from git tags
//
// `git describe` output is mapped as follows:
// - clean tag "v0.1.0"             -> "0.1.0"
// - tag with commits "v0.1.0-5-g1" -> "0.1.0"
// - untagged "abc123[-dirty]"      -> "<pkg version>-abc123[-dirty]"
// Falls back to CARGO_PKG_VERSION when git is unavailable.

use std::process::Command;

fn main() {
    let version = git_version().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=REORDERFUNCS_VERSION={}", version);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
    println!("cargo:rerun-if-changed=.git/refs/tags");
}

fn git_version() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    Some(map_described(described.trim()))
}

fn map_described(described: &str) -> String {
    match described.strip_prefix('v') {
        Some(tagged) => tagged.split('-').next().unwrap_or(tagged).to_string(),
        None => format!("{}-{}", env!("CARGO_PKG_VERSION"), described),
    }
}
