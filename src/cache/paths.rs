// Cache path utilities.
// Resolves the on-disk cache location and maps cache keys to file names.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/ghmeta on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ghmeta").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the file holding a single cache key under `dir`.
pub fn entry_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", encode_name(key)))
}

/// Encode a name for use in filesystem paths.
/// Percent-encodes problematic characters (and `%` itself) so that distinct
/// names never share a file.
fn encode_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '%' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => {
                out.push_str(&format!("%{:02X}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out
}
