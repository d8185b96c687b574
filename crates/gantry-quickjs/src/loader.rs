//! Namespace to source file resolution.

use std::path::PathBuf;

/// Extension of namespace source files.
pub(crate) const SOURCE_EXT: &str = "js";

/// Map a dotted namespace to its relative source path.
///
/// `app.boot` becomes `app/boot.js`. Empty segments and segments carrying
/// path separators are rejected, so no namespace name can address a file
/// outside its own tree.
pub(crate) fn namespace_rel_path(namespace: &str) -> Option<PathBuf> {
    if namespace.is_empty() {
        return None;
    }

    let mut path = PathBuf::new();
    for segment in namespace.split('.') {
        if segment.is_empty() || segment.contains(['/', '\\']) {
            return None;
        }
        path.push(segment);
    }
    path.set_extension(SOURCE_EXT);
    Some(path)
}

/// Search for the file backing `namespace`.
///
/// Directories are probed in order and the first existing file wins. On a
/// miss the error lists every location that was tried.
pub(crate) fn find_namespace_file(
    search_path: &[PathBuf],
    namespace: &str,
) -> Result<PathBuf, String> {
    let rel = match namespace_rel_path(namespace) {
        Some(rel) => rel,
        None => return Err(format!("'{}' is not a well-formed namespace name", namespace)),
    };

    if search_path.is_empty() {
        return Err("the namespace search path is empty".to_string());
    }

    let mut searched = Vec::new();
    for dir in search_path {
        let candidate = dir.join(&rel);
        if candidate.is_file() {
            return Ok(candidate);
        }
        searched.push(candidate);
    }

    let listing = searched
        .iter()
        .map(|p| format!("  {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");
    Err(format!("no source file found. Searched:\n{}", listing))
}
