use crate::domain::model::{KeyFile, WorkspaceSnapshot};
use crate::utils::error::{InsightError, Result};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Upper bound on key-file contents forwarded to the model; anything
/// longer is cut at a char boundary and marked as truncated.
pub const MAX_KEY_FILE_BYTES: usize = 16 * 1024;

/// Depth-first walk of the workspace root. Produces the newline-joined
/// relative listing (trailing `/` on directories) and reads the
/// allow-listed key files present at the root.
pub fn scan_workspace(
    root: &Path,
    key_files: &[String],
    ignore_dirs: &[String],
    max_depth: usize,
) -> Result<WorkspaceSnapshot> {
    if !root.is_dir() {
        return Err(InsightError::WorkspaceError {
            message: format!("{} is not a directory", root.display()),
        });
    }

    let mut entries = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored(entry, ignore_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let mut name = relative.to_string_lossy().replace('\\', "/");
        if entry.file_type().is_dir() {
            name.push('/');
        }
        entries.push(name);
    }

    let mut found = Vec::new();
    for name in key_files {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(contents) => found.push(KeyFile {
                name: name.clone(),
                contents: truncate_contents(contents),
            }),
            Err(err) => tracing::warn!("Skipping key file {}: {}", name, err),
        }
    }
    tracing::debug!(
        "Scanned {} entries, {} key files present",
        entries.len(),
        found.len()
    );

    Ok(WorkspaceSnapshot {
        listing: entries.join("\n"),
        key_files: found,
    })
}

fn is_ignored(entry: &DirEntry, ignore_dirs: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| ignore_dirs.iter().any(|dir| dir == name))
            .unwrap_or(false)
}

fn truncate_contents(mut contents: String) -> String {
    if contents.len() > MAX_KEY_FILE_BYTES {
        let mut cut = MAX_KEY_FILE_BYTES;
        while !contents.is_char_boundary(cut) {
            cut -= 1;
        }
        contents.truncate(cut);
        contents.push_str("\n[truncated]");
    }
    contents
}
