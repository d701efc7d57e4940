//! Profile discovery
//!
//! Turns the user's path argument into something a reader can open. A path
//! to an existing file is used as is; for browsers with profile stores the
//! argument is a fragment of the profile directory name instead.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Browser, Importer};
use crate::config;
use crate::error::{ImportError, Result};

/// Resolve the path argument for the selected reader
pub fn resolve_path(raw: &str, browser: Option<Browser>, importer: &dyn Importer) -> Result<PathBuf> {
    let path = PathBuf::from(raw);
    if path.is_file() {
        return Ok(path);
    }

    match browser {
        Some(browser) if importer.supports_profile_discovery() => {
            let roots = config::profile_roots(browser)?;
            find_profile(&roots, raw)
        }
        _ => Ok(path),
    }
}

/// Find the first directory under `roots` whose name contains `fragment`
///
/// Roots are searched in order and entries in directory enumeration order.
/// When several directories match, the first one wins.
pub fn find_profile(roots: &[PathBuf], fragment: &str) -> Result<PathBuf> {
    let mut matches = Vec::new();

    for root in roots {
        log::debug!("Searching for profile '{}' in {}", fragment, root.display());
        matches.extend(matching_dirs(root, fragment)?);
    }

    if matches.len() > 1 {
        log::warn!(
            "{} profiles match '{}', using {}",
            matches.len(),
            fragment,
            matches[0].display()
        );
    }

    matches
        .into_iter()
        .next()
        .ok_or_else(|| ImportError::ProfileNotFound {
            fragment: fragment.to_string(),
            searched: roots.to_vec(),
        })
}

fn matching_dirs(root: &Path, fragment: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Ok(vec![]);
    }

    let entries = fs::read_dir(root).map_err(|e| ImportError::io(root, e))?;
    let mut found = Vec::new();

    for entry in entries.flatten() {
        // Follows symlinks, so a linked profile directory still matches
        let path = entry.path();
        if path.is_dir() && entry.file_name().to_string_lossy().contains(fragment) {
            found.push(path);
        }
    }

    Ok(found)
}
