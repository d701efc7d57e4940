//! Chrome/Chromium profile reader
//!
//! Bookmarks come from the `Bookmarks` JSON file, keywords and search
//! engines from the `keywords` table of the `Web Data` database. Search
//! URLs there are OpenSearch templates (`{searchTerms}` and friends) and are
//! converted before classification.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use serde::Deserialize;
use url::Url;

use super::model::SEARCH_MARKER;
use super::{Imported, Importer, InputFormat};
use crate::error::{ImportError, Result};

const BOOKMARKS_FILE: &str = "Bookmarks";
const WEB_DATA_DB: &str = "Web Data";

const GOOGLE_BASE_URL: &str = "https://www.google.com/";

pub struct ChromeImporter;

impl Importer for ChromeImporter {
    fn format(&self) -> InputFormat {
        InputFormat::Chrome
    }

    fn supports_profile_discovery(&self) -> bool {
        true
    }

    fn read(&self, path: &Path) -> Result<Imported> {
        // A file inside the profile (usually Bookmarks) stands for its profile
        let profile = if path.is_file() {
            path.parent().unwrap_or(path)
        } else {
            path
        };

        let mut data = Imported::new();
        read_bookmarks(&profile.join(BOOKMARKS_FILE), &mut data)?;
        read_keywords(&profile.join(WEB_DATA_DB), &mut data)?;

        log::debug!(
            "Read {} bookmarks, {} keywords, {} search engines from {}",
            data.bookmarks.len(),
            data.keywords.len(),
            data.search_engines.len(),
            profile.display()
        );
        Ok(data)
    }
}

/// Top level of the `Bookmarks` file
#[derive(Debug, Deserialize)]
struct BookmarksFile {
    #[serde(default)]
    roots: BTreeMap<String, BookmarkNode>,
}

/// One node of the bookmark tree
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum BookmarkNode {
    Url {
        #[serde(default)]
        name: Option<String>,
        url: String,
    },
    Folder {
        #[serde(default)]
        children: Vec<BookmarkNode>,
    },
    #[serde(other)]
    Other,
}

fn read_bookmarks(path: &Path, data: &mut Imported) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|e| ImportError::io(path, e))?;
    let file: BookmarksFile = serde_json::from_str(&content).map_err(|source| ImportError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    for root in file.roots.values() {
        walk_bookmarks(root, data);
    }

    Ok(())
}

/// Flatten the folder tree into `data`
fn walk_bookmarks(node: &BookmarkNode, data: &mut Imported) {
    match node {
        BookmarkNode::Url { name, url } => {
            if is_internal(url) {
                log::debug!("Skipping internal page: {}", url);
                return;
            }
            data.add_bookmark(url, name.as_deref());
        }
        BookmarkNode::Folder { children } => {
            for child in children {
                walk_bookmarks(child, data);
            }
        }
        BookmarkNode::Other => {}
    }
}

fn is_internal(url: &str) -> bool {
    Url::parse(url)
        .map(|u| u.scheme() == "chrome")
        .unwrap_or(false)
}

fn read_keywords(db_path: &Path, data: &mut Imported) -> Result<()> {
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| ImportError::database(db_path, e))?;

    let rows = query_keywords(&conn).map_err(|e| ImportError::database(db_path, e))?;
    for (keyword, url) in rows {
        match opensearch_convert(&url) {
            Some(converted) => {
                data.add_shortcut(&keyword, &converted);
            }
            None => log::warn!("Unsupported parameter in url for {}; skipping", keyword),
        }
    }

    Ok(())
}

fn query_keywords(conn: &Connection) -> rusqlite::Result<Vec<(String, String)>> {
    let mut stmt = conn.prepare("SELECT keyword, url FROM keywords")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;
    rows.collect()
}

/// Convert an OpenSearch URL template to a `%s` search URL
///
/// Optional `{param?}` parameters and Chrome's own `{google:...}` tracking
/// parameters are dropped. Returns `None` if a required parameter cannot be
/// filled in.
pub fn opensearch_convert(template: &str) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            // Unterminated brace, keep the remainder literally
            out.push_str(&rest[start..]);
            return Some(out);
        };

        let param = &after[..end];
        match param {
            "searchTerms" => out.push_str(SEARCH_MARKER),
            "inputEncoding" | "outputEncoding" => out.push_str("UTF-8"),
            "google:baseURL" => out.push_str(GOOGLE_BASE_URL),
            p if p.ends_with('?') || p.starts_with("google:") => {}
            _ => return None,
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Some(out)
}
