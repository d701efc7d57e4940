//! Mozilla places reader
//!
//! Firefox and SeaMonkey keep bookmarks in `places.sqlite` inside the
//! profile directory. Keywords live in `moz_keywords` and point at a place.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use super::{Imported, Importer, InputFormat};
use crate::error::{ImportError, Result};

const PLACES_DB: &str = "places.sqlite";

/// Bookmarks whose place has no keyword, excluding `place:` queries
const BOOKMARK_QUERY: &str = "\
    SELECT DISTINCT moz_bookmarks.title, moz_places.url \
    FROM moz_bookmarks, moz_places \
    WHERE moz_places.id = moz_bookmarks.fk \
    AND NOT EXISTS (SELECT 1 FROM moz_keywords WHERE moz_keywords.place_id = moz_places.id) \
    AND moz_places.url NOT LIKE 'place:%'";

const KEYWORD_QUERY: &str = "\
    SELECT moz_keywords.keyword, moz_places.url \
    FROM moz_keywords, moz_places \
    WHERE moz_places.id = moz_keywords.place_id";

pub struct PlacesImporter;

impl Importer for PlacesImporter {
    fn format(&self) -> InputFormat {
        InputFormat::Mozilla
    }

    fn supports_profile_discovery(&self) -> bool {
        true
    }

    fn read(&self, path: &Path) -> Result<Imported> {
        let db_path = places_db(path);
        let conn = Connection::open_with_flags(
            &db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| ImportError::database(&db_path, e))?;

        let data = read_places(&conn).map_err(|e| ImportError::database(&db_path, e))?;
        log::debug!(
            "Read {} bookmarks, {} keywords, {} search engines from {}",
            data.bookmarks.len(),
            data.keywords.len(),
            data.search_engines.len(),
            db_path.display()
        );
        Ok(data)
    }
}

/// Accept either a profile directory or the database itself
fn places_db(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(PLACES_DB)
    } else {
        path.to_path_buf()
    }
}

fn read_places(conn: &Connection) -> rusqlite::Result<Imported> {
    let mut data = Imported::new();

    let mut stmt = conn.prepare(BOOKMARK_QUERY)?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, Option<String>>(0)?, row.get::<_, String>(1)?))
    })?;
    for row in rows {
        let (title, url) = row?;
        data.add_bookmark(&url, title.as_deref());
    }

    let mut stmt = conn.prepare(KEYWORD_QUERY)?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;
    for row in rows {
        let (keyword, url) = row?;
        data.add_shortcut(&keyword, &url);
    }

    Ok(data)
}
