//! Output renderers
//!
//! Each renderer walks the imported mappings in insertion order and writes
//! one line per entry. None of them modify the data.

use std::io::{self, Write};

use crate::importer::Imported;

/// What to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `<url> <title>` lines for the bookmarks file
    Bookmark,
    /// `<name> <url>` lines for the quickmarks file
    #[default]
    Quickmark,
    /// `config.py` search engine statements
    SearchConfig,
    /// `qutebrowser.conf` search engine lines
    SearchConfigLegacy,
}

/// Which mappings the bookmark and quickmark renderers include
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Include {
    pub bookmarks: bool,
    pub keywords: bool,
}

impl Default for Include {
    fn default() -> Self {
        Self {
            bookmarks: true,
            keywords: true,
        }
    }
}

impl Include {
    /// Neither flag given means both
    pub fn from_flags(bookmarks: bool, keywords: bool) -> Self {
        if bookmarks || keywords {
            Self {
                bookmarks,
                keywords,
            }
        } else {
            Self::default()
        }
    }
}

/// Render `data` in the selected mode
pub fn render<W: Write>(
    data: &Imported,
    mode: OutputMode,
    include: Include,
    out: &mut W,
) -> io::Result<()> {
    match mode {
        OutputMode::Bookmark => write_bookmarks(data, include, out),
        OutputMode::Quickmark => write_quickmarks(data, include, out),
        OutputMode::SearchConfig => write_config_py(data, out),
        OutputMode::SearchConfigLegacy => write_qutebrowser_conf(data, out),
    }
}

/// Render into a string
pub fn render_to_string(data: &Imported, mode: OutputMode, include: Include) -> io::Result<String> {
    let mut buf = Vec::new();
    render(data, mode, include, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn write_bookmarks<W: Write>(data: &Imported, include: Include, out: &mut W) -> io::Result<()> {
    if include.bookmarks {
        for (url, title) in data.bookmarks.iter() {
            if title.is_empty() {
                writeln!(out, "{}", url)?;
            } else {
                writeln!(out, "{} {}", url, title)?;
            }
        }
    }
    if include.keywords {
        for (keyword, url) in data.keywords.iter() {
            writeln!(out, "{} {}", url, keyword)?;
        }
    }
    Ok(())
}

pub fn write_quickmarks<W: Write>(data: &Imported, include: Include, out: &mut W) -> io::Result<()> {
    if include.bookmarks {
        for (url, title) in data.bookmarks.iter() {
            // A quickmark needs a name; fall back to the URL
            let name = if title.is_empty() { url } else { title };
            writeln!(out, "{} {}", name, url)?;
        }
    }
    if include.keywords {
        for (keyword, url) in data.keywords.iter() {
            writeln!(out, "{} {}", keyword, url)?;
        }
    }
    Ok(())
}

pub fn write_config_py<W: Write>(data: &Imported, out: &mut W) -> io::Result<()> {
    for (keyword, url) in data.search_engines.iter() {
        writeln!(
            out,
            "c.url.searchengines[\"{}\"] = \"{}\"",
            py_escape(keyword),
            py_escape(url)
        )?;
    }
    Ok(())
}

pub fn write_qutebrowser_conf<W: Write>(data: &Imported, out: &mut W) -> io::Result<()> {
    for (keyword, url) in data.search_engines.iter() {
        writeln!(out, "{} = {}", keyword, url)?;
    }
    Ok(())
}

/// Escape a value for a double-quoted Python string literal
fn py_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
