//! Netscape bookmark file reader
//!
//! Firefox, Chromium and Internet Explorer can all export bookmarks to this
//! HTML format. Every `<A>` element is one entry; a `SHORTCUTURL` attribute
//! marks a keyword bookmark.

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html};

use super::{Imported, Importer, InputFormat};
use crate::error::{ImportError, Result};

pub struct NetscapeImporter;

impl Importer for NetscapeImporter {
    fn format(&self) -> InputFormat {
        InputFormat::Netscape
    }

    fn supports_profile_discovery(&self) -> bool {
        false
    }

    fn read(&self, path: &Path) -> Result<Imported> {
        let content = fs::read_to_string(path).map_err(|e| ImportError::io(path, e))?;
        let data = parse(&content);
        log::debug!(
            "Read {} bookmarks, {} keywords, {} search engines from {}",
            data.bookmarks.len(),
            data.keywords.len(),
            data.search_engines.len(),
            path.display()
        );
        Ok(data)
    }
}

/// Parse a bookmark file already loaded into memory
pub fn parse(html: &str) -> Imported {
    let document = Html::parse_document(html);
    let mut data = Imported::new();

    let anchors = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "a");

    for anchor in anchors {
        let element = anchor.value();
        let Some(href) = element.attr("href") else {
            log::debug!("Skipping anchor without href");
            continue;
        };

        let title = anchor.text().collect::<String>();
        let title = Some(title.trim()).filter(|t| !t.is_empty());

        data.add_entry(href, element.attr("shortcuturl"), title);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EXPORT: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks Menu</H1>

<DL><p>
    <DT><H3 ADD_DATE="1490000000">Toolbar</H3>
    <DL><p>
        <DT><A HREF="https://www.example.com/" ADD_DATE="1490000000">Example</A>
        <DT><A HREF="https://duckduckgo.com/?q=%s" SHORTCUTURL="ddg">DuckDuckGo</A>
        <DT><A HREF="https://github.com/" SHORTCUTURL="gh">GitHub</A>
    </DL><p>
    <DT><A NAME="anchor-without-href">Nothing</A>
    <DT><A HREF="https://www.qutebrowser.org/">qutebrowser</A>
</DL><p>
"#;

    #[test]
    fn test_parse_export() {
        let data = parse(EXPORT);

        assert_eq!(data.bookmarks.len(), 2);
        assert_eq!(data.bookmarks.get("https://www.example.com/"), Some("Example"));
        assert_eq!(
            data.bookmarks.get("https://www.qutebrowser.org/"),
            Some("qutebrowser")
        );
        assert_eq!(data.keywords.get("gh"), Some("https://github.com/"));
        assert_eq!(
            data.search_engines.get("ddg"),
            Some("https://duckduckgo.com/?q={}")
        );
    }

    #[test]
    fn test_classification_by_attributes() {
        let search = parse(r#"<a shortcuturl="g" href="https://x/%s">x</a>"#);
        assert_eq!(search.search_engines.get("g"), Some("https://x/{}"));
        assert!(search.keywords.is_empty() && search.bookmarks.is_empty());

        let keyword = parse(r#"<a shortcuturl="g" href="https://x/">x</a>"#);
        assert_eq!(keyword.keywords.get("g"), Some("https://x/"));
        assert!(keyword.search_engines.is_empty() && keyword.bookmarks.is_empty());

        let bookmark = parse(r#"<a href="https://x/%s">x</a>"#);
        assert_eq!(bookmark.bookmarks.get("https://x/%s"), Some("x"));
        assert!(bookmark.search_engines.is_empty() && bookmark.keywords.is_empty());
    }

    #[test]
    fn test_duplicate_url_keeps_first_title() {
        let data = parse(r#"<a href="https://a">A</a><a href="https://a">B</a>"#);
        assert_eq!(data.bookmarks.len(), 1);
        assert_eq!(data.bookmarks.get("https://a"), Some("A"));
    }

    #[test]
    fn test_braces_are_escaped() {
        let data = parse(r#"<a shortcuturl="w" href="https://w/{lang}/%s">w</a>"#);
        assert_eq!(data.search_engines.get("w"), Some("https://w/{{lang}}/{}"));
    }

    #[test]
    fn test_empty_title() {
        let data = parse(r#"<a href="https://e"></a>"#);
        assert_eq!(data.bookmarks.get("https://e"), Some(""));
    }

    #[test]
    fn test_markup_whitespace_is_trimmed() {
        let data = parse("<a href=\"https://t\">\n    Padded\n  </a>");
        assert_eq!(data.bookmarks.get("https://t"), Some("Padded"));
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", EXPORT).unwrap();

        let data = NetscapeImporter.read(file.path()).unwrap();
        assert_eq!(data.bookmarks.len(), 2);
    }

    #[test]
    fn test_read_missing_file() {
        let err = NetscapeImporter
            .read(Path::new("/nonexistent/bookmarks.html"))
            .unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<a href=\"https://x\">\xff\xfe</a>").unwrap();

        let err = NetscapeImporter.read(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
    }
}
