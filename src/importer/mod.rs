//! Bookmark readers
//!
//! Each supported storage format has one reader implementing [`Importer`].
//! Readers are selected through [`InputFormat::importer`], a static
//! registry: supporting a new format means adding a variant and a module.

pub mod chrome;
pub mod model;
pub mod netscape;
pub mod places;
pub mod profile;

use std::fmt;
use std::path::Path;

use clap::ValueEnum;

use crate::error::Result;

pub use model::{Entries, Imported};

/// A storage format we know how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Netscape bookmark HTML export
    Netscape,
    /// Mozilla places.sqlite profile
    Mozilla,
    /// Chrome/Chromium profile
    Chrome,
}

impl InputFormat {
    /// Get the reader for this format
    pub fn importer(self) -> Box<dyn Importer> {
        match self {
            Self::Netscape => Box::new(netscape::NetscapeImporter),
            Self::Mozilla => Box::new(places::PlacesImporter),
            Self::Chrome => Box::new(chrome::ChromeImporter),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Netscape => write!(f, "netscape"),
            Self::Mozilla => write!(f, "mozilla"),
            Self::Chrome => write!(f, "chrome"),
        }
    }
}

/// A browser whose data can be imported
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Browser {
    Firefox,
    Seamonkey,
    Chrome,
    Chromium,
    Ie,
}

impl Browser {
    /// Format used when no `--input-format` is given
    pub fn default_format(self) -> InputFormat {
        match self {
            Self::Firefox | Self::Seamonkey => InputFormat::Mozilla,
            Self::Chrome | Self::Chromium => InputFormat::Chrome,
            Self::Ie => InputFormat::Netscape,
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Firefox => write!(f, "firefox"),
            Self::Seamonkey => write!(f, "seamonkey"),
            Self::Chrome => write!(f, "chrome"),
            Self::Chromium => write!(f, "chromium"),
            Self::Ie => write!(f, "ie"),
        }
    }
}

/// A reader for one storage format
pub trait Importer {
    fn format(&self) -> InputFormat;

    /// Whether a path argument may name a profile to search for
    fn supports_profile_discovery(&self) -> bool;

    /// Read all entries from `path` in a single pass.
    ///
    /// Any file or database handle is closed before this returns.
    fn read(&self, path: &Path) -> Result<Imported>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_default_format() {
        assert_eq!(Browser::Firefox.default_format(), InputFormat::Mozilla);
        assert_eq!(Browser::Seamonkey.default_format(), InputFormat::Mozilla);
        assert_eq!(Browser::Chrome.default_format(), InputFormat::Chrome);
        assert_eq!(Browser::Chromium.default_format(), InputFormat::Chrome);
        assert_eq!(Browser::Ie.default_format(), InputFormat::Netscape);
    }

    #[test]
    fn test_registry_matches_format() {
        for format in [InputFormat::Netscape, InputFormat::Mozilla, InputFormat::Chrome] {
            assert_eq!(format.importer().format(), format);
        }
    }

    #[test]
    fn test_netscape_never_discovers_profiles() {
        assert!(!InputFormat::Netscape.importer().supports_profile_discovery());
        assert!(InputFormat::Mozilla.importer().supports_profile_discovery());
        assert!(InputFormat::Chrome.importer().supports_profile_discovery());
    }

    #[test]
    fn test_display_matches_cli_names() {
        assert_eq!(InputFormat::Mozilla.to_string(), "mozilla");
        assert_eq!(Browser::Chromium.to_string(), "chromium");
    }
}
