//! Platform-specific profile locations
//!
//! Each browser keeps its profiles under one (or on macOS, one of two)
//! parent directories. Profile discovery searches these for a directory
//! whose name contains the requested fragment.

use std::path::PathBuf;

use crate::error::{ImportError, Result};
use crate::importer::Browser;

#[cfg(not(target_os = "windows"))]
fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(ImportError::NoProfileRoot("home"))
}

/// Get the candidate profile roots for a browser
/// - firefox:   ~/.mozilla/firefox, ~/Library/Application Support/Firefox/Profiles,
///   %APPDATA%/Mozilla/Firefox/Profiles
/// - seamonkey: ~/.mozilla/seamonkey, ~/Library/Application Support/SeaMonkey/Profiles,
///   %APPDATA%/Mozilla/SeaMonkey/Profiles
/// - chrome:    ~/.config/google-chrome, ~/Library/Application Support/Google/Chrome,
///   %LOCALAPPDATA%/Google/Chrome/User Data
/// - chromium:  ~/.config/chromium, ~/Library/Application Support/Chromium,
///   %LOCALAPPDATA%/Chromium/User Data
///
/// Internet Explorer has no profile store we can read, so it yields no roots.
pub fn profile_roots(browser: Browser) -> Result<Vec<PathBuf>> {
    #[cfg(target_os = "macos")]
    {
        let home = home_dir()?;
        let support = home.join("Library").join("Application Support");
        // Older releases kept Mozilla profiles under ~/Library/Mozilla
        let legacy = home.join("Library").join("Mozilla");
        Ok(match browser {
            Browser::Firefox => vec![
                support.join("Firefox").join("Profiles"),
                legacy.join("Firefox").join("Profiles"),
            ],
            Browser::Seamonkey => vec![
                support.join("SeaMonkey").join("Profiles"),
                legacy.join("SeaMonkey").join("Profiles"),
            ],
            Browser::Chrome => vec![support.join("Google").join("Chrome")],
            Browser::Chromium => vec![support.join("Chromium")],
            Browser::Ie => vec![],
        })
    }

    #[cfg(target_os = "windows")]
    {
        let roaming = dirs::config_dir().ok_or(ImportError::NoProfileRoot("AppData"))?;
        let local = dirs::data_local_dir().ok_or(ImportError::NoProfileRoot("LocalAppData"))?;
        Ok(match browser {
            Browser::Firefox => vec![roaming.join("Mozilla").join("Firefox").join("Profiles")],
            Browser::Seamonkey => vec![roaming.join("Mozilla").join("SeaMonkey").join("Profiles")],
            Browser::Chrome => vec![local.join("Google").join("Chrome").join("User Data")],
            Browser::Chromium => vec![local.join("Chromium").join("User Data")],
            Browser::Ie => vec![],
        })
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let home = home_dir()?;
        let config = dirs::config_dir().unwrap_or_else(|| home.join(".config"));
        Ok(match browser {
            Browser::Firefox => vec![home.join(".mozilla").join("firefox")],
            Browser::Seamonkey => vec![home.join(".mozilla").join("seamonkey")],
            Browser::Chrome => vec![config.join("google-chrome")],
            Browser::Chromium => vec![config.join("chromium")],
            Browser::Ie => vec![],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn test_linux_chromium_roots() {
        if let Ok(roots) = profile_roots(Browser::Chrome) {
            assert_eq!(roots.len(), 1);
            assert!(roots[0].ends_with("google-chrome"));
        }
        if let Ok(roots) = profile_roots(Browser::Chromium) {
            assert_eq!(roots.len(), 1);
            assert!(roots[0].ends_with("chromium"));
        }
    }

    #[test]
    fn test_ie_has_no_roots() {
        if let Ok(roots) = profile_roots(Browser::Ie) {
            assert!(roots.is_empty());
        }
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_macos_mozilla_has_two_candidates() {
        let roots = profile_roots(Browser::Firefox).unwrap();
        assert_eq!(roots.len(), 2);
        assert!(roots[0].ends_with("Application Support/Firefox/Profiles"));
        assert!(roots[1].ends_with("Mozilla/Firefox/Profiles"));
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn test_linux_firefox_root() {
        if let Ok(roots) = profile_roots(Browser::Firefox) {
            assert_eq!(roots.len(), 1);
            assert!(roots[0].ends_with(".mozilla/firefox"));
        }
    }
}
