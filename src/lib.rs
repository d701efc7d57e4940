//! browser-import library
//!
//! Reads bookmarks, keywords and search engines from another browser's
//! storage and renders them in qutebrowser's formats.

pub mod commands;
pub mod config;
pub mod error;
pub mod importer;

pub use error::ImportError;
pub use importer::{Browser, Imported, InputFormat};
