//! Import command - Read one browser's data and render it
//!
//! The pipeline is strictly sequential: pick a reader, resolve the path,
//! read everything, then render. Nothing is printed unless all steps
//! succeed.

use anyhow::{Context, Result};

use super::render::{self, Include, OutputMode};
use crate::error::ImportError;
use crate::importer::{profile, Browser, Imported, InputFormat};

/// Options for the import command
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Browser to import from
    pub browser: Option<Browser>,
    /// Input format, overrides the browser's default
    pub input_format: Option<InputFormat>,
    /// Bookmarks file, profile directory or profile name fragment
    pub bookmarks: String,
    /// What to print
    pub mode: OutputMode,
    /// Which entries to print in bookmark/quickmark mode
    pub include: Include,
}

/// Pick the input format from the browser and explicit format arguments
pub fn resolve_format(
    browser: Option<Browser>,
    input_format: Option<InputFormat>,
) -> std::result::Result<InputFormat, ImportError> {
    input_format
        .or_else(|| browser.map(Browser::default_format))
        .ok_or(ImportError::NoInputFormat)
}

/// Read the configured source
pub fn read(options: &ImportOptions) -> Result<Imported> {
    let format = resolve_format(options.browser, options.input_format)?;
    let importer = format.importer();

    let path = profile::resolve_path(&options.bookmarks, options.browser, importer.as_ref())
        .context("Failed to locate bookmarks")?;
    log::info!("Reading {} bookmarks from {}", format, path.display());

    let data = importer
        .read(&path)
        .with_context(|| format!("Failed to import {} bookmarks", format))?;
    Ok(data)
}

/// Execute the import command and return the rendered output
pub fn execute(options: &ImportOptions) -> Result<String> {
    let data = read(options)?;
    render::render_to_string(&data, options.mode, options.include)
        .context("Failed to render output")
}
