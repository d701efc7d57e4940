//! browser-import: import data from other browsers into qutebrowser

use anyhow::Result;
use clap::{ArgGroup, Parser};
use owo_colors::OwoColorize;

use browser_import::commands::import::{self, ImportOptions};
use browser_import::commands::render::{Include, OutputMode};
use browser_import::{Browser, InputFormat};

const DEFAULT_LOGGING: &str = "warn";

#[derive(Parser)]
#[command(name = "browser-import")]
#[command(about = "Import bookmarks, keywords and search engines from other browsers", long_about = None)]
#[command(version)]
#[command(
    after_help = "To import bookmarks from a browser without profile support, \
                  export them to HTML in its bookmark manager."
)]
#[command(allow_missing_positional = true)]
#[command(group(
    ArgGroup::new("output")
        .args(["bookmark_output", "quickmark_output", "search_output", "oldconfig"])
        .multiple(false)
))]
struct Cli {
    /// Which browser?
    #[arg(value_enum)]
    browser: Option<Browser>,

    /// Bookmarks file, profile directory, or profile name to search for
    bookmarks: String,

    /// Which input format? (overrides browser default)
    #[arg(short, long, value_enum)]
    input_format: Option<InputFormat>,

    /// Output in bookmark format
    #[arg(short, long)]
    bookmark_output: bool,

    /// Output in quickmark format (default)
    #[arg(short, long)]
    quickmark_output: bool,

    /// Output config.py search engine format (ignores -B and -K)
    #[arg(short, long)]
    search_output: bool,

    /// Output search engine format for the old qutebrowser.conf
    #[arg(long)]
    oldconfig: bool,

    /// Import plain bookmarks (can be combined with -K)
    #[arg(short = 'B', long)]
    import_bookmarks: bool,

    /// Import keywords (can be combined with -B)
    #[arg(short = 'K', long)]
    import_keywords: bool,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.bookmark_output {
            OutputMode::Bookmark
        } else if self.search_output {
            OutputMode::SearchConfig
        } else if self.oldconfig {
            OutputMode::SearchConfigLegacy
        } else {
            OutputMode::Quickmark
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOGGING))
        .init();

    let cli = Cli::parse();

    let options = ImportOptions {
        browser: cli.browser,
        input_format: cli.input_format,
        mode: cli.output_mode(),
        include: Include::from_flags(cli.import_bookmarks, cli.import_keywords),
        bookmarks: cli.bookmarks,
    };

    let output = import::execute(&options)?;
    if output.is_empty() {
        eprintln!("{}", "No matching entries found".yellow());
    } else {
        print!("{}", output);
    }

    Ok(())
}
