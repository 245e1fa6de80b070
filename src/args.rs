//! Command-line interface for Rickdex.

use clap::Parser;

/// Default base URL of the character directory API.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Environment variable consulted for the API base URL when no flag is given.
pub const BASE_URL_ENV: &str = "RICKDEX_API_URL";

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rickdex",
    version,
    about = "Search Rick and Morty characters from the terminal"
)]
pub struct Cli {
    /// Base URL of the character API (overrides RICKDEX_API_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Start with the given theme instead of the stored/ambient preference
    #[arg(long, value_enum, value_name = "THEME")]
    pub theme: Option<ThemeArg>,
}

/// Theme override accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeArg {
    /// Dark palette.
    Dark,
    /// Light palette.
    Light,
}

impl Cli {
    /// Resolve the API base URL: flag first, then environment, then the
    /// built-in default. Trailing slashes are stripped so URL building can
    /// always append `/character`.
    #[must_use]
    pub fn resolve_base_url(&self) -> String {
        if let Some(url) = &self.base_url
            && !url.trim().is_empty()
        {
            return url.trim().trim_end_matches('/').to_string();
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.trim().is_empty()
        {
            return url.trim().trim_end_matches('/').to_string();
        }
        DEFAULT_BASE_URL.to_string()
    }
}
