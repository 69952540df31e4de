//! MoodDrop Link Toolkit
//!
//! Validates Spotify share links, derives embeddable players from them and
//! publishes mood-tagged "drops" to the hosted MoodDrop backend.
//!
//! # Modules
//!
//! - `access` - Feature gating by role claim and the remote paywall flag
//! - `api` - HTTP endpoints served by `mooddrop serve`
//! - `backend` - REST client for the hosted backend
//! - `cli` - Command implementations
//! - `config` - Environment and `.env` configuration
//! - `drops` - Drop submission and grouping
//! - `logging` - `tracing` setup for the server
//! - `management` - Local drop cache
//! - `server` - Router and listener for the HTTP API
//! - `spotify` - Link validation and embedding
//! - `types` - Data structures shared across modules
//! - `utils` - Mood parsing, sorting and output helpers
//!
//! # Example
//!
//! ```
//! use mooddrop::spotify::{self, ResourceType};
//!
//! fn main() -> mooddrop::Res<()> {
//!     let reference = spotify::validate("https://open.spotify.com/album/1DFixLWuPkv3KT3TnV35m3")?;
//!     assert_eq!(reference.resource_type, ResourceType::Album);
//!     Ok(())
//! }
//! ```

pub mod access;
pub mod api;
pub mod backend;
pub mod cli;
pub mod config;
pub mod drops;
pub mod logging;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Boxed, thread-safe error used by commands and the server.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a confirmation line prefixed with a green check mark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints the message to stderr with a red `!` and exits with status 1.
///
/// Only for failures a command cannot continue from. Invalid links are not
/// such a failure; report them with [`warning!`].
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a notice prefixed with a yellow `!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
