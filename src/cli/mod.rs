//! # CLI Module
//!
//! User-facing commands of the `mooddrop` binary. Each command validates
//! input through [`crate::spotify`], talks to the hosted backend through
//! [`crate::backend`] where needed and reports progress with the crate's
//! `info!` / `success!` / `warning!` / `error!` macros.
//!
//! ## Commands
//!
//! - [`resolve`] - validate a link and show its type, id and embed URL
//! - [`embed`] - print the player fragment for a link
//! - [`open`] - open the embedded player (or the raw link) in a browser
//! - [`add_drop`] - validate a link and drop it with one or more moods
//! - [`sync_drops`] - refresh the local cache from the backend
//! - [`list_drops`] - show cached drops, one row per submission
//! - [`access`] - check a feature against the session's role and tier
//! - [`serve`] - run the HTTP API
//!
//! ## Usage
//!
//! ```bash
//! mooddrop resolve https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC
//! mooddrop drops add --url https://open.spotify.com/album/1DFixLWuPkv3KT3TnV35m3 --mood "chill, rainy"
//! mooddrop drops sync --limit 200
//! mooddrop drops --mood chill
//! mooddrop access --feature ai-playlist
//! ```

mod access;
mod drops;
mod link;
mod serve;

pub use access::access;
pub use drops::add_drop;
pub use drops::list_drops;
pub use drops::sync_drops;
pub use link::EXIT_INVALID_LINK;
pub use link::embed;
pub use link::open;
pub use link::resolve;
pub use serve::serve;
