//! Configuration management for MoodDrop.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the local data directory:
//!
//! - Linux: `~/.local/share/mooddrop/.env`
//! - macOS: `~/Library/Application Support/mooddrop/.env`
//! - Windows: `%LOCALAPPDATA%/mooddrop/.env`
//!
//! Variables already set in the environment win over the file.

use std::{env, path::PathBuf};

use crate::spotify::DEFAULT_MIN_ID_LENGTH;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8787";

/// Loads `<data_local_dir>/mooddrop/.env` if it exists.
///
/// Creates the data directory first so the `.env` template has a home.
///
/// # Returns
///
/// `Ok(())` when the file was loaded or does not exist.
///
/// # Errors
///
/// Returns an error message when the data directory cannot be created or the
/// file exists but cannot be parsed.
///
/// # Example
///
/// ```
/// if let Err(e) = config::load_env().await {
///     error!("Cannot load environment. Err: {}", e);
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }
    Ok(())
}

/// Location of the `.env` file, falling back to `./mooddrop/.env` when the
/// platform has no local data directory.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("mooddrop/.env");
    path
}

/// Address the local HTTP API binds to (`SERVER_ADDRESS`).
///
/// # Returns
///
/// The configured address, or [`DEFAULT_SERVER_ADDRESS`] when unset.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Base URL of the hosted backend (`MOODDROP_BACKEND_URL`).
///
/// # Errors
///
/// Returns `"MOODDROP_BACKEND_URL must be set"` when unset or blank.
pub fn backend_url() -> Result<String, String> {
    required("MOODDROP_BACKEND_URL")
}

/// Public API key sent with every backend request (`MOODDROP_BACKEND_ANON_KEY`).
///
/// # Errors
///
/// Returns `"MOODDROP_BACKEND_ANON_KEY must be set"` when unset or blank.
pub fn backend_anon_key() -> Result<String, String> {
    required("MOODDROP_BACKEND_ANON_KEY")
}

/// Session token of the signed-in user, if any (`MOODDROP_ACCESS_TOKEN`).
///
/// # Returns
///
/// `None` when the variable is unset or blank, which means an anonymous
/// session.
pub fn access_token() -> Option<String> {
    env::var("MOODDROP_ACCESS_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// Minimum accepted resource id length (`MOODDROP_MIN_ID_LENGTH`).
pub fn min_id_length() -> usize {
    parse_min_id_length(env::var("MOODDROP_MIN_ID_LENGTH").ok().as_deref())
}

/// Parses a raw `MOODDROP_MIN_ID_LENGTH` value.
///
/// # Arguments
///
/// * `value` - The raw variable, `None` when unset
///
/// # Returns
///
/// The parsed length, or [`DEFAULT_MIN_ID_LENGTH`] for unset, unparsable or
/// zero values.
///
/// # Example
///
/// ```
/// assert_eq!(parse_min_id_length(Some(" 16 ")), 16);
/// assert_eq!(parse_min_id_length(Some("0")), DEFAULT_MIN_ID_LENGTH);
/// ```
pub fn parse_min_id_length(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|len| *len > 0)
        .unwrap_or(DEFAULT_MIN_ID_LENGTH)
}

fn required(key: &str) -> Result<String, String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", key)),
    }
}
