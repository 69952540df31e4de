use std::{fmt, str::FromStr};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::embed;

/// The only host a shareable Spotify link may point at.
pub const SPOTIFY_HOST: &str = "open.spotify.com";

/// Shortest resource id accepted by [`LinkResolver::default`].
///
/// Real Spotify ids are 22 base62 characters; the threshold only has to weed
/// out links that were obviously cut off while copying.
pub const DEFAULT_MIN_ID_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Track,
    Album,
    Playlist,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [
        ResourceType::Track,
        ResourceType::Album,
        ResourceType::Playlist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Track => "track",
            ResourceType::Album => "album",
            ResourceType::Playlist => "playlist",
        }
    }

    /// Matches a raw path segment. Only the exact lowercase tokens count.
    pub fn from_token(token: &str) -> Option<Self> {
        ResourceType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == token)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient parsing for user-chosen types (`--type Album`, form values).
impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        ResourceType::from_token(&token).ok_or_else(|| {
            format!(
                "invalid value '{}'. Valid: {}",
                s.trim(),
                ResourceType::ALL.map(|k| k.as_str()).join(", ")
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("not a valid URL: {0}")]
    MalformedUrl(String),

    #[error("not a Spotify link (host '{0}', expected open.spotify.com)")]
    WrongHost(String),

    #[error("link has no /<type>/<id> path")]
    MissingResourcePath,

    #[error("unsupported Spotify resource '{0}', expected track, album or playlist")]
    UnsupportedResourceType(String),

    #[error("resource id '{id}' looks truncated (at least {min} characters expected)")]
    IdTooShort { id: String, min: usize },
}

impl ValidationError {
    /// Stable machine-readable code, used by the HTTP API.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MalformedUrl(_) => "malformed_url",
            ValidationError::WrongHost(_) => "wrong_host",
            ValidationError::MissingResourcePath => "missing_resource_path",
            ValidationError::UnsupportedResourceType(_) => "unsupported_resource_type",
            ValidationError::IdTooShort { .. } => "id_too_short",
        }
    }
}

/// A validated Spotify link.
///
/// Only the raw URL is ever persisted; the embed URL is derived from
/// `resource_type` and `resource_id` on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRef {
    pub raw_url: String,
    pub resource_type: ResourceType,
    pub resource_id: String,
}

impl ResourceRef {
    pub fn host(&self) -> &'static str {
        SPOTIFY_HOST
    }

    pub fn embed_url(&self) -> String {
        embed::to_embed_url(self.resource_type, &self.resource_id)
    }

    /// Canonical share link without tracking parameters.
    pub fn open_url(&self) -> String {
        format!(
            "https://{SPOTIFY_HOST}/{}/{}",
            self.resource_type, self.resource_id
        )
    }
}

/// Host and path pieces of a link, before the type token and id are judged.
struct ParsedLink {
    type_token: String,
    id: String,
}

fn parse_link(raw_url: &str) -> Result<ParsedLink, ValidationError> {
    let url = Url::parse(raw_url).map_err(|e| ValidationError::MalformedUrl(e.to_string()))?;

    let host = url.host_str().unwrap_or_default();
    if host != SPOTIFY_HOST {
        return Err(ValidationError::WrongHost(host.to_string()));
    }

    let mut segments = url
        .path_segments()
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty());

    let (Some(type_token), Some(id)) = (segments.next(), segments.next()) else {
        return Err(ValidationError::MissingResourcePath);
    };

    let id = id.split('?').next().unwrap_or_default();

    Ok(ParsedLink {
        type_token: type_token.to_string(),
        id: id.to_string(),
    })
}

/// Validates and classifies Spotify links.
///
/// Strict validation and best-effort type inference share one parser, so an
/// accepted link is always inferred as the type it was validated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkResolver {
    min_id_length: usize,
}

impl Default for LinkResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ID_LENGTH)
    }
}

impl LinkResolver {
    /// Creates a resolver that rejects ids shorter than `min_id_length`.
    pub fn new(min_id_length: usize) -> Self {
        Self { min_id_length }
    }

    pub fn min_id_length(&self) -> usize {
        self.min_id_length
    }

    /// Checks that `raw_url` is an embeddable Spotify share link.
    ///
    /// The link must parse as a URL, point at `open.spotify.com`, and have a
    /// `/<type>/<id>` path whose type is `track`, `album` or `playlist`. The id
    /// is everything up to the first `?`.
    ///
    /// # Arguments
    ///
    /// * `raw_url` - Link exactly as the user pasted it
    ///
    /// # Returns
    ///
    /// A [`ResourceRef`] holding the unmodified input, the resource type and
    /// the id.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MalformedUrl`] when the input is not a URL
    /// - [`ValidationError::WrongHost`] for any host but `open.spotify.com`
    /// - [`ValidationError::MissingResourcePath`] when a path segment is missing
    /// - [`ValidationError::UnsupportedResourceType`] for artists, episodes
    ///   and other types
    /// - [`ValidationError::IdTooShort`] when the id is shorter than the
    ///   configured minimum
    ///
    /// # Example
    ///
    /// ```
    /// let resolver = LinkResolver::default();
    /// let reference = resolver.validate("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=x")?;
    /// assert_eq!(reference.resource_type, ResourceType::Track);
    /// assert_eq!(reference.resource_id, "4uLU6hMCjMI75M1A2tKUQC");
    /// ```
    pub fn validate(&self, raw_url: &str) -> Result<ResourceRef, ValidationError> {
        let parsed = parse_link(raw_url)?;

        let resource_type = ResourceType::from_token(&parsed.type_token)
            .ok_or(ValidationError::UnsupportedResourceType(parsed.type_token))?;

        if parsed.id.chars().count() < self.min_id_length {
            return Err(ValidationError::IdTooShort {
                id: parsed.id,
                min: self.min_id_length,
            });
        }

        Ok(ResourceRef {
            raw_url: raw_url.to_string(),
            resource_type,
            resource_id: parsed.id,
        })
    }

    /// Pre-selects a type for a form field.
    ///
    /// # Returns
    ///
    /// The type named by the link's first path segment, or
    /// [`ResourceType::Track`] when the link cannot be classified. The id
    /// length is not checked.
    ///
    /// # Example
    ///
    /// ```
    /// let resolver = LinkResolver::default();
    /// assert_eq!(resolver.infer_type("https://open.spotify.com/playlist/37i9dQZF1DX"), ResourceType::Playlist);
    /// assert_eq!(resolver.infer_type("not a link"), ResourceType::Track);
    /// ```
    pub fn infer_type(&self, raw_url: &str) -> ResourceType {
        parse_link(raw_url)
            .ok()
            .and_then(|parsed| ResourceType::from_token(&parsed.type_token))
            .unwrap_or(ResourceType::Track)
    }

    /// Embed URL for a link, if it validates.
    ///
    /// # Returns
    ///
    /// `Some("https://open.spotify.com/embed/<type>/<id>?utm_source=generator&theme=0")`
    /// for a valid link. `None` means the link cannot be embedded and the
    /// caller should link out to the raw URL instead.
    pub fn embed_url(&self, raw_url: &str) -> Option<String> {
        self.validate(raw_url).ok().map(|reference| reference.embed_url())
    }
}

/// [`LinkResolver::validate`] with the default minimum id length.
///
/// # Errors
///
/// Returns the [`ValidationError`] describing the first failed check.
pub fn validate(raw_url: &str) -> Result<ResourceRef, ValidationError> {
    LinkResolver::default().validate(raw_url)
}

/// [`LinkResolver::infer_type`] with the default resolver. Never fails.
pub fn infer_type_from_url(raw_url: &str) -> ResourceType {
    LinkResolver::default().infer_type(raw_url)
}
