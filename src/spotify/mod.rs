//! # Spotify Link Handling
//!
//! Everything MoodDrop knows about Spotify lives in this module: turning a
//! pasted share link into a validated [`ResourceRef`], and turning that
//! reference into an embeddable player.
//!
//! ## Resolution Rules
//!
//! A link is accepted when all of the following hold:
//!
//! 1. It parses as an absolute URL
//! 2. Its host is exactly `open.spotify.com`
//! 3. Its path has at least two non-empty segments
//! 4. The first segment is `track`, `album` or `playlist`
//! 5. The second segment (the id) is at least the configured minimum length
//!
//! Each failed rule maps to one [`ValidationError`] variant, checked in the
//! order above.
//!
//! ## Inference vs. Validation
//!
//! [`LinkResolver::infer_type`] is the relaxed form used to pre-select a
//! type while the user is still typing. It reuses the validator's parser and
//! falls back to [`ResourceType::Track`] instead of failing, so it can never
//! disagree with [`LinkResolver::validate`] on a link that validates.
//!
//! ## Embedding
//!
//! ```text
//! https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc123
//!     ↓ validate
//! ResourceRef { Track, "4uLU6hMCjMI75M1A2tKUQC" }
//!     ↓ embed_url
//! https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC?utm_source=generator&theme=0
//! ```
//!
//! Embed URLs are never stored. They are recomputed from the reference, so
//! they cannot drift from the link a drop was created with.

pub mod embed;
pub mod link;

pub use embed::{render_fallback, render_player, to_embed_url};
pub use link::{
    DEFAULT_MIN_ID_LENGTH, LinkResolver, ResourceRef, ResourceType, SPOTIFY_HOST,
    ValidationError, infer_type_from_url, validate,
};
