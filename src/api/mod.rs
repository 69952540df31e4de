//! # HTTP API
//!
//! Read-only endpoints over the link resolver, for frontends that want the
//! same validation and embed rules as the CLI:
//!
//! - `GET /health` - status, version and the active minimum id length
//! - `GET /resolve?url=` - validated reference as JSON, or `422` with
//!   `{ "error", "code" }`
//! - `GET /infer?url=` - best-effort resource type, never fails
//! - `GET /player?url=` - embeddable player fragment, or the outbound
//!   link fallback
//!
//! Handlers receive the configured [`LinkResolver`](crate::spotify::LinkResolver)
//! through an `Extension` layer installed by [`crate::server::router`].

mod health;
mod player;
mod resolve;

pub use health::health;
pub use player::player;
pub use resolve::{LinkQuery, infer, resolve};
