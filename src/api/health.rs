use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::spotify::LinkResolver;

pub async fn health(Extension(resolver): Extension<LinkResolver>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "min_id_length": resolver.min_id_length(),
    }))
}
