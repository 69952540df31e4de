use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::spotify::LinkResolver;

#[derive(Debug, Deserialize)]
pub struct LinkQuery {
    #[serde(default)]
    pub url: String,
}

/// `GET /resolve?url=...`: 200 with the reference, 422 with the reason.
pub async fn resolve(
    Query(query): Query<LinkQuery>,
    Extension(resolver): Extension<LinkResolver>,
) -> Response {
    match resolver.validate(&query.url) {
        Ok(reference) => Json(json!({
            "embed_url": reference.embed_url(),
            "raw_url": reference.raw_url,
            "resource_type": reference.resource_type,
            "resource_id": reference.resource_id,
        }))
        .into_response(),
        Err(err) => {
            tracing::debug!(url = %query.url, code = err.code(), "rejected link");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": err.to_string(),
                    "code": err.code(),
                })),
            )
                .into_response()
        }
    }
}

/// `GET /infer?url=...`: always 200, defaults to `track`.
pub async fn infer(
    Query(query): Query<LinkQuery>,
    Extension(resolver): Extension<LinkResolver>,
) -> Json<serde_json::Value> {
    Json(json!({ "resource_type": resolver.infer_type(&query.url) }))
}
