use axum::{Extension, extract::Query, response::Html};

use crate::spotify::{LinkResolver, render_player};

use super::resolve::LinkQuery;

pub async fn player(
    Query(query): Query<LinkQuery>,
    Extension(resolver): Extension<LinkResolver>,
) -> Html<String> {
    Html(render_player(&resolver, &query.url))
}
