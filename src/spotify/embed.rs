use super::link::{LinkResolver, ResourceType, SPOTIFY_HOST};

/// Fixed query appended to every embed URL: source tag and dark theme.
pub const EMBED_QUERY: &str = "utm_source=generator&theme=0";

/// Permissions granted to the embedded player frame.
pub const PLAYER_ALLOW: &str =
    "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture";

pub fn to_embed_url(resource_type: ResourceType, resource_id: &str) -> String {
    format!(
        "https://{SPOTIFY_HOST}/embed/{kind}/{id}?{EMBED_QUERY}",
        kind = resource_type.as_str(),
        id = resource_id
    )
}

/// Compact player for single tracks, full list view for albums and playlists.
pub fn player_height(resource_type: ResourceType) -> u32 {
    match resource_type {
        ResourceType::Track => 152,
        ResourceType::Album | ResourceType::Playlist => 352,
    }
}

/// Renders the player fragment for a drop card.
///
/// Embeddable links become a lazy-loaded `<iframe>`; anything else becomes
/// an outbound link to the URL exactly as the user entered it.
pub fn render_player(resolver: &LinkResolver, raw_url: &str) -> String {
    match resolver.validate(raw_url) {
        Ok(reference) => format!(
            r#"<iframe src="{src}" width="100%" height="{height}" frameborder="0" allow="{allow}" loading="lazy"></iframe>"#,
            src = escape_html(&reference.embed_url()),
            height = player_height(reference.resource_type),
            allow = PLAYER_ALLOW,
        ),
        Err(_) => render_fallback(raw_url),
    }
}

pub fn render_fallback(raw_url: &str) -> String {
    format!(
        r#"<a href="{href}" target="_blank" rel="noopener noreferrer">Open in Spotify</a>"#,
        href = escape_html(raw_url)
    )
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
