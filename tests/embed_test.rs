use mooddrop::spotify::{
    LinkResolver, ResourceType,
    embed::{PLAYER_ALLOW, escape_html, player_height, render_fallback, render_player, to_embed_url},
};

#[test]
fn test_to_embed_url_template() {
    assert_eq!(
        to_embed_url(ResourceType::Track, "4uLU6hMCjMI75M1A2tKUQC"),
        "https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC?utm_source=generator&theme=0"
    );
    assert_eq!(
        to_embed_url(ResourceType::Playlist, "37i9dQZF1DXcBWIGoYBM5M"),
        "https://open.spotify.com/embed/playlist/37i9dQZF1DXcBWIGoYBM5M?utm_source=generator&theme=0"
    );
}

#[test]
fn test_to_embed_url_is_deterministic() {
    for kind in ResourceType::ALL {
        let id = "1DFixLWuPkv3KT3TnV35m3";
        let first = to_embed_url(kind, id);
        let second = to_embed_url(kind, id);

        assert_eq!(first, second);
        assert!(first.contains(id));
        assert!(first.contains(&format!("/embed/{}/", kind.as_str())));
    }
}

#[test]
fn test_player_height() {
    assert_eq!(player_height(ResourceType::Track), 152);
    assert_eq!(player_height(ResourceType::Album), 352);
    assert_eq!(player_height(ResourceType::Playlist), 352);
}

#[test]
fn test_render_player_embeddable() {
    let resolver = LinkResolver::default();
    let html = render_player(
        &resolver,
        "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc123",
    );

    assert!(html.starts_with("<iframe "));
    assert!(html.contains(
        r#"src="https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC?utm_source=generator&amp;theme=0""#
    ));
    assert!(html.contains(r#"height="152""#));
    assert!(html.contains(&format!(r#"allow="{}""#, PLAYER_ALLOW)));
    assert!(html.contains(r#"loading="lazy""#));
    assert!(!html.contains("si=abc123"));
}

#[test]
fn test_render_player_falls_back_to_link() {
    let resolver = LinkResolver::default();
    let url = "https://open.spotify.com/artist/abc123456789";
    let html = render_player(&resolver, url);

    assert!(!html.contains("<iframe"));
    assert_eq!(html, render_fallback(url));
    assert!(html.contains(r#"href="https://open.spotify.com/artist/abc123456789""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
}

#[test]
fn test_render_fallback_escapes_input() {
    let html = render_fallback(r#"javascript:"><script>alert('x')</script>"#);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&quot;&gt;&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("a&b"), "a&amp;b");
    assert_eq!(escape_html(r#"<"'>"#), "&lt;&quot;&#39;&gt;");
    assert_eq!(escape_html("plain"), "plain");
}
