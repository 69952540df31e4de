use crate::{
    info,
    spotify::{LinkResolver, render_player},
    success, warning,
};

/// Exit status for a link that failed validation.
pub const EXIT_INVALID_LINK: i32 = 2;

/// Validates a link and prints its type, id and embed URL.
///
/// A rejected link prints the reason and exits with [`EXIT_INVALID_LINK`]
/// so scripts can tell it apart from configuration failures.
pub fn resolve(resolver: &LinkResolver, url: &str) {
    match resolver.validate(url) {
        Ok(reference) => {
            success!("Valid Spotify {}", reference.resource_type);
            info!("Id:    {}", reference.resource_id);
            info!("Link:  {}", reference.open_url());
            info!("Embed: {}", reference.embed_url());
        }
        Err(e) => {
            warning!("{}", e);
            info!(
                "Best guess for the type field: {}",
                resolver.infer_type(url)
            );
            std::process::exit(EXIT_INVALID_LINK);
        }
    }
}

/// Prints the player fragment, or the outbound link for links that cannot be embedded.
pub fn embed(resolver: &LinkResolver, url: &str) {
    if let Err(e) = resolver.validate(url) {
        warning!("Not embeddable ({}), using a plain link", e);
    }
    println!("{}", render_player(resolver, url));
}

pub fn open(resolver: &LinkResolver, url: &str) {
    let target = match resolver.embed_url(url) {
        Some(embed_url) => embed_url,
        None => {
            warning!("Not embeddable, opening the link as entered");
            url.to_string()
        }
    };

    match webbrowser::open(&target) {
        Ok(_) => success!("Opened {}", target),
        Err(e) => warning!("Could not open a browser ({}). Visit: {}", e, target),
    }
}
