use crate::{
    access::{Feature, can_access},
    backend::{self, BackendClient},
    error, info, success, utils, warning,
};

/// Checks whether the configured session may use `feature`.
pub async fn access(feature: Feature) {
    let client = match BackendClient::from_config() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let pb = utils::spinner("Resolving session...");
    let principal = backend::auth::current_principal(&client).await;
    let settings = backend::settings::fetch_paywall_settings(&client).await;
    pb.finish_and_clear();

    let principal = match principal {
        Ok(p) => p,
        Err(e) => error!("Failed to resolve session. Err: {}", e),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => error!("Failed to load paywall settings. Err: {}", e),
    };

    match &principal {
        Some(p) => info!(
            "Signed in as {} ({:?}, {:?})",
            p.email.as_deref().unwrap_or(&p.user_id),
            p.role,
            p.tier
        ),
        None => info!("Not signed in"),
    }
    info!(
        "Paywall {}",
        if settings.paywall_enabled { "enabled" } else { "disabled" }
    );

    let result = can_access(principal.as_ref(), feature, &settings);
    if result.is_allowed() {
        success!("{}: {}", feature, result);
    } else {
        warning!("{}: {}", feature, result);
    }
}
