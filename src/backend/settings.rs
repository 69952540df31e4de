use crate::types::PaywallSettings;

use super::{BackendClient, BackendError};

/// Reads the remote paywall switch from the `app_settings` table.
///
/// # Returns
///
/// The first settings row, or disabled settings when the table is empty.
///
/// # Errors
///
/// Returns [`BackendError`] when the request fails or the row cannot be
/// decoded.
///
/// # Example
///
/// ```
/// let settings = fetch_paywall_settings(&client).await?;
/// let access = can_access(principal.as_ref(), Feature::AiPlaylist, &settings);
/// ```
pub async fn fetch_paywall_settings(
    client: &BackendClient,
) -> Result<PaywallSettings, BackendError> {
    let response = client
        .send(|c| {
            c.get("rest/v1/app_settings")
                .query(&[("select", "paywall_enabled"), ("limit", "1")])
        })
        .await?;

    let rows: Vec<PaywallSettings> = response.json().await?;
    Ok(settings_from_rows(rows))
}

/// No settings row means the paywall has never been switched on.
pub fn settings_from_rows(rows: Vec<PaywallSettings>) -> PaywallSettings {
    rows.into_iter().next().unwrap_or_default()
}
