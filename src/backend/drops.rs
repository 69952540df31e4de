use crate::types::{DropRecord, NewDrop};

use super::{BackendClient, BackendError};

const DROPS_PATH: &str = "rest/v1/drops";

/// Inserts all rows of one submission and returns them as stored.
///
/// # Arguments
///
/// * `client` - Backend client; must carry a session token
/// * `drops` - Rows built by [`build_new_drops`](crate::drops::build_new_drops)
///
/// # Returns
///
/// The stored rows, with the ids, timestamps and vote counts the backend
/// assigned.
///
/// # Errors
///
/// - [`BackendError::Unauthenticated`] without a session token, or when the
///   backend rejects it
/// - [`BackendError::UnexpectedResponse`] when the backend returns a different
///   number of rows than were sent
/// - [`BackendError::Http`] for any other request failure
///
/// # Example
///
/// ```
/// let rows = build_new_drops(&resolver, url, &moods, None)?;
/// let stored = backend::drops::insert(&client, &rows).await?;
/// ```
pub async fn insert(
    client: &BackendClient,
    drops: &[NewDrop],
) -> Result<Vec<DropRecord>, BackendError> {
    if !client.has_session() {
        return Err(BackendError::Unauthenticated);
    }

    let response = client
        .send(|c| {
            c.post(DROPS_PATH)
                .header("Prefer", "return=representation")
                .json(drops)
        })
        .await?;

    let created: Vec<DropRecord> = response.json().await?;
    if created.len() != drops.len() {
        return Err(BackendError::UnexpectedResponse(format!(
            "inserted {} drops, backend returned {}",
            drops.len(),
            created.len()
        )));
    }

    tracing::info!(count = created.len(), "drops inserted");
    Ok(created)
}

/// Lists the newest drops, most recent first.
///
/// # Arguments
///
/// * `client` - Backend client; anonymous sessions may read drops
/// * `limit` - Maximum number of rows to return
///
/// # Errors
///
/// Returns [`BackendError`] when the request fails or the rows cannot be
/// decoded.
pub async fn fetch_recent(
    client: &BackendClient,
    limit: u32,
) -> Result<Vec<DropRecord>, BackendError> {
    let limit = limit.to_string();
    let response = client
        .send(|c| {
            c.get(DROPS_PATH).query(&[
                ("select", "*"),
                ("order", "created_at.desc"),
                ("limit", limit.as_str()),
            ])
        })
        .await?;

    Ok(response.json().await?)
}
