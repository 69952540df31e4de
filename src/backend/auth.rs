use crate::types::{AuthUserResponse, Principal, Role, Tier};

use super::{BackendClient, BackendError};

/// Resolves the signed-in user, or `None` for an anonymous session.
///
/// # Returns
///
/// - `Ok(None)` when the client carries no session token; no request is sent
/// - `Ok(Some(Principal))` built from the auth service's user record
///
/// # Errors
///
/// - [`BackendError::Unauthenticated`] when the session token is rejected
/// - [`BackendError::Http`] for any other request failure
pub async fn current_principal(
    client: &BackendClient,
) -> Result<Option<Principal>, BackendError> {
    if !client.has_session() {
        return Ok(None);
    }

    let response = client.send(|c| c.get("auth/v1/user")).await?;
    let user: AuthUserResponse = response.json().await?;
    Ok(Some(principal_from_user(user)))
}

/// Maps the auth service's user record to a [`Principal`].
///
/// The role and tier come from the server-issued `app_metadata` claims
/// (case-insensitive). Anything unrecognised means a free member.
pub fn principal_from_user(user: AuthUserResponse) -> Principal {
    let role = match user.app_metadata.role.as_deref().map(str::trim) {
        Some(r) if r.eq_ignore_ascii_case("admin") || r.eq_ignore_ascii_case("administrator") => {
            Role::Administrator
        }
        _ => Role::Member,
    };

    let tier = match user.app_metadata.tier.as_deref().map(str::trim) {
        Some(t) if t.eq_ignore_ascii_case("premium") => Tier::Premium,
        _ => Tier::Free,
    };

    Principal {
        user_id: user.id,
        email: user.email,
        role,
        tier,
    }
}
