use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

use crate::spotify::ResourceType;

/// A row of the backend's `drops` table.
///
/// A drop stores the link exactly as submitted; its resource reference and
/// embed URL are recomputed whenever the drop is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub spotify_url: String,
    pub drop_type: String,
    pub mood: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub vote_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a single drop row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDrop {
    pub spotify_url: String,
    pub drop_type: ResourceType,
    pub mood: String,
    pub group_id: String,
}

/// Drops of one submission, shown as a single card with several moods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedDrop {
    pub group_key: String,
    pub spotify_url: String,
    pub drop_type: String,
    pub moods: Vec<String>,
    pub drop_ids: Vec<String>,
    pub vote_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Tabled)]
pub struct DropTableRow {
    pub date: String,
    #[tabled(rename = "type")]
    pub drop_type: String,
    pub moods: String,
    pub votes: i64,
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Administrator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Premium,
}

/// The signed-in user as resolved by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub user_id: String,
    pub email: Option<String>,
    pub role: Role,
    pub tier: Tier,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Administrator
    }
}

/// Remote switch for the premium paywall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallSettings {
    #[serde(default, deserialize_with = "null_as_false")]
    pub paywall_enabled: bool,
}

/// A `null` column is a paywall that was never switched on.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUserResponse {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

/// Server-controlled claims; users cannot write these themselves.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppMetadata {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
}
