//! Feature gating.
//!
//! Administrative access is a role claim issued by the auth service and is
//! never derived from an email address. Premium features are only gated
//! while the remote paywall flag is on.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::types::{PaywallSettings, Principal, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    CreateDrop,
    Vote,
    Comment,
    Follow,
    CollaborativePlaylist,
    AiPlaylist,
    AdminPanel,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::CreateDrop,
        Feature::Vote,
        Feature::Comment,
        Feature::Follow,
        Feature::CollaborativePlaylist,
        Feature::AiPlaylist,
        Feature::AdminPanel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::CreateDrop => "create_drop",
            Feature::Vote => "vote",
            Feature::Comment => "comment",
            Feature::Follow => "follow",
            Feature::CollaborativePlaylist => "collaborative_playlist",
            Feature::AiPlaylist => "ai_playlist",
            Feature::AdminPanel => "admin_panel",
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, Feature::CollaborativePlaylist | Feature::AiPlaylist)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('-', "_");
        Feature::ALL
            .into_iter()
            .find(|f| f.as_str() == norm)
            .ok_or_else(|| {
                format!(
                    "invalid value '{}'. Valid: {}",
                    s.trim(),
                    Feature::ALL.map(|f| f.as_str()).join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Allowed,
    SignInRequired,
    PremiumRequired,
    AdminOnly,
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        *self == Access::Allowed
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Access::Allowed => "allowed",
            Access::SignInRequired => "sign in required",
            Access::PremiumRequired => "premium subscription required",
            Access::AdminOnly => "administrators only",
        };
        f.write_str(msg)
    }
}

pub fn can_access(
    principal: Option<&Principal>,
    feature: Feature,
    settings: &PaywallSettings,
) -> Access {
    if feature == Feature::AdminPanel {
        return match principal {
            Some(p) if p.is_admin() => Access::Allowed,
            _ => Access::AdminOnly,
        };
    }

    let Some(principal) = principal else {
        return Access::SignInRequired;
    };

    if principal.is_admin() {
        return Access::Allowed;
    }

    if feature.is_premium() && settings.paywall_enabled && principal.tier != Tier::Premium {
        return Access::PremiumRequired;
    }

    Access::Allowed
}
