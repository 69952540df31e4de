//! Drop submission and grouping.
//!
//! A single submission with several moods is stored as one row per mood,
//! all sharing a `group_id`. [`build_new_drops`] produces those rows and
//! [`group_drops`] folds fetched rows back into one card per submission.

use thiserror::Error;

use crate::{
    spotify::{LinkResolver, ResourceType, ValidationError},
    types::{DropRecord, GroupedDrop, NewDrop},
    utils::{self, Moods},
};

#[derive(Debug, Error)]
pub enum DropError {
    #[error(transparent)]
    InvalidLink(#[from] ValidationError),

    #[error("a drop needs at least one mood")]
    NoMoods,
}

/// Builds the insert rows for one submission.
///
/// The link is always validated strictly, even when the caller picked a
/// type; `drop_type` falls back to the inferred type when not given.
pub fn build_new_drops(
    resolver: &LinkResolver,
    raw_url: &str,
    moods: &Moods,
    drop_type: Option<ResourceType>,
) -> Result<Vec<NewDrop>, DropError> {
    resolver.validate(raw_url)?;

    if moods.is_empty() {
        return Err(DropError::NoMoods);
    }

    let drop_type = drop_type.unwrap_or_else(|| resolver.infer_type(raw_url));
    let group_id = utils::generate_group_id();

    Ok(moods
        .iter()
        .map(|mood| NewDrop {
            spotify_url: raw_url.to_string(),
            drop_type,
            mood: mood.to_string(),
            group_id: group_id.clone(),
        })
        .collect())
}

/// Folds drops that share a `group_id` into one entry each.
///
/// Groups keep the position of their first row; ungrouped drops stand
/// alone. Moods are merged without duplicates, votes are summed and the
/// newest timestamp wins.
pub fn group_drops(drops: &[DropRecord]) -> Vec<GroupedDrop> {
    let mut groups: Vec<GroupedDrop> = Vec::new();

    for record in drops {
        let key = record.group_id.clone().unwrap_or_else(|| record.id.clone());

        match groups.iter_mut().find(|g| g.group_key == key) {
            Some(group) => {
                if !group
                    .moods
                    .iter()
                    .any(|m| utils::same_mood(m, &record.mood))
                {
                    group.moods.push(record.mood.clone());
                }
                group.drop_ids.push(record.id.clone());
                group.vote_count += record.vote_count;
                if record.created_at > group.created_at {
                    group.created_at = record.created_at;
                }
            }
            None => groups.push(GroupedDrop {
                group_key: key,
                spotify_url: record.spotify_url.clone(),
                drop_type: record.drop_type.clone(),
                moods: vec![record.mood.clone()],
                drop_ids: vec![record.id.clone()],
                vote_count: record.vote_count,
                created_at: record.created_at,
            }),
        }
    }

    groups
}

pub fn filter_by_mood(groups: &mut Vec<GroupedDrop>, mood: &str) {
    groups.retain(|g| g.moods.iter().any(|m| utils::same_mood(m, mood)));
}
