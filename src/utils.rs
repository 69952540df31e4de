use std::{cmp::Ordering, fmt, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use uuid::Uuid;

use crate::types::{DropTableRow, GroupedDrop};

/// Mood tags of a submission, trimmed and free of case-insensitive duplicates.
///
/// Only [`Moods::new`] and [`parse_moods`] build a non-empty set, so every
/// mood a drop is created with has already been normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Moods(Vec<String>);

impl Moods {
    /// Trims each mood and drops later case-insensitive repeats of an
    /// earlier one. Blank moods are rejected.
    pub fn new<I, S>(moods: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for raw in moods {
            let mood = raw.as_ref().trim();
            if mood.is_empty() {
                return Err("empty segment in mood list (e.g. 'chill,,hype')".into());
            }
            if !normalized.iter().any(|m| same_mood(m, mood)) {
                normalized.push(mood.to_string());
            }
        }
        Ok(Self(normalized))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Moods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

/// Case-insensitive mood comparison, Unicode-aware (`Été` == `été`).
pub fn same_mood(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Parses comma-separated mood input such as `"chill, late night"`.
pub fn parse_moods(s: &str) -> Result<Moods, String> {
    if s.trim().is_empty() {
        return Err("mood list cannot be empty".into());
    }

    Moods::new(s.split(','))
}

pub fn generate_group_id() -> String {
    Uuid::new_v4().to_string()
}

/// Newest first; equal timestamps fall back to the link so output is stable.
pub fn sort_grouped_drops(groups: &mut [GroupedDrop]) {
    groups.sort_by(|a, b| match b.created_at.cmp(&a.created_at) {
        Ordering::Equal => a.spotify_url.cmp(&b.spotify_url),
        other => other,
    });
}

pub fn to_table_rows(groups: &[GroupedDrop]) -> Vec<DropTableRow> {
    groups
        .iter()
        .map(|g| DropTableRow {
            date: g.created_at.format("%Y-%m-%d %H:%M").to_string(),
            drop_type: g.drop_type.clone(),
            moods: g.moods.join(", "),
            votes: g.vote_count,
            link: g.spotify_url.clone(),
        })
        .collect()
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
