use chrono::{TimeZone, Utc};
use mooddrop::config::parse_min_id_length;
use mooddrop::spotify::DEFAULT_MIN_ID_LENGTH;
use mooddrop::types::GroupedDrop;
use mooddrop::utils::*;

// Helper function to create a test grouped drop
fn create_test_group(url: &str, hour: u32) -> GroupedDrop {
    GroupedDrop {
        group_key: format!("{}-{}", url, hour),
        spotify_url: url.to_string(),
        drop_type: "track".to_string(),
        moods: vec!["chill".to_string(), "rainy".to_string()],
        drop_ids: vec!["d1".to_string()],
        vote_count: 4,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, hour, 30, 0).unwrap(),
    }
}

#[test]
fn test_parse_moods_valid_inputs() {
    let moods = parse_moods("chill").unwrap();
    assert_eq!(moods.iter().collect::<Vec<_>>(), vec!["chill"]);

    let moods = parse_moods(" chill , late night,hype ").unwrap();
    assert_eq!(
        moods.iter().collect::<Vec<_>>(),
        vec!["chill", "late night", "hype"]
    );
    assert_eq!(moods.len(), 3);
    assert_eq!(moods.to_string(), "chill,late night,hype");
}

#[test]
fn test_parse_moods_deduplication() {
    let moods = parse_moods("Chill,chill,CHILL,hype").unwrap();
    assert_eq!(moods.iter().collect::<Vec<_>>(), vec!["Chill", "hype"]);
}

#[test]
fn test_parse_moods_deduplication_non_ascii() {
    let moods = parse_moods("Été, été, ÉTÉ").unwrap();
    assert_eq!(moods.iter().collect::<Vec<_>>(), vec!["Été"]);
    assert!(same_mood("Été", " été "));
}

#[test]
fn test_moods_new_normalizes() {
    let moods = Moods::new(vec![" focus ", "Focus", "rain"]).unwrap();
    assert_eq!(moods.iter().collect::<Vec<_>>(), vec!["focus", "rain"]);

    let err = Moods::new(["focus", "\t"]).unwrap_err();
    assert!(err.contains("empty segment"));
}

#[test]
fn test_parse_moods_invalid_inputs() {
    let result = parse_moods("");
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_moods("   ");
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_moods("chill,,hype");
    assert!(result.unwrap_err().contains("empty segment"));

    let result = parse_moods("chill, ");
    assert!(result.unwrap_err().contains("empty segment"));
}

#[test]
fn test_moods_default_is_empty() {
    let moods = Moods::default();
    assert!(moods.is_empty());
    assert_eq!(moods.to_string(), "");
}

#[test]
fn test_generate_group_id() {
    let id = generate_group_id();

    // uuid v4, hyphenated
    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);

    // Two generated ids should be different
    assert_ne!(id, generate_group_id());
}

#[test]
fn test_sort_grouped_drops() {
    let mut groups = vec![
        create_test_group("https://open.spotify.com/track/zzzzzzzzzzzz", 8),
        create_test_group("https://open.spotify.com/track/bbbbbbbbbbbb", 12),
        create_test_group("https://open.spotify.com/track/aaaaaaaaaaaa", 8),
        create_test_group("https://open.spotify.com/track/cccccccccccc", 10),
    ];

    sort_grouped_drops(&mut groups);

    // Should be sorted by date descending, then by link ascending
    let hours: Vec<String> = groups
        .iter()
        .map(|g| g.created_at.format("%H").to_string())
        .collect();
    assert_eq!(hours, vec!["12", "10", "08", "08"]);
    assert!(groups[2].spotify_url.ends_with("aaaaaaaaaaaa"));
    assert!(groups[3].spotify_url.ends_with("zzzzzzzzzzzz"));
}

#[test]
fn test_to_table_rows() {
    let groups = vec![create_test_group("https://open.spotify.com/track/aaaaaaaaaaaa", 9)];
    let rows = to_table_rows(&groups);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2024-05-01 09:30");
    assert_eq!(rows[0].drop_type, "track");
    assert_eq!(rows[0].moods, "chill, rainy");
    assert_eq!(rows[0].votes, 4);
    assert_eq!(rows[0].link, "https://open.spotify.com/track/aaaaaaaaaaaa");
}

#[test]
fn test_parse_min_id_length() {
    assert_eq!(parse_min_id_length(None), DEFAULT_MIN_ID_LENGTH);
    assert_eq!(parse_min_id_length(Some("16")), 16);
    assert_eq!(parse_min_id_length(Some(" 8 ")), 8);
    assert_eq!(parse_min_id_length(Some("0")), DEFAULT_MIN_ID_LENGTH);
    assert_eq!(parse_min_id_length(Some("ten")), DEFAULT_MIN_ID_LENGTH);
}
