use chrono::{DateTime, TimeZone, Utc};
use mooddrop::{
    drops::{DropError, build_new_drops, filter_by_mood, group_drops},
    management::DropStore,
    spotify::{LinkResolver, ResourceType, ValidationError},
    types::DropRecord,
    utils::{Moods, parse_moods},
};

const ALBUM_URL: &str = "https://open.spotify.com/album/1DFixLWuPkv3KT3TnV35m3";

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

// Helper function to create a test drop row
fn create_test_drop(id: &str, group_id: Option<&str>, mood: &str, votes: i64, hour: u32) -> DropRecord {
    DropRecord {
        id: id.to_string(),
        user_id: Some("user-1".to_string()),
        spotify_url: format!("https://open.spotify.com/track/{}_4uLU6hMCjMI75M1", id),
        drop_type: "track".to_string(),
        mood: mood.to_string(),
        group_id: group_id.map(str::to_string),
        vote_count: votes,
        created_at: at(hour),
    }
}

#[test]
fn test_build_new_drops_one_row_per_mood() {
    let resolver = LinkResolver::default();
    let moods = parse_moods("chill, rainy, Late Night").unwrap();
    let drops = build_new_drops(&resolver, ALBUM_URL, &moods, None).unwrap();

    assert_eq!(drops.len(), 3);
    let moods: Vec<&str> = drops.iter().map(|d| d.mood.as_str()).collect();
    assert_eq!(moods, vec!["chill", "rainy", "Late Night"]);

    // all rows share one group and keep the raw url
    assert!(drops.iter().all(|d| d.group_id == drops[0].group_id));
    assert!(!drops[0].group_id.is_empty());
    assert!(drops.iter().all(|d| d.spotify_url == ALBUM_URL));

    // type inferred from the link
    assert!(drops.iter().all(|d| d.drop_type == ResourceType::Album));
}

#[test]
fn test_build_new_drops_new_group_per_submission() {
    let resolver = LinkResolver::default();
    let moods = parse_moods("chill").unwrap();
    let first = build_new_drops(&resolver, ALBUM_URL, &moods, None).unwrap();
    let second = build_new_drops(&resolver, ALBUM_URL, &moods, None).unwrap();

    assert_ne!(first[0].group_id, second[0].group_id);
}

#[test]
fn test_build_new_drops_keeps_chosen_type() {
    let resolver = LinkResolver::default();
    let moods = parse_moods("focus").unwrap();
    let drops = build_new_drops(&resolver, ALBUM_URL, &moods, Some(ResourceType::Track)).unwrap();

    assert_eq!(drops[0].drop_type, ResourceType::Track);
}

#[test]
fn test_build_new_drops_rejects_invalid_link() {
    let resolver = LinkResolver::default();
    let moods = parse_moods("chill").unwrap();

    let err = build_new_drops(
        &resolver,
        "https://open.spotify.com/track/a1",
        &moods,
        Some(ResourceType::Track),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DropError::InvalidLink(ValidationError::IdTooShort { .. })
    ));

    let err = build_new_drops(&resolver, "https://music.apple.com/album/1234567890123", &moods, None)
        .unwrap_err();
    assert!(matches!(
        err,
        DropError::InvalidLink(ValidationError::WrongHost(_))
    ));
}

#[test]
fn test_build_new_drops_requires_mood() {
    let resolver = LinkResolver::default();
    let err = build_new_drops(&resolver, ALBUM_URL, &Moods::default(), None).unwrap_err();
    assert!(matches!(err, DropError::NoMoods));
}

#[test]
fn test_build_new_drops_only_sees_normalized_moods() {
    let resolver = LinkResolver::default();

    // blank moods never make it into a mood set
    assert!(Moods::new(["  ", "Chill", "chill"]).is_err());

    let moods = Moods::new([" Chill ", "chill", "Été", "été", "hype"]).unwrap();
    let drops = build_new_drops(&resolver, ALBUM_URL, &moods, None).unwrap();

    let moods: Vec<&str> = drops.iter().map(|d| d.mood.as_str()).collect();
    assert_eq!(moods, vec!["Chill", "Été", "hype"]);
}

#[test]
fn test_group_drops_merges_shared_group() {
    let drops = vec![
        create_test_drop("d1", Some("g1"), "chill", 2, 10),
        create_test_drop("d2", None, "hype", 1, 9),
        create_test_drop("d3", Some("g1"), "rainy", 3, 11),
        create_test_drop("d4", Some("g1"), "Chill", 0, 8),
    ];

    let groups = group_drops(&drops);
    assert_eq!(groups.len(), 2);

    let first = &groups[0];
    assert_eq!(first.group_key, "g1");
    assert_eq!(first.moods, vec!["chill", "rainy"]);
    assert_eq!(first.drop_ids, vec!["d1", "d3", "d4"]);
    assert_eq!(first.vote_count, 5);
    assert_eq!(first.created_at, at(11));
    assert_eq!(first.spotify_url, drops[0].spotify_url);

    // ungrouped drops stand alone, keyed by their id
    let second = &groups[1];
    assert_eq!(second.group_key, "d2");
    assert_eq!(second.moods, vec!["hype"]);
    assert_eq!(second.drop_ids, vec!["d2"]);
}

#[test]
fn test_group_drops_empty() {
    assert!(group_drops(&[]).is_empty());
}

#[test]
fn test_filter_by_mood() {
    let drops = vec![
        create_test_drop("d1", Some("g1"), "chill", 0, 10),
        create_test_drop("d2", Some("g1"), "rainy", 0, 10),
        create_test_drop("d3", None, "hype", 0, 9),
    ];

    let mut groups = group_drops(&drops);
    filter_by_mood(&mut groups, " RAINY ");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].group_key, "g1");

    let mut groups = group_drops(&drops);
    filter_by_mood(&mut groups, "focus");
    assert!(groups.is_empty());
}

#[test]
fn test_group_and_filter_non_ascii_moods() {
    let drops = vec![
        create_test_drop("d1", Some("g1"), "Été", 0, 10),
        create_test_drop("d2", Some("g1"), "été", 0, 10),
        create_test_drop("d3", None, "hype", 0, 9),
    ];

    let mut groups = group_drops(&drops);
    assert_eq!(groups[0].moods, vec!["Été"]);

    filter_by_mood(&mut groups, "ÉTÉ");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].group_key, "g1");
}

#[test]
fn test_drop_store_dedupes_and_orders() {
    let mut store = DropStore::new(vec![
        create_test_drop("d1", None, "chill", 0, 8),
        create_test_drop("d2", None, "hype", 0, 12),
    ]);
    assert_eq!(store.count(), 2);
    assert_eq!(store.all()[0].id, "d2");

    let added = store.add(vec![
        create_test_drop("d2", None, "hype", 5, 12),
        create_test_drop("d3", None, "focus", 0, 10),
    ]);
    assert_eq!(added, 1);

    let ids: Vec<&str> = store.all().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["d2", "d3", "d1"]);

    store.replace(vec![create_test_drop("d9", None, "sad", 0, 1)]);
    assert_eq!(store.count(), 1);
    assert_eq!(store.all()[0].id, "d9");
}

#[test]
fn test_drop_record_deserializes_backend_row() {
    let json = r#"{
        "id": "9b1c",
        "spotify_url": "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC",
        "drop_type": "track",
        "mood": "chill",
        "created_at": "2024-05-01T10:00:00+00:00"
    }"#;

    let drop: DropRecord = serde_json::from_str(json).unwrap();
    assert_eq!(drop.group_id, None);
    assert_eq!(drop.user_id, None);
    assert_eq!(drop.vote_count, 0);
    assert_eq!(drop.created_at, at(10));
}
