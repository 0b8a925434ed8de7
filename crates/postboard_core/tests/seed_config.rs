use postboard_core::{AuthorService, ConfigError, PostService, SeedConfig, StoredPost, MAX_SEED_ID};
use std::io::Write;

#[test]
fn load_reads_seed_file_and_builds_repositories() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "authors": [{{ "id": 1, "name": "Joe Jones" }}, {{ "id": 5, "name": "Eve Early" }}],
            "posts": [{{ "id": 2, "author_id": 5, "title": "Seeded title", "body": "seeded" }}]
        }}"#
    )
    .unwrap();

    let seed = SeedConfig::load(file.path()).unwrap();
    assert_eq!(
        seed.posts,
        vec![StoredPost::new(2, 5, "Seeded title", "seeded")]
    );

    let authors = seed.author_repository();
    let posts = seed.post_repository();
    assert_eq!(AuthorService::new(&authors).add("New One").unwrap().id, 6);

    let service = PostService::new(&posts, &authors);
    let post = service.get_by_title("Seeded title").unwrap();
    assert_eq!(post.author().name, "Eve Early");
}

#[test]
fn load_reports_missing_file_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = SeedConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn seed_round_trips_through_json() {
    let json = serde_json::to_string(&SeedConfig::demo()).unwrap();
    assert_eq!(SeedConfig::from_json_str(&json).unwrap(), SeedConfig::demo());
}

#[test]
fn seed_ids_at_the_top_of_the_range_are_rejected() {
    let json = format!(r#"{{ "authors": [{{ "id": {}, "name": "Max" }}] }}"#, i64::MAX);
    let err = SeedConfig::from_json_str(&json).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSeed(ref message) if message.contains("at most")));
}

#[test]
fn highest_accepted_seed_id_still_leaves_room_to_add() {
    let json = format!(r#"{{ "authors": [{{ "id": {MAX_SEED_ID}, "name": "Almost Max" }}] }}"#);
    let seed = SeedConfig::from_json_str(&json).unwrap();
    let authors = seed.author_repository();

    let mary = AuthorService::new(&authors).add("Mary Lamb").unwrap();
    assert_eq!(mary.id, i64::MAX);
}
