use chrono::{DateTime, Utc};
use factory_core::{
    FileRepository, MemoryRepository, Notice, PostDraft, PostManager, PostStatus, PostStore,
    SimulatedPublisher, STORAGE_KEY,
};

#[test]
fn add_with_blank_schedule_gets_current_time() {
    let before = Utc::now();
    let mut manager = PostManager::open(MemoryRepository::new(), SimulatedPublisher);

    manager.create(PostDraft::new("A", "B", "")).unwrap();
    let after = Utc::now();

    let posts = manager.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].status, PostStatus::Created);

    let schedule = &posts[0].schedule_time;
    assert!(schedule.ends_with('Z'));
    let parsed: DateTime<Utc> = schedule.parse().unwrap();
    assert!(parsed >= before - chrono::Duration::milliseconds(1));
    assert!(parsed <= after);
}

#[test]
fn add_two_then_delete_first() {
    let mut manager = PostManager::open(MemoryRepository::new(), SimulatedPublisher);
    let first = manager.create(PostDraft::new("one", "1", "")).unwrap().id;
    let second = manager.create(PostDraft::new("two", "2", "")).unwrap().clone();

    assert_ne!(first, second.id);
    assert_eq!(manager.delete(first), Notice::Deleted);

    assert_eq!(manager.posts(), &[second]);
}

#[test]
fn invalid_stored_json_loads_empty() {
    let manager = PostManager::open(MemoryRepository::with_raw("<<garbage>>"), SimulatedPublisher);
    assert!(manager.posts().is_empty());
}

#[test]
fn blank_fields_leave_collection_unchanged() {
    let repo = MemoryRepository::new();
    let mut manager = PostManager::open(repo.clone(), SimulatedPublisher);
    manager.create(PostDraft::new("kept", "post", "")).unwrap();
    let snapshot = repo.raw();

    let err = manager.create(PostDraft::new("", "content", "")).unwrap_err();

    assert_eq!(Notice::for_error(&err), Some(Notice::MissingFields));
    assert_eq!(Notice::MissingFields.to_string(), "⚠️ Fill in all fields!");
    assert_eq!(manager.posts().len(), 1);
    assert_eq!(repo.raw(), snapshot);
}

#[test]
fn collection_survives_reopen_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let (published, created) = {
        let mut manager =
            PostManager::open(FileRepository::new(dir.path(), STORAGE_KEY), SimulatedPublisher);
        let a = manager.create(PostDraft::new("A", "a", "2026-10-20T09:30")).unwrap().id;
        let b = manager.create(PostDraft::new("B", "b", "")).unwrap().id;
        manager.publish(a).unwrap();
        (a, b)
    };

    let reopened = PostManager::open(FileRepository::new(dir.path(), STORAGE_KEY), SimulatedPublisher);
    let posts = reopened.posts();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, published);
    assert_eq!(posts[0].status, PostStatus::Published);
    assert_eq!(posts[0].schedule_time, "2026-10-20T09:30");
    assert_eq!(posts[1].id, created);
    assert_eq!(posts[1].status, PostStatus::Created);
}

#[test]
fn store_round_trip_preserves_every_field() {
    let repo = MemoryRepository::new();
    let mut manager = PostManager::open(repo.clone(), SimulatedPublisher);
    manager.create(PostDraft::new("Привет", "multi\nline", "")).unwrap();
    let id = manager.create(PostDraft::new("second", "body", "2027-01-01T00:00")).unwrap().id;
    manager.publish(id).unwrap();

    let loaded = PostStore::new(repo).try_load().unwrap();

    assert_eq!(loaded, manager.posts());
}

#[test]
fn reads_collection_written_by_browser_page() {
    let raw = r#"[{"id":1729150000000,"title":"Hello","content":"World","scheduleTime":"2024-10-17T08:00","status":"Опубликован ✓","createdAt":"2024-10-17T07:26:40.000Z"}]"#;
    let mut manager = PostManager::open(MemoryRepository::with_raw(raw), SimulatedPublisher);

    assert_eq!(manager.posts().len(), 1);
    assert_eq!(manager.publish(1729150000000).unwrap(), Notice::AlreadyPublished);
}

#[test]
fn unknown_status_keeps_whole_collection() {
    let raw = r#"[
        {"id":1,"title":"kept","content":"a","scheduleTime":"","status":"Created","createdAt":"2025-01-01T00:00:00.000Z"},
        {"id":2,"title":"odd","content":"b","scheduleTime":"","status":"Draft","createdAt":"2025-01-01T00:00:00.000Z"}
    ]"#;
    let repo = MemoryRepository::with_raw(raw);
    let mut manager = PostManager::open(repo.clone(), SimulatedPublisher);

    assert_eq!(manager.posts().len(), 2);
    manager.create(PostDraft::new("new", "c", "")).unwrap();

    let stored = PostStore::new(repo).try_load().unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[1].status, PostStatus::Created);
}
