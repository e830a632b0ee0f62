use std::sync::Arc;
use std::thread;
use serde_json::json;

use archaeologist::enums::message_role::MessageRole;
use archaeologist::services::session_store::{JsonMap, SessionStore};

#[test]
fn capacity_two_evicts_least_recently_updated() {
    let store = SessionStore::new(2);
    let first = store.create_session(JsonMap::new());
    let second = store.create_session(JsonMap::new());

    // touching the first session makes the second the eviction candidate
    assert!(store.add_message(&first.id, MessageRole::User, "hello", JsonMap::new()));

    let third = store.create_session(JsonMap::new());

    assert_eq!(store.session_count(), 2);
    assert!(store.get_session(&first.id).is_some());
    assert!(store.get_session(&second.id).is_none());
    assert!(store.get_session(&third.id).is_some());
}

#[test]
fn zero_capacity_still_keeps_one_session() {
    let store = SessionStore::new(0);
    assert_eq!(store.max_sessions(), 1);

    store.create_session(JsonMap::new());
    let latest = store.create_session(JsonMap::new());

    assert_eq!(store.session_count(), 1);
    assert!(store.get_session(&latest.id).is_some());
}

#[test]
fn state_updates_merge_and_unknown_ids_are_rejected() {
    let store = SessionStore::new(5);
    let session = store.create_session(JsonMap::from([("repo_path".to_string(), json!("/srv/app"))]));

    let updated = store.update_session(
        &session.id,
        JsonMap::from([("status".to_string(), json!("success"))]),
        None,
    );
    assert!(updated);
    assert!(!store.update_session("session_missing", JsonMap::new(), None));
    assert!(!store.add_message("session_missing", MessageRole::System, "ignored", JsonMap::new()));

    let stored = store.get_session(&session.id).unwrap();
    assert_eq!(stored.get_state("status"), Some(&json!("success")));
    assert_eq!(stored.metadata.get("repo_path"), Some(&json!("/srv/app")));
    assert!(stored.updated_at >= stored.created_at);
}

#[test]
fn list_sessions_pages_by_recency() {
    let store = SessionStore::new(10);
    let ids: Vec<String> = (0..4).map(|_| store.create_session(JsonMap::new()).id).collect();

    let page: Vec<String> = store.list_sessions(2, 1).into_iter().map(|s| s.id).collect();
    assert_eq!(page, vec![ids[2].clone(), ids[1].clone()]);

    assert!(store.delete_session(&ids[0]));
    assert!(!store.delete_session(&ids[0]));
    assert_eq!(store.session_count(), 3);
}

#[test]
fn statistics_average_conversation_length() {
    let store = SessionStore::new(10);
    let a = store.create_session(JsonMap::new());
    store.create_session(JsonMap::new());
    store.add_message(&a.id, MessageRole::User, "one", JsonMap::new());
    store.add_message(&a.id, MessageRole::Assistant, "two", JsonMap::new());

    let stats = store.statistics();
    assert_eq!(stats.total_sessions, 2);
    assert!((stats.average_conversation_length - 1.0).abs() < 1e-9);

    store.clear_all();
    assert_eq!(store.statistics().total_sessions, 0);
}

#[test]
fn concurrent_inserts_never_exceed_capacity() {
    let store = Arc::new(SessionStore::new(8));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..50 {
                    store.create_session(JsonMap::new());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.session_count(), 8);
}
