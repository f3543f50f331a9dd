use scrollback_store::Store;
use scrollback_testing::StorageFixture;
use scrollback_types::{Error, PartPayload, Role};
use serde_json::json;

#[test]
fn test_index_sorts_by_update_time_descending() {
    let fixture = StorageFixture::new();
    fixture
        .add_session("proj-a", "ses_old", "old", 100, 1_000)
        .unwrap();
    fixture
        .add_session("proj-a", "ses_new", "new", 200, 3_000)
        .unwrap();
    fixture
        .add_session("proj-b", "ses_mid", "mid", 150, 2_000)
        .unwrap();

    let index = Store::new(fixture.root()).session_index().unwrap();
    let ids: Vec<_> = index.sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["ses_new", "ses_mid", "ses_old"]);
    assert!(index.skipped.is_empty());
}

#[test]
fn test_index_ties_keep_enumeration_order_across_runs() {
    let fixture = StorageFixture::new();
    // Same update timestamp: enumeration order (project dir, then file name)
    // must break the tie identically on every run.
    fixture.add_session("proj-a", "ses_a1", "a1", 10, 500).unwrap();
    fixture.add_session("proj-a", "ses_a2", "a2", 10, 500).unwrap();
    fixture.add_session("proj-b", "ses_b1", "b1", 10, 500).unwrap();

    let store = Store::new(fixture.root());
    let first: Vec<String> = store
        .session_index()
        .unwrap()
        .sessions
        .into_iter()
        .map(|s| s.id)
        .collect();

    for _ in 0..5 {
        let again: Vec<String> = store
            .session_index()
            .unwrap()
            .sessions
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(first, again);
    }
    assert_eq!(first, vec!["ses_a1", "ses_a2", "ses_b1"]);
}

#[test]
fn test_index_backfills_project_id_from_directory() {
    let fixture = StorageFixture::new();
    fixture
        .add_session_without_project_id("legacy-proj", "ses_1", "t", 1, 2)
        .unwrap();

    let index = Store::new(fixture.root()).session_index().unwrap();
    assert_eq!(index.sessions.len(), 1);
    assert_eq!(index.sessions[0].project_id.as_deref(), Some("legacy-proj"));
}

#[test]
fn test_index_missing_root_is_storage_unavailable() {
    let fixture = StorageFixture::new();
    // No session/ directory was ever created: this must be reported, not
    // silently treated as zero sessions.
    let result = Store::new(fixture.root()).session_index();
    assert!(matches!(result, Err(Error::StorageUnavailable { .. })));
}

#[test]
fn test_index_skips_malformed_records_without_dropping_the_batch() {
    let fixture = StorageFixture::new();
    fixture.add_session("proj-a", "ses_good", "good", 1, 100).unwrap();
    fixture
        .write_session_raw("proj-a", "ses_bad", "{definitely not json")
        .unwrap();

    let index = Store::new(fixture.root()).session_index().unwrap();
    assert_eq!(index.sessions.len(), 1);
    assert_eq!(index.sessions[0].id, "ses_good");
    assert_eq!(index.skipped.len(), 1);
    assert!(index.skipped[0].reason.contains("malformed record"));
}

#[test]
fn test_assemble_orders_messages_by_creation_time_not_file_name() {
    let fixture = StorageFixture::new();
    // File-name order (msg_a < msg_b) contradicts creation order on purpose.
    fixture.add_message("ses_1", "msg_a", "assistant", 2_000).unwrap();
    fixture.add_message("ses_1", "msg_b", "user", 1_000).unwrap();

    let transcript = Store::new(fixture.root()).assemble("ses_1").unwrap();
    let ids: Vec<_> = transcript
        .entries
        .iter()
        .map(|e| e.message.id.as_str())
        .collect();
    assert_eq!(ids, vec!["msg_b", "msg_a"]);
    assert_eq!(transcript.entries[0].message.role, Role::User);
}

#[test]
fn test_assemble_missing_message_dir_is_empty_not_error() {
    let fixture = StorageFixture::new();
    let transcript = Store::new(fixture.root()).assemble("ses_absent").unwrap();
    assert!(transcript.is_empty());
}

#[test]
fn test_assemble_missing_part_dir_yields_zero_parts() {
    let fixture = StorageFixture::new();
    fixture.add_message("ses_1", "msg_1", "user", 1).unwrap();

    let transcript = Store::new(fixture.root()).assemble("ses_1").unwrap();
    assert_eq!(transcript.entries.len(), 1);
    assert!(transcript.entries[0].parts.is_empty());
}

#[test]
fn test_assemble_keeps_part_storage_order() {
    let fixture = StorageFixture::new();
    fixture.add_message("ses_1", "msg_1", "assistant", 1).unwrap();
    fixture.add_text_part("msg_1", "prt_01", "first").unwrap();
    fixture.add_text_part("msg_1", "prt_02", "second").unwrap();
    fixture.add_text_part("msg_1", "prt_03", "third").unwrap();

    let transcript = Store::new(fixture.root()).assemble("ses_1").unwrap();
    let ids: Vec<_> = transcript.entries[0]
        .parts
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["prt_01", "prt_02", "prt_03"]);
}

#[test]
fn test_assemble_skips_malformed_part_and_keeps_the_rest() {
    let fixture = StorageFixture::new();
    fixture.add_message("ses_1", "msg_1", "assistant", 1).unwrap();
    fixture.add_text_part("msg_1", "prt_01", "ok").unwrap();
    fixture.write_part_raw("msg_1", "prt_02", "{broken").unwrap();
    fixture.add_text_part("msg_1", "prt_03", "also ok").unwrap();

    let transcript = Store::new(fixture.root()).assemble("ses_1").unwrap();
    assert_eq!(transcript.entries[0].parts.len(), 2);
    assert_eq!(transcript.skipped.len(), 1);
}

#[test]
fn test_assemble_preserves_unknown_part_tags() {
    let fixture = StorageFixture::new();
    fixture.add_message("ses_1", "msg_1", "assistant", 1).unwrap();
    fixture
        .write_part_value("msg_1", "prt_01", &json!({"id":"prt_01","type":"foo","x":1}))
        .unwrap();

    let transcript = Store::new(fixture.root()).assemble("ses_1").unwrap();
    match &transcript.entries[0].parts[0].payload {
        PartPayload::Unknown { tag, raw } => {
            assert_eq!(tag, "foo");
            assert_eq!(raw["x"], 1);
        }
        other => panic!("expected unknown payload, got {}", other.tag()),
    }
}

#[test]
fn test_find_message_via_transcript() {
    let fixture = StorageFixture::new();
    fixture.add_message("ses_1", "msg_1", "user", 1).unwrap();

    let transcript = Store::new(fixture.root()).assemble("ses_1").unwrap();
    assert!(transcript.find_entry("msg_1").is_some());
    assert!(transcript.find_entry("msg_nope").is_none());
}

#[test]
fn test_find_session_scans_all_projects() {
    let fixture = StorageFixture::new();
    fixture.add_session("proj-a", "ses_1", "one", 1, 2).unwrap();
    fixture.add_session("proj-b", "ses_2", "two", 1, 2).unwrap();

    let store = Store::new(fixture.root());
    assert_eq!(store.find_session("ses_2").unwrap().title, "two");
    assert!(matches!(
        store.find_session("ses_3"),
        Err(Error::NotFound { .. })
    ));
}
