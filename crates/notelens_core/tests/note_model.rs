use notelens_core::{Note, NoteValidationError};
use uuid::Uuid;

#[test]
fn note_new_sets_defaults() {
    let note = Note::new("hello");

    assert!(!note.id.is_nil());
    assert_eq!(note.content, "hello");
    assert_eq!(note.updated_at, None);
    assert!(note.validate().is_ok());
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Note::with_id(Uuid::nil(), "invalid").unwrap_err();
    assert_eq!(err, NoteValidationError::NilId);
}

#[test]
fn edit_replaces_content_and_stamps_time() {
    let mut note = Note::new("draft");
    note.edit("final", 1_700_000_000_000);
    assert_eq!(note.content, "final");
    assert_eq!(note.updated_at, Some(1_700_000_000_000));
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let note_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut note = Note::with_id(note_id, "---\ntitle: X\n---\nbody").unwrap();
    note.updated_at = Some(42);

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], note_id.to_string());
    assert_eq!(json["content"], "---\ntitle: X\n---\nbody");
    assert_eq!(json["updated_at"], 42);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn deserialize_rejects_nil_id_and_defaults_updated_at() {
    let nil = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "content": "x"
    });
    let err = serde_json::from_value::<Note>(nil).unwrap_err();
    assert!(err.to_string().contains("nil uuid"), "unexpected error: {err}");

    let valid = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "content": "x"
    });
    let note = serde_json::from_value::<Note>(valid).unwrap();
    assert_eq!(note.updated_at, None);
}
