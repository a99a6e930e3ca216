use notekeep_core::{Note, NoteDetails, NoteId, NoteSummary};

#[test]
fn note_id_serializes_as_plain_integer() {
    let json = serde_json::to_value(NoteId::new(7)).unwrap();
    assert_eq!(json, serde_json::json!(7));

    let decoded: NoteId = serde_json::from_value(serde_json::json!(12)).unwrap();
    assert_eq!(decoded, NoteId::new(12));
}

#[test]
fn note_serializes_with_flat_fields() {
    let note = Note {
        id: NoteId::new(3),
        title: "Todo".to_string(),
        content: "write report".to_string(),
    };

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": 3, "title": "Todo", "content": "write report" })
    );

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn note_projections_split_fields() {
    let note = Note {
        id: NoteId::new(1),
        title: "Shopping".to_string(),
        content: "milk, eggs".to_string(),
    };

    assert_eq!(
        note.summary(),
        NoteSummary {
            id: NoteId::new(1),
            title: "Shopping".to_string(),
        }
    );
    assert_eq!(
        note.details(),
        NoteDetails {
            title: "Shopping".to_string(),
            content: "milk, eggs".to_string(),
        }
    );
}

#[test]
fn note_id_displays_as_number() {
    assert_eq!(NoteId::new(15).to_string(), "15");
    assert_eq!(NoteId::from(2_i64).get(), 2);
}

#[test]
fn note_id_rejects_string_payload() {
    let err = serde_json::from_value::<NoteId>(serde_json::json!("1")).unwrap_err();
    assert!(err.to_string().contains("invalid type"));
}
