use taskboard_core::{Priority, ProjectRef, Record, RecordKind, RecordValidationError, Status};

#[test]
fn record_new_sets_open_defaults() {
    let record = Record::new("101", "Implement responsive design");

    assert_eq!(record.kind, RecordKind::Task);
    assert_eq!(record.status, Status::ToDo);
    assert_eq!(record.priority, Priority::Medium);
    assert_eq!(record.project, None);
    assert_eq!(record.scheduled_on(), None);
    assert!(!record.is_completed());
}

#[test]
fn completion_is_derived_from_status() {
    let mut record = Record::new("1", "ship").with_status(Status::Review);
    assert!(!record.is_completed());

    record.set_completed(true);
    assert_eq!(record.status, Status::Done);
    assert!(record.is_completed());

    record.set_completed(false);
    assert_eq!(record.status, Status::ToDo);
    assert!(!record.is_completed());
}

#[test]
fn validate_rejects_blank_fields() {
    assert_eq!(
        Record::new("  ", "title").validate(),
        Err(RecordValidationError::BlankId)
    );
    assert_eq!(
        Record::new("7", "\t").validate(),
        Err(RecordValidationError::BlankTitle { id: "7".to_string() })
    );
}

#[test]
fn serialization_uses_source_wire_names() {
    let record = Record::new("104", "Implement user authentication")
        .with_kind(RecordKind::Story)
        .with_status(Status::InProgress)
        .with_priority(Priority::High)
        .with_project(ProjectRef::new("2", "Mobile App Development"))
        .with_due_date("2025-03-20");

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["type"], "Story");
    assert_eq!(json["status"], "In Progress");
    assert_eq!(json["priority"], "High");
    assert_eq!(json["project"]["id"], "2");
    assert_eq!(json["due_date"], "2025-03-20");

    let decoded: Record = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn deserialize_accepts_summary_and_camel_case_due_date() {
    let value = serde_json::json!({
        "id": "103",
        "summary": "Fix navigation menu on mobile",
        "type": "Bug",
        "status": "To Do",
        "priority": "High",
        "dueDate": "2025-03-10"
    });

    let record: Record = serde_json::from_value(value).unwrap();
    assert_eq!(record.title, "Fix navigation menu on mobile");
    assert_eq!(record.due_date.as_deref(), Some("2025-03-10"));
    assert_eq!(record.description, "");
}

#[test]
fn deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "id": "9",
        "title": "mystery",
        "type": "Task",
        "status": "Blocked",
        "priority": "Low"
    });

    let err = serde_json::from_value::<Record>(value).unwrap_err();
    assert!(err.to_string().contains("Blocked"), "unexpected error: {err}");
}
