use taskboard_core::{
    demo_dataset, load_dataset, parse_dataset, ActivityKind, DatasetError, InMemoryRecordStore,
    Record, RecordStore, RecordValidationError, Status, StoreError,
};

#[test]
fn insert_keeps_order_and_rejects_duplicates() {
    let mut store = InMemoryRecordStore::new();
    store.insert(Record::new("b", "second")).unwrap();
    store.insert(Record::new("a", "first")).unwrap();

    let err = store.insert(Record::new("a", "again")).unwrap_err();
    assert_eq!(err, StoreError::DuplicateId("a".to_string()));

    let ids: Vec<&str> = store.list().iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(store.len(), 2);
}

#[test]
fn insert_validates_records() {
    let mut store = InMemoryRecordStore::new();
    let err = store.insert(Record::new("", "x")).unwrap_err();
    assert_eq!(err, StoreError::Validation(RecordValidationError::BlankId));
    assert!(store.is_empty());
}

#[test]
fn update_replaces_in_place() {
    let mut store =
        InMemoryRecordStore::from_records(vec![Record::new("1", "a"), Record::new("2", "b")])
            .unwrap();

    let updated = Record::new("1", "a").with_status(Status::Review);
    store.update(updated).unwrap();
    assert_eq!(store.get("1").unwrap().status, Status::Review);
    assert_eq!(store.list()[0].id, "1");

    let err = store.update(Record::new("9", "missing")).unwrap_err();
    assert_eq!(err, StoreError::NotFound("9".to_string()));
}

#[test]
fn dataset_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    let json = serde_json::to_string_pretty(&demo_dataset()).unwrap();
    std::fs::write(&path, json).unwrap();

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset, demo_dataset());
}

#[test]
fn dataset_tolerates_malformed_dates() {
    let dataset = parse_dataset(
        r#"{"records": [
            {"id": "1", "title": "ok", "type": "Task", "status": "To Do", "priority": "Low", "due_date": "2025-03-01"},
            {"id": "2", "title": "odd date", "type": "Bug", "status": "Review", "priority": "High", "due_date": "soon"}
        ]}"#,
    )
    .unwrap();

    let (projects, store) = dataset.into_store().unwrap();
    assert!(projects.is_empty());
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("2").unwrap().scheduled_on(), None);
}

#[test]
fn dataset_rejects_unknown_status_and_duplicate_ids() {
    let err = parse_dataset(
        r#"{"records": [{"id": "1", "title": "x", "type": "Task", "status": "Blocked", "priority": "Low"}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, DatasetError::Parse(_)));
    assert!(err.to_string().contains("Blocked"));

    let duplicate = parse_dataset(
        r#"{"records": [
            {"id": "1", "title": "x", "type": "Task", "status": "Done", "priority": "Low"},
            {"id": "1", "title": "y", "type": "Task", "status": "Done", "priority": "Low"}
        ]}"#,
    )
    .unwrap();
    let err = duplicate.into_store().unwrap_err();
    assert!(matches!(
        err,
        DatasetError::Store(StoreError::DuplicateId(ref id)) if id == "1"
    ));
}

#[test]
fn missing_dataset_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn dataset_rejects_dangling_project_reference() {
    let dataset = parse_dataset(
        r#"{
            "projects": [{"id": "1", "name": "Website Redesign", "status": "Active"}],
            "records": [
                {"id": "101", "title": "ok", "type": "Task", "status": "To Do", "priority": "Low",
                 "project": {"id": "1", "name": "Website Redesign"}},
                {"id": "102", "title": "orphan", "type": "Task", "status": "To Do", "priority": "Low",
                 "project": {"id": "9", "name": "Gone"}}
            ]
        }"#,
    )
    .unwrap();

    let err = dataset.into_store().unwrap_err();
    assert!(matches!(
        err,
        DatasetError::UnknownProject { ref record_id, ref project_id }
            if record_id == "102" && project_id == "9"
    ));
    assert!(err.to_string().contains("unknown project `9`"));
}

#[test]
fn dataset_reads_activity_feed() {
    let dataset = parse_dataset(
        r#"{"activity": [{
            "kind": "status_changed", "target_id": "107", "target": "Set up project repository",
            "from": "In Progress", "to": "Done", "at": "2025-03-08T16:20:00Z"
        }]}"#,
    )
    .unwrap();
    assert_eq!(dataset.activity.len(), 1);
    assert_eq!(dataset.activity[0].kind, ActivityKind::StatusChanged);
    assert_eq!(dataset.activity[0].to, Some(Status::Done));
    assert_eq!(dataset.activity[0].project, None);
}
