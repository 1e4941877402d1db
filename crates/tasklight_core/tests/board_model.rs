use tasklight_core::{Task, TaskList};
use uuid::Uuid;

#[test]
fn task_list_new_sets_defaults() {
    let list = TaskList::new("Groceries");

    assert!(!list.uuid.is_nil());
    assert_eq!(list.name, "Groceries");
    assert!(list.created_at > 0);
}

#[test]
fn task_new_starts_incomplete() {
    let list = TaskList::new("Groceries");
    let task = Task::new(list.uuid, "Milk", "2 liters");

    assert!(!task.uuid.is_nil());
    assert_eq!(task.list_uuid, list.uuid);
    assert_eq!(task.name, "Milk");
    assert_eq!(task.note, "2 liters");
    assert!(!task.is_complete);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let list_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task_id = Uuid::parse_str("66666666-7777-4888-9999-aaaaaaaaaaaa").unwrap();
    let task = Task::with_id(task_id, list_id, "Milk", "2 liters");

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["uuid"], task_id.to_string());
    assert_eq!(json["list_uuid"], list_id.to_string());
    assert_eq!(json["name"], "Milk");
    assert_eq!(json["note"], "2 liters");
    assert_eq!(json["is_complete"], false);
    assert_eq!(json["created_at"], task.created_at);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn task_list_serialization_round_trips() {
    let list_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let list = TaskList::with_id(list_id, "Groceries");

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["uuid"], list_id.to_string());
    assert_eq!(json["name"], "Groceries");
    assert_eq!(json["created_at"], list.created_at);

    let decoded: TaskList = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, list);
}
