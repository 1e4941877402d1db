use std::sync::Arc;
use tasklight_core::{
    ListService, ObservedTasks, RecordStore, SqliteTaskRepository, TaskPartition, TaskRepository,
    TaskService, TaskServiceError,
};
use uuid::Uuid;

fn board() -> (Arc<RecordStore>, ListService, TaskService) {
    let store = RecordStore::open_in_memory().unwrap();
    let lists = ListService::new(Arc::clone(&store));
    let tasks = TaskService::new(Arc::clone(&store));
    (store, lists, tasks)
}

#[test]
fn create_task_roundtrip_allows_empty_note() {
    let (store, lists, tasks) = board();
    let list = lists.create_list("Groceries").unwrap();

    let task = tasks.create_task(list.uuid, " Milk ", "").unwrap();
    assert_eq!(task.name, "Milk");
    assert_eq!(task.note, "");
    assert!(!task.is_complete);

    let loaded = store
        .read(|conn| SqliteTaskRepository::new(conn).get_task(task.uuid))
        .unwrap()
        .unwrap();
    assert_eq!(loaded, task);
}

#[test]
fn create_task_rejects_blank_name() {
    let (_store, lists, tasks) = board();
    let list = lists.create_list("Groceries").unwrap();

    let err = tasks.create_task(list.uuid, "   ", "note").unwrap_err();
    assert!(matches!(err, TaskServiceError::EmptyName));
}

#[test]
fn create_task_requires_existing_list() {
    let (_store, _lists, tasks) = board();

    let missing = Uuid::new_v4();
    let err = tasks.create_task(missing, "Milk", "").unwrap_err();
    assert!(matches!(err, TaskServiceError::ListNotFound(id) if id == missing));
}

#[test]
fn edit_task_round_trips_name_and_note() {
    let (store, lists, tasks) = board();
    let list = lists.create_list("Groceries").unwrap();
    let task = tasks.create_task(list.uuid, "Milk", "").unwrap();

    let updated = tasks
        .edit_task(task.uuid, "Oat milk", "the unsweetened kind")
        .unwrap();
    assert_eq!(updated.name, "Oat milk");
    assert_eq!(updated.note, "the unsweetened kind");

    let loaded = store
        .read(|conn| SqliteTaskRepository::new(conn).get_task(task.uuid))
        .unwrap()
        .unwrap();
    assert_eq!(loaded.name, "Oat milk");
    assert_eq!(loaded.note, "the unsweetened kind");
}

#[test]
fn edit_task_rejects_blank_name_and_missing_target() {
    let (_store, lists, tasks) = board();
    let list = lists.create_list("Groceries").unwrap();
    let task = tasks.create_task(list.uuid, "Milk", "").unwrap();

    let blank = tasks.edit_task(task.uuid, "  ", "note").unwrap_err();
    assert!(matches!(blank, TaskServiceError::EmptyName));

    let missing = Uuid::new_v4();
    let not_found = tasks.edit_task(missing, "name", "note").unwrap_err();
    assert!(matches!(not_found, TaskServiceError::TaskNotFound(id) if id == missing));
}

#[test]
fn second_delete_of_same_task_returns_not_found() {
    let (store, lists, tasks) = board();
    let list = lists.create_list("Groceries").unwrap();
    let task = tasks.create_task(list.uuid, "Milk", "").unwrap();

    tasks.delete_task(task.uuid).unwrap();

    let err = tasks.delete_task(task.uuid).unwrap_err();
    assert!(matches!(err, TaskServiceError::TaskNotFound(id) if id == task.uuid));

    let remaining = store
        .read(|conn| SqliteTaskRepository::new(conn).list_all(list.uuid))
        .unwrap();
    assert!(remaining.is_empty());
}

#[test]
fn toggle_done_is_idempotent_and_reversible() {
    let (store, lists, tasks) = board();
    let list = lists.create_list("Groceries").unwrap();
    let task = tasks.create_task(list.uuid, "Milk", "").unwrap();

    tasks.set_task_done(task.uuid, true).unwrap();
    tasks.set_task_done(task.uuid, true).unwrap();

    let loaded = store
        .read(|conn| SqliteTaskRepository::new(conn).get_task(task.uuid))
        .unwrap()
        .unwrap();
    assert!(loaded.is_complete);

    tasks.set_task_done(task.uuid, false).unwrap();
    let reopened = store
        .read(|conn| SqliteTaskRepository::new(conn).get_task(task.uuid))
        .unwrap()
        .unwrap();
    assert!(!reopened.is_complete);
}

#[test]
fn new_list_has_empty_task_partitions() {
    let (store, lists, _tasks) = board();
    let list = lists.create_list("Groceries").unwrap();

    let current = ObservedTasks::new(Arc::clone(&store), list.uuid, TaskPartition::Current);
    let completed = ObservedTasks::new(Arc::clone(&store), list.uuid, TaskPartition::Completed);
    assert!(current.snapshot().unwrap().is_empty());
    assert!(completed.snapshot().unwrap().is_empty());

    assert_eq!(current.list_uuid(), list.uuid);
    assert_eq!(current.partition(), TaskPartition::Current);
    assert!(!current.partition().is_complete());
    assert!(completed.partition().is_complete());
}
