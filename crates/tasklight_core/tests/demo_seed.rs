use std::sync::Arc;
use tasklight_core::{
    seed_demo_data, ListService, ObservedLists, ObservedTasks, RecordStore, TaskPartition,
};

#[test]
fn seeding_empty_store_creates_sample_board() {
    let store = RecordStore::open_in_memory().unwrap();

    let seeded = seed_demo_data(&store).unwrap().expect("store was empty");

    let lists = ObservedLists::new(Arc::clone(&store)).snapshot().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].uuid, seeded);

    let current = ObservedTasks::new(Arc::clone(&store), seeded, TaskPartition::Current);
    let completed = ObservedTasks::new(Arc::clone(&store), seeded, TaskPartition::Completed);
    assert_eq!(current.snapshot().unwrap().len(), 2);
    assert_eq!(completed.snapshot().unwrap().len(), 1);
}

#[test]
fn seeding_populated_store_is_noop() {
    let store = RecordStore::open_in_memory().unwrap();
    let service = ListService::new(Arc::clone(&store));
    service.create_list("Existing").unwrap();

    assert!(seed_demo_data(&store).unwrap().is_none());

    let lists = ObservedLists::new(Arc::clone(&store)).snapshot().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].name, "Existing");
}
