use std::sync::Arc;
use tasklight_core::view::ListRow;
use tasklight_core::{
    CompletionSummary, ListService, ObservedTasks, RecordStore, TaskPartition, TaskService,
};

#[test]
fn groceries_scenario_counts_down_to_done() {
    let store = RecordStore::open_in_memory().unwrap();
    let lists = ListService::new(Arc::clone(&store));
    let tasks = TaskService::new(Arc::clone(&store));

    let groceries = lists.create_list("Groceries").unwrap();
    let milk = tasks.create_task(groceries.uuid, "Milk", "").unwrap();
    let bread = tasks.create_task(groceries.uuid, "Bread", "").unwrap();

    assert_eq!(
        lists.completion_summary(groceries.uuid).unwrap(),
        CompletionSummary::Remaining(2)
    );

    tasks.set_task_done(milk.uuid, true).unwrap();
    assert_eq!(
        lists.completion_summary(groceries.uuid).unwrap(),
        CompletionSummary::Remaining(1)
    );

    tasks.set_task_done(bread.uuid, true).unwrap();
    assert_eq!(
        lists.completion_summary(groceries.uuid).unwrap(),
        CompletionSummary::Done
    );

    // Reopening a task brings the count back.
    tasks.set_task_done(milk.uuid, false).unwrap();
    assert_eq!(
        lists.completion_summary(groceries.uuid).unwrap(),
        CompletionSummary::Remaining(1)
    );
}

#[test]
fn empty_list_summary_renders_zero_not_done() {
    let store = RecordStore::open_in_memory().unwrap();
    let lists = ListService::new(Arc::clone(&store));

    let list = lists.create_list("Someday").unwrap();
    let summary = lists.completion_summary(list.uuid).unwrap();
    assert_eq!(summary, CompletionSummary::Remaining(0));

    let row = ListRow::project(&list, summary);
    assert_eq!(row.summary, "0");
    assert!(!row.highlight_done);
}

#[test]
fn mark_list_done_flips_every_task() {
    let store = RecordStore::open_in_memory().unwrap();
    let lists = ListService::new(Arc::clone(&store));
    let tasks = TaskService::new(Arc::clone(&store));

    let list = lists.create_list("Chores").unwrap();
    tasks.create_task(list.uuid, "Vacuum", "").unwrap();
    tasks.create_task(list.uuid, "Dishes", "").unwrap();
    let laundry = tasks.create_task(list.uuid, "Laundry", "").unwrap();
    tasks.set_task_done(laundry.uuid, true).unwrap();

    lists.mark_list_done(list.uuid).unwrap();

    let completed = ObservedTasks::new(Arc::clone(&store), list.uuid, TaskPartition::Completed);
    assert_eq!(completed.snapshot().unwrap().len(), 3);

    let current = ObservedTasks::new(Arc::clone(&store), list.uuid, TaskPartition::Current);
    assert!(current.snapshot().unwrap().is_empty());

    assert_eq!(
        lists.completion_summary(list.uuid).unwrap(),
        CompletionSummary::Done
    );
}

#[test]
fn summary_of_unknown_list_reads_as_empty() {
    let store = RecordStore::open_in_memory().unwrap();
    let lists = ListService::new(Arc::clone(&store));

    let list = lists.create_list("Groceries").unwrap();
    lists.delete_list(list.uuid).unwrap();

    // Read-only queries never fail with not-found.
    assert_eq!(
        lists.completion_summary(list.uuid).unwrap(),
        CompletionSummary::Remaining(0)
    );
}
