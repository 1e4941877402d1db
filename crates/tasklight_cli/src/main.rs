//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasklight_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use std::sync::Arc;
use tasklight_core::view::ListRow;
use tasklight_core::{seed_demo_data, ListService, ObservedLists, RecordStore};

fn main() -> ExitCode {
    println!("tasklight_core version={}", tasklight_core::core_version());

    match print_seeded_board() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn print_seeded_board() -> Result<(), String> {
    let store =
        RecordStore::open_in_memory().map_err(|err| format!("failed to open store: {err}"))?;
    seed_demo_data(&store).map_err(|err| format!("failed to seed demo data: {err}"))?;

    let lists = ObservedLists::new(Arc::clone(&store));
    let service = ListService::new(Arc::clone(&store));
    let snapshot = lists
        .snapshot()
        .map_err(|err| format!("failed to read lists: {err}"))?;

    for list in snapshot {
        let summary = service
            .completion_summary(list.uuid)
            .map_err(|err| format!("failed to read summary: {err}"))?;
        let row = ListRow::project(&list, summary);
        println!("{} [{}]", row.title, row.summary);
    }
    Ok(())
}
