//! Record store: shared transactional handle over the SQLite board.
//!
//! # Responsibility
//! - Own the connection and serialize all write transactions through it.
//! - Deliver coarse change notifications synchronously after commit.
//!
//! # Invariants
//! - One transaction in flight at a time; the connection mutex is the
//!   single-writer gate.
//! - A failed mutation rolls back and delivers no events.
//! - Events are delivered after the connection lock is released, so a
//!   subscriber may immediately re-query the store. Subscribers must not
//!   start a new `mutate` from inside a callback.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::model::list::ListId;
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Coarse change notification emitted after a committed transaction.
///
/// Granularity is deliberately "the matching set changed"; per-row diffing
/// belongs to the view projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The set of lists changed (insert/rename/delete).
    Lists,
    /// The task set of one list changed (insert/edit/delete/toggle).
    Tasks { list_uuid: ListId },
}

/// Subscriber interest filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFilter {
    /// List-set changes only.
    Lists,
    /// Task changes of one list only.
    TasksOf(ListId),
    /// Every committed change, e.g. for views rendering derived list
    /// summaries.
    All,
}

impl ChangeFilter {
    fn matches(self, event: &ChangeEvent) -> bool {
        match (self, event) {
            (Self::All, _) => true,
            (Self::Lists, ChangeEvent::Lists) => true,
            (Self::TasksOf(list), ChangeEvent::Tasks { list_uuid }) => list == *list_uuid,
            _ => false,
        }
    }
}

type ChangeCallback = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

struct Subscriber {
    id: u64,
    filter: ChangeFilter,
    callback: ChangeCallback,
}

#[derive(Default)]
struct ChangeHub {
    subscribers: Mutex<Vec<Subscriber>>,
    next_id: AtomicU64,
}

impl ChangeHub {
    fn subscribe(&self, filter: ChangeFilter, callback: ChangeCallback) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(Subscriber {
                id,
                filter,
                callback,
            });
        }
        id
    }

    fn unsubscribe(&self, id: u64) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|subscriber| subscriber.id != id);
        }
    }

    fn notify(&self, events: &[ChangeEvent]) {
        // Snapshot matching callbacks first, then invoke without holding the
        // registry lock; callbacks may subscribe or unsubscribe.
        let mut matching: Vec<(ChangeCallback, ChangeEvent)> = Vec::new();
        {
            let subscribers = match self.subscribers.lock() {
                Ok(subscribers) => subscribers,
                Err(_) => return,
            };
            for event in events {
                for subscriber in subscribers.iter() {
                    if subscriber.filter.matches(event) {
                        matching.push((Arc::clone(&subscriber.callback), *event));
                    }
                }
            }
        }
        for (callback, event) in matching {
            callback(&event);
        }
    }
}

/// RAII subscription handle; dropping it stops delivery.
pub struct Subscription {
    hub: Arc<ChangeHub>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.hub.unsubscribe(self.id);
    }
}

/// Transactional embedded persistence handle for lists and tasks.
///
/// Injected explicitly into services and observed collections; there is no
/// process-wide singleton.
pub struct RecordStore {
    conn: Mutex<Connection>,
    hub: Arc<ChangeHub>,
}

impl RecordStore {
    /// Opens a file-backed store with migrations applied.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Arc<Self>> {
        Ok(Arc::new(Self::from_connection(open_db(path)?)))
    }

    /// Opens an in-memory store with migrations applied.
    pub fn open_in_memory() -> DbResult<Arc<Self>> {
        Ok(Arc::new(Self::from_connection(open_db_in_memory()?)))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
            hub: Arc::new(ChangeHub::default()),
        }
    }

    /// Runs a read-only closure against the connection.
    pub fn read<T>(&self, query: impl FnOnce(&Connection) -> RepoResult<T>) -> RepoResult<T> {
        let conn = self.conn.lock().map_err(|_| RepoError::Poisoned)?;
        query(&conn)
    }

    /// Runs a write closure inside one IMMEDIATE transaction.
    ///
    /// The closure returns its result together with the change events to
    /// deliver. On success the transaction commits and the events go out to
    /// matching subscribers, synchronously, on the calling thread. On any
    /// error the transaction rolls back on the drop path and nothing is
    /// delivered.
    pub fn mutate<T>(
        &self,
        apply: impl FnOnce(&Transaction<'_>) -> RepoResult<(T, Vec<ChangeEvent>)>,
    ) -> RepoResult<T> {
        let (value, events) = {
            let mut conn = self.conn.lock().map_err(|_| RepoError::Poisoned)?;
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            let (value, events) = apply(&tx)?;
            tx.commit()?;
            (value, events)
        };

        if !events.is_empty() {
            debug!(
                "event=store_commit module=store status=ok events={}",
                events.len()
            );
            self.hub.notify(&events);
        }
        Ok(value)
    }

    /// Registers a change subscriber.
    ///
    /// Delivery stops when the returned handle is dropped.
    pub fn subscribe(
        &self,
        filter: ChangeFilter,
        callback: impl Fn(&ChangeEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.hub.subscribe(filter, Arc::new(callback));
        Subscription {
            hub: Arc::clone(&self.hub),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChangeEvent, ChangeFilter};
    use uuid::Uuid;

    #[test]
    fn filter_matches_by_scope() {
        let list = Uuid::new_v4();
        let other = Uuid::new_v4();
        let task_event = ChangeEvent::Tasks { list_uuid: list };

        assert!(ChangeFilter::All.matches(&ChangeEvent::Lists));
        assert!(ChangeFilter::All.matches(&task_event));
        assert!(ChangeFilter::Lists.matches(&ChangeEvent::Lists));
        assert!(!ChangeFilter::Lists.matches(&task_event));
        assert!(ChangeFilter::TasksOf(list).matches(&task_event));
        assert!(!ChangeFilter::TasksOf(other).matches(&task_event));
        assert!(!ChangeFilter::TasksOf(list).matches(&ChangeEvent::Lists));
    }
}
