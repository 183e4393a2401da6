use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::api::RemoteStore;
use crate::models::{Record, RecordId};

/// Outcome of a cache operation. Failure details live in the collection's
/// `error` field, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpStatus {
    Applied,
    Failed,
}

impl OpStatus {
    pub fn is_applied(self) -> bool {
        self == OpStatus::Applied
    }
}

/// Read-only view of one cached collection.
#[derive(Debug, Clone)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            fetched_at: None,
        }
    }
}

impl<T> CollectionState<T> {
    pub fn age_minutes(&self) -> Option<i64> {
        self.fetched_at.map(|at| (Utc::now() - at).num_minutes())
    }

    /// "just now", "5m ago", "2h ago", "3d ago", or "never"
    pub fn age_display(&self) -> String {
        match self.age_minutes() {
            Some(minutes) => age_display(minutes),
            None => "never".to_string(),
        }
    }
}

pub(crate) fn age_display(minutes: i64) -> String {
    if minutes < 1 {
        // Also covers clock skew
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        let hours = minutes / 60;
        if minutes % 60 >= 30 {
            format!("{}h ago", hours + 1)
        } else {
            format!("{}h ago", hours)
        }
    } else {
        let days = minutes / 1440;
        if (minutes % 1440) / 60 >= 12 {
            format!("{}d ago", days + 1)
        } else {
            format!("{}d ago", days)
        }
    }
}

/// One cached collection mirroring a Remote Store endpoint.
///
/// The lock is only taken to read, or to apply a patch after a request has
/// completed. It is never held across an await, so overlapping operations on
/// the same collection each patch whatever list is current when they finish.
pub struct Collection<R: Record> {
    state: RwLock<CollectionState<R>>,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CollectionState::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CollectionState<R>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CollectionState<R>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> CollectionState<R> {
        self.read().clone()
    }

    pub fn items(&self) -> Vec<R> {
        self.read().items.clone()
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn find(&self, id: &RecordId) -> Option<R> {
        self.read().items.iter().find(|r| r.id() == id).cloned()
    }

    fn fail(&self, message: String) -> OpStatus {
        warn!(collection = R::COLLECTION, error = %message, "Cache operation failed");
        self.write().error = Some(message);
        OpStatus::Failed
    }

    /// Replace the cached list with the full collection from the store.
    pub async fn fetch_all<S: RemoteStore>(&self, store: &S) -> OpStatus {
        self.write().loading = true;
        let result = store.list::<R>().await;

        let mut state = self.write();
        state.loading = false;
        match result {
            Ok(items) => {
                debug!(collection = R::COLLECTION, count = items.len(), "Collection replaced");
                state.items = items;
                state.error = None;
                state.fetched_at = Some(Utc::now());
                OpStatus::Applied
            }
            Err(e) => {
                let message = format!("Failed to fetch {}: {}", R::COLLECTION, e);
                warn!(collection = R::COLLECTION, error = %message, "Cache operation failed");
                state.error = Some(message);
                OpStatus::Failed
            }
        }
    }

    /// Create a record and append the stored copy to the end of the list.
    pub async fn create<S: RemoteStore>(&self, store: &S, draft: &R::Draft) -> OpStatus {
        match store.create::<R>(draft).await {
            Ok(created) => {
                debug!(collection = R::COLLECTION, id = %created.id(), "Record created");
                let mut state = self.write();
                state.items.push(created);
                state.error = None;
                OpStatus::Applied
            }
            Err(e) => self.fail(format!("Failed to create {}: {}", R::ENTITY, e)),
        }
    }

    /// Replace the record at `id` in place with the stored copy.
    pub async fn update<S: RemoteStore>(&self, store: &S, id: &RecordId, draft: &R::Draft) -> OpStatus {
        let updated = match store.update::<R>(id, draft).await {
            Ok(updated) => updated,
            Err(e) => return self.fail(format!("Failed to update {}: {}", R::ENTITY, e)),
        };

        let mut state = self.write();
        let position = state.items.iter().position(|r| r.id() == id);
        match position {
            Some(index) => {
                debug!(collection = R::COLLECTION, id = %id, "Record updated");
                state.items[index] = updated;
                state.error = None;
                OpStatus::Applied
            }
            None => {
                drop(state);
                self.fail(format!("Failed to update {}: {} is not cached", R::ENTITY, id))
            }
        }
    }

    /// Delete the record at `id` and drop it from the list if present.
    pub async fn delete<S: RemoteStore>(&self, store: &S, id: &RecordId) -> OpStatus {
        if let Err(e) = store.delete::<R>(id).await {
            return self.fail(format!("Failed to delete {}: {}", R::ENTITY, e));
        }

        let mut state = self.write();
        let before = state.items.len();
        state.items.retain(|r| r.id() != id);
        if state.items.len() == before {
            debug!(collection = R::COLLECTION, id = %id, "Deleted record was not cached");
        }
        state.error = None;
        OpStatus::Applied
    }
}
