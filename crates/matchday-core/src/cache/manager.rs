use tracing::info;

use crate::api::RemoteStore;
use crate::models::{Event, Place, Player, Record, RecordId};

use super::collection::{Collection, CollectionState, OpStatus};

/// Client-side mirror of the Remote Store.
///
/// Owns the three cached collections and the store they are synced against.
/// Constructed once by the composition root and passed by reference to
/// whatever reads or mutates the data.
pub struct DataCache<S: RemoteStore> {
    store: S,
    players: Collection<Player>,
    places: Collection<Place>,
    events: Collection<Event>,
}

/// Per-collection result of `DataCache::initialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    pub players: OpStatus,
    pub places: OpStatus,
    pub events: OpStatus,
}

impl InitReport {
    pub fn all_applied(&self) -> bool {
        self.players.is_applied() && self.places.is_applied() && self.events.is_applied()
    }
}

/// A collection bound to the store it syncs with.
pub struct CollectionHandle<'a, S: RemoteStore, R: Record> {
    store: &'a S,
    collection: &'a Collection<R>,
}

impl<S: RemoteStore, R: Record> CollectionHandle<'_, S, R> {
    pub async fn fetch_all(&self) -> OpStatus {
        self.collection.fetch_all(self.store).await
    }

    pub async fn create(&self, draft: &R::Draft) -> OpStatus {
        self.collection.create(self.store, draft).await
    }

    pub async fn update(&self, id: &RecordId, draft: &R::Draft) -> OpStatus {
        self.collection.update(self.store, id, draft).await
    }

    pub async fn delete(&self, id: &RecordId) -> OpStatus {
        self.collection.delete(self.store, id).await
    }

    pub fn snapshot(&self) -> CollectionState<R> {
        self.collection.snapshot()
    }

    pub fn items(&self) -> Vec<R> {
        self.collection.items()
    }

    pub fn find(&self, id: &RecordId) -> Option<R> {
        self.collection.find(id)
    }

    pub fn error(&self) -> Option<String> {
        self.collection.error()
    }

    pub fn is_loading(&self) -> bool {
        self.collection.is_loading()
    }
}

impl<S: RemoteStore> DataCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            players: Collection::new(),
            places: Collection::new(),
            events: Collection::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn players(&self) -> CollectionHandle<'_, S, Player> {
        CollectionHandle {
            store: &self.store,
            collection: &self.players,
        }
    }

    pub fn places(&self) -> CollectionHandle<'_, S, Place> {
        CollectionHandle {
            store: &self.store,
            collection: &self.places,
        }
    }

    pub fn events(&self) -> CollectionHandle<'_, S, Event> {
        CollectionHandle {
            store: &self.store,
            collection: &self.events,
        }
    }

    /// Fetch every collection once. The three fetches run concurrently and
    /// fail independently.
    pub async fn initialize(&self) -> InitReport {
        info!("Fetching players, places and events");
        let (players, places, events) = (self.players(), self.places(), self.events());
        let (players, places, events) =
            tokio::join!(players.fetch_all(), places.fetch_all(), events.fetch_all());
        let report = InitReport {
            players,
            places,
            events,
        };
        info!(
            players = self.players.len(),
            places = self.places.len(),
            events = self.events.len(),
            complete = report.all_applied(),
            "Initial fetch finished"
        );
        report
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::fake::FakeStore;
    use crate::models::{EventDraft, PlaceDraft, PlayerDraft};
    use chrono::{Local, TimeZone};
    use serde_json::json;
    use std::sync::Arc;

    fn seeded() -> FakeStore {
        let store = FakeStore::new();
        store.seed(
            "players",
            vec![
                json!({"_id": "1", "name": "Ter Stegen", "position": "Goalkeeper", "dorsal": 1, "age": 32, "nationality": "Germany"}),
                json!({"_id": "2", "name": "Lewandowski", "position": "Forward", "dorsal": 9, "age": 36, "nationality": "Poland"}),
            ],
        );
        store.seed(
            "map",
            vec![json!({"_id": "m1", "stadium": "Camp Nou", "club": "FC Barcelona", "capacity": 99354, "community": "Catalonia", "lat": 41.3809, "lng": 2.1228})],
        );
        store.seed(
            "event",
            vec![json!({"_id": "e1", "name": "El Clásico", "date": "2024-10-26T19:00:00Z", "competition": "LaLiga", "place": "Bernabéu"})],
        );
        store
    }

    fn draft(name: &str, dorsal: u32) -> PlayerDraft {
        PlayerDraft {
            name: name.to_string(),
            position: "Midfielder".to_string(),
            dorsal,
            age: 20,
            nationality: "Spain".to_string(),
        }
    }

    #[tokio::test]
    async fn test_initialize_fetches_everything() {
        let cache = DataCache::new(seeded());
        let report = cache.initialize().await;

        assert!(report.all_applied());
        assert_eq!(cache.players().items().len(), 2);
        assert_eq!(cache.places().items()[0].stadium, "Camp Nou");
        assert_eq!(cache.events().items()[0].competition, "LaLiga");
        assert!(!cache.players().is_loading());
        assert!(cache.players().snapshot().fetched_at.is_some());
    }

    #[tokio::test]
    async fn test_fetch_replaces_list_exactly() {
        let store = seeded();
        let cache = DataCache::new(store);
        cache.players().fetch_all().await;

        cache.store().seed(
            "players",
            vec![json!({"_id": "7", "name": "Gavi", "position": "Midfielder", "dorsal": 6, "age": 20, "nationality": "Spain"})],
        );
        assert_eq!(cache.players().fetch_all().await, OpStatus::Applied);

        let players = cache.players().items();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].id.as_str(), "7");
        assert!(cache.players().error().is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_list() {
        let cache = DataCache::new(seeded());
        cache.initialize().await;
        let before = cache.players().items();

        cache.store().fail("list", "players");
        assert_eq!(cache.players().fetch_all().await, OpStatus::Failed);

        assert_eq!(cache.players().items(), before);
        let error = cache.players().error().unwrap();
        assert!(error.starts_with("Failed to fetch players"));
        assert!(!cache.players().is_loading());
        // Other collections are unaffected
        assert!(cache.places().error().is_none());

        cache.store().recover("list", "players");
        cache.players().fetch_all().await;
        assert!(cache.players().error().is_none());
    }

    #[tokio::test]
    async fn test_initialize_failures_are_independent() {
        let store = seeded();
        store.fail("list", "map");
        let cache = DataCache::new(store);
        let report = cache.initialize().await;

        assert_eq!(report.players, OpStatus::Applied);
        assert_eq!(report.places, OpStatus::Failed);
        assert_eq!(report.events, OpStatus::Applied);
        assert!(!report.all_applied());
        assert!(cache.places().items().is_empty());
        assert!(cache.places().error().is_some());
    }

    #[tokio::test]
    async fn test_create_appends_with_server_id() {
        let cache = DataCache::new(seeded());
        cache.initialize().await;

        assert!(cache.players().create(&draft("Pedri", 8)).await.is_applied());
        assert!(cache.players().create(&draft("Pedri", 8)).await.is_applied());

        let players = cache.players().items();
        assert_eq!(players.len(), 4);
        assert_eq!(players[2].name, "Pedri");
        assert_eq!(players[3].name, "Pedri");
        assert_ne!(players[2].id, players[3].id);
    }

    #[tokio::test]
    async fn test_create_failure_leaves_cache() {
        let cache = DataCache::new(seeded());
        cache.initialize().await;
        cache.store().fail("create", "players");

        assert_eq!(cache.players().create(&draft("Fermín", 16)).await, OpStatus::Failed);
        assert_eq!(cache.players().items().len(), 2);
        assert!(cache.players().error().unwrap().starts_with("Failed to create player"));
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let cache = DataCache::new(seeded());
        cache.initialize().await;

        let id = RecordId::new("1");
        let mut changed = cache.players().find(&id).unwrap().to_draft();
        changed.age = 33;
        assert!(cache.players().update(&id, &changed).await.is_applied());

        let players = cache.players().items();
        assert_eq!(players[0].id, id);
        assert_eq!(players[0].age, 33);
        assert_eq!(players[1].name, "Lewandowski");
    }

    #[tokio::test]
    async fn test_update_unknown_id_surfaces_error() {
        let cache = DataCache::new(seeded());
        cache.initialize().await;
        let before = cache.players().items();

        let status = cache.players().update(&RecordId::new("404"), &draft("Ghost", 99)).await;

        assert_eq!(status, OpStatus::Failed);
        assert_eq!(cache.players().items(), before);
        assert!(cache.players().error().is_some());
    }

    #[tokio::test]
    async fn test_update_success_for_uncached_record_is_an_error() {
        let cache = DataCache::new(seeded());
        cache.initialize().await;
        // Another client created this after our fetch; the store accepts the update
        let mut stored = cache.store().stored("players");
        stored.push(json!({"_id": "late", "name": "Olmo", "position": "Midfielder", "dorsal": 20, "age": 26, "nationality": "Spain"}));
        cache.store().seed("players", stored);
        let before = cache.players().items();

        let status = cache.players().update(&RecordId::new("late"), &draft("Olmo", 20)).await;

        assert_eq!(status, OpStatus::Failed);
        assert_eq!(cache.players().items(), before);
        assert!(cache.players().error().unwrap().contains("late is not cached"));
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let cache = DataCache::new(seeded());
        cache.initialize().await;

        assert!(cache.players().delete(&RecordId::new("1")).await.is_applied());
        let players = cache.players().items();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].id.as_str(), "2");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let cache = DataCache::new(seeded());
        cache.initialize().await;
        let before = cache.players().items();

        let status = cache.players().delete(&RecordId::new("nope")).await;

        assert_eq!(status, OpStatus::Applied);
        assert_eq!(cache.players().items(), before);
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_cache() {
        let cache = DataCache::new(seeded());
        cache.initialize().await;
        cache.store().fail("delete", "map");

        assert_eq!(cache.places().delete(&RecordId::new("m1")).await, OpStatus::Failed);
        assert_eq!(cache.places().items().len(), 1);
        assert!(cache.places().error().unwrap().starts_with("Failed to delete place"));
    }

    #[tokio::test]
    async fn test_place_and_event_collections() {
        let cache = DataCache::new(seeded());
        cache.initialize().await;

        let place = PlaceDraft {
            stadium: "Estadi Olímpic Lluís Companys".to_string(),
            club: "FC Barcelona".to_string(),
            capacity: 55926,
            community: "Catalonia".to_string(),
            lat: Some(41.3647),
            lng: Some(2.1557),
        };
        assert!(cache.places().create(&place).await.is_applied());
        assert_eq!(cache.places().items().len(), 2);

        let event = EventDraft {
            name: "Champions League QF".to_string(),
            date: Local.with_ymd_and_hms(2025, 4, 9, 21, 0, 0).unwrap(),
            competition: "UCL".to_string(),
            place: "Montjuïc".to_string(),
        };
        assert!(cache.events().create(&event).await.is_applied());
        let events = cache.events().items();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].date, event.date);
    }

    #[tokio::test]
    async fn test_concurrent_deletes_on_same_collection() {
        let cache = Arc::new(DataCache::new(seeded()));
        cache.initialize().await;

        let a = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                let status = cache.players().delete(&RecordId::new("1")).await;
                status
            })
        };
        let b = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                let status = cache.players().delete(&RecordId::new("2")).await;
                status
            })
        };
        assert!(a.await.unwrap().is_applied());
        assert!(b.await.unwrap().is_applied());
        assert!(cache.players().items().is_empty());
    }

    #[tokio::test]
    async fn test_store_call_count() {
        let cache = DataCache::new(seeded());
        cache.initialize().await;
        assert_eq!(cache.store().calls(), 3);
    }

    #[tokio::test]
    async fn test_loading_flag_while_fetch_in_flight() {
        let store = seeded();
        let gate = store.gate_list();
        let cache = Arc::new(DataCache::new(store));
        assert!(!cache.players().is_loading());

        let task = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                let status = cache.players().fetch_all().await;
                status
            })
        };

        for _ in 0..100 {
            if cache.players().is_loading() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(cache.players().is_loading());
        assert!(cache.players().items().is_empty());

        gate.notify_one();
        assert_eq!(task.await.unwrap(), OpStatus::Applied);
        assert!(!cache.players().is_loading());
        assert_eq!(cache.players().items().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_record_does_not_empty_collection() {
        let store = seeded();
        store.seed(
            "players",
            vec![
                json!({"_id": "1", "name": "Ter Stegen", "position": "Goalkeeper", "dorsal": 1, "age": 32, "nationality": "Germany"}),
                json!({"_id": "2", "name": "Lewandowski", "position": "Forward", "dorsal": 9, "nationality": "Poland"}),
            ],
        );
        store.seed(
            "map",
            vec![
                json!({"_id": "m1", "stadium": "Camp Nou", "club": "FC Barcelona", "capacity": 99354, "community": "Catalonia"}),
                json!({"_id": "m2", "stadium": "Montjuïc", "club": "FC Barcelona", "capacity": null}),
            ],
        );
        let cache = DataCache::new(store);

        let report = cache.initialize().await;

        assert!(report.all_applied());
        let players = cache.players().items();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].id.as_str(), "1");
        assert!(cache.players().error().is_none());
        let places = cache.places().items();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].stadium, "Camp Nou");
    }
}
