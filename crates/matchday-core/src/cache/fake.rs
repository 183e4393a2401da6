//! In-memory `RemoteStore` used by the cache tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use crate::api::{ApiError, RemoteStore};
use crate::models::{decode_list, Record, RecordId};

#[derive(Default)]
pub(crate) struct FakeStore {
    records: Mutex<HashMap<&'static str, Vec<Value>>>,
    failing: Mutex<HashSet<(&'static str, &'static str)>>,
    next_id: AtomicU64,
    calls: AtomicUsize,
    list_gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, endpoint: &'static str, records: Vec<Value>) {
        self.records.lock().unwrap().insert(endpoint, records);
    }

    pub fn stored(&self, endpoint: &'static str) -> Vec<Value> {
        self.records
            .lock()
            .unwrap()
            .get(endpoint)
            .cloned()
            .unwrap_or_default()
    }

    /// Make `op` ("list", "create", "update", "delete") fail on `endpoint`
    pub fn fail(&self, op: &'static str, endpoint: &'static str) {
        self.failing.lock().unwrap().insert((op, endpoint));
    }

    pub fn recover(&self, op: &'static str, endpoint: &'static str) {
        self.failing.lock().unwrap().remove(&(op, endpoint));
    }

    /// Hold every `list` call until the returned gate is notified
    pub fn gate_list(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.list_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self, op: &'static str, endpoint: &'static str) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.lock().unwrap().contains(&(op, endpoint)) {
            Err(ApiError::ServerError(format!("simulated {} failure", op)))
        } else {
            Ok(())
        }
    }

    fn with_id<B: serde::Serialize>(body: &B, id: &str) -> Value {
        let mut value = serde_json::to_value(body).unwrap();
        if let Value::Object(ref mut map) = value {
            map.insert("_id".to_string(), Value::String(id.to_string()));
        }
        value
    }

    fn decode<R: Record>(value: Value) -> Result<R, ApiError> {
        serde_json::from_value(value).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl RemoteStore for FakeStore {
    async fn list<R: Record>(&self) -> Result<Vec<R>, ApiError> {
        self.enter("list", R::ENDPOINT)?;
        let gate = self.list_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(decode_list(self.stored(R::ENDPOINT)))
    }

    async fn create<R: Record>(&self, draft: &R::Draft) -> Result<R, ApiError> {
        self.enter("create", R::ENDPOINT)?;
        let id = format!("srv-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let value = Self::with_id(draft, &id);
        self.records
            .lock()
            .unwrap()
            .entry(R::ENDPOINT)
            .or_default()
            .push(value.clone());
        Self::decode(value)
    }

    async fn update<R: Record>(&self, id: &RecordId, draft: &R::Draft) -> Result<R, ApiError> {
        self.enter("update", R::ENDPOINT)?;
        let value = Self::with_id(draft, id.as_str());
        let mut records = self.records.lock().unwrap();
        let list = records.entry(R::ENDPOINT).or_default();
        match list.iter_mut().find(|v| v["_id"] == id.as_str()) {
            Some(slot) => *slot = value.clone(),
            None => return Err(ApiError::NotFound(id.to_string())),
        }
        drop(records);
        Self::decode(value)
    }

    async fn delete<R: Record>(&self, id: &RecordId) -> Result<(), ApiError> {
        self.enter("delete", R::ENDPOINT)?;
        self.records
            .lock()
            .unwrap()
            .entry(R::ENDPOINT)
            .or_default()
            .retain(|v| v["_id"] != id.as_str());
        Ok(())
    }
}
