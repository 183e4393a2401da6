//! Core library for matchday.
//!
//! Holds the typed records for players, stadiums and fixtures, the REST
//! client for the backend that stores them, the client-side `DataCache`
//! that mirrors the backend, form validation, and the derived map,
//! calendar and chart views.

pub mod api;
pub mod cache;
pub mod config;
pub mod forms;
pub mod models;
pub mod views;

pub use api::{ApiClient, ApiError, RemoteStore};
pub use cache::{CollectionState, DataCache, InitReport, OpStatus};
pub use config::Config;
pub use forms::ValidationError;
pub use models::{Event, EventDraft, Place, PlaceDraft, Player, PlayerDraft, RecordId};
