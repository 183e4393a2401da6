//! In-memory data cache for players, places and events.
//!
//! This module provides the `DataCache`, the single mediator between the
//! views and the Remote Store. Each collection tracks its own loading flag,
//! last error and fetch time. Mutations are applied to the cached list only
//! after the store confirms them.

pub mod collection;
#[cfg(test)]
pub(crate) mod fake;
pub mod manager;

pub use collection::{Collection, CollectionState, OpStatus};
pub use manager::{CollectionHandle, DataCache, InitReport};
