//! REST client module for the club data backend.
//!
//! This module provides the `ApiClient` for talking to the Remote Store
//! that owns players (`/players`), stadiums (`/map`) and fixtures (`/event`),
//! and the `RemoteStore` trait the data cache is written against.

pub mod client;
pub mod error;
pub mod store;

pub use client::ApiClient;
pub use error::ApiError;
pub use store::RemoteStore;
