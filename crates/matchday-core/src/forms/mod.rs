//! Form input conversion and validation.
//!
//! Forms hold raw user input as strings and turn it into typed drafts.
//! Validation happens before any call to the data cache: a rejected form
//! never reaches the Remote Store and never touches cache state.

pub mod event;
pub mod place;
pub mod player;

use thiserror::Error;

pub use event::{compose_local_datetime, EventForm};
pub use place::PlaceForm;
pub use player::{check_dorsal_available, PlayerForm};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a valid coordinate, got {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error("{date} {time} does not exist in the local timezone")]
    NonexistentLocalTime { date: String, time: String },

    #[error("Dorsal number {dorsal} is already taken by {holder}. Please choose a different number.")]
    DuplicateDorsal { dorsal: u32, holder: String },
}

impl ValidationError {
    pub fn is_duplicate_dorsal(&self) -> bool {
        matches!(self, ValidationError::DuplicateDorsal { .. })
    }
}

/// Trimmed value of a required field.
fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn whole_number(field: &'static str, value: &str) -> Result<u32, ValidationError> {
    let raw = required(field, value)?;
    raw.parse::<u32>().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw,
    })
}
