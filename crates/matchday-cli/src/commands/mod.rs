pub mod charts;
pub mod config;
pub mod events;
pub mod places;
pub mod players;

use anyhow::{bail, Result};
use matchday_core::cache::CollectionHandle;
use matchday_core::models::Record;
use matchday_core::{OpStatus, RemoteStore};

use crate::output;

/// Turn the outcome of a cache mutation into a CLI result, surfacing the
/// collection error on failure.
fn report<S: RemoteStore, R: Record>(
    status: OpStatus,
    handle: &CollectionHandle<'_, S, R>,
    done: &str,
) -> Result<()> {
    match status {
        OpStatus::Applied => {
            println!("{}", done);
            Ok(())
        }
        OpStatus::Failed => match handle.error() {
            Some(error) => bail!(error),
            None => bail!("{} request failed", R::ENTITY),
        },
    }
}

/// Replace `target` when a new value was given on the command line.
fn set_if(target: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *target = v;
    }
}

/// Print when a listed collection was last fetched.
fn print_fetched<S: RemoteStore, R: Record>(handle: &CollectionHandle<'_, S, R>) {
    println!("\n{} fetched {}", R::COLLECTION, handle.snapshot().age_display());
}

/// Ask before deleting unless `yes` was passed. Returns false when declined.
fn confirm_delete(what: &str, yes: bool) -> Result<bool> {
    if yes || output::confirm(&format!("Delete {}?", what))? {
        Ok(true)
    } else {
        println!("Cancelled");
        Ok(false)
    }
}

