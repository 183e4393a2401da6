use anyhow::Result;
use matchday_core::views::{events_per_competition, events_per_hour, hour_labels};
use matchday_core::{DataCache, RemoteStore};

use crate::output::bar;

/// Print both fixture charts as text histograms.
pub fn run<S: RemoteStore>(cache: &DataCache<S>) -> Result<()> {
    let events = cache.events().items();

    println!("Events per hour");
    let counts = events_per_hour(&events);
    for (label, count) in hour_labels().iter().zip(counts) {
        println!("{:>6} {:>3} {}", label, count, bar(count));
    }

    println!("\nEvents per competition");
    let by_competition = events_per_competition(&events);
    if by_competition.is_empty() {
        println!("(none)");
    }
    let width = by_competition
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    for (name, count) in &by_competition {
        println!("{:<width$} {:>3} {}", name, count, bar(*count), width = width);
    }
    Ok(())
}
