use crate::models::{or_unknown, Event};

/// Number of fixtures starting in each local hour of the day.
pub fn events_per_hour(events: &[Event]) -> [usize; 24] {
    let mut counts = [0usize; 24];
    for event in events {
        counts[event.hour()] += 1;
    }
    counts
}

/// Axis labels matching `events_per_hour`: "0:00" .. "23:00"
pub fn hour_labels() -> Vec<String> {
    (0..24).map(|h| format!("{}:00", h)).collect()
}

/// Fixture count per competition, in order of first appearance.
/// Blank competitions are counted as "Unknown".
pub fn events_per_competition(events: &[Event]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for event in events {
        let competition = or_unknown(Some(event.competition.as_str()));
        match counts.iter_mut().find(|(name, _)| *name == competition) {
            Some((_, count)) => *count += 1,
            None => counts.push((competition, 1)),
        }
    }
    counts
}
