use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use matchday_core::forms::EventForm;
use matchday_core::views::{entries_in, group_by_day, CalendarView};
use matchday_core::{DataCache, RecordId, RemoteStore};

use super::{confirm_delete, print_fetched, report, set_if};
use crate::output::{print_table, truncate_string};

#[derive(Subcommand, Debug)]
pub enum EventsCommand {
    /// List fixtures in date order
    List,
    /// Show fixtures on a month, week or list calendar
    Calendar {
        #[arg(long, default_value = "month")]
        view: CalendarView,
        /// Day the calendar is anchored on (YYYY-MM-DD), today by default
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Schedule a fixture
    Add(EventFields),
    /// Edit a fixture; omitted fields keep their current value
    Edit {
        id: String,
        #[command(flatten)]
        fields: EventFields,
    },
    /// Remove a fixture
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct EventFields {
    #[arg(long)]
    pub name: Option<String>,
    /// Local date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// Local kick-off time, HH:MM or HH:MM:SS
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub competition: Option<String>,
    #[arg(long)]
    pub place: Option<String>,
}

impl EventFields {
    fn apply(self, form: &mut EventForm) {
        set_if(&mut form.name, self.name);
        set_if(&mut form.date, self.date);
        set_if(&mut form.time, self.time);
        set_if(&mut form.competition, self.competition);
        set_if(&mut form.place, self.place);
    }
}

pub async fn run<S: RemoteStore>(cache: &DataCache<S>, command: EventsCommand) -> Result<()> {
    let events = cache.events();

    match command {
        EventsCommand::List => {
            let mut fixtures = events.items();
            fixtures.sort_by_key(|e| e.date);
            let rows: Vec<Vec<String>> = fixtures
                .iter()
                .map(|e| {
                    vec![
                        e.id.to_string(),
                        e.formatted_datetime_standard(),
                        truncate_string(&e.name, 32),
                        e.competition.clone(),
                        e.place.clone(),
                    ]
                })
                .collect();
            print_table(&["ID", "KICK-OFF", "NAME", "COMPETITION", "PLACE"], &rows);
            print_fetched(&events);
            Ok(())
        }
        EventsCommand::Calendar { view, date } => {
            let anchor = date.unwrap_or_else(|| Local::now().date_naive());
            let entries = entries_in(&events.items(), view, anchor);
            if entries.is_empty() {
                println!("No fixtures");
                return Ok(());
            }

            match view {
                CalendarView::List => {
                    for entry in entries {
                        println!(
                            "{}  {}  ({}, {})",
                            entry.start.format("%a %d %b %Y %H:%M"),
                            entry.title,
                            entry.competition,
                            entry.place
                        );
                    }
                }
                CalendarView::Month | CalendarView::Week => {
                    for (day, day_entries) in group_by_day(entries) {
                        println!("{}", day.format("%a %d %b %Y"));
                        for entry in day_entries {
                            println!(
                                "  {}  {} [{}] @ {}",
                                entry.start.format("%H:%M"),
                                entry.title,
                                entry.competition,
                                entry.place
                            );
                        }
                    }
                }
            }
            Ok(())
        }
        EventsCommand::Add(fields) => {
            let mut form = EventForm::default();
            fields.apply(&mut form);
            let draft = form.validate()?;
            let status = events.create(&draft).await;
            report(status, &events, &format!("Scheduled {}", draft.name))
        }
        EventsCommand::Edit { id, fields } => {
            let id = RecordId::new(id);
            let current = events
                .find(&id)
                .ok_or_else(|| anyhow!("No fixture with id {}", id))?;
            let mut form = EventForm::from_event(&current);
            fields.apply(&mut form);
            let draft = form.validate()?;
            let status = events.update(&id, &draft).await;
            report(status, &events, &format!("Updated {}", draft.name))
        }
        EventsCommand::Delete { id, yes } => {
            let id = RecordId::new(id);
            let label = events
                .find(&id)
                .map_or_else(|| format!("fixture {}", id), |r| r.name);
            if !confirm_delete(&label, yes)? {
                return Ok(());
            }
            let status = events.delete(&id).await;
            report(status, &events, &format!("Deleted fixture {}", id))
        }
    }
}
