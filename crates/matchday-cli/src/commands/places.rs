use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use matchday_core::forms::PlaceForm;
use matchday_core::views::{communities, markers, PlaceFilter, DEFAULT_CENTER, DEFAULT_ZOOM};
use matchday_core::{Config, DataCache, RecordId, RemoteStore};

use super::{confirm_delete, print_fetched, report, set_if};
use crate::output::{print_table, truncate_string};

#[derive(Subcommand, Debug)]
pub enum PlacesCommand {
    /// List every stadium
    List,
    /// Map markers for stadiums with valid coordinates
    Markers {
        /// Only stadiums holding at least this many people
        #[arg(long)]
        min_capacity: Option<u32>,
        /// Only stadiums in this community (case-insensitive)
        #[arg(long)]
        community: Option<String>,
        /// Print markers as JSON
        #[arg(long)]
        json: bool,
    },
    /// Distinct communities, for filtering
    Communities,
    /// Add a stadium
    Add(PlaceFields),
    /// Edit a stadium; omitted fields keep their current value
    Edit {
        id: String,
        #[command(flatten)]
        fields: PlaceFields,
    },
    /// Remove a stadium
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct PlaceFields {
    #[arg(long)]
    pub stadium: Option<String>,
    #[arg(long)]
    pub club: Option<String>,
    #[arg(long)]
    pub capacity: Option<String>,
    #[arg(long)]
    pub community: Option<String>,
    /// Latitude in degrees; pass an empty value to clear
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<String>,
    /// Longitude in degrees; pass an empty value to clear
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<String>,
}

impl PlaceFields {
    fn apply(self, form: &mut PlaceForm) {
        set_if(&mut form.stadium, self.stadium);
        set_if(&mut form.club, self.club);
        set_if(&mut form.capacity, self.capacity);
        set_if(&mut form.community, self.community);
        set_if(&mut form.lat, self.lat);
        set_if(&mut form.lng, self.lng);
    }
}

fn coordinate(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "-".to_string())
}

pub async fn run<S: RemoteStore>(
    cache: &DataCache<S>,
    command: PlacesCommand,
    config: &Config,
) -> Result<()> {
    let places = cache.places();

    match command {
        PlacesCommand::List => {
            let rows: Vec<Vec<String>> = places
                .items()
                .iter()
                .map(|p| {
                    vec![
                        p.id.to_string(),
                        truncate_string(&p.stadium, 30),
                        truncate_string(&p.club, 24),
                        p.capacity.to_string(),
                        p.community.clone(),
                        coordinate(p.lat),
                        coordinate(p.lng),
                    ]
                })
                .collect();
            print_table(
                &["ID", "STADIUM", "CLUB", "CAPACITY", "COMMUNITY", "LAT", "LNG"],
                &rows,
            );
            print_fetched(&places);
            Ok(())
        }
        PlacesCommand::Markers {
            min_capacity,
            community,
            json,
        } => {
            let mut filter = PlaceFilter::from_config(config);
            if min_capacity.is_some() {
                filter.min_capacity = min_capacity;
            }
            if community.is_some() {
                filter.community = community;
            }

            let visible = markers(&places.items(), &filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
                return Ok(());
            }

            println!(
                "Map centered at ({}, {}), zoom {}",
                DEFAULT_CENTER.0, DEFAULT_CENTER.1, DEFAULT_ZOOM
            );
            for marker in &visible {
                println!("\n[{:.4}, {:.4}]", marker.lat, marker.lng);
                for line in marker.popup.lines() {
                    println!("  {}", line);
                }
            }
            if visible.is_empty() {
                println!("(no markers)");
            }
            Ok(())
        }
        PlacesCommand::Communities => {
            for name in communities(&places.items()) {
                println!("{}", name);
            }
            Ok(())
        }
        PlacesCommand::Add(fields) => {
            let mut form = PlaceForm::default();
            fields.apply(&mut form);
            let draft = form.validate()?;
            let status = places.create(&draft).await;
            report(status, &places, &format!("Added {}", draft.stadium))
        }
        PlacesCommand::Edit { id, fields } => {
            let id = RecordId::new(id);
            let current = places
                .find(&id)
                .ok_or_else(|| anyhow!("No stadium with id {}", id))?;
            let mut form = PlaceForm::from_place(&current);
            fields.apply(&mut form);
            let draft = form.validate()?;
            let status = places.update(&id, &draft).await;
            report(status, &places, &format!("Updated {}", draft.stadium))
        }
        PlacesCommand::Delete { id, yes } => {
            let id = RecordId::new(id);
            let label = places
                .find(&id)
                .map_or_else(|| format!("stadium {}", id), |r| r.stadium);
            if !confirm_delete(&label, yes)? {
                return Ok(());
            }
            let status = places.delete(&id).await;
            report(status, &places, &format!("Deleted stadium {}", id))
        }
    }
}
