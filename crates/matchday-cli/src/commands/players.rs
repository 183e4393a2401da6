use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use matchday_core::forms::PlayerForm;
use matchday_core::{DataCache, RecordId, RemoteStore};

use super::{confirm_delete, print_fetched, report, set_if};
use crate::output::{print_table, truncate_string};

#[derive(Subcommand, Debug)]
pub enum PlayersCommand {
    /// List the squad
    List,
    /// Register a new player
    Add(PlayerFields),
    /// Edit a player; omitted fields keep their current value
    Edit {
        id: String,
        #[command(flatten)]
        fields: PlayerFields,
    },
    /// Remove a player
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct PlayerFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    /// Shirt number, unique within the squad
    #[arg(long)]
    pub dorsal: Option<String>,
    #[arg(long)]
    pub age: Option<String>,
    #[arg(long)]
    pub nationality: Option<String>,
}

impl PlayerFields {
    fn apply(self, form: &mut PlayerForm) {
        set_if(&mut form.name, self.name);
        set_if(&mut form.position, self.position);
        set_if(&mut form.dorsal, self.dorsal);
        set_if(&mut form.age, self.age);
        set_if(&mut form.nationality, self.nationality);
    }
}

pub async fn run<S: RemoteStore>(cache: &DataCache<S>, command: PlayersCommand) -> Result<()> {
    let players = cache.players();

    match command {
        PlayersCommand::List => {
            let mut roster = players.items();
            roster.sort_by_key(|p| p.dorsal);
            let rows: Vec<Vec<String>> = roster
                .iter()
                .map(|p| {
                    vec![
                        p.id.to_string(),
                        p.shirt_label(),
                        truncate_string(&p.name, 28),
                        p.age.to_string(),
                        p.nationality.clone(),
                    ]
                })
                .collect();
            print_table(&["ID", "SHIRT", "NAME", "AGE", "NATIONALITY"], &rows);
            print_fetched(&players);
            Ok(())
        }
        PlayersCommand::Add(fields) => {
            let mut form = PlayerForm::default();
            fields.apply(&mut form);
            let draft = form.validate(&players.items(), None)?;
            let status = players.create(&draft).await;
            report(status, &players, &format!("Added {}", draft.name))
        }
        PlayersCommand::Edit { id, fields } => {
            let id = RecordId::new(id);
            let current = players
                .find(&id)
                .ok_or_else(|| anyhow!("No player with id {}", id))?;
            let mut form = PlayerForm::from_player(&current);
            fields.apply(&mut form);
            let draft = form.validate(&players.items(), Some(&id))?;
            let status = players.update(&id, &draft).await;
            report(status, &players, &format!("Updated {}", draft.name))
        }
        PlayersCommand::Delete { id, yes } => {
            let id = RecordId::new(id);
            let label = players
                .find(&id)
                .map_or_else(|| format!("player {}", id), |r| r.name);
            if !confirm_delete(&label, yes)? {
                return Ok(());
            }
            let status = players.delete(&id).await;
            report(status, &players, &format!("Deleted player {}", id))
        }
    }
}
