use serde::{Deserialize, Serialize};

use super::{lenient, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Player {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub position: String,
    #[serde(deserialize_with = "lenient::whole_number")]
    pub dorsal: u32,
    #[serde(deserialize_with = "lenient::whole_number")]
    pub age: u32,
    pub nationality: String,
}

/// Player body for create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PlayerDraft {
    pub name: String,
    pub position: String,
    pub dorsal: u32,
    pub age: u32,
    pub nationality: String,
}

impl Player {
    /// Card subtitle: "#7 Forward"
    pub fn shirt_label(&self) -> String {
        format!("#{} {}", self.dorsal, self.position)
    }

    pub fn to_draft(&self) -> PlayerDraft {
        PlayerDraft {
            name: self.name.clone(),
            position: self.position.clone(),
            dorsal: self.dorsal,
            age: self.age,
            nationality: self.nationality.clone(),
        }
    }
}

impl Record for Player {
    type Draft = PlayerDraft;

    const ENDPOINT: &'static str = "players";
    const ENTITY: &'static str = "player";
    const COLLECTION: &'static str = "players";

    fn id(&self) -> &RecordId {
        &self.id
    }
}
