use crate::models::{Player, PlayerDraft, RecordId};

use super::{required, whole_number, ValidationError};

/// Raw create/edit player form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerForm {
    pub name: String,
    pub position: String,
    pub dorsal: String,
    pub age: String,
    pub nationality: String,
}

impl PlayerForm {
    /// Prefill an edit form from a cached player
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            position: player.position.clone(),
            dorsal: player.dorsal.to_string(),
            age: player.age.to_string(),
            nationality: player.nationality.clone(),
        }
    }

    /// Validate the form against the cached roster.
    ///
    /// `editing` is the id of the player being edited, which is excluded from
    /// the duplicate-dorsal scan. Pass `None` when creating.
    pub fn validate(
        &self,
        existing: &[Player],
        editing: Option<&RecordId>,
    ) -> Result<PlayerDraft, ValidationError> {
        let name = required("name", &self.name)?;
        let position = required("position", &self.position)?;
        let dorsal = whole_number("dorsal", &self.dorsal)?;
        let age = whole_number("age", &self.age)?;
        let nationality = required("nationality", &self.nationality)?;

        check_dorsal_available(existing, dorsal, editing)?;

        Ok(PlayerDraft {
            name,
            position,
            dorsal,
            age,
            nationality,
        })
    }
}

/// Reject `dorsal` if another cached player already wears it.
pub fn check_dorsal_available(
    existing: &[Player],
    dorsal: u32,
    editing: Option<&RecordId>,
) -> Result<(), ValidationError> {
    match existing
        .iter()
        .find(|p| p.dorsal == dorsal && Some(&p.id) != editing)
    {
        Some(holder) => Err(ValidationError::DuplicateDorsal {
            dorsal,
            holder: holder.name.clone(),
        }),
        None => Ok(()),
    }
}
