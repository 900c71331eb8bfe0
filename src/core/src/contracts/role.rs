use serde::{Deserialize, Serialize};
use std::fmt;

/// Squad standing, from the top of the ladder down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquadRole {
    StarPlayer,
    ImportantPlayer,
    RotationPlayer,
    SquadPlayer,
    YouthProspect,
    Backup,
}

impl SquadRole {
    pub const LADDER: [SquadRole; 6] = [
        SquadRole::StarPlayer,
        SquadRole::ImportantPlayer,
        SquadRole::RotationPlayer,
        SquadRole::SquadPlayer,
        SquadRole::YouthProspect,
        SquadRole::Backup,
    ];

    pub fn rank(&self) -> u8 {
        match self {
            SquadRole::StarPlayer => 6,
            SquadRole::ImportantPlayer => 5,
            SquadRole::RotationPlayer => 4,
            SquadRole::SquadPlayer => 3,
            SquadRole::YouthProspect => 2,
            SquadRole::Backup => 1,
        }
    }

    /// Ranks `other` is short of this role, 0 when it meets or beats it
    pub fn gap_to(&self, other: SquadRole) -> u8 {
        self.rank().saturating_sub(other.rank())
    }

    pub fn satisfied_by(&self, offered: SquadRole) -> bool {
        offered.rank() >= self.rank()
    }
}

impl fmt::Display for SquadRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SquadRole::StarPlayer => "star player",
            SquadRole::ImportantPlayer => "important player",
            SquadRole::RotationPlayer => "rotation player",
            SquadRole::SquadPlayer => "squad player",
            SquadRole::YouthProspect => "youth prospect",
            SquadRole::Backup => "backup",
        };
        write!(f, "{}", name)
    }
}
