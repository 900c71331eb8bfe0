use crate::player::attributes::AbilityProfile;
use serde::{Deserialize, Serialize};

pub const AMBITION_MIN: f32 = 0.85;
pub const AMBITION_MAX: f32 = 1.15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AwardHistory {
    pub weekly: u16,
    pub monthly: u16,
    pub season: u16,
    pub championships: u16,
}

/// Negotiation-facing view of a player, supplied by the roster subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub age: u8,
    pub ability: AbilityProfile,
    pub awards: AwardHistory,
    pub career_games: u32,

    /// Annual salary under the current deal, 0 for free agents
    pub current_salary: f64,

    /// Personality trait inflating or deflating salary demands
    pub ambition: f32,
}

impl Player {
    pub fn new(id: u32, age: u8, ability: AbilityProfile) -> Self {
        Player {
            id,
            age,
            ability,
            awards: AwardHistory::default(),
            career_games: 0,
            current_salary: 0.0,
            ambition: 1.0,
        }
    }

    pub fn with_awards(mut self, awards: AwardHistory) -> Self {
        self.awards = awards;
        self
    }

    pub fn with_career_games(mut self, games: u32) -> Self {
        self.career_games = games;
        self
    }

    pub fn with_current_salary(mut self, salary: f64) -> Self {
        self.current_salary = salary;
        self
    }

    pub fn with_ambition(mut self, ambition: f32) -> Self {
        self.ambition = ambition;
        self
    }

    pub fn overall(&self) -> u8 {
        self.ability.overall()
    }

    pub fn ambition_clamped(&self) -> f64 {
        self.ambition.clamp(AMBITION_MIN, AMBITION_MAX) as f64
    }

    pub fn is_free_agent(&self) -> bool {
        self.current_salary <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::attributes::{PlayerAttributes, PlayerPotential};

    fn player() -> Player {
        Player::new(
            7,
            24,
            AbilityProfile::new(PlayerAttributes::uniform(62), PlayerPotential::uniform(70)),
        )
    }

    #[test]
    fn test_new_player_is_free_agent() {
        let player = player();
        assert!(player.is_free_agent());
        assert_eq!(player.overall(), 62);

        let signed = player.with_current_salary(120_000.0);
        assert!(!signed.is_free_agent());
    }

    #[test]
    fn test_ambition_is_clamped() {
        assert_eq!(player().with_ambition(2.0).ambition_clamped(), AMBITION_MAX as f64);
        assert_eq!(player().with_ambition(0.1).ambition_clamped(), AMBITION_MIN as f64);
    }
}
