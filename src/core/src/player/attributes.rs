use serde::{Deserialize, Serialize};

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 100;

/// Rating a discipline must reach to count towards the multi-discipline bonus
pub const DISCIPLINE_PROFICIENCY: u8 = 50;

/// Per-attribute ratings, all on a 1-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    // physical
    pub strength: u8,
    pub speed: u8,
    pub endurance: u8,
    pub agility: u8,

    // technical
    pub technique: u8,

    // mental
    pub awareness: u8,
    pub composure: u8,
    pub teamwork: u8,
}

impl PlayerAttributes {
    pub fn uniform(rating: u8) -> Self {
        PlayerAttributes {
            strength: rating,
            speed: rating,
            endurance: rating,
            agility: rating,
            technique: rating,
            awareness: rating,
            composure: rating,
            teamwork: rating,
        }
    }

    /// Weighted composite rating. Technique and reading of the game weigh more
    /// than raw physique.
    pub fn overall(&self) -> u8 {
        let weighted = self.technique as f64 * 0.20
            + self.awareness as f64 * 0.15
            + self.speed as f64 * 0.15
            + self.strength as f64 * 0.10
            + self.endurance as f64 * 0.10
            + self.agility as f64 * 0.10
            + self.composure as f64 * 0.10
            + self.teamwork as f64 * 0.10;

        (weighted.round() as u8).clamp(RATING_MIN, RATING_MAX)
    }
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        PlayerAttributes::uniform(RATING_MIN)
    }
}

/// Ceiling the player can grow to, by category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPotential {
    pub physical: u8,
    pub technical: u8,
    pub mental: u8,
}

impl PlayerPotential {
    pub fn uniform(rating: u8) -> Self {
        PlayerPotential {
            physical: rating,
            technical: rating,
            mental: rating,
        }
    }

    pub fn average(&self) -> f64 {
        (self.physical as f64 + self.technical as f64 + self.mental as f64) / 3.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineRating {
    pub discipline: String,
    pub rating: u8,
}

impl DisciplineRating {
    pub fn new(discipline: &str, rating: u8) -> Self {
        DisciplineRating {
            discipline: discipline.to_string(),
            rating,
        }
    }
}

/// Everything the valuation needs to know about what a player can do
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityProfile {
    pub attributes: PlayerAttributes,
    pub potential: PlayerPotential,
    pub disciplines: Vec<DisciplineRating>,
}

impl AbilityProfile {
    pub fn new(attributes: PlayerAttributes, potential: PlayerPotential) -> Self {
        AbilityProfile {
            attributes,
            potential,
            disciplines: Vec::new(),
        }
    }

    pub fn with_discipline(mut self, discipline: &str, rating: u8) -> Self {
        self.disciplines.push(DisciplineRating::new(discipline, rating));
        self
    }

    pub fn overall(&self) -> u8 {
        self.attributes.overall()
    }

    pub fn proficient_disciplines(&self) -> usize {
        self.disciplines
            .iter()
            .filter(|d| d.rating >= DISCIPLINE_PROFICIENCY)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_attributes_overall() {
        assert_eq!(PlayerAttributes::uniform(50).overall(), 50);
        assert_eq!(PlayerAttributes::uniform(100).overall(), 100);
    }

    #[test]
    fn test_overall_weights_technique() {
        let mut technical = PlayerAttributes::uniform(60);
        technical.technique = 80;

        let mut physical = PlayerAttributes::uniform(60);
        physical.strength = 80;

        assert_eq!(technical.overall(), 64);
        assert_eq!(physical.overall(), 62);
    }

    #[test]
    fn test_overall_never_below_minimum() {
        assert_eq!(PlayerAttributes::uniform(0).overall(), RATING_MIN);
    }

    #[test]
    fn test_potential_average() {
        let potential = PlayerPotential {
            physical: 60,
            technical: 70,
            mental: 80,
        };
        assert_eq!(potential.average(), 70.0);
    }

    #[test]
    fn test_proficient_disciplines() {
        let profile = AbilityProfile::new(PlayerAttributes::uniform(60), PlayerPotential::uniform(60))
            .with_discipline("football", 72)
            .with_discipline("futsal", 50)
            .with_discipline("beach", 31);

        assert_eq!(profile.proficient_disciplines(), 2);
    }
}
