use crate::Player;
use crate::shared::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationType {
    Renewal,
    FreeAgent,
    Transfer,
}

/// Player's negotiating posture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationStrategy {
    Aggressive,
    Moderate,
    Passive,
    Desperate,
}

impl NegotiationStrategy {
    /// Picks a posture from quality, ambition, age and market situation.
    /// Strong ambitious players being sold play hardball, ageing free agents take what they get.
    pub fn determine<R: RandomSource + ?Sized>(
        player: &Player,
        negotiation_type: NegotiationType,
        rng: &mut R,
    ) -> Self {
        let mut posture = (player.overall() as f64 - 60.0) / 40.0
            + (player.ambition_clamped() - 1.0) * 4.0;

        if player.age >= 32 {
            posture -= 0.4;
        }

        match negotiation_type {
            NegotiationType::FreeAgent => posture -= 0.3,
            NegotiationType::Transfer => posture += 0.2,
            NegotiationType::Renewal => {}
        }

        posture += rng.range(-0.25, 0.25);

        match posture {
            p if p >= 0.5 => NegotiationStrategy::Aggressive,
            p if p >= 0.0 => NegotiationStrategy::Moderate,
            p if p >= -0.5 => NegotiationStrategy::Passive,
            _ => NegotiationStrategy::Desperate,
        }
    }

    /// Ideal salary relative to the valuation baseline. Desperate players undervalue themselves.
    pub fn salary_multiplier(&self) -> f64 {
        match self {
            NegotiationStrategy::Aggressive => 1.3,
            NegotiationStrategy::Moderate => 1.1,
            NegotiationStrategy::Passive => 1.0,
            NegotiationStrategy::Desperate => 0.85,
        }
    }

    /// 0-100, how readily the player softens
    pub fn flexibility(&self) -> f64 {
        match self {
            NegotiationStrategy::Aggressive => 20.0,
            NegotiationStrategy::Moderate => 45.0,
            NegotiationStrategy::Passive => 65.0,
            NegotiationStrategy::Desperate => 85.0,
        }
    }

    /// Yearly wage rise (%) the player insists on when countering
    pub fn minimum_wage_rise(&self) -> f32 {
        match self {
            NegotiationStrategy::Aggressive => 5.0,
            NegotiationStrategy::Moderate => 3.0,
            NegotiationStrategy::Passive | NegotiationStrategy::Desperate => 0.0,
        }
    }
}

impl fmt::Display for NegotiationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NegotiationStrategy::Aggressive => "aggressive",
            NegotiationStrategy::Moderate => "moderate",
            NegotiationStrategy::Passive => "passive",
            NegotiationStrategy::Desperate => "desperate",
        };
        write!(f, "{}", name)
    }
}
