use crate::Player;
use crate::shared::CurrencyValue;
use log::debug;
use serde::{Deserialize, Serialize};

/// Ratings above this are priced by the market regardless of current pay
pub const ELITE_RATING: u8 = 85;

const VALUE_GRANULARITY: f64 = 5_000.0;
const SALARY_GRANULARITY: f64 = 1_000.0;
const MIN_MARKET_VALUE: f64 = 25_000.0;
const SALARY_SHARE_OF_VALUE: f64 = 0.20;
const PERFORMANCE_CEILING: f64 = 3.0;
const POTENTIAL_BONUS_CAP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketValuation {
    pub overall_rating: u8,
    pub market_value: CurrencyValue,
    pub salary_baseline: CurrencyValue,
}

pub struct PlayerValueCalculator;

impl PlayerValueCalculator {
    pub fn calculate(player: &Player) -> MarketValuation {
        let overall = player.overall();

        let base_value = determine_base_value(overall as f64);
        let age_factor = determine_age_factor(player.age);
        let potential_factor = determine_potential_factor(player, overall);
        let performance_factor = determine_performance_factor(player);
        let versatility_factor = determine_versatility_factor(player);

        let mut value =
            base_value * age_factor * potential_factor * performance_factor * versatility_factor;

        if let Some(cap) = determine_unproven_cap(player, overall) {
            if value > cap {
                debug!(
                    "Valuation: player {} capped at {:.0} (uncapped {:.0}, salary {:.0})",
                    player.id, cap, value, player.current_salary
                );
                value = cap;
            }
        }

        let market_value = CurrencyValue::usd(value)
            .rounded_to(VALUE_GRANULARITY)
            .amount
            .max(MIN_MARKET_VALUE);

        MarketValuation {
            overall_rating: overall,
            market_value: CurrencyValue::usd(market_value),
            salary_baseline: CurrencyValue::usd(market_value * SALARY_SHARE_OF_VALUE)
                .rounded_to(SALARY_GRANULARITY),
        }
    }
}

pub fn calculate_market_value(player: &Player) -> MarketValuation {
    PlayerValueCalculator::calculate(player)
}

/// Tiered base value: linear bands up to 85, exponential for the elite.
/// 45 → 200K, 55 → 450K, 65 → 1M, 75 → 2.5M, 85 → 6M, 95 → ~31M
fn determine_base_value(overall: f64) -> f64 {
    match overall {
        o if o < 45.0 => 150_000.0 * o / 45.0,
        o if o < 55.0 => 200_000.0 + (o - 45.0) * 25_000.0,
        o if o < 65.0 => 450_000.0 + (o - 55.0) * 55_000.0,
        o if o < 75.0 => 1_000_000.0 + (o - 65.0) * 150_000.0,
        o if o <= 85.0 => 2_500_000.0 + (o - 75.0) * 350_000.0,
        o => 6_000_000.0 * 1.18f64.powf(o - 85.0),
    }
}

/// Youth and prime years carry a premium, decline years a discount
fn determine_age_factor(age: u8) -> f64 {
    match age {
        0..=20 => 1.3,
        21..=23 => 1.2,
        24..=28 => 1.1, // Prime
        29..=30 => 1.0,
        31..=32 => 0.8,
        33..=34 => 0.6,
        _ => 0.4,
    }
}

fn determine_potential_factor(player: &Player, overall: u8) -> f64 {
    let potential = player.ability.potential.average();
    let current = overall as f64;

    if player.age >= 30 || potential <= current {
        return 1.0;
    }

    1.0 + ((potential - current) * 0.02).min(POTENTIAL_BONUS_CAP)
}

/// Awards and longevity, additive on top of 1.0
fn determine_performance_factor(player: &Player) -> f64 {
    let awards = &player.awards;

    let mut factor = 1.0
        + awards.weekly as f64 * 0.01
        + awards.monthly as f64 * 0.03
        + awards.season as f64 * 0.10
        + awards.championships as f64 * 0.08;

    if player.career_games >= 100 {
        factor += 0.05;
    }
    if player.career_games >= 250 {
        factor += 0.05;
    }
    if player.career_games >= 500 {
        factor += 0.10;
    }

    factor.min(PERFORMANCE_CEILING)
}

/// Each extra discipline the player competes in at a decent level adds 5%, up to 20%
fn determine_versatility_factor(player: &Player) -> f64 {
    let extra = player.ability.proficient_disciplines().saturating_sub(1).min(4);

    1.0 + extra as f64 * 0.05
}

/// Unproven players cannot be worth more than a multiple of what they earn now.
/// Stops cheap high-potential players being flipped for far more than their proven worth.
fn determine_unproven_cap(player: &Player, overall: u8) -> Option<f64> {
    if player.is_free_agent() {
        return None;
    }

    let multiple = match overall {
        o if o < 55 => 8.0,
        o if o < 65 => 10.0,
        o if o < 75 => 12.0,
        o if o < ELITE_RATING => 15.0,
        _ => return None,
    };

    Some(player.current_salary * multiple)
}
