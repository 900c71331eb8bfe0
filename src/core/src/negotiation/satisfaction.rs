use crate::ContractOffer;
use crate::negotiation::demands::ContractDemands;
use crate::negotiation::strategy::NegotiationStrategy;
use crate::shared::RandomSource;

pub const SATISFACTION_MIN: f64 = 0.0;
pub const SATISFACTION_MAX: f64 = 100.0;
const NEUTRAL: f64 = 50.0;

const SALARY_WEIGHT: f64 = 30.0;
const SALARY_OVERFLOW_CAP: f64 = 10.0;
const LENGTH_WEIGHT: f64 = 10.0;
const ROLE_WEIGHT: f64 = 10.0;
const ROLE_GAP_PENALTY: f64 = 6.0;
const CLAUSES_PRESENT_BONUS: f64 = 5.0;
const CLAUSES_MISSING_PENALTY: f64 = 10.0;
const AGENT_FLOOR_PENALTY: f64 = 8.0;
const NOISE: f64 = 5.0;

/// Per-term contributions to a satisfaction score, all relative to the neutral 50
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SatisfactionBreakdown {
    pub salary: f64,
    pub length: f64,
    pub role: f64,
    pub upfront: f64,
    pub agent_floor: f64,
    pub clauses: f64,
    pub softening: f64,
    pub noise: f64,
}

impl SatisfactionBreakdown {
    pub fn total(&self) -> f64 {
        let raw = NEUTRAL
            + self.salary
            + self.length
            + self.role
            + self.upfront
            + self.agent_floor
            + self.clauses
            + self.softening
            + self.noise;

        raw.clamp(SATISFACTION_MIN, SATISFACTION_MAX)
    }
}

/// Soft, substitutable scoring: no single weak term is an automatic no,
/// a generous salary can make up for a thin bonus and the other way round.
pub struct SatisfactionEvaluator;

impl SatisfactionEvaluator {
    pub fn evaluate<R: RandomSource + ?Sized>(
        offer: &ContractOffer,
        demands: &ContractDemands,
        round: u8,
        strategy: NegotiationStrategy,
        rng: &mut R,
    ) -> f64 {
        Self::breakdown(offer, demands, round, strategy, rng).total()
    }

    pub fn breakdown<R: RandomSource + ?Sized>(
        offer: &ContractOffer,
        demands: &ContractDemands,
        round: u8,
        strategy: NegotiationStrategy,
        rng: &mut R,
    ) -> SatisfactionBreakdown {
        SatisfactionBreakdown {
            salary: salary_score(offer, demands),
            length: length_score(offer, demands),
            role: role_score(offer, demands),
            upfront: upfront_score(offer, demands),
            agent_floor: agent_floor_score(offer, demands, rng),
            clauses: clauses_score(offer, demands),
            softening: softening_score(round, strategy),
            noise: rng.range(-NOISE, NOISE),
        }
    }
}

pub fn evaluate_offer_satisfaction<R: RandomSource + ?Sized>(
    offer: &ContractOffer,
    demands: &ContractDemands,
    round: u8,
    strategy: NegotiationStrategy,
    rng: &mut R,
) -> f64 {
    SatisfactionEvaluator::evaluate(offer, demands, round, strategy, rng)
}

/// Salary weighs a little less for players who care about money up front
fn salary_score(offer: &ContractOffer, demands: &ContractDemands) -> f64 {
    let weight = SALARY_WEIGHT * (1.0 - (demands.upfront_priority - 0.1) * 0.3);
    let salary = offer.salary;

    if salary >= demands.ideal_salary {
        // Overpaying spills over to cover weak terms elsewhere
        let overflow = if demands.ideal_salary > 0.0 {
            (salary / demands.ideal_salary - 1.0) * 50.0
        } else {
            0.0
        };

        weight + overflow.min(SALARY_OVERFLOW_CAP)
    } else if salary >= demands.min_salary {
        let span = demands.ideal_salary - demands.min_salary;

        if span > 0.0 {
            weight * (salary - demands.min_salary) / span
        } else {
            weight
        }
    } else {
        let deficit = if demands.min_salary > 0.0 {
            (demands.min_salary - salary) / demands.min_salary
        } else {
            0.0
        };

        -(20.0 + deficit * 120.0)
    }
}

fn length_score(offer: &ContractOffer, demands: &ContractDemands) -> f64 {
    if demands.accepts_length(offer.contract_length) {
        LENGTH_WEIGHT
    } else {
        -LENGTH_WEIGHT
    }
}

fn role_score(offer: &ContractOffer, demands: &ContractDemands) -> f64 {
    if demands.desired_role.satisfied_by(offer.squad_role) {
        ROLE_WEIGHT
    } else {
        -(demands.desired_role.gap_to(offer.squad_role) as f64 * ROLE_GAP_PENALTY)
    }
}

/// Signing bonus and agent fee together against what the player side expects
fn upfront_score(offer: &ContractOffer, demands: &ContractDemands) -> f64 {
    let weight = 8.0 + 15.0 * demands.upfront_priority;
    let expected = demands.upfront_expectation();

    if expected <= 0.0 {
        return weight;
    }

    match offer.signing_cost() / expected {
        r if r >= 1.0 => weight,
        r if r >= 0.5 => weight * (r - 0.5) * 2.0,
        r if r >= 0.2 => -weight * 0.5 * (0.5 - r) / 0.3,
        r => -weight * 0.5 - weight * (0.2 - r) / 0.2,
    }
}

/// Agents never work for free: a fee below 2-4% of the asked salary always hurts
fn agent_floor_score<R: RandomSource + ?Sized>(
    offer: &ContractOffer,
    demands: &ContractDemands,
    rng: &mut R,
) -> f64 {
    let floor = (demands.ideal_salary * rng.range(0.02, 0.04)).min(demands.agent_fee);

    if offer.agent_fee < floor {
        -AGENT_FLOOR_PENALTY
    } else {
        0.0
    }
}

fn clauses_score(offer: &ContractOffer, demands: &ContractDemands) -> f64 {
    let all_present = demands
        .required_clauses
        .iter()
        .all(|clause_type| offer.has_clause(*clause_type));

    if all_present {
        CLAUSES_PRESENT_BONUS
    } else {
        -CLAUSES_MISSING_PENALTY
    }
}

/// Players soften as talks drag on, flexible ones faster
fn softening_score(round: u8, strategy: NegotiationStrategy) -> f64 {
    round.saturating_sub(1) as f64 * 2.5 + strategy.flexibility() / 100.0 * 5.0
}
