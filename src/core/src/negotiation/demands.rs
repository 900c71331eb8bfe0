use crate::negotiation::strategy::{NegotiationStrategy, NegotiationType};
use crate::shared::{CurrencyValue, RandomSource};
use crate::{ContractClauseType, MarketValuation, Player, SquadRole};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const DEMAND_GRANULARITY: f64 = 1_000.0;
const MIN_SALARY_SHARE: f64 = 0.85;
const UPFRONT_PRIORITY_MIN: f64 = 0.1;
const UPFRONT_PRIORITY_MAX: f64 = 0.9;

/// What the player privately wants. Generated once when the negotiation
/// opens and never revealed to the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDemands {
    pub min_salary: f64,
    pub ideal_salary: f64,
    pub min_contract_length: u8,
    pub max_contract_length: u8,
    pub desired_role: SquadRole,
    pub signing_bonus: f64,
    pub agent_fee: f64,
    pub release_clause: Option<f64>,
    pub required_clauses: BTreeSet<ContractClauseType>,
    pub flexibility: f64,      // 0-100
    pub upfront_priority: f64, // 0.1-0.9
}

impl ContractDemands {
    pub fn accepts_length(&self, years: u8) -> bool {
        (self.min_contract_length..=self.max_contract_length).contains(&years)
    }

    /// Signing bonus and agent fee the player side expects together
    pub fn upfront_expectation(&self) -> f64 {
        self.signing_bonus + self.agent_fee
    }
}

/// Quality band of the division the team plays in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivisionContext {
    pub min_rating: u8,
    pub max_rating: u8,
}

impl DivisionContext {
    pub fn new(min_rating: u8, max_rating: u8) -> Self {
        DivisionContext {
            min_rating: min_rating.min(max_rating),
            max_rating: max_rating.max(min_rating),
        }
    }

    pub fn desired_role(&self, overall: u8, age: u8) -> SquadRole {
        let min = self.min_rating as f64;
        let max = self.max_rating as f64;
        let mid = (min + max) / 2.0;
        let upper = mid + (max - mid) / 2.0;
        let rating = overall as f64;

        match rating {
            r if r >= max => SquadRole::StarPlayer,
            r if r >= upper => SquadRole::ImportantPlayer,
            r if r >= mid => SquadRole::RotationPlayer,
            r if r >= min => SquadRole::SquadPlayer,
            _ if age <= 21 => SquadRole::YouthProspect,
            _ => SquadRole::Backup,
        }
    }
}

/// Reference the player measures their standing against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoleContext {
    Division(DivisionContext),
    /// Standing measured against the squad's average rating
    TeamAverage(u8),
}

impl RoleContext {
    pub fn desired_role(&self, overall: u8, age: u8) -> SquadRole {
        match self {
            RoleContext::Division(division) => division.desired_role(overall, age),
            RoleContext::TeamAverage(average) => {
                let diff = overall as i16 - *average as i16;

                match diff {
                    d if d >= 10 => SquadRole::StarPlayer,
                    d if d >= 5 => SquadRole::ImportantPlayer,
                    d if d >= -3 => SquadRole::RotationPlayer,
                    d if d >= -10 => SquadRole::SquadPlayer,
                    _ if age <= 21 => SquadRole::YouthProspect,
                    _ => SquadRole::Backup,
                }
            }
        }
    }
}

pub struct DemandGenerator;

impl DemandGenerator {
    pub fn generate<R: RandomSource + ?Sized>(
        player: &Player,
        valuation: &MarketValuation,
        strategy: NegotiationStrategy,
        negotiation_type: NegotiationType,
        role_context: &RoleContext,
        rng: &mut R,
    ) -> ContractDemands {
        let ambition = player.ambition_clamped();
        let rating_share = valuation.overall_rating as f64 / 100.0;

        // Ambition moves demands up to 30% either way, market noise another 15%.
        // Salary demand is deliberately a poor proxy for quality.
        let ambition_scale = 1.0 + (ambition - 1.0) * 2.0;
        let market_noise = rng.range(0.85, 1.15);
        let transfer_premium = match negotiation_type {
            NegotiationType::Transfer => 1.05,
            _ => 1.0,
        };

        let ideal_salary = round_demand(
            valuation.salary_baseline.amount
                * strategy.salary_multiplier()
                * ambition_scale
                * market_noise
                * transfer_premium,
        );
        let min_salary = round_demand(ideal_salary * MIN_SALARY_SHARE);

        let (min_contract_length, max_contract_length) = contract_length_band(player.age);
        let desired_role = role_context.desired_role(valuation.overall_rating, player.age);

        // Player and agent ask independently
        let free_agent_boost = match negotiation_type {
            NegotiationType::FreeAgent => 1.5,
            _ => 1.0,
        };
        let signing_bonus = round_demand(
            ideal_salary * (0.05 + rating_share * 0.25) * rng.range(0.75, 1.25) * free_agent_boost,
        );
        let agent_fee =
            round_demand(ideal_salary * (0.03 + rating_share * 0.07) * rng.range(0.7, 1.3));

        let strategy_bias = match strategy {
            NegotiationStrategy::Aggressive => 0.1,
            _ => 0.0,
        };
        let upfront_priority = (0.3 + (ambition - 1.0) * 1.5 + strategy_bias + rng.range(-0.15, 0.15))
            .clamp(UPFRONT_PRIORITY_MIN, UPFRONT_PRIORITY_MAX);

        let required_clauses = required_clauses(strategy, desired_role, rng);

        let release_clause = if required_clauses.contains(&ContractClauseType::NoReleaseClause) {
            None
        } else if ambition > 1.05 {
            Some(valuation.market_value.scaled(1.5).rounded_to(DEMAND_GRANULARITY).amount)
        } else {
            None
        };

        debug!(
            "Demands: player {} ({}) wants {:.0} (min {:.0}) as {} for {}-{} years",
            player.id, strategy, ideal_salary, min_salary, desired_role, min_contract_length, max_contract_length
        );

        ContractDemands {
            min_salary,
            ideal_salary,
            min_contract_length,
            max_contract_length,
            desired_role,
            signing_bonus,
            agent_fee,
            release_clause,
            required_clauses,
            flexibility: strategy.flexibility(),
            upfront_priority,
        }
    }
}

fn round_demand(amount: f64) -> f64 {
    CurrencyValue::usd(amount).rounded_to(DEMAND_GRANULARITY).amount.max(0.0)
}

/// Younger players want security for longer
fn contract_length_band(age: u8) -> (u8, u8) {
    match age {
        0..=23 => (3, 5),
        24..=29 => (2, 4),
        30..=32 => (1, 3),
        _ => (1, 2),
    }
}

fn required_clauses<R: RandomSource + ?Sized>(
    strategy: NegotiationStrategy,
    desired_role: SquadRole,
    rng: &mut R,
) -> BTreeSet<ContractClauseType> {
    let mut clauses = BTreeSet::new();

    if strategy == NegotiationStrategy::Desperate {
        return clauses;
    }

    if strategy == NegotiationStrategy::Aggressive && rng.chance(0.5) {
        clauses.insert(ContractClauseType::NoReleaseClause);
    }

    match desired_role {
        SquadRole::StarPlayer => {
            if rng.chance(0.4) {
                clauses.insert(ContractClauseType::ExtensionOption);
            }
            if rng.chance(0.3) {
                clauses.insert(ContractClauseType::HighestPaid);
            }
        }
        SquadRole::ImportantPlayer => {
            if rng.chance(0.25) {
                clauses.insert(ContractClauseType::PlayingTimeGuarantee);
            }
        }
        _ => {}
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::NeutralRandom;
    use crate::{AbilityProfile, PlayerAttributes, PlayerPotential, calculate_market_value};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Always returns the same sample, to force probabilistic branches
    struct FixedRandom(f64);

    impl RandomSource for FixedRandom {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    fn player(overall: u8, age: u8) -> Player {
        Player::new(
            3,
            age,
            AbilityProfile::new(
                PlayerAttributes::uniform(overall),
                PlayerPotential::uniform(overall),
            ),
        )
    }

    fn generate<R: RandomSource>(
        player: &Player,
        strategy: NegotiationStrategy,
        negotiation_type: NegotiationType,
        rng: &mut R,
    ) -> ContractDemands {
        let valuation = calculate_market_value(player);
        DemandGenerator::generate(
            player,
            &valuation,
            strategy,
            negotiation_type,
            &RoleContext::Division(DivisionContext::new(55, 75)),
            rng,
        )
    }

    #[test]
    fn test_min_salary_is_85_percent_of_ideal() {
        let demands = generate(&player(60, 25), NegotiationStrategy::Moderate, NegotiationType::Renewal, &mut NeutralRandom);

        assert!(demands.min_salary <= demands.ideal_salary);
        assert!((demands.min_salary / demands.ideal_salary - MIN_SALARY_SHARE).abs() < 0.01);
    }

    #[test]
    fn test_strategy_orders_ideal_salary() {
        let subject = player(65, 26);
        let ideal = |strategy| {
            generate(&subject, strategy, NegotiationType::Renewal, &mut NeutralRandom).ideal_salary
        };

        assert!(ideal(NegotiationStrategy::Aggressive) > ideal(NegotiationStrategy::Moderate));
        assert!(ideal(NegotiationStrategy::Moderate) > ideal(NegotiationStrategy::Passive));
        assert!(ideal(NegotiationStrategy::Passive) > ideal(NegotiationStrategy::Desperate));

        let baseline = calculate_market_value(&subject).salary_baseline.amount;
        assert!(ideal(NegotiationStrategy::Desperate) < baseline);
    }

    #[test]
    fn test_ambition_inflates_demands() {
        let modest = player(65, 26).with_ambition(0.85);
        let ambitious = player(65, 26).with_ambition(1.15);

        let modest_ideal = generate(&modest, NegotiationStrategy::Moderate, NegotiationType::Renewal, &mut NeutralRandom).ideal_salary;
        let ambitious_ideal = generate(&ambitious, NegotiationStrategy::Moderate, NegotiationType::Renewal, &mut NeutralRandom).ideal_salary;

        // 0.7x versus 1.3x of the same base
        assert!(ambitious_ideal / modest_ideal > 1.8);
    }

    #[test]
    fn test_contract_length_narrows_with_age() {
        assert_eq!(contract_length_band(19), (3, 5));
        assert_eq!(contract_length_band(27), (2, 4));
        assert_eq!(contract_length_band(31), (1, 3));
        assert_eq!(contract_length_band(35), (1, 2));
    }

    #[test]
    fn test_division_role_ladder() {
        let division = DivisionContext::new(55, 75);

        assert_eq!(division.desired_role(76, 27), SquadRole::StarPlayer);
        assert_eq!(division.desired_role(72, 27), SquadRole::ImportantPlayer);
        assert_eq!(division.desired_role(66, 27), SquadRole::RotationPlayer);
        assert_eq!(division.desired_role(60, 27), SquadRole::SquadPlayer);
        assert_eq!(division.desired_role(50, 20), SquadRole::YouthProspect);
        assert_eq!(division.desired_role(50, 27), SquadRole::Backup);
    }

    #[test]
    fn test_team_average_role_ladder() {
        let context = RoleContext::TeamAverage(60);

        assert_eq!(context.desired_role(72, 27), SquadRole::StarPlayer);
        assert_eq!(context.desired_role(66, 27), SquadRole::ImportantPlayer);
        assert_eq!(context.desired_role(58, 27), SquadRole::RotationPlayer);
        assert_eq!(context.desired_role(52, 27), SquadRole::SquadPlayer);
        assert_eq!(context.desired_role(40, 18), SquadRole::YouthProspect);
        assert_eq!(context.desired_role(40, 30), SquadRole::Backup);
    }

    #[test]
    fn test_upfront_priority_bounds() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let demands = generate(
                &player(70, 24).with_ambition(1.15),
                NegotiationStrategy::Aggressive,
                NegotiationType::FreeAgent,
                &mut rng,
            );

            assert!((UPFRONT_PRIORITY_MIN..=UPFRONT_PRIORITY_MAX).contains(&demands.upfront_priority));
            assert!(demands.signing_bonus >= 0.0);
            assert!(demands.agent_fee >= 0.0);
            assert!(demands.min_contract_length <= demands.max_contract_length);
        }
    }

    #[test]
    fn test_aggressive_star_requires_clauses() {
        let star = player(80, 27);
        let demands = generate(&star, NegotiationStrategy::Aggressive, NegotiationType::Transfer, &mut FixedRandom(0.0));

        assert_eq!(demands.desired_role, SquadRole::StarPlayer);
        assert!(demands.required_clauses.contains(&ContractClauseType::NoReleaseClause));
        assert!(demands.required_clauses.contains(&ContractClauseType::ExtensionOption));
        assert!(demands.required_clauses.contains(&ContractClauseType::HighestPaid));
        assert_eq!(demands.release_clause, None);
    }

    #[test]
    fn test_desperate_player_requires_nothing() {
        let demands = generate(&player(80, 27), NegotiationStrategy::Desperate, NegotiationType::FreeAgent, &mut FixedRandom(0.0));

        assert!(demands.required_clauses.is_empty());
        assert_eq!(demands.flexibility, NegotiationStrategy::Desperate.flexibility());
    }

    #[test]
    fn test_ambitious_player_wants_release_clause() {
        let ambitious = player(70, 25).with_ambition(1.12);
        let demands = generate(&ambitious, NegotiationStrategy::Moderate, NegotiationType::Renewal, &mut NeutralRandom);

        let market_value = calculate_market_value(&ambitious).market_value.amount;
        let release_clause = demands.release_clause.expect("ambitious players ask for a release clause");
        assert!((release_clause - market_value * 1.5).abs() <= DEMAND_GRANULARITY / 2.0);
    }

    #[test]
    fn test_free_agent_expects_bigger_signing_bonus() {
        let subject = player(65, 26);
        let renewal = generate(&subject, NegotiationStrategy::Moderate, NegotiationType::Renewal, &mut NeutralRandom);
        let free_agent = generate(&subject, NegotiationStrategy::Moderate, NegotiationType::FreeAgent, &mut NeutralRandom);

        assert!(free_agent.signing_bonus > renewal.signing_bonus);
    }

    #[test]
    fn test_generation_is_reproducible_with_seed() {
        let subject = player(68, 23).with_ambition(1.05);
        let first = generate(&subject, NegotiationStrategy::Moderate, NegotiationType::Transfer, &mut StdRng::seed_from_u64(9));
        let second = generate(&subject, NegotiationStrategy::Moderate, NegotiationType::Transfer, &mut StdRng::seed_from_u64(9));

        assert_eq!(first, second);
    }
}
