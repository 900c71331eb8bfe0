use crate::negotiation::config::NegotiationConfig;
use crate::negotiation::demands::ContractDemands;
use crate::negotiation::strategy::NegotiationStrategy;
use crate::{ContractClause, ContractClauseType, ContractOffer};

pub struct CounterOfferGenerator;

impl CounterOfferGenerator {
    /// Share of the gap between the team's offer and the demand the player insists on.
    /// Rigid players early in the talks hold out for nearly everything.
    pub fn concession_fraction(demands: &ContractDemands, round: u8, config: &NegotiationConfig) -> f64 {
        (1.0 - (demands.flexibility / 100.0 + round as f64 * config.counter_round_bonus)).clamp(0.0, 1.0)
    }

    pub fn generate(
        team_offer: &ContractOffer,
        demands: &ContractDemands,
        round: u8,
        strategy: NegotiationStrategy,
        config: &NegotiationConfig,
    ) -> ContractOffer {
        let fraction = Self::concession_fraction(demands, round, config);
        let mut counter = team_offer.clone();

        // Money only ever moves up towards the demand, never gives back what was offered
        counter.salary = raise_towards(team_offer.salary, demands.ideal_salary, fraction);
        counter.agent_fee = raise_towards(team_offer.agent_fee, demands.agent_fee, fraction);
        counter.signing_bonus = raise_towards(team_offer.signing_bonus, demands.signing_bonus, fraction);

        counter.contract_length = team_offer
            .contract_length
            .clamp(demands.min_contract_length, demands.max_contract_length);

        if !demands.desired_role.satisfied_by(team_offer.squad_role) {
            counter.squad_role = demands.desired_role;
        }

        counter.release_clause = counter_release_clause(team_offer, demands, fraction);

        for clause_type in &demands.required_clauses {
            if !counter.has_clause(*clause_type) {
                counter.clauses.push(ContractClause::with_default_value(*clause_type));
            }
        }

        counter.yearly_wage_rise = team_offer.yearly_wage_rise.max(strategy.minimum_wage_rise());

        counter
    }
}

pub fn generate_counter_offer(
    team_offer: &ContractOffer,
    demands: &ContractDemands,
    round: u8,
    strategy: NegotiationStrategy,
) -> ContractOffer {
    CounterOfferGenerator::generate(team_offer, demands, round, strategy, &NegotiationConfig::default())
}

fn raise_towards(offered: f64, demanded: f64, fraction: f64) -> f64 {
    if offered < demanded {
        (offered + (demanded - offered) * fraction).round()
    } else {
        offered
    }
}

/// A player who wants a way out pushes the buy-out figure down towards their number
fn counter_release_clause(team_offer: &ContractOffer, demands: &ContractDemands, fraction: f64) -> Option<f64> {
    if demands.required_clauses.contains(&ContractClauseType::NoReleaseClause) {
        return None;
    }

    match (team_offer.release_clause, demands.release_clause) {
        (Some(offered), Some(wanted)) if offered > wanted => {
            Some((offered - (offered - wanted) * fraction).round())
        }
        (None, Some(wanted)) => Some(wanted),
        (offered, _) => offered,
    }
}
