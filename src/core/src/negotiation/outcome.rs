use crate::negotiation::config::NegotiationConfig;
use crate::negotiation::strategy::NegotiationStrategy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationOutcome {
    Accepted,
    Rejected,
    Countered,
    /// A counter-offer waiting for the team's answer
    Considering,
}

impl NegotiationOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, NegotiationOutcome::Accepted | NegotiationOutcome::Rejected)
    }
}

/// What the player decides about a team offer. Narrower than
/// `NegotiationOutcome`: a player never answers an offer with `Considering`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundDecision {
    Accept,
    Reject,
    Counter,
}

impl From<RoundDecision> for NegotiationOutcome {
    fn from(decision: RoundDecision) -> Self {
        match decision {
            RoundDecision::Accept => NegotiationOutcome::Accepted,
            RoundDecision::Reject => NegotiationOutcome::Rejected,
            RoundDecision::Counter => NegotiationOutcome::Countered,
        }
    }
}

pub struct OutcomeResolver;

impl OutcomeResolver {
    /// Falls every round and for more flexible players
    pub fn accept_threshold(round: u8, strategy: NegotiationStrategy, config: &NegotiationConfig) -> f64 {
        config.accept_base
            - round.saturating_sub(1) as f64 * config.accept_round_decay
            - strategy.flexibility() * config.flexibility_scale
    }

    pub fn reject_threshold(round: u8, config: &NegotiationConfig) -> f64 {
        config.reject_base - round as f64 * config.reject_round_decay
    }

    pub fn resolve(
        satisfaction: f64,
        round: u8,
        max_rounds: u8,
        strategy: NegotiationStrategy,
        config: &NegotiationConfig,
    ) -> RoundDecision {
        if satisfaction >= Self::accept_threshold(round, strategy, config) {
            return RoundDecision::Accept;
        }

        if satisfaction < Self::reject_threshold(round, config) || round >= max_rounds {
            return RoundDecision::Reject;
        }

        RoundDecision::Counter
    }
}

pub fn determine_negotiation_outcome(
    satisfaction: f64,
    round: u8,
    max_rounds: u8,
    strategy: NegotiationStrategy,
) -> NegotiationOutcome {
    OutcomeResolver::resolve(satisfaction, round, max_rounds, strategy, &NegotiationConfig::default()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRATEGIES: [NegotiationStrategy; 4] = [
        NegotiationStrategy::Aggressive,
        NegotiationStrategy::Moderate,
        NegotiationStrategy::Passive,
        NegotiationStrategy::Desperate,
    ];

    #[test]
    fn test_accept_threshold_strictly_decreases() {
        let config = NegotiationConfig::default();

        for strategy in STRATEGIES {
            for round in 2..=config.max_rounds {
                assert!(
                    OutcomeResolver::accept_threshold(round, strategy, &config)
                        < OutcomeResolver::accept_threshold(round - 1, strategy, &config)
                );
            }
        }
    }

    #[test]
    fn test_flexible_players_accept_sooner() {
        let config = NegotiationConfig::default();
        assert!(
            OutcomeResolver::accept_threshold(1, NegotiationStrategy::Desperate, &config)
                < OutcomeResolver::accept_threshold(1, NegotiationStrategy::Aggressive, &config)
        );
    }

    #[test]
    fn test_satisfaction_between_thresholds_accepted_next_round() {
        let config = NegotiationConfig::default();
        let strategy = NegotiationStrategy::Moderate;

        let round_two = OutcomeResolver::accept_threshold(2, strategy, &config);
        let round_three = OutcomeResolver::accept_threshold(3, strategy, &config);
        let satisfaction = (round_two + round_three) / 2.0;

        assert_eq!(determine_negotiation_outcome(satisfaction, 2, 5, strategy), NegotiationOutcome::Countered);
        assert_eq!(determine_negotiation_outcome(satisfaction, 3, 5, strategy), NegotiationOutcome::Accepted);
    }

    #[test]
    fn test_low_satisfaction_rejected() {
        assert_eq!(
            determine_negotiation_outcome(20.0, 1, 5, NegotiationStrategy::Desperate),
            NegotiationOutcome::Rejected
        );
    }

    #[test]
    fn test_final_round_forces_decision() {
        assert_eq!(
            determine_negotiation_outcome(60.0, 4, 5, NegotiationStrategy::Aggressive),
            NegotiationOutcome::Countered
        );
        assert_eq!(
            determine_negotiation_outcome(60.0, 5, 5, NegotiationStrategy::Aggressive),
            NegotiationOutcome::Rejected
        );
        assert_eq!(
            determine_negotiation_outcome(95.0, 5, 5, NegotiationStrategy::Aggressive),
            NegotiationOutcome::Accepted
        );
    }

    #[test]
    fn test_resolve_returns_decision() {
        let config = NegotiationConfig::default();
        let strategy = NegotiationStrategy::Moderate;

        assert_eq!(OutcomeResolver::resolve(99.0, 1, 5, strategy, &config), RoundDecision::Accept);
        assert_eq!(OutcomeResolver::resolve(60.0, 1, 5, strategy, &config), RoundDecision::Counter);
        assert_eq!(OutcomeResolver::resolve(60.0, 5, 5, strategy, &config), RoundDecision::Reject);
        assert_eq!(NegotiationOutcome::from(RoundDecision::Counter), NegotiationOutcome::Countered);
    }

    #[test]
    fn test_resolver_never_considers() {
        for strategy in STRATEGIES {
            for round in 1..=5 {
                for satisfaction in (0..=100).step_by(5) {
                    let outcome = determine_negotiation_outcome(satisfaction as f64, round, 5, strategy);
                    assert_ne!(outcome, NegotiationOutcome::Considering);
                }
            }
        }
    }
}
