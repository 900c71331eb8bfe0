use crate::negotiation::config::NegotiationConfig;
use crate::negotiation::counter::CounterOfferGenerator;
use crate::negotiation::demands::{ContractDemands, DemandGenerator, RoleContext};
use crate::negotiation::error::NegotiationError;
use crate::negotiation::messages::response_message;
use crate::negotiation::outcome::{NegotiationOutcome, OutcomeResolver, RoundDecision};
use crate::negotiation::satisfaction::SatisfactionEvaluator;
use crate::negotiation::strategy::{NegotiationStrategy, NegotiationType};
use crate::shared::RandomSource;
use crate::{
    ContractFactory, ContractOffer, OfferViolation, Player, PlayerContract, calculate_market_value,
};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationStatus {
    InProgress,
    Accepted,
    Rejected,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferSource {
    Team,
    Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationRound {
    pub round: u8,
    pub offer: ContractOffer,
    pub from: OfferSource,
    pub outcome: NegotiationOutcome,
    pub response_message: Option<String>,
    /// In-game week the offer was made
    pub week: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractNegotiation {
    pub id: u32,
    pub player_id: u32,
    pub team_id: u32,
    pub negotiation_type: NegotiationType,
    pub transfer_fee: Option<f64>,
    pub status: NegotiationStatus,
    pub current_round: u8,
    pub max_rounds: u8,
    pub player_demands: ContractDemands,
    pub player_strategy: NegotiationStrategy,
    pub current_offer: ContractOffer,
    pub counter_offer: Option<ContractOffer>,
    pub history: Vec<NegotiationRound>,
    pub started_week: u32,
    pub deadline_week: u32,
    pub config: NegotiationConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NegotiationRoundResult {
    pub negotiation: ContractNegotiation,
    pub outcome: NegotiationOutcome,
    pub satisfaction: f64,
    pub message: String,
}

impl ContractNegotiation {
    /// Opens talks: values the player, settles on a posture and derives the demands
    /// the team's offers will be measured against.
    #[allow(clippy::too_many_arguments)]
    pub fn start<R: RandomSource + ?Sized>(
        id: u32,
        player: &Player,
        team_id: u32,
        initial_offer: ContractOffer,
        current_week: u32,
        negotiation_type: NegotiationType,
        transfer_fee: Option<f64>,
        role_context: &RoleContext,
        config: &NegotiationConfig,
        rng: &mut R,
    ) -> Result<Self, NegotiationError> {
        initial_offer.validate()?;

        let valuation = calculate_market_value(player);
        let strategy = NegotiationStrategy::determine(player, negotiation_type, rng);
        let demands = DemandGenerator::generate(
            player,
            &valuation,
            strategy,
            negotiation_type,
            role_context,
            rng,
        );

        debug!(
            "negotiation {}: player {} ({}), market value {:.0}, strategy {}",
            id, player.id, valuation.overall_rating, valuation.market_value.amount, strategy
        );

        Self::with_demands(
            id,
            player.id,
            team_id,
            initial_offer,
            current_week,
            negotiation_type,
            transfer_fee,
            demands,
            strategy,
            config,
        )
    }

    /// Opens talks against demands that are already known
    #[allow(clippy::too_many_arguments)]
    pub fn with_demands(
        id: u32,
        player_id: u32,
        team_id: u32,
        initial_offer: ContractOffer,
        current_week: u32,
        negotiation_type: NegotiationType,
        transfer_fee: Option<f64>,
        demands: ContractDemands,
        strategy: NegotiationStrategy,
        config: &NegotiationConfig,
    ) -> Result<Self, NegotiationError> {
        initial_offer.validate()?;

        if let Some(fee) = transfer_fee {
            if !fee.is_finite() {
                return Err(OfferViolation::NonFiniteAmount { field: "transfer_fee" }.into());
            }
            if fee < 0.0 {
                return Err(OfferViolation::NegativeAmount { field: "transfer_fee", amount: fee }.into());
            }
        }

        let opening = NegotiationRound {
            round: 1,
            offer: initial_offer.clone(),
            from: OfferSource::Team,
            outcome: NegotiationOutcome::Considering,
            response_message: None,
            week: current_week,
        };

        Ok(ContractNegotiation {
            id,
            player_id,
            team_id,
            negotiation_type,
            transfer_fee,
            status: NegotiationStatus::InProgress,
            current_round: 1,
            max_rounds: config.max_rounds.max(1),
            player_demands: demands,
            player_strategy: strategy,
            current_offer: initial_offer,
            counter_offer: None,
            history: vec![opening],
            started_week: current_week,
            deadline_week: current_week.saturating_add(config.deadline_weeks),
            config: config.clone(),
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == NegotiationStatus::InProgress
    }

    pub fn is_past_deadline(&self, current_week: u32) -> bool {
        current_week > self.deadline_week
    }

    /// Puts a team offer to the player. The session itself is left untouched;
    /// the result carries the session as it stands after this round.
    pub fn process_round<R: RandomSource + ?Sized>(
        &self,
        team_offer: ContractOffer,
        current_week: u32,
        rng: &mut R,
    ) -> Result<NegotiationRoundResult, NegotiationError> {
        match self.status {
            NegotiationStatus::InProgress => {}
            NegotiationStatus::Expired => {
                return Err(NegotiationError::NegotiationExpired {
                    deadline_week: self.deadline_week,
                    current_week,
                });
            }
            status => return Err(NegotiationError::NegotiationClosed(status)),
        }

        if self.is_past_deadline(current_week) {
            warn!(
                "negotiation {}: offer in week {} after deadline week {}",
                self.id, current_week, self.deadline_week
            );

            return Err(NegotiationError::NegotiationExpired {
                deadline_week: self.deadline_week,
                current_week,
            });
        }

        if self.current_round > self.max_rounds {
            return Err(NegotiationError::MaxRoundsExceeded { max_rounds: self.max_rounds });
        }

        team_offer.validate()?;

        let round = self.current_round;
        let strategy = self.player_strategy;

        let satisfaction =
            SatisfactionEvaluator::evaluate(&team_offer, &self.player_demands, round, strategy, rng);
        let decision = OutcomeResolver::resolve(satisfaction, round, self.max_rounds, strategy, &self.config);
        let outcome = NegotiationOutcome::from(decision);
        let message = response_message(outcome, strategy, satisfaction);

        debug!(
            "negotiation {}: round {}/{} salary {:.0} satisfaction {:.1} -> {:?}",
            self.id, round, self.max_rounds, team_offer.salary, satisfaction, outcome
        );

        let mut next = self.clone();
        next.current_offer = team_offer.clone();
        next.history.push(NegotiationRound {
            round,
            offer: team_offer,
            from: OfferSource::Team,
            outcome,
            response_message: Some(message.clone()),
            week: current_week,
        });

        match decision {
            RoundDecision::Accept => {
                next.status = NegotiationStatus::Accepted;
                next.counter_offer = None;

                info!(
                    "negotiation {}: player {} accepted {:.0} a year for {} years",
                    self.id, self.player_id, next.current_offer.salary, next.current_offer.contract_length
                );
            }
            RoundDecision::Reject => {
                next.status = NegotiationStatus::Rejected;
                next.counter_offer = None;

                info!(
                    "negotiation {}: player {} walked away in round {}",
                    self.id, self.player_id, round
                );
            }
            RoundDecision::Counter => {
                let counter = CounterOfferGenerator::generate(
                    &next.current_offer,
                    &self.player_demands,
                    round,
                    strategy,
                    &self.config,
                );

                next.history.push(NegotiationRound {
                    round,
                    offer: counter.clone(),
                    from: OfferSource::Player,
                    outcome: NegotiationOutcome::Considering,
                    response_message: None,
                    week: current_week,
                });
                next.counter_offer = Some(counter);
                next.current_round += 1;
            }
        }

        Ok(NegotiationRoundResult {
            negotiation: next,
            outcome,
            satisfaction,
            message,
        })
    }

    /// Team takes the player's last counter-offer as its next offer
    pub fn accept_counter_offer<R: RandomSource + ?Sized>(
        &self,
        current_week: u32,
        rng: &mut R,
    ) -> Result<NegotiationRoundResult, NegotiationError> {
        match &self.counter_offer {
            Some(counter) => self.process_round(counter.clone(), current_week, rng),
            None => Err(NegotiationError::NegotiationClosed(self.status)),
        }
    }

    /// Expired copy of an open session whose deadline has passed
    pub fn check_expired(&self, current_week: u32) -> Option<Self> {
        if !self.is_active() || !self.is_past_deadline(current_week) {
            return None;
        }

        info!(
            "negotiation {}: expired in week {} without agreement",
            self.id, current_week
        );

        let mut expired = self.clone();
        expired.status = NegotiationStatus::Expired;
        expired.counter_offer = None;

        Some(expired)
    }

    pub fn accepted_offer(&self) -> Option<&ContractOffer> {
        match self.status {
            NegotiationStatus::Accepted => Some(&self.current_offer),
            _ => None,
        }
    }

    pub fn to_contract(&self, start_date: NaiveDate) -> Option<PlayerContract> {
        self.accepted_offer().map(|offer| {
            ContractFactory::create_contract_from_offer(self.player_id, self.team_id, offer, start_date)
        })
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create_negotiation<R: RandomSource + ?Sized>(
    id: u32,
    player: &Player,
    team_id: u32,
    initial_offer: ContractOffer,
    current_week: u32,
    negotiation_type: NegotiationType,
    transfer_fee: Option<f64>,
    role_context: &RoleContext,
    rng: &mut R,
) -> Result<ContractNegotiation, NegotiationError> {
    ContractNegotiation::start(
        id,
        player,
        team_id,
        initial_offer,
        current_week,
        negotiation_type,
        transfer_fee,
        role_context,
        &NegotiationConfig::default(),
        rng,
    )
}

pub fn process_negotiation_round<R: RandomSource + ?Sized>(
    negotiation: &ContractNegotiation,
    team_offer: ContractOffer,
    current_week: u32,
    rng: &mut R,
) -> Result<NegotiationRoundResult, NegotiationError> {
    negotiation.process_round(team_offer, current_week, rng)
}
