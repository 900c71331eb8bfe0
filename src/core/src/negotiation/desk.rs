use crate::negotiation::config::NegotiationConfig;
use crate::negotiation::demands::RoleContext;
use crate::negotiation::error::NegotiationError;
use crate::negotiation::negotiation::{ContractNegotiation, NegotiationRoundResult, NegotiationStatus};
use crate::negotiation::strategy::NegotiationType;
use crate::shared::RandomSource;
use crate::{ContractOffer, Player, PlayerContract};
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

/// All contract talks a team has going, keyed by negotiation id
#[derive(Debug, Clone)]
pub struct NegotiationDesk {
    pub negotiations: HashMap<u32, ContractNegotiation>,
    pub next_negotiation_id: u32,
    pub config: NegotiationConfig,
}

impl NegotiationDesk {
    pub fn new(config: NegotiationConfig) -> Self {
        NegotiationDesk {
            negotiations: HashMap::new(),
            next_negotiation_id: 1,
            config,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn open<R: RandomSource + ?Sized>(
        &mut self,
        player: &Player,
        team_id: u32,
        initial_offer: ContractOffer,
        current_week: u32,
        negotiation_type: NegotiationType,
        transfer_fee: Option<f64>,
        role_context: &RoleContext,
        rng: &mut R,
    ) -> Result<u32, NegotiationError> {
        let negotiation_id = self.next_negotiation_id;

        let negotiation = ContractNegotiation::start(
            negotiation_id,
            player,
            team_id,
            initial_offer,
            current_week,
            negotiation_type,
            transfer_fee,
            role_context,
            &self.config,
            rng,
        )?;

        self.next_negotiation_id += 1;
        self.negotiations.insert(negotiation_id, negotiation);

        Ok(negotiation_id)
    }

    pub fn get(&self, negotiation_id: u32) -> Option<&ContractNegotiation> {
        self.negotiations.get(&negotiation_id)
    }

    pub fn active(&self) -> impl Iterator<Item = &ContractNegotiation> {
        self.negotiations.values().filter(|n| n.is_active())
    }

    /// Stored session is only replaced when the round went through
    pub fn submit_offer<R: RandomSource + ?Sized>(
        &mut self,
        negotiation_id: u32,
        offer: ContractOffer,
        current_week: u32,
        rng: &mut R,
    ) -> Result<NegotiationRoundResult, NegotiationError> {
        let negotiation = self
            .negotiations
            .get(&negotiation_id)
            .ok_or(NegotiationError::UnknownNegotiation(negotiation_id))?;

        let result = negotiation.process_round(offer, current_week, rng)?;
        self.negotiations.insert(negotiation_id, result.negotiation.clone());

        Ok(result)
    }

    /// Weekly sweep, returns ids of the sessions that ran out of time
    pub fn expire_overdue(&mut self, current_week: u32) -> Vec<u32> {
        let mut expired: Vec<u32> = Vec::new();

        for (id, negotiation) in self.negotiations.iter_mut() {
            if let Some(updated) = negotiation.check_expired(current_week) {
                *negotiation = updated;
                expired.push(*id);
            }
        }

        expired.sort_unstable();

        if !expired.is_empty() {
            debug!("week {}: expired negotiations {:?}", current_week, expired);
        }

        expired
    }

    pub fn completed_contract(
        &self,
        negotiation_id: u32,
        start_date: NaiveDate,
    ) -> Result<Option<PlayerContract>, NegotiationError> {
        self.negotiations
            .get(&negotiation_id)
            .map(|n| n.to_contract(start_date))
            .ok_or(NegotiationError::UnknownNegotiation(negotiation_id))
    }

    /// Drops finished sessions, keeping the ones still in progress
    pub fn clear_closed(&mut self) -> usize {
        let before = self.negotiations.len();
        self.negotiations.retain(|_, n| n.status == NegotiationStatus::InProgress);
        before - self.negotiations.len()
    }
}

impl Default for NegotiationDesk {
    fn default() -> Self {
        Self::new(NegotiationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::negotiation::outcome::NegotiationOutcome;
    use crate::shared::NeutralRandom;
    use crate::{AbilityProfile, PlayerAttributes, PlayerPotential, SquadRole};

    fn player() -> Player {
        let ability = AbilityProfile::new(PlayerAttributes::uniform(60), PlayerPotential::uniform(60));
        Player::new(21, 27, ability).with_current_salary(90_000.0)
    }

    fn offer(salary: f64) -> ContractOffer {
        ContractOffer::new(salary, 3, SquadRole::RotationPlayer)
    }

    fn open(desk: &mut NegotiationDesk, week: u32) -> u32 {
        desk.open(
            &player(),
            4,
            offer(50_000.0),
            week,
            NegotiationType::Renewal,
            None,
            &RoleContext::TeamAverage(60),
            &mut NeutralRandom,
        )
        .unwrap()
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut desk = NegotiationDesk::default();

        assert_eq!(open(&mut desk, 1), 1);
        assert_eq!(open(&mut desk, 1), 2);
        assert_eq!(desk.active().count(), 2);
    }

    #[test]
    fn test_failed_open_does_not_consume_id() {
        let mut desk = NegotiationDesk::default();
        let result = desk.open(
            &player(),
            4,
            offer(-1.0),
            1,
            NegotiationType::Renewal,
            None,
            &RoleContext::TeamAverage(60),
            &mut NeutralRandom,
        );

        assert!(result.is_err());
        assert_eq!(open(&mut desk, 1), 1);
    }

    #[test]
    fn test_unknown_negotiation() {
        let mut desk = NegotiationDesk::default();

        assert_eq!(
            desk.submit_offer(9, offer(1.0), 1, &mut NeutralRandom),
            Err(NegotiationError::UnknownNegotiation(9))
        );
        assert_eq!(
            desk.completed_contract(9, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            Err(NegotiationError::UnknownNegotiation(9))
        );
    }

    #[test]
    fn test_submit_offer_replaces_session() {
        let mut desk = NegotiationDesk::default();
        let id = open(&mut desk, 1);

        let result = desk.submit_offer(id, offer(50_000.0), 1, &mut NeutralRandom).unwrap();

        assert_eq!(desk.get(id), Some(&result.negotiation));
        assert!(desk.get(id).unwrap().history.len() > 1);
    }

    #[test]
    fn test_generous_offer_becomes_contract() {
        let mut desk = NegotiationDesk::default();
        let id = open(&mut desk, 1);
        let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        assert_eq!(desk.completed_contract(id, start), Ok(None));

        let demands = desk.get(id).unwrap().player_demands.clone();
        let mut generous = offer(demands.ideal_salary * 1.2)
            .with_contract_length(demands.min_contract_length)
            .with_squad_role(demands.desired_role)
            .with_signing_bonus(demands.signing_bonus)
            .with_agent_fee(demands.agent_fee);
        for clause_type in &demands.required_clauses {
            generous = generous.with_clause(crate::ContractClause::with_default_value(*clause_type));
        }

        let result = desk.submit_offer(id, generous.clone(), 1, &mut NeutralRandom).unwrap();
        assert_eq!(result.outcome, NegotiationOutcome::Accepted);

        let contract = desk.completed_contract(id, start).unwrap().unwrap();
        assert_eq!(contract.terms, generous);
    }

    #[test]
    fn test_expire_overdue_sweeps_open_sessions() {
        let mut desk = NegotiationDesk::default();
        let early = open(&mut desk, 1);
        let late = open(&mut desk, 5);

        assert!(desk.expire_overdue(3).is_empty());
        assert_eq!(desk.expire_overdue(4), vec![early]);
        assert_eq!(desk.get(early).unwrap().status, NegotiationStatus::Expired);
        assert_eq!(desk.get(late).unwrap().status, NegotiationStatus::InProgress);
        assert!(desk.expire_overdue(4).is_empty());

        assert!(matches!(
            desk.submit_offer(early, offer(50_000.0), 4, &mut NeutralRandom),
            Err(NegotiationError::NegotiationExpired { .. })
        ));
        assert_eq!(desk.clear_closed(), 1);
    }
}
