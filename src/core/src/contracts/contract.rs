use crate::contracts::offer::ContractOffer;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Signed deal. Carries the accepted terms verbatim plus the dates and
/// yearly raise schedule; owned by the roster subsystem once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerContract {
    pub id: String,
    pub player_id: u32,
    pub team_id: u32,

    #[serde(flatten)]
    pub terms: ContractOffer,

    pub start_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub salary_increases: Vec<f32>,
}

impl PlayerContract {
    pub fn days_to_expiration(&self, now: NaiveDate) -> i64 {
        (self.expiry_date - now).num_days()
    }

    pub fn is_expired(&self, now: NaiveDate) -> bool {
        now >= self.expiry_date
    }

    /// Salary for the given contract year (0-based) after the scheduled increases
    pub fn salary_for_year(&self, year: usize) -> f64 {
        self.salary_increases
            .iter()
            .take(year)
            .fold(self.terms.salary, |salary, rise| salary * (1.0 + *rise as f64 / 100.0))
    }
}

pub struct ContractFactory;

impl ContractFactory {
    /// Turns an accepted offer into a contract starting on `start_date`.
    /// The offer is trusted; validation happened during the negotiation.
    pub fn create_contract_from_offer(
        player_id: u32,
        team_id: u32,
        offer: &ContractOffer,
        start_date: NaiveDate,
    ) -> PlayerContract {
        let expiry_date = start_date
            .checked_add_months(Months::new(12 * offer.contract_length as u32))
            .unwrap_or(start_date);

        PlayerContract {
            id: format!("{}-{}-{}", player_id, team_id, start_date.format("%Y%m%d")),
            player_id,
            team_id,
            terms: offer.clone(),
            start_date,
            expiry_date,
            salary_increases: vec![offer.yearly_wage_rise; offer.contract_length as usize],
        }
    }
}

pub fn create_contract_from_offer(
    player_id: u32,
    team_id: u32,
    offer: &ContractOffer,
    start_date: NaiveDate,
) -> PlayerContract {
    ContractFactory::create_contract_from_offer(player_id, team_id, offer, start_date)
}
