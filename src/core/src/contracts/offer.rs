use crate::contracts::clause::{ContractClause, ContractClauseType};
use crate::contracts::role::SquadRole;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const MIN_CONTRACT_YEARS: u8 = 1;
pub const MAX_CONTRACT_YEARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBonusType {
    Appearance,
    Win,
    Award,
    Championship,
}

impl PerformanceBonusType {
    /// Rough chance the bonus is actually paid out in a season
    pub fn likelihood(&self) -> f64 {
        match self {
            PerformanceBonusType::Appearance => 0.7,
            PerformanceBonusType::Win => 0.5,
            PerformanceBonusType::Award => 0.2,
            PerformanceBonusType::Championship => 0.15,
        }
    }
}

/// Terms on the table in one round. Offers are exchanged by value; the
/// `with_*` builders return a new offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractOffer {
    pub salary: f64,
    pub contract_length: u8, // Years
    pub signing_bonus: f64,
    pub performance_bonuses: BTreeMap<PerformanceBonusType, f64>,
    pub release_clause: Option<f64>,
    pub agent_fee: f64,
    pub clauses: Vec<ContractClause>,
    pub squad_role: SquadRole,
    pub loyalty_bonus: f64,
    pub yearly_wage_rise: f32, // %
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OfferViolation {
    #[error("{field} must be a finite amount")]
    NonFiniteAmount { field: &'static str },
    #[error("{field} cannot be negative (got {amount})")]
    NegativeAmount { field: &'static str, amount: f64 },
    #[error("contract length must be between 1 and 5 years (got {0})")]
    ContractLengthOutOfRange(u8),
    #[error("clause {0:?} appears more than once")]
    DuplicateClause(ContractClauseType),
}

impl ContractOffer {
    pub fn new(salary: f64, contract_length: u8, squad_role: SquadRole) -> Self {
        ContractOffer {
            salary,
            contract_length,
            signing_bonus: 0.0,
            performance_bonuses: BTreeMap::new(),
            release_clause: None,
            agent_fee: 0.0,
            clauses: Vec::new(),
            squad_role,
            loyalty_bonus: 0.0,
            yearly_wage_rise: 0.0,
        }
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = salary;
        self
    }

    pub fn with_contract_length(mut self, years: u8) -> Self {
        self.contract_length = years;
        self
    }

    pub fn with_signing_bonus(mut self, bonus: f64) -> Self {
        self.signing_bonus = bonus;
        self
    }

    pub fn with_agent_fee(mut self, fee: f64) -> Self {
        self.agent_fee = fee;
        self
    }

    pub fn with_release_clause(mut self, amount: f64) -> Self {
        self.release_clause = Some(amount);
        self
    }

    pub fn without_release_clause(mut self) -> Self {
        self.release_clause = None;
        self
    }

    pub fn with_squad_role(mut self, role: SquadRole) -> Self {
        self.squad_role = role;
        self
    }

    pub fn with_loyalty_bonus(mut self, bonus: f64) -> Self {
        self.loyalty_bonus = bonus;
        self
    }

    pub fn with_yearly_wage_rise(mut self, percent: f32) -> Self {
        self.yearly_wage_rise = percent;
        self
    }

    pub fn with_performance_bonus(mut self, bonus_type: PerformanceBonusType, amount: f64) -> Self {
        self.performance_bonuses.insert(bonus_type, amount);
        self
    }

    /// Adds the clause, replacing any existing clause of the same type
    pub fn with_clause(mut self, clause: ContractClause) -> Self {
        self.clauses.retain(|c| c.clause_type != clause.clause_type);
        self.clauses.push(clause);
        self
    }

    pub fn has_clause(&self, clause_type: ContractClauseType) -> bool {
        self.clauses.iter().any(|c| c.clause_type == clause_type)
    }

    pub fn validate(&self) -> Result<(), OfferViolation> {
        let amounts = [
            ("salary", self.salary),
            ("signing_bonus", self.signing_bonus),
            ("agent_fee", self.agent_fee),
            ("loyalty_bonus", self.loyalty_bonus),
            ("yearly_wage_rise", self.yearly_wage_rise as f64),
        ];

        let optional = self.release_clause.map(|amount| ("release_clause", amount));
        let bonuses = self
            .performance_bonuses
            .values()
            .map(|amount| ("performance_bonus", *amount));

        for (field, amount) in amounts.into_iter().chain(optional).chain(bonuses) {
            if !amount.is_finite() {
                return Err(OfferViolation::NonFiniteAmount { field });
            }
            if amount < 0.0 {
                return Err(OfferViolation::NegativeAmount { field, amount });
            }
        }

        if !(MIN_CONTRACT_YEARS..=MAX_CONTRACT_YEARS).contains(&self.contract_length) {
            return Err(OfferViolation::ContractLengthOutOfRange(self.contract_length));
        }

        if let Some(duplicate) = self.clauses.iter().map(|c| c.clause_type).duplicates().next() {
            return Err(OfferViolation::DuplicateClause(duplicate));
        }

        Ok(())
    }

    /// Money paid out at signing, before any salary
    pub fn signing_cost(&self) -> f64 {
        self.signing_bonus + self.agent_fee
    }

    pub fn salary_in_year(&self, year: u8) -> f64 {
        self.salary * (1.0 + self.yearly_wage_rise as f64 / 100.0).powi(year as i32)
    }

    /// Guaranteed money over the whole deal
    pub fn total_value(&self) -> f64 {
        let wages: f64 = (0..self.contract_length).map(|year| self.salary_in_year(year)).sum();

        wages + self.signing_bonus + self.agent_fee + self.loyalty_bonus
    }

    /// Guaranteed money plus performance bonuses weighted by how likely they are to trigger
    pub fn total_potential_value(&self) -> f64 {
        let expected_bonuses: f64 = self
            .performance_bonuses
            .iter()
            .map(|(bonus_type, amount)| amount * bonus_type.likelihood())
            .sum();

        self.total_value() + expected_bonuses * self.contract_length as f64
    }
}

pub fn calculate_signing_cost(offer: &ContractOffer) -> f64 {
    offer.signing_cost()
}

pub fn calculate_total_contract_value(offer: &ContractOffer) -> f64 {
    offer.total_value()
}
