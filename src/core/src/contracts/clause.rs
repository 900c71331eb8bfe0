use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractClauseType {
    NoReleaseClause,
    ExtensionOption,
    HighestPaid,
    PlayingTimeGuarantee,
    RelegationRelease,
}

impl ContractClauseType {
    /// Value the player writes in when they add the clause themselves
    pub fn default_value(&self) -> Option<f64> {
        match self {
            ContractClauseType::ExtensionOption => Some(1.0),       // Years
            ContractClauseType::PlayingTimeGuarantee => Some(60.0), // % of matches
            ContractClauseType::NoReleaseClause
            | ContractClauseType::HighestPaid
            | ContractClauseType::RelegationRelease => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractClause {
    pub clause_type: ContractClauseType,
    pub value: Option<f64>,
}

impl ContractClause {
    pub fn new(clause_type: ContractClauseType, value: Option<f64>) -> Self {
        ContractClause { clause_type, value }
    }

    pub fn with_default_value(clause_type: ContractClauseType) -> Self {
        ContractClause::new(clause_type, clause_type.default_value())
    }
}
