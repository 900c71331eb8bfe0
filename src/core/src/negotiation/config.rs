use serde::{Deserialize, Serialize};

/// Tunables of the bargaining protocol. Missing keys in a config file fall
/// back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationConfig {
    pub max_rounds: u8,

    /// Weeks after the opening offer before the player walks away
    pub deadline_weeks: u32,

    // acceptance: accept_base - (round - 1) * accept_round_decay - flexibility * flexibility_scale
    pub accept_base: f64,
    pub accept_round_decay: f64,
    pub flexibility_scale: f64,

    // rejection: reject_base - round * reject_round_decay
    pub reject_base: f64,
    pub reject_round_decay: f64,

    /// Extra share per round the player concedes in a counter-offer
    pub counter_round_bonus: f64,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        NegotiationConfig {
            max_rounds: 5,
            deadline_weeks: 2,
            accept_base: 85.0,
            accept_round_decay: 4.0,
            flexibility_scale: 0.1,
            reject_base: 35.0,
            reject_round_decay: 2.0,
            counter_round_bonus: 0.1,
        }
    }
}
