use serde::{Deserialize, Serialize};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyValue {
    pub amount: f64,
    pub currency: Currency,
}

impl CurrencyValue {
    pub fn new(amount: f64, currency: Currency) -> Self {
        CurrencyValue { amount, currency }
    }

    pub fn usd(amount: f64) -> Self {
        CurrencyValue::new(amount, Currency::Usd)
    }

    /// Rounds to the nearest multiple of `granularity` (e.g. 5_000)
    pub fn rounded_to(self, granularity: f64) -> Self {
        if granularity <= 0.0 {
            return self;
        }

        CurrencyValue {
            amount: (self.amount / granularity).round() * granularity,
            currency: self.currency,
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        CurrencyValue {
            amount: self.amount * factor,
            currency: self.currency,
        }
    }
}

impl Add for CurrencyValue {
    type Output = CurrencyValue;

    fn add(self, rhs: CurrencyValue) -> CurrencyValue {
        CurrencyValue {
            amount: self.amount + rhs.amount,
            currency: self.currency,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Usd,
}
