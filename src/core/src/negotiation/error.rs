use crate::OfferViolation;
use crate::negotiation::negotiation::NegotiationStatus;
use thiserror::Error;

/// Everything here is recoverable: the caller drops the session or fixes the
/// offer, and history recorded so far stays valid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NegotiationError {
    #[error("invalid offer: {0}")]
    InvalidOffer(#[from] OfferViolation),

    #[error("negotiation expired at week {deadline_week} (now week {current_week})")]
    NegotiationExpired { deadline_week: u32, current_week: u32 },

    #[error("negotiation already used all {max_rounds} rounds")]
    MaxRoundsExceeded { max_rounds: u8 },

    #[error("negotiation is already closed ({0:?})")]
    NegotiationClosed(NegotiationStatus),

    #[error("no negotiation with id {0}")]
    UnknownNegotiation(u32),
}
