use crate::negotiation::outcome::NegotiationOutcome;
use crate::negotiation::strategy::NegotiationStrategy;

/// What the player's camp tells the team after looking at an offer
pub fn response_message(outcome: NegotiationOutcome, strategy: NegotiationStrategy, satisfaction: f64) -> String {
    let message = match outcome {
        NegotiationOutcome::Accepted => match satisfaction {
            s if s >= 90.0 => "This is exactly what we were hoping for. Where do I sign?",
            _ => "It took a while, but we have a deal.",
        },
        NegotiationOutcome::Rejected => match strategy {
            NegotiationStrategy::Aggressive => "That offer is an insult. We are done talking.",
            NegotiationStrategy::Desperate => "I really wanted this to work, but I cannot accept those terms.",
            _ => "We are too far apart. My client will look elsewhere.",
        },
        NegotiationOutcome::Countered => match satisfaction {
            s if s >= 60.0 => "We are close. Meet us on a few points and we can finish this.",
            _ => match strategy {
                NegotiationStrategy::Aggressive => "My client knows their worth. Here is what it takes.",
                _ => "Not quite there yet. Take a look at our proposal.",
            },
        },
        NegotiationOutcome::Considering => "We will get back to you.",
    };

    message.to_string()
}
