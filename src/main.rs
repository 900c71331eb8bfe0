use chrono::NaiveDate;
use color_eyre::eyre::{WrapErr, eyre};
use env_logger::Env;
use log::info;
use negotiation_core::{
    AbilityProfile, AwardHistory, ContractOffer, DivisionContext, NegotiationConfig, NegotiationDesk,
    NegotiationOutcome, NegotiationType, Player, PlayerAttributes, PlayerPotential, RoleContext,
    SquadRole, calculate_market_value,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::fs;

const DEFAULT_SEED: u64 = 42;
const TEAM_ID: u32 = 1;
const START_WEEK: u32 = 27;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let config = load_config()?;
    let seed = load_seed()?;

    info!("seed: {}, max rounds: {}, deadline: {} weeks", seed, config.max_rounds, config.deadline_weeks);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut desk = NegotiationDesk::new(config);

    let player = sample_player();
    let valuation = calculate_market_value(&player);

    info!(
        "player {}: overall {}, market value {:.0}, salary baseline {:.0}",
        player.id, valuation.overall_rating, valuation.market_value.amount, valuation.salary_baseline.amount
    );

    let mut offer = ContractOffer::new(valuation.salary_baseline.amount * 0.7, 3, SquadRole::SquadPlayer)
        .with_agent_fee(valuation.salary_baseline.amount * 0.01);

    let negotiation_id = desk.open(
        &player,
        TEAM_ID,
        offer.clone(),
        START_WEEK,
        NegotiationType::Renewal,
        None,
        &RoleContext::Division(DivisionContext::new(55, 80)),
        &mut rng,
    )?;

    loop {
        let round = desk.get(negotiation_id).map(|n| n.current_round).unwrap_or(1);
        let result = desk.submit_offer(negotiation_id, offer.clone(), START_WEEK, &mut rng)?;

        info!(
            "round {}: offered {:.0}, satisfaction {:.1}, {:?}: \"{}\"",
            round,
            offer.salary,
            result.satisfaction,
            result.outcome,
            result.message
        );

        match (result.outcome, result.negotiation.counter_offer) {
            (NegotiationOutcome::Countered, Some(counter)) => {
                offer = meet_halfway(&offer, &counter);
            }
            _ => break,
        }
    }

    let start_date = NaiveDate::from_ymd_opt(2025, 7, 1).ok_or_else(|| eyre!("invalid start date"))?;

    match desk.completed_contract(negotiation_id, start_date)? {
        Some(contract) => {
            info!("contract {} signed until {}", contract.id, contract.expiry_date);
            println!("{}", serde_json::to_string_pretty(&contract)?);
        }
        None => info!("no agreement reached"),
    }

    Ok(())
}

fn load_config() -> color_eyre::Result<NegotiationConfig> {
    match env::var("NEGOTIATION_CONFIG") {
        Ok(path) => {
            let content = fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read config {}", path))?;

            serde_json::from_str(&content).wrap_err_with(|| format!("failed to parse config {}", path))
        }
        Err(_) => Ok(NegotiationConfig::default()),
    }
}

fn load_seed() -> color_eyre::Result<u64> {
    match env::var("NEGOTIATION_SEED") {
        Ok(value) => value
            .parse()
            .wrap_err_with(|| format!("NEGOTIATION_SEED must be a number, got {}", value)),
        Err(_) => Ok(DEFAULT_SEED),
    }
}

fn sample_player() -> Player {
    let attributes = PlayerAttributes {
        strength: 64,
        speed: 71,
        endurance: 66,
        agility: 70,
        technique: 68,
        awareness: 63,
        composure: 60,
        teamwork: 67,
    };

    let ability = AbilityProfile::new(attributes, PlayerPotential::uniform(76))
        .with_discipline("sprint", 72)
        .with_discipline("relay", 58);

    Player::new(10, 23, ability)
        .with_awards(AwardHistory { weekly: 3, monthly: 1, season: 0, championships: 0 })
        .with_career_games(140)
        .with_current_salary(120_000.0)
        .with_ambition(1.05)
}

/// Team splits the money with the player and takes the other terms as asked
fn meet_halfway(offer: &ContractOffer, counter: &ContractOffer) -> ContractOffer {
    let mut next = counter.clone();

    next.salary = ((offer.salary + counter.salary) / 2.0).round();
    next.signing_bonus = ((offer.signing_bonus + counter.signing_bonus) / 2.0).round();
    next.agent_fee = ((offer.agent_fee + counter.agent_fee) / 2.0).round();

    next
}
