use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    processors::draw::{draw, validate_shape, DrawOutcome, Snapshot},
    state::{Config, Round, RoundStatus},
    utils::checked_add_i64,
};

/// Result of a completed draw, oracle-driven or forced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawSettlement {
    pub round_id: u64,
    pub winners: Vec<u8>,
    pub snapshot: Snapshot,
    pub next_round_id: u64,
    pub forced: bool,
    /// Set when a forced draw dropped an oracle request that never called back.
    pub cancelled_request: bool,
}

/// Initializes a freshly allocated round as the engine's current Open round.
pub fn open_round(round: &mut Round, config: &Config, round_id: u64, bump: u8, now: i64) -> Result<()> {
    require!(round_id == config.current_round_id, ErrorCode::RoundMismatch);
    validate_shape(config.capacity, config.tiers)?;

    round.round_id = round_id;
    round.status = RoundStatus::Open as u8;
    round.bump = bump;
    round.capacity = config.capacity;
    round.tiers = config.tiers;
    round.opened_ts = now;
    // fill_count, snapshot, claimed_mask, seats: zeroed by init

    Ok(())
}

/// Moves an Open round to Drawing and opens the engine's oracle request for it.
/// The admin may request at any time; anyone else once the round is full or
/// `min_draw_delay_sec` has passed since the previous draw.
pub fn request_draw(round: &mut Round, config: &mut Config, caller: &Pubkey, now: i64) -> Result<[u8; 32]> {
    require!(round.status != RoundStatus::Drawing as u8, ErrorCode::AlreadyDrawing);
    require!(round.status == RoundStatus::Open as u8, ErrorCode::WrongRoundState);
    require!(round.round_id == config.current_round_id, ErrorCode::RoundMismatch);

    if *caller != config.admin {
        let cooldown_ends = checked_add_i64(config.last_draw_ts, config.min_draw_delay_sec as i64)?;
        require!(
            round.draw_eligible != 0 || now >= cooldown_ends,
            ErrorCode::NotYetEligible
        );
    }

    let request_id = config.oracle.issue(round.round_id)?;
    round.request_id = request_id;
    round.status = RoundStatus::Drawing as u8;

    Ok(request_id)
}

/// Oracle callback path. Only accepted for the request the round is waiting on and
/// only once: the tracker slot is consumed here.
pub fn on_random_received(
    round: &mut Round,
    config: &mut Config,
    randomness: [u8; 32],
    now: i64,
) -> Result<DrawSettlement> {
    let request_round = config.oracle.check(&round.request_id)?;
    require!(request_round == round.round_id, ErrorCode::UnknownRequest);
    require!(round.status == RoundStatus::Drawing as u8, ErrorCode::WrongRoundState);

    let outcome = draw(&randomness, round.capacity, round.tiers)?;
    let next_round_id = next_round_id(config)?;
    config.oracle.resolve(&round.request_id)?;

    Ok(settle(round, config, randomness, outcome, next_round_id, now, false, false))
}

/// Admin override: draws immediately from `seed`. Valid while Open, and while Drawing
/// as the way out of an oracle that never calls back; that request is dropped so a
/// late callback is rejected.
pub fn force_draw(
    round: &mut Round,
    config: &mut Config,
    caller: &Pubkey,
    seed: [u8; 32],
    now: i64,
) -> Result<DrawSettlement> {
    require_keys_eq!(*caller, config.admin, ErrorCode::Unauthorized);
    require!(
        round.status == RoundStatus::Open as u8 || round.status == RoundStatus::Drawing as u8,
        ErrorCode::WrongRoundState
    );
    require!(round.round_id == config.current_round_id, ErrorCode::RoundMismatch);

    let outcome = draw(&seed, round.capacity, round.tiers)?;
    let next_round_id = next_round_id(config)?;
    let cancelled_request = config.oracle.cancel(round.round_id);

    Ok(settle(round, config, seed, outcome, next_round_id, now, true, cancelled_request))
}

/// Stops an Open round for good. Deposits stay escrowed for `withdraw`; the engine moves on
/// to the next round id. Returns that id.
pub fn set_stop(round: &mut Round, config: &mut Config, caller: &Pubkey) -> Result<u64> {
    require_keys_eq!(*caller, config.admin, ErrorCode::Unauthorized);
    require!(round.status == RoundStatus::Open as u8, ErrorCode::WrongRoundState);
    require!(round.round_id == config.current_round_id, ErrorCode::RoundMismatch);

    let next = next_round_id(config)?;
    round.status = RoundStatus::Stopped as u8;
    config.current_round_id = next;

    Ok(next)
}

fn next_round_id(config: &Config) -> Result<u64> {
    config
        .current_round_id
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow.into())
}

#[allow(clippy::too_many_arguments)]
fn settle(
    round: &mut Round,
    config: &mut Config,
    randomness: [u8; 32],
    outcome: DrawOutcome,
    next_round_id: u64,
    now: i64,
    forced: bool,
    cancelled_request: bool,
) -> DrawSettlement {
    round.randomness = randomness;
    round.snapshot.data = outcome.snapshot;
    round.status = RoundStatus::Drawn as u8;
    round.drawn_ts = now;
    round.forced_draw = forced as u8;

    config.last_draw_ts = now;
    config.current_round_id = next_round_id;

    DrawSettlement {
        round_id: round.round_id,
        winners: outcome.winners,
        snapshot: outcome.snapshot,
        next_round_id,
        forced,
        cancelled_request,
    }
}
