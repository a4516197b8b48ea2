use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_SEATS, MAX_TIERS, PACKED_TIERS_MAX, SNAPSHOT_BASE, SNAPSHOT_LEN},
    errors::ErrorCode,
};

/// Base-100 digits of a draw: digit `i` is the tier-`i` seat and digit `tiers` is the
/// `1` marker, so a drawn snapshot is never all zero.
pub type Snapshot = [u8; SNAPSHOT_LEN];

/// Outcome of one draw: winning seat per tier (tier 0 first) and its snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub winners: Vec<u8>,
    pub snapshot: Snapshot,
}

/// Shape rules shared by `init_config` and the draw itself.
pub fn validate_shape(capacity: u8, tiers: u8) -> Result<()> {
    require!(
        capacity > 0 && capacity as usize <= MAX_SEATS,
        ErrorCode::ConfigInvalid
    );
    require!(
        tiers > 0 && tiers <= capacity && tiers as usize <= MAX_TIERS,
        ErrorCode::ConfigInvalid
    );
    Ok(())
}

/// Per-step scalar: the seed re-hashed with the step index so picks within one draw
/// are not correlated.
fn step_scalar(seed: &[u8; 32], step: u8) -> u128 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(seed);
    hasher.update(&(step as u32).to_le_bytes());
    let digest = hasher.finalize();
    let mut bytes16 = [0u8; 16];
    bytes16.copy_from_slice(&digest.as_bytes()[..16]);
    u128::from_le_bytes(bytes16)
}

/// Picks `tiers` distinct seats out of `[0, capacity)` with a partial Fisher-Yates pass:
/// the pick at step `i` is reduced modulo the `capacity - i` seats still in the pool and
/// the chosen seat is swapped behind the pool's end. No retries, `tiers` hashes total.
pub fn draw(seed: &[u8; 32], capacity: u8, tiers: u8) -> Result<DrawOutcome> {
    validate_shape(capacity, tiers)?;

    let mut pool = [0u8; MAX_SEATS];
    for (seat, slot) in pool.iter_mut().enumerate().take(capacity as usize) {
        *slot = seat as u8;
    }

    let mut remaining = capacity as usize;
    let mut winners = Vec::with_capacity(tiers as usize);
    for step in 0..tiers {
        let pick = (step_scalar(seed, step) % remaining as u128) as usize;
        winners.push(pool[pick]);
        pool.swap(pick, remaining - 1);
        remaining -= 1;
    }

    let snapshot = encode(&winners)?;
    Ok(DrawOutcome { winners, snapshot })
}

/// Lays winners out as base-100 digits, tier 0 lowest, under the marker digit.
pub fn encode(winners: &[u8]) -> Result<Snapshot> {
    require!(
        !winners.is_empty() && winners.len() <= MAX_TIERS,
        ErrorCode::InvalidSnapshot
    );

    let mut snapshot = [0u8; SNAPSHOT_LEN];
    for (digit, seat) in snapshot.iter_mut().zip(winners) {
        require!(*seat < SNAPSHOT_BASE, ErrorCode::InvalidSnapshot);
        *digit = *seat;
    }
    snapshot[winners.len()] = 1;
    Ok(snapshot)
}

/// Reverses `encode` for a round of the given shape, rejecting anything a draw of that
/// shape could not have produced.
pub fn decode(snapshot: &Snapshot, capacity: u8, tiers: u8) -> Result<Vec<u8>> {
    validate_shape(capacity, tiers)?;

    let (digits, rest) = snapshot.split_at(tiers as usize);
    require!(
        rest[0] == 1 && rest[1..].iter().all(|digit| *digit == 0),
        ErrorCode::InvalidSnapshot
    );

    let mut taken = [false; MAX_SEATS];
    let mut winners = Vec::with_capacity(tiers as usize);
    for seat in digits {
        require!(*seat < capacity, ErrorCode::InvalidSnapshot);
        require!(!taken[*seat as usize], ErrorCode::InvalidSnapshot);
        taken[*seat as usize] = true;
        winners.push(*seat);
    }

    Ok(winners)
}

/// Winning seat of a single tier.
pub fn decode_tier(snapshot: &Snapshot, capacity: u8, tiers: u8, tier: u8) -> Result<u8> {
    require!(tier < tiers, ErrorCode::InvalidTier);
    let winners = decode(snapshot, capacity, tiers)?;
    Ok(winners[tier as usize])
}

/// The snapshot as one integer (`100^tiers + sum of seat_i * 100^i`), for rounds small
/// enough to fit a `u128`.
pub fn packed(snapshot: &Snapshot, tiers: u8) -> Option<u128> {
    if tiers > PACKED_TIERS_MAX {
        return None;
    }
    let mut value: u128 = 0;
    for digit in snapshot[..=tiers as usize].iter().rev() {
        value = value
            .checked_mul(SNAPSHOT_BASE as u128)?
            .checked_add(*digit as u128)?;
    }
    Some(value)
}
