use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    processors::draw::{decode, decode_tier},
    state::{Config, Round, RoundStatus},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub tier: u8,
    pub seat: u8,
    pub amount: u64,
}

impl Round {
    /// Winning seat per tier, tier 0 first.
    pub fn winners(&self) -> Result<Vec<u8>> {
        require!(self.status == RoundStatus::Drawn as u8, ErrorCode::WrongRoundState);
        decode(&self.snapshot.data, self.capacity, self.tiers)
    }
}

/// Pays `tier` to `claimant` if they own its winning seat. Ownership is checked
/// before the claimed flag, so a non-winner always sees `NotWinner`.
pub fn claim_tier(round: &mut Round, config: &Config, claimant: &Pubkey, tier: u8) -> Result<ClaimOutcome> {
    require!(round.status == RoundStatus::Drawn as u8, ErrorCode::WrongRoundState);
    let seat = decode_tier(&round.snapshot.data, round.capacity, round.tiers, tier)?;

    require!(round.owns_seat(seat, claimant), ErrorCode::NotWinner);
    require!(!round.is_tier_claimed(tier), ErrorCode::AlreadyClaimed);

    settle_claim(round, config, tier, seat)
}

/// Same as `claim_tier` with the tier looked up from the claimant's seats. An owner of
/// several winning seats collects the lowest unclaimed tier per call.
pub fn claim_auto(round: &mut Round, config: &Config, claimant: &Pubkey) -> Result<ClaimOutcome> {
    let winners = round.winners()?;

    let mut owned_any = false;
    let mut unclaimed = None;
    for (tier, seat) in winners.iter().enumerate() {
        if !round.owns_seat(*seat, claimant) {
            continue;
        }
        owned_any = true;
        if !round.is_tier_claimed(tier as u8) {
            unclaimed = Some((tier as u8, *seat));
            break;
        }
    }

    require!(owned_any, ErrorCode::NotWinner);
    let (tier, seat) = unclaimed.ok_or(ErrorCode::AlreadyClaimed)?;

    settle_claim(round, config, tier, seat)
}

fn settle_claim(round: &mut Round, config: &Config, tier: u8, seat: u8) -> Result<ClaimOutcome> {
    let amount = config.prize_for(tier).ok_or(ErrorCode::InvalidTier)?;
    round.mark_tier_claimed(tier);
    Ok(ClaimOutcome { tier, seat, amount })
}
