use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    state::{Participant, Round, RoundStatus},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefundOutcome {
    pub transferable_units: u64,
    pub soulbound_units: u64,
}

/// Marks the owner's deposit in a Stopped round as withdrawn and returns the exact
/// per-category units to send back. Share counters are left as they were.
pub fn withdraw(
    round: &Round,
    round_key: &Pubkey,
    participant: &mut Participant,
    owner: &Pubkey,
) -> Result<RefundOutcome> {
    require!(round.status == RoundStatus::Stopped as u8, ErrorCode::WrongRoundState);
    require!(
        participant.round == *round_key && participant.user == *owner && participant.seats > 0,
        ErrorCode::NotDeposited
    );
    require!(!participant.withdrawn, ErrorCode::AlreadyWithdrawn);

    participant.withdrawn = true;

    Ok(RefundOutcome {
        transferable_units: participant.transferable_units,
        soulbound_units: participant.soulbound_units,
    })
}
