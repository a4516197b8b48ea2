use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    state::{Participant, Round, RoundStatus, TicketCategory},
    utils::checked_add_u64,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositOutcome {
    pub first_seat: u8,
    pub seats_added: u8,
    pub fill_count_after: u8,
    pub owner_seats_after: u8,
    pub draw_eligible: bool,
}

/// Appends `count` seats owned by `owner` to an Open round and books them on the
/// owner's participant record. Nothing is written unless every check passes.
pub fn apply_deposit(
    round: &mut Round,
    round_key: &Pubkey,
    participant: &mut Participant,
    owner: &Pubkey,
    category: TicketCategory,
    count: u8,
) -> Result<DepositOutcome> {
    require!(round.status == RoundStatus::Open as u8, ErrorCode::WrongRoundState);
    require!(count > 0, ErrorCode::ZeroAmount);

    let fill_after = round.fill_count as u16 + count as u16;
    require!(fill_after <= round.capacity as u16, ErrorCode::CapacityExceeded);

    // Fresh record, or a stale one left over from an earlier use of this PDA
    let registered = participant.round == *round_key;
    if registered {
        require_keys_eq!(participant.user, *owner, ErrorCode::Unauthorized);
    }

    if !registered {
        participant.round = *round_key;
        participant.user = *owner;
        participant.seats = 0;
        participant.transferable_units = 0;
        participant.soulbound_units = 0;
        participant.deposits_count = 0;
        participant.withdrawn = false;
    }

    let first_seat = round.fill_count;
    let owner_bytes = owner.to_bytes();
    for seat in first_seat..fill_after as u8 {
        round.seats.data[seat as usize] = owner_bytes;
    }
    round.fill_count = fill_after as u8;
    if round.fill_count == round.capacity {
        round.draw_eligible = 1;
    }

    // fill_after <= capacity <= 100, so the per-owner share fits too
    participant.seats += count;
    match category {
        TicketCategory::Transferable => {
            participant.transferable_units = checked_add_u64(participant.transferable_units, count as u64)?;
        }
        TicketCategory::Soulbound => {
            participant.soulbound_units = checked_add_u64(participant.soulbound_units, count as u64)?;
        }
    }
    participant.deposits_count = participant
        .deposits_count
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    Ok(DepositOutcome {
        first_seat,
        seats_added: count,
        fill_count_after: round.fill_count,
        owner_seats_after: participant.seats,
        draw_eligible: round.draw_eligible != 0,
    })
}

impl Round {
    /// Owner of a taken seat.
    pub fn seat_owner(&self, seat: u8) -> Result<Pubkey> {
        require!(seat < self.fill_count, ErrorCode::SeatNotFound);
        Ok(Pubkey::new_from_array(self.seats.data[seat as usize]))
    }

    pub fn owns_seat(&self, seat: u8, owner: &Pubkey) -> bool {
        seat < self.fill_count && self.seats.data[seat as usize] == owner.to_bytes()
    }
}

impl Participant {
    /// Seats this record holds in the round at `round_key` (0 for any other round).
    pub fn share_of(&self, round_key: &Pubkey) -> u8 {
        if self.round == *round_key {
            self.seats
        } else {
            0
        }
    }
}
