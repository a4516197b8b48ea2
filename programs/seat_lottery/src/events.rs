use anchor_lang::prelude::*;

#[event]
pub struct RoundOpened {
    pub round_id: u64,
    pub round: Pubkey,
    pub capacity: u8,
    pub tiers: u8,
    pub opened_ts: i64,
}

#[event]
pub struct Deposited {
    pub round_id: u64,
    pub user: Pubkey,
    pub soulbound: bool,
    pub first_seat: u8,
    pub seats_added: u8,
    pub user_seats_after: u8,
    pub fill_count_after: u8,
    pub draw_eligible: bool,
}

#[event]
pub struct DrawRequested {
    pub round_id: u64,
    pub request_id: [u8; 32],
    pub requested_by: Pubkey,
}

#[event]
pub struct DrawCompleted {
    pub round_id: u64,
    pub winners: Vec<u8>,
    /// Integer form of the snapshot; `None` past 19 tiers.
    pub packed_snapshot: Option<u128>,
    pub next_round_id: u64,
    /// Admin override rather than an oracle callback.
    pub forced: bool,
    pub cancelled_request: bool,
}

#[event]
pub struct PrizeClaimed {
    pub round_id: u64,
    pub winner: Pubkey,
    pub tier: u8,
    pub seat: u8,
    pub amount: u64,
}

#[event]
pub struct RoundStopped {
    pub round_id: u64,
    pub admin: Pubkey,
    pub fill_count: u8,
    pub next_round_id: u64,
}

#[event]
pub struct DepositRefunded {
    pub round_id: u64,
    pub user: Pubkey,
    pub transferable_units: u64,
    pub soulbound_units: u64,
}

#[event]
pub struct PrizePoolFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub pool_balance_after: u64,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
