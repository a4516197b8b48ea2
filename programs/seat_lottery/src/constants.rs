/// Hard ceiling on seats per round: every seat index must fit one base-100 digit.
pub const MAX_SEATS: usize = 100;

/// Every seat can carry its own prize tier.
pub const MAX_TIERS: usize = MAX_SEATS;

/// Radix of the draw snapshot digits.
pub const SNAPSHOT_BASE: u8 = 100;

/// One digit per tier plus the leading `1` marker.
pub const SNAPSHOT_LEN: usize = MAX_TIERS + 1;

/// Most tiers whose snapshot still fits a `u128` (`100^19` marker included).
pub const PACKED_TIERS_MAX: u8 = 19;

pub const SEED_CFG: &[u8] = b"cfg";
pub const SEED_ROUND: &[u8] = b"round";
pub const SEED_PARTICIPANT: &[u8] = b"p";
pub const SEED_VAULT: &[u8] = b"vault";
pub const SEED_PRIZE_VAULT: &[u8] = b"prize_vault";
pub const SEED_IDENTITY: &[u8] = b"identity";
