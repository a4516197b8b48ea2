use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};
use crate::constants::{MAX_SEATS, MAX_TIERS, SNAPSHOT_LEN};

/// Seat owners by index. Wrapped so the array can be Pod.
#[derive(Copy, Clone)]
#[repr(C)]
pub struct SeatArray {
    pub data: [[u8; 32]; MAX_SEATS],
}

unsafe impl Pod for SeatArray {}
unsafe impl Zeroable for SeatArray {}

#[cfg(feature = "idl-build")]
impl anchor_lang::IdlBuild for SeatArray {
    fn create_type() -> Option<anchor_lang::idl::types::IdlTypeDef> {
        use anchor_lang::idl::types::*;
        Some(IdlTypeDef {
            name: "SeatArray".to_string(),
            docs: vec![],
            serialization: IdlSerialization::Bytemuck,
            repr: Some(IdlRepr::C(IdlReprModifier { packed: false, align: None })),
            generics: vec![],
            ty: IdlTypeDefTy::Struct {
                fields: Some(IdlDefinedFields::Named(vec![IdlField {
                    name: "data".to_string(),
                    docs: vec![],
                    ty: IdlType::Array(
                        Box::new(IdlType::Array(Box::new(IdlType::U8), IdlArrayLen::Value(32))),
                        IdlArrayLen::Value(MAX_SEATS),
                    ),
                }])),
            },
        })
    }
    fn insert_types(types: &mut std::collections::BTreeMap<String, anchor_lang::idl::types::IdlTypeDef>) {
        if let Some(ty) = Self::create_type() {
            types.insert("SeatArray".to_string(), ty);
        }
    }
    fn get_full_path() -> String {
        "SeatArray".to_string()
    }
}

/// Base-100 draw snapshot, least significant digit (tier 0) first.
#[derive(Copy, Clone)]
#[repr(C)]
pub struct SnapshotDigits {
    pub data: [u8; SNAPSHOT_LEN],
}

unsafe impl Pod for SnapshotDigits {}
unsafe impl Zeroable for SnapshotDigits {}

#[cfg(feature = "idl-build")]
impl anchor_lang::IdlBuild for SnapshotDigits {
    fn create_type() -> Option<anchor_lang::idl::types::IdlTypeDef> {
        use anchor_lang::idl::types::*;
        Some(IdlTypeDef {
            name: "SnapshotDigits".to_string(),
            docs: vec![],
            serialization: IdlSerialization::Bytemuck,
            repr: Some(IdlRepr::C(IdlReprModifier { packed: false, align: None })),
            generics: vec![],
            ty: IdlTypeDefTy::Struct {
                fields: Some(IdlDefinedFields::Named(vec![IdlField {
                    name: "data".to_string(),
                    docs: vec![],
                    ty: IdlType::Array(Box::new(IdlType::U8), IdlArrayLen::Value(SNAPSHOT_LEN)),
                }])),
            },
        })
    }
    fn insert_types(types: &mut std::collections::BTreeMap<String, anchor_lang::idl::types::IdlTypeDef>) {
        if let Some(ty) = Self::create_type() {
            types.insert("SnapshotDigits".to_string(), ty);
        }
    }
    fn get_full_path() -> String {
        "SnapshotDigits".to_string()
    }
}

#[repr(u8)]
pub enum RoundStatus {
    Open = 0,
    Drawing = 1,
    Drawn = 2,
    Stopped = 3,
}

/// Both categories are classic SPL mints escrowed by transfer into engine vaults.
/// `Soulbound` marks the non-resellable ticket line issued by the purchase flow; the
/// engine itself only keeps the two apart. Mints that forbid transfers outright
/// (Token-2022 NonTransferable) cannot be deposited.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketCategory {
    Transferable,
    Soulbound,
}

/// The single oracle request slot of an engine instance.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OracleTracker {
    pub outstanding: bool,
    pub round_id: u64,
    pub request_id: [u8; 32],
    /// Number of requests ever issued; feeds request id derivation.
    pub nonce: u64,
}

impl OracleTracker {
    pub const SPACE: usize = 1 + 8 + 32 + 8;
}

#[account]
#[derive(Default)]
pub struct Config {
    pub admin: Pubkey,
    pub transferable_mint: Pubkey,
    pub soulbound_mint: Pubkey,
    pub capacity: u8,
    pub tiers: u8,
    /// Prize per tier in transferable units, tier 0 first; exactly `tiers` entries.
    pub prize_amounts: Vec<u64>,
    /// Seconds after the previous draw before anyone (not just the admin) may request one.
    pub min_draw_delay_sec: u32,
    pub current_round_id: u64,
    pub last_draw_ts: i64,
    pub oracle: OracleTracker,
    pub bump: u8,
    pub transferable_vault_bump: u8,
    pub soulbound_vault_bump: u8,
    pub prize_vault_bump: u8,
    pub reserved: [u8; 32],
}

impl Config {
    pub const SPACE: usize = 8
        + 32 + 32 + 32
        + 1 + 1
        + 4 + 8 * MAX_TIERS
        + 4
        + 8
        + 8
        + OracleTracker::SPACE
        + 1 + 1 + 1 + 1
        + 32;

    pub fn mint_for(&self, category: TicketCategory) -> Pubkey {
        match category {
            TicketCategory::Transferable => self.transferable_mint,
            TicketCategory::Soulbound => self.soulbound_mint,
        }
    }

    pub fn vault_bump_for(&self, category: TicketCategory) -> u8 {
        match category {
            TicketCategory::Transferable => self.transferable_vault_bump,
            TicketCategory::Soulbound => self.soulbound_vault_bump,
        }
    }

    pub fn prize_for(&self, tier: u8) -> Option<u64> {
        if tier < self.tiers {
            self.prize_amounts.get(tier as usize).copied()
        } else {
            None
        }
    }
}

/// Round account, zero-copy: the seat array alone is 3.2KB.
/// All instructions must use `AccountLoader<'info, Round>` and call `.load()` / `.load_mut()`.
#[account(zero_copy)]
#[repr(C)]
pub struct Round {
    pub round_id: u64,
    pub status: u8,
    pub bump: u8,
    pub capacity: u8,
    pub tiers: u8,
    pub fill_count: u8,
    /// Set once the last seat is taken.
    pub draw_eligible: u8,
    /// Set when the draw came from the admin override instead of the oracle.
    pub forced_draw: u8,
    pub _padding: [u8; 1],

    pub opened_ts: i64,
    pub drawn_ts: i64,

    /// Bit `i` set once tier `i` has been paid out.
    pub claimed_mask: [u64; 2],

    pub request_id: [u8; 32],
    pub randomness: [u8; 32],
    /// All zero until drawn.
    pub snapshot: SnapshotDigits,
    pub _padding2: [u8; 3],

    pub seats: SeatArray,

    pub reserved: [u8; 32],
}

impl Round {
    pub const SPACE: usize = 8 + core::mem::size_of::<Round>();

    pub fn is_tier_claimed(&self, tier: u8) -> bool {
        self.claimed_mask[(tier / 64) as usize] & (1u64 << (tier % 64)) != 0
    }

    pub fn mark_tier_claimed(&mut self, tier: u8) {
        self.claimed_mask[(tier / 64) as usize] |= 1u64 << (tier % 64);
    }
}

#[account]
#[derive(Default)]
pub struct Participant {
    pub round: Pubkey,
    pub user: Pubkey,
    pub bump: u8,
    /// Seats held in the round; equals the sum of this owner's deposit counts.
    pub seats: u8,
    pub transferable_units: u64,
    pub soulbound_units: u64,
    pub deposits_count: u32,
    pub withdrawn: bool,
    pub reserved: [u8; 16],
}

impl Participant {
    pub const SPACE: usize = 8
        + 32 + 32
        + 1 + 1
        + 8 + 8
        + 4
        + 1
        + 16;
}
