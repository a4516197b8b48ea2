use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    processors::draw::validate_shape,
    state::{Config, OracleTracker},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitConfigArgs {
    pub capacity: u8,
    pub tiers: u8,
    /// One entry per tier, largest first.
    pub prize_amounts: Vec<u64>,
    pub min_draw_delay_sec: u32,
}

pub struct ConfigKeys {
    pub admin: Pubkey,
    pub transferable_mint: Pubkey,
    pub soulbound_mint: Pubkey,
}

/// Validates the round configuration surface and writes it once. Round 0 is the
/// first round to open; its cooldown counts from `now`.
pub fn apply_init_config(cfg: &mut Config, keys: ConfigKeys, args: &InitConfigArgs, now: i64) -> Result<()> {
    validate_shape(args.capacity, args.tiers)?;
    require!(
        args.prize_amounts.len() == args.tiers as usize,
        ErrorCode::ConfigInvalid
    );
    require!(
        args.prize_amounts.windows(2).all(|pair| pair[0] >= pair[1]),
        ErrorCode::ConfigInvalid
    );
    require!(
        keys.transferable_mint != keys.soulbound_mint,
        ErrorCode::ConfigInvalid
    );
    require!(keys.admin != Pubkey::default(), ErrorCode::InvalidAdmin);

    cfg.admin = keys.admin;
    cfg.transferable_mint = keys.transferable_mint;
    cfg.soulbound_mint = keys.soulbound_mint;
    cfg.capacity = args.capacity;
    cfg.tiers = args.tiers;
    cfg.prize_amounts = args.prize_amounts.clone();
    cfg.min_draw_delay_sec = args.min_draw_delay_sec;
    cfg.current_round_id = 0;
    cfg.last_draw_ts = now;
    cfg.oracle = OracleTracker::default();
    cfg.reserved = [0u8; 32];

    Ok(())
}

pub fn apply_transfer_admin(cfg: &mut Config, caller: &Pubkey, new_admin: Pubkey) -> Result<Pubkey> {
    require_keys_eq!(*caller, cfg.admin, ErrorCode::Unauthorized);
    require!(new_admin != Pubkey::default(), ErrorCode::InvalidAdmin);
    require!(new_admin != cfg.admin, ErrorCode::InvalidAdmin);

    let old_admin = cfg.admin;
    cfg.admin = new_admin;
    Ok(old_admin)
}
