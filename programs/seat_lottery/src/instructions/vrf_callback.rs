use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::DrawCompleted,
    processors::{draw::packed, round_lifecycle::on_random_received},
    state::{Config, Round},
};

/// Only the VRF program can sign as its identity PDA.
const VRF_PROGRAM_IDENTITY_BYTES: [u8; 32] =
    ephemeral_vrf_sdk::consts::VRF_PROGRAM_IDENTITY.to_bytes();
pub static VRF_PROGRAM_IDENTITY: Pubkey = Pubkey::new_from_array(VRF_PROGRAM_IDENTITY_BYTES);

#[derive(Accounts)]
pub struct VrfCallback<'info> {
    #[account(address = VRF_PROGRAM_IDENTITY)]
    pub vrf_program_identity: Signer<'info>,

    #[account(mut, seeds = [SEED_CFG], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// No seeds constraint: round_id is not part of the callback args.
    /// PDA verified manually in handler.
    #[account(mut)]
    pub round: AccountLoader<'info, Round>,
}

pub fn handler(ctx: Context<VrfCallback>, randomness: [u8; 32]) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let mut round = ctx.accounts.round.load_mut()?;

    let expected_key = Pubkey::create_program_address(
        &[SEED_ROUND, &round.round_id.to_le_bytes(), &[round.bump]],
        &crate::ID,
    )
    .map_err(|_| ErrorCode::Unauthorized)?;
    require!(ctx.accounts.round.key() == expected_key, ErrorCode::Unauthorized);

    let settlement = on_random_received(&mut round, &mut ctx.accounts.config, randomness, now)?;

    let packed_snapshot = packed(&settlement.snapshot, round.tiers);

    msg!(
        "round {} drawn: packed={:?}",
        settlement.round_id,
        packed_snapshot
    );

    emit!(DrawCompleted {
        round_id: settlement.round_id,
        winners: settlement.winners,
        packed_snapshot,
        next_round_id: settlement.next_round_id,
        forced: settlement.forced,
        cancelled_request: settlement.cancelled_request,
    });

    Ok(())
}
