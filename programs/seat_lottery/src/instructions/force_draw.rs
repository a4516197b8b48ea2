use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::DrawCompleted,
    processors::{draw::packed, round_lifecycle::force_draw},
    state::{Config, Round},
};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct ForceDraw<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump,
    )]
    pub round: AccountLoader<'info, Round>,
}

/// Admin override for a stuck or oracle-less round: draws from a caller-supplied seed.
pub fn handler(ctx: Context<ForceDraw>, _round_id: u64, seed: [u8; 32]) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();
    let mut round = ctx.accounts.round.load_mut()?;

    let settlement = force_draw(&mut round, &mut ctx.accounts.config, &admin, seed, now)?;

    let packed_snapshot = packed(&settlement.snapshot, round.tiers);

    msg!(
        "round {} force-drawn: packed={:?} cancelled_request={}",
        settlement.round_id,
        packed_snapshot,
        settlement.cancelled_request
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
