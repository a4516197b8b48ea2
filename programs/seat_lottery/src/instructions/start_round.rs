use anchor_lang::prelude::*;
use crate::{
    constants::*,
    events::RoundOpened,
    processors::round_lifecycle::open_round,
    state::{Config, Round},
};

/// Permissionless: materializes the engine's current round once the previous one
/// was drawn or stopped.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct StartRound<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(seeds = [SEED_CFG], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = payer,
        space = Round::SPACE,
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump
    )]
    pub round: AccountLoader<'info, Round>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<StartRound>, round_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let cfg = &ctx.accounts.config;

    let mut round = ctx.accounts.round.load_init()?;
    open_round(&mut round, cfg, round_id, ctx.bumps.round, now)?;

    emit!(RoundOpened {
        round_id,
        round: ctx.accounts.round.key(),
        capacity: round.capacity,
        tiers: round.tiers,
        opened_ts: now,
    });

    Ok(())
}
