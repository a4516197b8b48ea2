use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::RoundStopped,
    processors::round_lifecycle::set_stop,
    state::{Config, Round},
};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct SetStop<'info> {
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

/// Stops the round; deposits stay in the vaults until each depositor withdraws.
pub fn handler(ctx: Context<SetStop>, round_id: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let mut round = ctx.accounts.round.load_mut()?;

    let next_round_id = set_stop(&mut round, &mut ctx.accounts.config, &admin)?;

    emit!(RoundStopped {
        round_id,
        admin,
        fill_count: round.fill_count,
        next_round_id,
    });

    Ok(())
}
