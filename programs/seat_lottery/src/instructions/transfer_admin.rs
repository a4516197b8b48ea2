use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::AdminTransferred,
    processors::admin_config::apply_transfer_admin,
    state::Config,
};

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub config: Account<'info, Config>,
}

pub fn handler(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let old_admin = apply_transfer_admin(&mut ctx.accounts.config, &admin, new_admin)?;

    emit!(AdminTransferred { old_admin, new_admin });
    Ok(())
}
