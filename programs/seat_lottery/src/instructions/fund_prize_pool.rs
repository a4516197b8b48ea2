use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{
    constants::*,
    errors::ErrorCode,
    events::PrizePoolFunded,
    state::Config,
};

#[derive(Accounts)]
pub struct FundPrizePool<'info> {
    pub funder: Signer<'info>,

    #[account(seeds = [SEED_CFG], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_PRIZE_VAULT],
        bump = config.prize_vault_bump,
    )]
    pub prize_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = funder_ata.mint == config.transferable_mint @ ErrorCode::InvalidUserTicketAta,
        constraint = funder_ata.owner == funder.key() @ ErrorCode::InvalidUserTicketAta,
    )]
    pub funder_ata: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Anyone may top up the prize pool.
pub fn handler(ctx: Context<FundPrizePool>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::ZeroAmount);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_ata.to_account_info(),
                to: ctx.accounts.prize_vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.prize_vault.reload()?;

    emit!(PrizePoolFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        pool_balance_after: ctx.accounts.prize_vault.amount,
    });

    Ok(())
}
