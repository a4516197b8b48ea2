use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{
    constants::*,
    errors::ErrorCode,
    events::DepositRefunded,
    processors::{custody::config_signer_seeds, refunds::withdraw},
    state::{Config, Participant, Round, TicketCategory},
};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(seeds = [SEED_CFG], bump = config.bump)]
    pub config: Box<Account<'info, Config>>,

    #[account(
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump,
    )]
    pub round: AccountLoader<'info, Round>,

    /// A caller who never deposited gets a blank record and `NotDeposited`; the
    /// failed tx leaves nothing behind.
    #[account(
        init_if_needed,
        payer = user,
        space = Participant::SPACE,
        seeds = [SEED_PARTICIPANT, round.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub participant: Box<Account<'info, Participant>>,

    #[account(
        mut,
        seeds = [SEED_VAULT, config.transferable_mint.as_ref()],
        bump = config.transferable_vault_bump,
    )]
    pub transferable_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [SEED_VAULT, config.soulbound_mint.as_ref()],
        bump = config.soulbound_vault_bump,
    )]
    pub soulbound_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_transferable_ata.mint == config.transferable_mint @ ErrorCode::InvalidUserTicketAta,
        constraint = user_transferable_ata.owner == user.key() @ ErrorCode::InvalidUserTicketAta,
    )]
    pub user_transferable_ata: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_soulbound_ata.mint == config.soulbound_mint @ ErrorCode::InvalidUserTicketAta,
        constraint = user_soulbound_ata.owner == user.key() @ ErrorCode::InvalidUserTicketAta,
    )]
    pub user_soulbound_ata: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Refunds the caller's exact deposit mix from a Stopped round.
pub fn handler(ctx: Context<Withdraw>, round_id: u64) -> Result<()> {
    let user = ctx.accounts.user.key();
    let round_key = ctx.accounts.round.key();

    let refund = {
        let round = ctx.accounts.round.load()?;
        withdraw(&round, &round_key, &mut ctx.accounts.participant, &user)?
    };

    let bump = [ctx.accounts.config.bump];
    let signer_seeds = config_signer_seeds(&bump);

    for (category, units) in refund.legs() {
        let (from, to) = match category {
            TicketCategory::Transferable => (
                ctx.accounts.transferable_vault.to_account_info(),
                ctx.accounts.user_transferable_ata.to_account_info(),
            ),
            TicketCategory::Soulbound => (
                ctx.accounts.soulbound_vault.to_account_info(),
                ctx.accounts.user_soulbound_ata.to_account_info(),
            ),
        };
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from,
                    to,
                    authority: ctx.accounts.config.to_account_info(),
                },
                &[&signer_seeds[..]],
            ),
            units,
        )?;
    }

    emit!(DepositRefunded {
        round_id,
        user,
        transferable_units: refund.transferable_units,
        soulbound_units: refund.soulbound_units,
    });

    Ok(())
}
