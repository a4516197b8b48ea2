use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{
    constants::*,
    errors::ErrorCode,
    events::PrizeClaimed,
    processors::{
        claims::{claim_tier, ClaimOutcome},
        custody::config_signer_seeds,
    },
    state::{Config, Round},
};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct Claim<'info> {
    pub winner: Signer<'info>,

    #[account(seeds = [SEED_CFG], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump,
    )]
    pub round: AccountLoader<'info, Round>,

    #[account(
        mut,
        seeds = [SEED_PRIZE_VAULT],
        bump = config.prize_vault_bump,
    )]
    pub prize_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = winner_ticket_ata.mint == config.transferable_mint @ ErrorCode::InvalidUserTicketAta,
        constraint = winner_ticket_ata.owner == winner.key() @ ErrorCode::InvalidUserTicketAta,
    )]
    pub winner_ticket_ata: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Claim<'info> {
    /// Pays the prize out of the pool (signed by the config PDA) and emits the claim.
    pub fn pay_out(&self, round_id: u64, outcome: ClaimOutcome) -> Result<()> {
        if outcome.amount > 0 {
            let bump = [self.config.bump];
            let signer_seeds = config_signer_seeds(&bump);
            token::transfer(
                CpiContext::new_with_signer(
                    self.token_program.to_account_info(),
                    Transfer {
                        from: self.prize_vault.to_account_info(),
                        to: self.winner_ticket_ata.to_account_info(),
                        authority: self.config.to_account_info(),
                    },
                    &[&signer_seeds[..]],
                ),
                outcome.amount,
            )?;
        }

        emit!(PrizeClaimed {
            round_id,
            winner: self.winner.key(),
            tier: outcome.tier,
            seat: outcome.seat,
            amount: outcome.amount,
        });

        Ok(())
    }
}

pub fn handler(ctx: Context<Claim>, round_id: u64, tier: u8) -> Result<()> {
    let winner = ctx.accounts.winner.key();

    // Claimed flag is written before the CPI; the whole tx reverts if the transfer fails
    let outcome = {
        let mut round = ctx.accounts.round.load_mut()?;
        claim_tier(&mut round, &ctx.accounts.config, &winner, tier)?
    };

    ctx.accounts.pay_out(round_id, outcome)
}
