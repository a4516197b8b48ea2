use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{
    constants::*,
    errors::ErrorCode,
    events::Deposited,
    processors::{custody::check_deposit_route, deposits::apply_deposit},
    state::{Config, Participant, Round, TicketCategory},
};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(seeds = [SEED_CFG], bump = config.bump)]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump,
    )]
    pub round: AccountLoader<'info, Round>,

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
        constraint = user_ticket_ata.owner == user.key() @ ErrorCode::InvalidUserTicketAta,
    )]
    pub user_ticket_ata: Box<Account<'info, TokenAccount>>,

    /// Category vault, verified against the config in the handler.
    #[account(mut)]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, _round_id: u64, category: TicketCategory, count: u8) -> Result<()> {
    check_deposit_route(
        &ctx.accounts.config,
        category,
        &ctx.accounts.user_ticket_ata.mint,
        &ctx.accounts.vault.key(),
    )?;

    let user = ctx.accounts.user.key();
    let round_key = ctx.accounts.round.key();
    let participant = &mut ctx.accounts.participant;
    participant.bump = ctx.bumps.participant;

    let mut round = ctx.accounts.round.load_mut()?;
    let outcome = apply_deposit(&mut round, &round_key, participant, &user, category, count)?;
    let round_id = round.round_id;

    // Drop RefMut before CPI
    drop(round);

    // One seat per whole token unit
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_ticket_ata.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        count as u64,
    )?;

    emit!(Deposited {
        round_id,
        user,
        soulbound: category == TicketCategory::Soulbound,
        first_seat: outcome.first_seat,
        seats_added: outcome.seats_added,
        user_seats_after: outcome.owner_seats_after,
        fill_count_after: outcome.fill_count_after,
        draw_eligible: outcome.draw_eligible,
    });

    Ok(())
}
