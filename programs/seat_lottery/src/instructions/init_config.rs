use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{
    constants::*,
    errors::ErrorCode,
    processors::admin_config::{apply_init_config, ConfigKeys, InitConfigArgs},
    state::Config,
};

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = Config::SPACE,
        seeds = [SEED_CFG],
        bump
    )]
    pub config: Box<Account<'info, Config>>,

    pub transferable_mint: Box<Account<'info, Mint>>,

    #[account(
        constraint = soulbound_mint.key() != transferable_mint.key() @ ErrorCode::InvalidMint,
    )]
    pub soulbound_mint: Box<Account<'info, Mint>>,

    /// Custody for deposited transferable units.
    #[account(
        init,
        payer = payer,
        seeds = [SEED_VAULT, transferable_mint.key().as_ref()],
        bump,
        token::mint = transferable_mint,
        token::authority = config,
    )]
    pub transferable_vault: Box<Account<'info, TokenAccount>>,

    /// Custody for deposited soulbound units.
    #[account(
        init,
        payer = payer,
        seeds = [SEED_VAULT, soulbound_mint.key().as_ref()],
        bump,
        token::mint = soulbound_mint,
        token::authority = config,
    )]
    pub soulbound_vault: Box<Account<'info, TokenAccount>>,

    /// Prizes are paid in transferable units out of this pool.
    #[account(
        init,
        payer = payer,
        seeds = [SEED_PRIZE_VAULT],
        bump,
        token::mint = transferable_mint,
        token::authority = config,
    )]
    pub prize_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitConfig>, args: InitConfigArgs) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let keys = ConfigKeys {
        admin: ctx.accounts.admin.key(),
        transferable_mint: ctx.accounts.transferable_mint.key(),
        soulbound_mint: ctx.accounts.soulbound_mint.key(),
    };

    let cfg = &mut ctx.accounts.config;
    apply_init_config(cfg, keys, &args, now)?;
    cfg.bump = ctx.bumps.config;
    cfg.transferable_vault_bump = ctx.bumps.transferable_vault;
    cfg.soulbound_vault_bump = ctx.bumps.soulbound_vault;
    cfg.prize_vault_bump = ctx.bumps.prize_vault;

    msg!(
        "config: capacity={} tiers={} delay={}s",
        cfg.capacity,
        cfg.tiers,
        cfg.min_draw_delay_sec
    );
    Ok(())
}
