use anchor_lang::prelude::*;

use crate::{
    constants::{SEED_CFG, SEED_VAULT},
    errors::ErrorCode,
    processors::refunds::RefundOutcome,
    state::{Config, TicketCategory},
};

/// Escrow vault holding `category` units, re-derived from the stored bump.
pub fn category_vault(config: &Config, category: TicketCategory) -> Result<Pubkey> {
    let mint = config.mint_for(category);
    Pubkey::create_program_address(
        &[SEED_VAULT, mint.as_ref(), &[config.vault_bump_for(category)]],
        &crate::ID,
    )
    .map_err(|_| ErrorCode::InvalidVault.into())
}

/// A deposit must come from an account of the category's mint and land in that
/// category's vault.
pub fn check_deposit_route(
    config: &Config,
    category: TicketCategory,
    source_mint: &Pubkey,
    vault: &Pubkey,
) -> Result<()> {
    require_keys_eq!(*source_mint, config.mint_for(category), ErrorCode::InvalidMint);
    require_keys_eq!(*vault, category_vault(config, category)?, ErrorCode::InvalidVault);
    Ok(())
}

/// Seeds the config PDA signs with when moving funds out of a vault.
pub fn config_signer_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
    [SEED_CFG, bump]
}

impl RefundOutcome {
    /// One transfer per category with something to send back.
    pub fn legs(&self) -> Vec<(TicketCategory, u64)> {
        [
            (TicketCategory::Transferable, self.transferable_units),
            (TicketCategory::Soulbound, self.soulbound_units),
        ]
        .into_iter()
        .filter(|(_, units)| *units > 0)
        .collect()
    }
}
