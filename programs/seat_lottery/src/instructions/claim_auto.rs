use anchor_lang::prelude::*;
use crate::{instructions::claim::Claim, processors::claims::claim_auto};

/// Claim without naming a tier: pays the lowest unclaimed tier the signer won.
pub fn handler(ctx: Context<Claim>, round_id: u64) -> Result<()> {
    let winner = ctx.accounts.winner.key();

    let outcome = {
        let mut round = ctx.accounts.round.load_mut()?;
        claim_auto(&mut round, &ctx.accounts.config, &winner)?
    };

    ctx.accounts.pay_out(round_id, outcome)
}
