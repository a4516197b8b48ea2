use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod processors;
pub mod state;
pub mod utils;
pub mod instructions;

use instructions::*;
use processors::admin_config::InitConfigArgs;
use state::TicketCategory;

#[cfg(feature = "devnet")]
declare_id!("8ZpPsHQwaCg5GQ3GDBy5Sywx3eoAKDLeRqp1FN4UH2gx");

#[cfg(not(feature = "devnet"))]
declare_id!("7jcdSBK7zjimYBBWXERAWHvTWtxPzHoahfyQNyiXEUaX");

#[program]
pub mod seat_lottery {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>, args: InitConfigArgs) -> Result<()> {
        init_config::handler(ctx, args)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        transfer_admin::handler(ctx, new_admin)
    }

    /// Top up the prize pool that claims are paid from.
    pub fn fund_prize_pool(ctx: Context<FundPrizePool>, amount: u64) -> Result<()> {
        fund_prize_pool::handler(ctx, amount)
    }

    pub fn start_round(ctx: Context<StartRound>, round_id: u64) -> Result<()> {
        start_round::handler(ctx, round_id)
    }

    /// Take `count` seats paying one unit of the chosen category per seat.
    pub fn deposit(ctx: Context<Deposit>, round_id: u64, category: TicketCategory, count: u8) -> Result<()> {
        deposit::handler(ctx, round_id, category, count)
    }

    pub fn request_draw(ctx: Context<RequestDraw>, round_id: u64) -> Result<()> {
        request_draw::handler(ctx, round_id)
    }

    pub fn vrf_callback(ctx: Context<VrfCallback>, randomness: [u8; 32]) -> Result<()> {
        vrf_callback::handler(ctx, randomness)
    }

    /// Admin-only draw from a supplied seed, bypassing the oracle.
    pub fn force_draw(ctx: Context<ForceDraw>, round_id: u64, seed: [u8; 32]) -> Result<()> {
        force_draw::handler(ctx, round_id, seed)
    }

    /// Admin stop: the round never draws and depositors withdraw what they put in.
    pub fn set_stop(ctx: Context<SetStop>, round_id: u64) -> Result<()> {
        set_stop::handler(ctx, round_id)
    }

    pub fn claim(ctx: Context<Claim>, round_id: u64, tier: u8) -> Result<()> {
        claim::handler(ctx, round_id, tier)
    }

    pub fn claim_auto(ctx: Context<Claim>, round_id: u64) -> Result<()> {
        claim_auto::handler(ctx, round_id)
    }

    pub fn withdraw(ctx: Context<Withdraw>, round_id: u64) -> Result<()> {
        withdraw::handler(ctx, round_id)
    }
}
