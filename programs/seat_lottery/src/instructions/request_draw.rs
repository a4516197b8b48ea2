use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::Discriminator;
use ephemeral_vrf_sdk::instructions::{create_request_randomness_ix, RequestRandomnessParams};
use ephemeral_vrf_sdk::types::SerializableAccountMeta;

use crate::{
    constants::*,
    events::DrawRequested,
    processors::round_lifecycle::request_draw,
    state::{Config, Round},
};

/// Convert an anchor Pubkey to the SDK's Pubkey (same 32 bytes, different crate).
fn to_sdk_pubkey(p: &Pubkey) -> ephemeral_vrf_sdk::Pubkey {
    ephemeral_vrf_sdk::Pubkey::new_from_array(p.to_bytes())
}

const VRF_PROGRAM_ID_BYTES: [u8; 32] = ephemeral_vrf_sdk::consts::VRF_PROGRAM_ID.to_bytes();
const DEFAULT_QUEUE_BYTES: [u8; 32] = ephemeral_vrf_sdk::consts::DEFAULT_QUEUE.to_bytes();

pub static VRF_PROGRAM_ID: Pubkey = Pubkey::new_from_array(VRF_PROGRAM_ID_BYTES);
pub static DEFAULT_QUEUE: Pubkey = Pubkey::new_from_array(DEFAULT_QUEUE_BYTES);

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct RequestDraw<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut, seeds = [SEED_CFG], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump,
    )]
    pub round: AccountLoader<'info, Round>,

    /// CHECK: Our program's identity PDA, used to sign the VRF CPI.
    #[account(seeds = [SEED_IDENTITY], bump)]
    pub program_identity: AccountInfo<'info>,

    /// CHECK: Oracle queue account
    #[account(mut, address = DEFAULT_QUEUE)]
    pub oracle_queue: AccountInfo<'info>,

    /// CHECK: MagicBlock VRF program
    #[account(address = VRF_PROGRAM_ID)]
    pub vrf_program: AccountInfo<'info>,

    /// CHECK: SlotHashes sysvar
    #[account(address = anchor_lang::solana_program::sysvar::slot_hashes::ID)]
    pub slot_hashes: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RequestDraw>, round_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let payer = ctx.accounts.payer.key();
    let round_key = ctx.accounts.round.key();
    let config_key = ctx.accounts.config.key();

    let request_id = {
        let mut round = ctx.accounts.round.load_mut()?;
        request_draw(&mut round, &mut ctx.accounts.config, &payer, now)?
    };

    // The request id doubles as the caller seed so every request is distinct
    let sdk_ix = create_request_randomness_ix(RequestRandomnessParams {
        payer: to_sdk_pubkey(&payer),
        oracle_queue: to_sdk_pubkey(&ctx.accounts.oracle_queue.key()),
        callback_program_id: to_sdk_pubkey(&crate::ID),
        callback_discriminator: crate::instruction::VrfCallback::DISCRIMINATOR.to_vec(),
        caller_seed: request_id,
        accounts_metas: Some(vec![
            SerializableAccountMeta {
                pubkey: to_sdk_pubkey(&config_key),
                is_signer: false,
                is_writable: true,
            },
            SerializableAccountMeta {
                pubkey: to_sdk_pubkey(&round_key),
                is_signer: false,
                is_writable: true,
            },
        ]),
        ..Default::default()
    });

    // Same bytes, anchor's solana_program types
    let accounts: Vec<AccountMeta> = sdk_ix
        .accounts
        .iter()
        .map(|meta| {
            let pubkey = Pubkey::new_from_array(meta.pubkey.to_bytes());
            if meta.is_writable {
                AccountMeta::new(pubkey, meta.is_signer)
            } else {
                AccountMeta::new_readonly(pubkey, meta.is_signer)
            }
        })
        .collect();
    let ix = Instruction {
        program_id: Pubkey::new_from_array(sdk_ix.program_id.to_bytes()),
        accounts,
        data: sdk_ix.data,
    };

    let identity_bump = ctx.bumps.program_identity;
    anchor_lang::solana_program::program::invoke_signed(
        &ix,
        &[
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.program_identity.to_account_info(),
            ctx.accounts.oracle_queue.to_account_info(),
            ctx.accounts.slot_hashes.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
        &[&[SEED_IDENTITY, &[identity_bump]]],
    )?;

    msg!("draw requested: round={} nonce={}", round_id, ctx.accounts.config.oracle.nonce);

    emit!(DrawRequested {
        round_id,
        request_id,
        requested_by: payer,
    });

    Ok(())
}
