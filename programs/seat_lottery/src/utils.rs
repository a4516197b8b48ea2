use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

pub fn checked_add_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(ErrorCode::MathOverflow.into())
}

pub fn checked_add_i64(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or(ErrorCode::MathOverflow.into())
}

/// Request ids are unique for the engine's lifetime because `nonce` only grows.
pub fn derive_request_id(round_id: u64, nonce: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&round_id.to_le_bytes());
    hasher.update(&nonce.to_le_bytes());
    *hasher.finalize().as_bytes()
}

/// Expands a scalar seed (as handed out by scalar-valued oracles) into the 32-byte form.
#[cfg(test)]
pub(crate) fn seed_from_u128(value: u128) -> [u8; 32] {
    let mut seed = [0u8; 32];
    seed[..16].copy_from_slice(&value.to_le_bytes());
    seed
}
