//! Transfer-instruction construction and input validation.
//!
//! Validation happens before any status emission and before any provider
//! call; a rejected input never reaches the external service.

use std::str::FromStr;

use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
#[allow(deprecated)]
use solana_sdk::system_instruction;

use crate::orchestrator::WalletError;

/// Parse a user-entered lamport amount. Must be a finite positive number.
pub fn parse_lamports(input: &str) -> Result<u64, WalletError> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| WalletError::Validation(AMOUNT_NOT_POSITIVE.to_owned()))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(WalletError::Validation(AMOUNT_NOT_POSITIVE.to_owned()));
    }
    Ok(amount as u64)
}

/// Parse a user-entered recipient as a base58 public key.
pub fn parse_recipient(input: &str) -> Result<Pubkey, WalletError> {
    Pubkey::from_str(input.trim())
        .map_err(|_| WalletError::Validation(INVALID_RECIPIENT.to_owned()))
}

const AMOUNT_NOT_POSITIVE: &str = "amount must be a positive number of lamports";
const INVALID_RECIPIENT: &str = "invalid recipient public key";
const WALLET_UNAVAILABLE: &str = "smart wallet address unavailable";

/// Build exactly one transfer instruction from the connected smart wallet to
/// the given recipient for the given lamport amount.
#[allow(deprecated)]
pub fn build_transfer(
    from: Option<&Pubkey>,
    recipient: &str,
    amount: &str,
) -> Result<Instruction, WalletError> {
    let from = from.ok_or_else(|| WalletError::Validation(WALLET_UNAVAILABLE.to_owned()))?;
    let to = parse_recipient(recipient)?;
    let lamports = parse_lamports(amount)?;
    Ok(system_instruction::transfer(from, &to, lamports))
}

/// Zero-lamport self-transfer: exercises the full authorization-and-submission
/// path without funds risk.
#[allow(deprecated)]
pub fn build_self_transfer_demo(from: Option<&Pubkey>) -> Result<Instruction, WalletError> {
    let from = from.ok_or_else(|| WalletError::Validation(WALLET_UNAVAILABLE.to_owned()))?;
    Ok(system_instruction::transfer(from, from, 0))
}
