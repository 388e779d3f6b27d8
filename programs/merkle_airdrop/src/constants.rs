use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds used throughout the merkle airdrop program.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for the airdrop PDA derivation
/// - Used in: ["airdrop"]
/// - Single global account holding owner, merkle root and token reference
/// - Also the token authority of every vault
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", airdrop_key, token_mint]
/// - One vault per mint, so rotating the token reference never strands funds
///   in an account the program can no longer address
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", airdrop_key, claimant_key]
/// - One claimed flag per claimant
/// - Never closed, the account is the exactly-once guard
pub const CLAIM_SEED: &str = "claim";
