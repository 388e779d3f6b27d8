use anchor_lang::prelude::*;

/**
 * Individual claim status account
 *
 * The per-claimant flag guarding exactly-once disbursement. An account that
 * does not exist yet reads as unclaimed.
 *
 * Derivation: ["claim", airdrop_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim (init_if_needed, paid by the claimant) or by the
 *    owner forcing the flag
 * 2. Flipped to claimed by a successful claim
 * 3. Rewritten only by the owner afterwards, never closed
 */
#[account]
#[derive(Default, Debug, Copy, PartialEq, Eq)]
pub struct ClaimStatus {
    /// Whether this claimant has received their allocation
    pub is_claimed: bool,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();
}
