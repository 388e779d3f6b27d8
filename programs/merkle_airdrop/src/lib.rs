use anchor_lang::prelude::*;

declare_id!("Aoo5CoCvLECz4Kz46AgWCVtyGWGcc1Rq6NyzGe4ux3Aj");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Merkle Airdrop Program
 *
 * Pays out a fungible token allocation exactly once per eligible address.
 * Eligibility is committed off-chain as a merkle root over (claimant, amount)
 * pairs; claimants prove membership with a merkle proof.
 *
 * Key Features:
 * - Double-hashed leaves and sorted-pair nodes (see utils::merkle_proof)
 * - One claimed flag per address, flipped before any token moves
 * - Owner-controlled root and token reference rotation
 * - Owner can block or reinstate an address by forcing its flag
 * - Read-only proof and flag queries through return data
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Airdrop PDA: owner, active root and token reference
 * - Token Vault PDAs: one per mint, owned by the airdrop PDA
 * - Claim Status PDAs: one claimed flag per claimant
 *
 * Workflow:
 * 1. Owner initializes with a root and token mint
 * 2. Anyone deposits tokens into the vault
 * 3. Claimants claim with valid merkle proofs
 * 4. Owner rotates root or mint, blocks addresses, recovers leftovers
 */
#[program]
pub mod merkle_airdrop {
    use super::*;

    /**
     * Initializes the airdrop
     *
     * @param ctx - Account context containing the airdrop and owner accounts
     * @param root - Initial merkle root
     * @param base - Token mint payouts are drawn from, must not be the zero key
     *
     * Access Control: Anyone, once. The caller becomes the owner
     */
    pub fn initialize(ctx: Context<Initialize>, root: [u8; 32], base: Pubkey) -> Result<()> {
        handle_initialize(ctx, root, base)
    }

    /**
     * Replaces the merkle root used for claim verification
     *
     * Access Control: Owner only
     */
    pub fn set_root(ctx: Context<SetRoot>, root: [u8; 32]) -> Result<()> {
        handle_set_root(ctx, root)
    }

    /**
     * Replaces the token mint payouts are drawn from
     *
     * Access Control: Owner only
     */
    pub fn set_base(ctx: Context<SetBase>, base: Pubkey) -> Result<()> {
        handle_set_base(ctx, base)
    }

    /**
     * Forces the claimed flag of an address, independent of any proof
     *
     * @param claimant - Address whose flag is written, must not be the zero key
     * @param is_claimed - true blocks the address, false reinstates it
     *
     * Access Control: Owner only
     */
    pub fn set_is_claimed(ctx: Context<SetIsClaimed>, claimant: Pubkey, is_claimed: bool) -> Result<()> {
        handle_set_is_claimed(ctx, claimant, is_claimed)
    }

    /**
     * Hands administration to a new owner
     *
     * Access Control: Owner only
     */
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_owner)
    }

    /**
     * Claims tokens with merkle proof verification
     *
     * @param ctx - Account context containing airdrop, claim status and token accounts
     * @param amount - Allocation of the signer as committed in the merkle tree
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any address with a valid merkle proof, once
     */
    pub fn claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim(ctx, amount, proof)
    }

    /**
     * Tests a candidate claim against the current root without claiming
     *
     * Access Control: Anyone
     */
    pub fn check_claim_proof(
        ctx: Context<CheckClaimProof>,
        claimant: Pubkey,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<bool> {
        handle_check_claim_proof(ctx, claimant, amount, proof)
    }

    /**
     * Reads the claimed flag of an address
     *
     * Access Control: Anyone
     */
    pub fn is_claimed(ctx: Context<IsClaimed>, claimant: Pubkey) -> Result<bool> {
        handle_is_claimed(ctx, claimant)
    }

    /**
     * Funds the vault of the current token mint
     *
     * Access Control: Anyone
     */
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        handle_deposit(ctx, amount)
    }

    /**
     * Recovers tokens from the vault of any mint
     *
     * Access Control: Owner only
     */
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        handle_withdraw(ctx, amount)
    }
}
