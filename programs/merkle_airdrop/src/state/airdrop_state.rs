use anchor_lang::prelude::*;
use crate::error::*;
use crate::state::ClaimStatus;
use crate::utils::{compute_leaf, verify};

/**
 * Global airdrop state account
 *
 * Holds the single active merkle root, the token reference payouts are drawn
 * from, and the owner allowed to change either of them.
 *
 * Derivation: ["airdrop"]
 *
 * Lifecycle:
 * 1. Created by the first initialize call (init_if_needed)
 * 2. Root and base rotated by the owner at any time
 * 3. Read by every claim, never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct Airdrop {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing vault transfers
    pub bump: u8,

    /// Set by the first successful initialize, never cleared
    pub initialized: bool,

    /// Only identity allowed to mutate root, base and claimed flags
    pub owner: Pubkey,

    /// Merkle root over every eligible (claimant, amount) pair
    /// - Claims verify against the value active at claim time
    pub root: [u8; 32],

    /// Token mint payouts are drawn from
    /// - Never the zero key once initialized
    pub base: Pubkey,
}

impl Airdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Airdrop>();

    pub fn root(&self) -> [u8; 32] {
        self.root
    }

    pub fn base(&self) -> Pubkey {
        self.base
    }

    /// One-shot bootstrap of the airdrop state
    pub fn initialize(&mut self, bump: u8, owner: Pubkey, root: [u8; 32], base: Pubkey) -> Result<()> {
        require!(!self.initialized, AirdropError::AlreadyInitialized);
        require_keys_neq!(base, Pubkey::default(), AirdropError::ZeroAddress);

        self.bump = bump;
        self.initialized = true;
        self.owner = owner;
        self.root = root;
        self.base = base;
        Ok(())
    }

    /// Access guard for every administrative instruction
    pub fn only_owner(&self, caller: &Pubkey) -> Result<()> {
        if *caller != self.owner {
            msg!("Caller {} is not the owner {}", caller, self.owner);
            return err!(AirdropError::OnlyOwner);
        }
        Ok(())
    }

    pub fn set_root(&mut self, caller: &Pubkey, root: [u8; 32]) -> Result<()> {
        self.only_owner(caller)?;
        self.root = root;
        Ok(())
    }

    pub fn set_base(&mut self, caller: &Pubkey, base: Pubkey) -> Result<()> {
        self.only_owner(caller)?;
        require_keys_neq!(base, Pubkey::default(), AirdropError::ZeroAddress);
        self.base = base;
        Ok(())
    }

    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.only_owner(caller)?;
        require_keys_neq!(new_owner, Pubkey::default(), AirdropError::ZeroAddress);
        self.owner = new_owner;
        Ok(())
    }

    /// Forces a claimant's flag, independent of any proof (block or reinstate)
    pub fn set_is_claimed(
        &self,
        caller: &Pubkey,
        claim_status: &mut ClaimStatus,
        claimant: &Pubkey,
        is_claimed: bool,
    ) -> Result<()> {
        self.only_owner(caller)?;
        require_keys_neq!(*claimant, Pubkey::default(), AirdropError::ZeroAddress);
        claim_status.is_claimed = is_claimed;
        Ok(())
    }

    /// Read-only membership check against the current root
    pub fn check_claim_proof(&self, claimant: &Pubkey, amount: u64, proof: &[[u8; 32]]) -> bool {
        verify(proof, self.root, compute_leaf(claimant, amount))
    }

    /// Claim state transition, everything except the token movement
    ///
    /// Leaves `claim_status` flipped to claimed on success. The caller must
    /// perform the transfer afterwards and fail the whole instruction if it
    /// fails, which reverts the flip.
    pub fn process_claim(
        &self,
        claim_status: &mut ClaimStatus,
        claimant: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> Result<()> {
        if claim_status.is_claimed {
            msg!("Claimant {} has already claimed", claimant);
            return err!(AirdropError::AlreadyClaimed);
        }

        if !self.check_claim_proof(claimant, amount, proof) {
            msg!(
                "Proof failed for claimant {} amount {} proof {:?}",
                claimant,
                amount,
                proof
            );
            return err!(AirdropError::ProofFailed);
        }

        // Effects before the token CPI, a reentrant claim must see the flag
        claim_status.is_claimed = true;
        Ok(())
    }
}
