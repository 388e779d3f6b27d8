use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;

/**
 * Account context for the read-only proof check
 *
 * Lets anyone test a candidate (claimant, amount, proof) against the current
 * root before submitting a real claim. Nothing is written.
 */
#[derive(Accounts)]
pub struct CheckClaimProof<'info> {
    #[account(
        seeds = [AIRDROP_SEED.as_bytes()],
        bump = airdrop.bump
    )]
    pub airdrop: Account<'info, Airdrop>,
}

pub fn handle_check_claim_proof(
    ctx: Context<CheckClaimProof>,
    claimant: Pubkey,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<bool> {
    Ok(ctx.accounts.airdrop.check_claim_proof(&claimant, amount, &proof))
}
