use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for forcing a claimant's claimed flag
 *
 * Lets the owner block an address (flag = true) or reinstate it
 * (flag = false) regardless of any merkle proof.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(claimant: Pubkey)]
pub struct SetIsClaimed<'info> {
    #[account(
        seeds = [AIRDROP_SEED.as_bytes()],
        bump = airdrop.bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Claim status of the targeted claimant, created if it does not exist yet
    /// - Derived from: ["claim", airdrop_key, claimant]
    #[account(
        init_if_needed,
        payer = owner,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), claimant.as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Must match the owner stored in the airdrop state, pays for account creation
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_set_is_claimed(ctx: Context<SetIsClaimed>, claimant: Pubkey, is_claimed: bool) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.airdrop.set_is_claimed(
        &owner,
        &mut ctx.accounts.claim_status,
        &claimant,
        is_claimed,
    )?;

    emit_cpi!(IsClaimedUpdated {
        claimant,
        is_claimed,
    });

    Ok(())
}
