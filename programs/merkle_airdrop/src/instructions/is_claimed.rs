use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;

/**
 * Account context for reading a claimant's claimed flag
 *
 * The claim status account may not exist yet, which reads as unclaimed.
 */
#[derive(Accounts)]
#[instruction(claimant: Pubkey)]
pub struct IsClaimed<'info> {
    #[account(
        seeds = [AIRDROP_SEED.as_bytes()],
        bump = airdrop.bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Claim status of the claimant, possibly never created
    /// CHECK: address is pinned by the seeds, contents are validated in the handler
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), claimant.as_ref()],
        bump
    )]
    pub claim_status: UncheckedAccount<'info>,
}

pub fn handle_is_claimed(ctx: Context<IsClaimed>, _claimant: Pubkey) -> Result<bool> {
    let claim_status = &ctx.accounts.claim_status;

    if claim_status.data_len() == 0 {
        return Ok(false);
    }

    require!(
        claim_status.owner == &crate::ID,
        AirdropError::ClaimStatusNotOwnedByProgram
    );

    let data = claim_status.try_borrow_data()?;
    let status = ClaimStatus::try_deserialize(&mut data.as_ref())?;

    Ok(status.is_claimed)
}
