use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for rotating the token reference
 *
 * Access Control: Owner only
 *
 * Business Logic:
 * - Claims pay out of the vault of the new mint from now on
 * - Funds left in the previous mint's vault stay recoverable through withdraw
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetBase<'info> {
    #[account(
        mut,
        seeds = [AIRDROP_SEED.as_bytes()],
        bump = airdrop.bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Must match the owner stored in the airdrop state
    pub owner: Signer<'info>,
}

pub fn handle_set_base(ctx: Context<SetBase>, base: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.airdrop.set_base(&owner, base)?;

    emit_cpi!(BaseUpdated { base });

    Ok(())
}
