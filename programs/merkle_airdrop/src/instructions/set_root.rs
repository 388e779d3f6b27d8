use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for rotating the merkle root
 *
 * Access Control: Owner only
 *
 * Business Logic:
 * - Every later claim verifies against the new root
 * - Claimed flags are untouched, so nobody can claim twice across a rotation
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetRoot<'info> {
    #[account(
        mut,
        seeds = [AIRDROP_SEED.as_bytes()],
        bump = airdrop.bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Must match the owner stored in the airdrop state
    pub owner: Signer<'info>,
}

pub fn handle_set_root(ctx: Context<SetRoot>, root: [u8; 32]) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.airdrop.set_root(&owner, root)?;

    emit_cpi!(RootUpdated { root });

    Ok(())
}
