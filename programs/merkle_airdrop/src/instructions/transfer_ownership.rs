use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for handing the airdrop to a new owner
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [AIRDROP_SEED.as_bytes()],
        bump = airdrop.bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    pub owner: Signer<'info>,
}

pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let previous_owner = ctx.accounts.owner.key();
    ctx.accounts.airdrop.transfer_ownership(&previous_owner, new_owner)?;

    emit_cpi!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    Ok(())
}
