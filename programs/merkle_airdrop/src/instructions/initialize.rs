use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for initializing the airdrop
 *
 * Creates the global airdrop PDA on first use. The signer becomes the owner.
 *
 * Access Control: Anyone, exactly once
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The global airdrop account
    /// - Derived from: ["airdrop"]
    /// - init_if_needed so a second call reaches the AlreadyInitialized check
    #[account(
        init_if_needed,
        payer = owner,
        space = Airdrop::LEN,
        seeds = [AIRDROP_SEED.as_bytes()],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// The initial owner, pays for the account
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Initializes the airdrop with its first root and token reference
 *
 * @param ctx - The account context
 * @param root - Initial merkle root
 * @param base - Token mint payouts are drawn from, must not be the zero key
 */
pub fn handle_initialize(ctx: Context<Initialize>, root: [u8; 32], base: Pubkey) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;
    let owner = ctx.accounts.owner.key();

    airdrop.initialize(ctx.bumps.airdrop, owner, root, base)?;

    let airdrop_key = airdrop.key();
    emit_cpi!(Initialized {
        airdrop: airdrop_key,
        owner,
    });
    emit_cpi!(RootUpdated { root });
    emit_cpi!(BaseUpdated { base });

    Ok(())
}
