use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{airdrop_signer_seeds, transfer_token};
use crate::event::*;

/**
 * Account context for claiming tokens
 *
 * Eligible claimants present their allocation and a merkle proof. The
 * instruction checks the claimed flag, verifies the proof against the current
 * root, flips the flag and pays out from the vault of the current token mint.
 *
 * Access Control: Any claimant with a valid merkle proof, once
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The global airdrop account
    /// - Supplies the active root and token reference
    /// - Signs the vault transfer
    #[account(
        seeds = [AIRDROP_SEED.as_bytes()],
        bump = airdrop.bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Claimed flag for this claimant
    /// - Derived from: ["claim", airdrop_key, claimant_key]
    /// - Created on the first attempt, the creation reverts with a failed claim
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Vault of the current token mint
    /// - Derived from: ["vault", airdrop_key, token_mint]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref(), token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Must be the airdrop's current token reference
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.base @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The claimant, must sign
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim with merkle proof verification
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Allocation of the claimant as committed in the merkle tree
 * @param proof - Sibling hashes from the leaf up to the root
 *
 * Any error after the flag flip fails the whole instruction, so the runtime
 * discards the flip together with the transfer.
 */
pub fn handle_claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();

    // ===== CHECKS AND EFFECTS =====

    ctx.accounts.airdrop.process_claim(
        &mut ctx.accounts.claim_status,
        &claimant,
        amount,
        &proof,
    )?;

    emit_cpi!(IsClaimedUpdated {
        claimant,
        is_claimed: true,
    });

    // ===== INTERACTIONS =====

    let available = ctx.accounts.token_vault.amount;
    if available < amount {
        msg!(
            "Vault holds {} but claimant {} is owed {}",
            available,
            claimant,
            amount
        );
        return err!(AirdropError::InsufficientVaultBalance);
    }

    let bump = [ctx.accounts.airdrop.bump];
    let seeds = airdrop_signer_seeds(&bump);
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.airdrop.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(Claimed { claimant, amount });

    msg!("Claimed {} tokens for {}", amount, claimant);

    Ok(())
}
