use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{airdrop_signer_seeds, transfer_token};
use crate::event::*;

/**
 * Account context for recovering tokens from a vault
 *
 * Works on the vault of any mint, so leftovers of a previous token reference
 * can be pulled out after a base rotation.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        seeds = [AIRDROP_SEED.as_bytes()],
        bump = airdrop.bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Vault to withdraw from
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

    /// Owner's token account to receive the tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(token::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Must match the owner stored in the airdrop state
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;

    // ===== VALIDATION PHASE =====

    airdrop.only_owner(&ctx.accounts.owner.key())?;
    require!(amount > 0, AirdropError::InvalidAmount);
    require!(
        ctx.accounts.token_vault.amount >= amount,
        AirdropError::InsufficientVaultBalance
    );

    // ===== INTERACTIONS PHASE =====

    let bump = [airdrop.bump];
    let seeds = airdrop_signer_seeds(&bump);
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.airdrop.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(TokensWithdrawn {
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        amount_withdrawn: amount,
    });

    Ok(())
}
