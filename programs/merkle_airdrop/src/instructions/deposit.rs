use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for funding the vault
 *
 * Moves tokens of the current token reference into its vault, creating the
 * vault on first use.
 *
 * Access Control: Anyone
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        seeds = [AIRDROP_SEED.as_bytes()],
        bump = airdrop.bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Vault of the current token mint, authority is the airdrop PDA
    /// - Derived from: ["vault", airdrop_key, token_mint]
    #[account(
        init_if_needed,
        payer = depositor,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Must be the airdrop's current token reference
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.base @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Depositor's token account the tokens are taken from
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, AirdropError::InvalidAmount);

    transfer_token(
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.depositor_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None, // Depositor signs the transaction
    )?;

    emit_cpi!(TokensDeposited {
        depositor: ctx.accounts.depositor.key(),
        token_mint: ctx.accounts.token_mint.key(),
        amount,
    });

    Ok(())
}
