use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, cpi_accounts, seeds),
        None => CpiContext::new(token_program, cpi_accounts),
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Builds the signer seeds of the airdrop PDA, which owns every vault
pub fn airdrop_signer_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
    [crate::constants::AIRDROP_SEED.as_bytes(), bump]
}
