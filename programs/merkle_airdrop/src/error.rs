use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Initialization errors
    #[msg("Airdrop has already been initialized")]
    AlreadyInitialized,

    // Input validation errors
    #[msg("Address must not be the zero address")]
    ZeroAddress,
    #[msg("Invalid amount")]
    InvalidAmount,

    // Access control errors
    #[msg("Only owner can perform this action")]
    OnlyOwner,

    // Claim errors
    #[msg("Claimant has already claimed")]
    AlreadyClaimed,
    #[msg("Merkle proof failed to verify against the current root")]
    ProofFailed,

    // Token errors
    #[msg("Insufficient vault balance for this transfer")]
    InsufficientVaultBalance,
    #[msg("Token mint does not match the airdrop's token reference")]
    TokenMintMismatch,

    // System level errors
    #[msg("Claim status account must be owned by this program")]
    ClaimStatusNotOwnedByProgram,
}
