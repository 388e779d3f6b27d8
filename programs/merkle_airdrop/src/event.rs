use anchor_lang::prelude::*;

/// Event emitted once when the airdrop is initialized
#[event]
pub struct Initialized {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Owner allowed to administer the airdrop
    pub owner: Pubkey,
}

/// Event emitted when tokens are claimed
#[event]
pub struct Claimed {
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount of tokens sent to the claimant
    pub amount: u64,
}

/// Event emitted when the merkle root changes
#[event]
pub struct RootUpdated {
    /// The new merkle root hash
    pub root: [u8; 32],
}

/// Event emitted when the token reference changes
#[event]
pub struct BaseUpdated {
    /// The new token mint
    pub base: Pubkey,
}

/// Event emitted whenever a claimant's claimed flag is written
#[event]
pub struct IsClaimedUpdated {
    /// Address whose flag changed
    pub claimant: Pubkey,
    /// New value of the flag
    pub is_claimed: bool,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

/// Event emitted when the vault is funded
#[event]
pub struct TokensDeposited {
    /// Account that funded the vault
    pub depositor: Pubkey,
    /// Token mint of the vault
    pub token_mint: Pubkey,
    /// Amount of tokens deposited
    pub amount: u64,
}

/// Event emitted when the owner recovers tokens from a vault
#[event]
pub struct TokensWithdrawn {
    /// Owner who withdrew the tokens
    pub owner: Pubkey,
    /// Token mint of the vault
    pub token_mint: Pubkey,
    /// Amount of tokens withdrawn
    pub amount_withdrawn: u64,
}
