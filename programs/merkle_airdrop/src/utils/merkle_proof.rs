use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

/**
 * Merkle claim verification
 *
 * Leaf encoding (must match the off-chain tree builder bit for bit):
 * - inner = sha256(claimant_pubkey[32] || amount.to_le_bytes()[8])
 * - leaf  = sha256(inner)
 *
 * Intermediate nodes hash the lexicographically smaller child first:
 * - node  = sha256(min(a, b) || max(a, b))
 *
 * A leaf's outer hash always covers 32 bytes while a node's hash always
 * covers 64, so an intermediate node can never be replayed as a leaf.
 */

/// Computes the leaf hash for a (claimant, amount) pair
pub fn compute_leaf(claimant: &Pubkey, amount: u64) -> [u8; 32] {
    let inner = hashv(&[&claimant.to_bytes(), &amount.to_le_bytes()]);
    hashv(&[&inner.to_bytes()]).to_bytes()
}

/// Hashes two sibling nodes in sorted order
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Returns true iff `proof` leads from `leaf` to `root`
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}
