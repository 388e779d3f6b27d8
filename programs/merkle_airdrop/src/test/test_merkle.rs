use anchor_lang::solana_program::pubkey::Pubkey;
use crate::utils::{compute_leaf, hash_pair};

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub claimant: Pubkey,
    pub amount: u64,
}

/// Off-chain style tree builder, mirrors the hashing of utils::merkle_proof
pub struct SimpleMerkleTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl SimpleMerkleTree {
    pub fn new(tree_nodes: &[TreeNode]) -> Self {
        let nodes = tree_nodes
            .iter()
            .map(|node| compute_leaf(&node.claimant, node.amount))
            .collect();

        let mut tree = SimpleMerkleTree {
            nodes,
            leaf_count: tree_nodes.len(),
        };
        tree.build_tree();
        tree
    }

    fn build_tree(&mut self) {
        let mut level_len = Self::next_level_len(self.leaf_count);
        let mut level_start = self.leaf_count;
        let mut prev_level_len = self.leaf_count;
        let mut prev_level_start = 0;

        while level_len > 0 {
            for i in 0..level_len {
                let left = prev_level_start + 2 * i;
                // Duplicate last entry if odd
                let right = if 2 * i + 1 < prev_level_len { left + 1 } else { left };
                let parent = hash_pair(&self.nodes[left], &self.nodes[right]);
                self.nodes.push(parent);
            }

            prev_level_start = level_start;
            prev_level_len = level_len;
            level_start += level_len;
            level_len = Self::next_level_len(level_len);
        }
    }

    fn next_level_len(level_len: usize) -> usize {
        if level_len <= 1 {
            0
        } else {
            (level_len + 1) / 2
        }
    }

    pub fn root(&self) -> [u8; 32] {
        *self.nodes.last().expect("empty tree has no root")
    }

    /// Generate merkle proof for a leaf at given index
    pub fn proof(&self, index: usize) -> Result<Vec<[u8; 32]>, &'static str> {
        if index >= self.leaf_count {
            return Err("Index out of bounds");
        }

        let mut proof = Vec::new();
        let mut current_index = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling_index = if current_index % 2 == 0 {
                if current_index + 1 < level_len {
                    current_index + 1
                } else {
                    current_index
                }
            } else {
                current_index - 1
            };
            proof.push(self.nodes[level_start + sibling_index]);

            current_index /= 2;
            level_start += level_len;
            level_len = Self::next_level_len(level_len);
        }

        Ok(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::verify;
    use anchor_lang::solana_program::hash::hashv;

    fn get_test_data() -> Vec<TreeNode> {
        vec![
            TreeNode { claimant: Pubkey::new_unique(), amount: 1000 },
            TreeNode { claimant: Pubkey::new_unique(), amount: 2000 },
            TreeNode { claimant: Pubkey::new_unique(), amount: 3000 },
            TreeNode { claimant: Pubkey::new_unique(), amount: 4000 },
            TreeNode { claimant: Pubkey::new_unique(), amount: 5000 },
        ]
    }

    #[test]
    fn test_leaf_encoding_is_pinned() {
        // Fixture computed independently with sha256(sha256(pubkey || amount_le))
        let alice = Pubkey::new_from_array([1; 32]);
        let bob = Pubkey::new_from_array([2; 32]);

        let alice_leaf = compute_leaf(&alice, 100);
        let bob_leaf = compute_leaf(&bob, 200);

        assert_eq!(
            alice_leaf,
            [
                53, 125, 216, 78, 112, 23, 226, 165, 229, 159, 228, 182, 191, 40, 174, 110,
                115, 187, 111, 233, 164, 109, 251, 77, 33, 174, 78, 63, 1, 206, 176, 222
            ]
        );
        assert_eq!(
            bob_leaf,
            [
                34, 226, 202, 123, 112, 20, 211, 245, 84, 110, 221, 80, 163, 107, 167, 140,
                70, 117, 67, 117, 21, 236, 96, 22, 49, 182, 160, 185, 52, 194, 229, 107
            ]
        );

        let tree = SimpleMerkleTree::new(&[
            TreeNode { claimant: alice, amount: 100 },
            TreeNode { claimant: bob, amount: 200 },
        ]);
        assert_eq!(
            tree.root(),
            [
                129, 110, 105, 181, 72, 107, 241, 52, 253, 69, 154, 189, 7, 51, 55, 115,
                150, 84, 130, 141, 118, 136, 203, 191, 5, 76, 116, 198, 255, 96, 137, 194
            ]
        );
    }

    #[test]
    fn test_leaf_is_double_hashed() {
        let claimant = Pubkey::new_unique();
        let single = hashv(&[&claimant.to_bytes(), &42u64.to_le_bytes()]).to_bytes();

        assert_ne!(compute_leaf(&claimant, 42), single);
        assert_eq!(compute_leaf(&claimant, 42), hashv(&[&single]).to_bytes());
        assert_ne!(compute_leaf(&claimant, 42), compute_leaf(&claimant, 43));
    }

    #[test]
    fn test_hash_pair_is_order_independent() {
        let a = compute_leaf(&Pubkey::new_unique(), 1);
        let b = compute_leaf(&Pubkey::new_unique(), 2);

        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn test_get_proof_and_verify() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(&tree_nodes);
        let root = merkle_tree.root();

        for (index, node) in tree_nodes.iter().enumerate() {
            let leaf = compute_leaf(&node.claimant, node.amount);
            let proof = merkle_tree.proof(index).expect("Failed to get proof");

            assert!(verify(&proof, root, leaf), "Proof verification failed for index {}", index);
        }
    }

    #[test]
    fn test_invalid_proof() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(&tree_nodes);
        let root = merkle_tree.root();
        let proof = merkle_tree.proof(0).expect("Failed to get proof");

        // Wrong claimant
        let wrong_leaf = compute_leaf(&Pubkey::new_unique(), tree_nodes[0].amount);
        assert!(!verify(&proof, root, wrong_leaf));

        // Wrong amount
        let wrong_amount = compute_leaf(&tree_nodes[0].claimant, 9999);
        assert!(!verify(&proof, root, wrong_amount));

        // Tampered sibling
        let correct_leaf = compute_leaf(&tree_nodes[0].claimant, tree_nodes[0].amount);
        let mut tampered = proof.clone();
        tampered[0][0] = tampered[0][0].wrapping_add(1);
        assert!(!verify(&tampered, root, correct_leaf));

        // Truncated proof
        assert!(!verify(&proof[..proof.len() - 1], root, correct_leaf));

        // Proof of another leaf
        let other_proof = merkle_tree.proof(1).expect("Failed to get proof");
        assert!(!verify(&other_proof, root, correct_leaf));
    }

    #[test]
    fn test_inner_node_is_not_a_leaf() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(&tree_nodes);
        let root = merkle_tree.root();

        // The parent of leaves 0 and 1 verifies as a node with the upper half of leaf 0's proof
        let proof = merkle_tree.proof(0).expect("Failed to get proof");
        let parent = hash_pair(
            &compute_leaf(&tree_nodes[0].claimant, tree_nodes[0].amount),
            &compute_leaf(&tree_nodes[1].claimant, tree_nodes[1].amount),
        );
        assert!(verify(&proof[1..], root, parent));

        // but no claim built from its raw bytes reaches the root
        let forged_claimant = Pubkey::new_from_array(parent);
        assert!(!verify(&proof[1..], root, compute_leaf(&forged_claimant, 0)));
    }

    #[test]
    fn test_two_proofs_for_the_same_leaf() {
        let alice = Pubkey::new_unique();
        let tree_nodes = vec![
            TreeNode { claimant: alice, amount: 100 },
            TreeNode { claimant: Pubkey::new_unique(), amount: 200 },
            TreeNode { claimant: alice, amount: 100 },
            TreeNode { claimant: Pubkey::new_unique(), amount: 300 },
        ];
        let merkle_tree = SimpleMerkleTree::new(&tree_nodes);
        let root = merkle_tree.root();
        let leaf = compute_leaf(&alice, 100);

        let first = merkle_tree.proof(0).expect("Failed to get proof");
        let second = merkle_tree.proof(2).expect("Failed to get proof");

        assert_ne!(first, second);
        assert!(verify(&first, root, leaf));
        assert!(verify(&second, root, leaf));
    }

    #[test]
    fn test_proof_edge_cases() {
        // Single node: empty proof, the leaf is the root
        let single_node = vec![TreeNode { claimant: Pubkey::new_unique(), amount: 1000 }];
        let single_tree = SimpleMerkleTree::new(&single_node);
        let single_proof = single_tree.proof(0).expect("Failed to get proof for single node");
        let single_leaf = compute_leaf(&single_node[0].claimant, single_node[0].amount);

        assert!(single_proof.is_empty());
        assert_eq!(single_tree.root(), single_leaf);
        assert!(verify(&single_proof, single_tree.root(), single_leaf));

        // Empty proof against any other root
        assert!(!verify(&[], [0; 32], single_leaf));

        // Out of bounds
        let merkle_tree = SimpleMerkleTree::new(&get_test_data());
        assert!(merkle_tree.proof(10).is_err());
    }
}
