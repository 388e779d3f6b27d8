pub mod initialize;
pub mod set_root;
pub mod set_base;
pub mod set_is_claimed;
pub mod transfer_ownership;
pub mod claim;
pub mod check_claim_proof;
pub mod is_claimed;
pub mod deposit;
pub mod withdraw;

pub use initialize::*;
pub use set_root::*;
pub use set_base::*;
pub use set_is_claimed::*;
pub use transfer_ownership::*;
pub use claim::*;
pub use check_claim_proof::*;
pub use is_claimed::*;
pub use deposit::*;
pub use withdraw::*;
