pub mod merkle_proof;
pub mod token;

pub use merkle_proof::*;
pub use token::*;
