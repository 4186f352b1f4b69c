//! Contains all structs used to drive core functionality throughout the contract.

/// Describes the batch of tokens minted to the instantiating account.
pub mod genesis_mint;
/// The identifier type used for every token held by the contract.
pub mod token_id;
/// A full snapshot of a single token, returned by the token info query.
pub mod token_info;
