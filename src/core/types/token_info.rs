use crate::core::types::token_id::TokenId;
use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A snapshot of everything the contract tracks for a single token.
///
/// # Parameters
///
/// * `token_id` The unique identifier of the token.
/// * `owner` The address that currently owns the token.
/// * `metadata` The metadata value attached to the token when it was minted, if any.
/// * `approved` The single address allowed to transfer the token on the owner's behalf, if any.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct TokenInfo {
    pub token_id: TokenId,
    pub owner: Addr,
    pub metadata: Option<u32>,
    pub approved: Option<Addr>,
}
impl TokenInfo {
    pub fn new(
        token_id: TokenId,
        owner: Addr,
        metadata: Option<u32>,
        approved: Option<Addr>,
    ) -> Self {
        Self {
            token_id,
            owner,
            metadata,
            approved,
        }
    }
}
