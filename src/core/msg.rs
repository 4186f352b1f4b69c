use crate::core::types::genesis_mint::GenesisMint;
use crate::core::types::token_id::TokenId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The message used to instantiate the contract.
///
/// * `contract_name` The name of the contract, optionally bound to the contract's address.
/// * `bind_contract_name` If true, a restricted Provenance name binding for `contract_name` is
/// emitted during instantiation.
/// * `genesis` The tokens minted to the instantiating account.  Defaults to ten tokens starting at
/// id 188 with metadata starting at 20.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InitMsg {
    pub contract_name: String,
    pub bind_contract_name: bool,
    pub genesis: Option<GenesisMint>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Grants `to` the right to transfer a single token on behalf of its owner.  Only the most
    /// recent approval for a token is retained.
    Approve { to: String, token_id: TokenId },
    /// Moves a token owned by the sender to the `to` address.
    Transfer { to: String, token_id: TokenId },
    /// Moves a token from `from` to `to`.  The sender must be the owner, the token's approved
    /// address, or an operator for the owner.
    TransferFrom {
        from: String,
        to: String,
        token_id: TokenId,
    },
    /// Grants or revokes `operator`'s right to manage every token owned by the sender.
    SetApprovalForAll { operator: String, approved: bool },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    BalanceOf {
        owner: String,
    },
    OwnerOf {
        token_id: TokenId,
    },
    GetApproved {
        token_id: TokenId,
    },
    IsApproved {
        token_id: TokenId,
        user: String,
    },
    IsApprovedForAll {
        owner: String,
        operator: String,
    },
    TokenMetadata {
        token_id: TokenId,
    },
    TokenInfo {
        token_id: TokenId,
    },
    Tokens {
        owner: String,
        start_after: Option<TokenId>,
        limit: Option<u32>,
    },
    QueryState {},
    QueryVersion {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    ContractUpgrade {},
}
