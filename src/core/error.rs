use cosmwasm_std::StdError;
use thiserror::Error;

use super::types::token_id::TokenId;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Bech32Error(#[from] bech32::Error),

    #[error("Semver parsing error: {0}")]
    SemVer(#[from] semver::Error),

    #[error("Unable to update token count for [{address}]: {explanation}")]
    CannotInsert {
        address: String,
        explanation: String,
    },

    #[error("Unable to fetch token count for [{address}]: {explanation}")]
    CannotFetchValue {
        address: String,
        explanation: String,
    },

    #[error("Invalid address provided [{address}]: {explanation}")]
    InvalidAddress {
        address: String,
        explanation: String,
    },

    #[error("Current contract name [{current_contract}] does not match provided migration name [{migration_contract}]")]
    InvalidContractName {
        current_contract: String,
        migration_contract: String,
    },

    #[error("Current contract version [{current_version}] is higher than provided migration version [{migration_version}]")]
    InvalidContractVersion {
        current_version: String,
        migration_version: String,
    },

    #[error("{0}")]
    InvalidFunds(String),

    #[error("Message of type [{message_type}] was invalid. Invalid fields: {invalid_fields:?}")]
    InvalidMessageFields {
        message_type: String,
        invalid_fields: Vec<String>,
    },

    #[error("Invalid message type provided. Expected message type {expected_message_type}")]
    InvalidMessageType { expected_message_type: String },

    #[error("Address [{address}] is not approved to transfer token [{token_id}]")]
    NotApproved { token_id: TokenId, address: String },

    #[error("Not allowed: {explanation}")]
    NotAllowed { explanation: String },

    #[error("Address [{address}] does not own token [{token_id}]. Current owner: [{owner}]")]
    NotOwner {
        token_id: TokenId,
        address: String,
        owner: String,
    },

    #[error("Token [{token_id}] already exists")]
    TokenExists { token_id: TokenId },

    #[error("Token [{token_id}] not found")]
    TokenNotFound { token_id: TokenId },
}
impl ContractError {
    pub fn not_allowed<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::NotAllowed {
            explanation: explanation.into(),
        }
    }
}
