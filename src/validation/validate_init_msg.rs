use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::types::genesis_mint::GenesisMint;
use crate::util::aliases::ContractResult;
use crate::util::constants::MAX_GENESIS_TOKEN_COUNT;
use crate::util::traits::ResultExtensions;

/// Validates the integrity of an intercepted [InitMsg](crate::core::msg::InitMsg) and its
/// associated [GenesisMint](crate::core::types::genesis_mint::GenesisMint), if provided.
///
/// # Parameters
///
/// * `msg` The init msg sent to the [instantiate](crate::contract::instantiate) function.
pub fn validate_init_msg(msg: &InitMsg) -> ContractResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if msg.contract_name.trim().is_empty() {
        invalid_fields.push("contract_name: must not be blank".to_string());
    }
    if let Some(genesis) = &msg.genesis {
        invalid_fields.append(&mut validate_genesis_mint(genesis));
    }
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: "Instantiate".to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}

fn validate_genesis_mint(genesis: &GenesisMint) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if genesis.token_count > MAX_GENESIS_TOKEN_COUNT {
        invalid_fields.push(format!(
            "genesis:token_count: cannot mint more than {} tokens, but {} were requested",
            MAX_GENESIS_TOKEN_COUNT, genesis.token_count,
        ));
    }
    if genesis.token_count > 0 && genesis.last_token_id().is_none() {
        invalid_fields.push(format!(
            "genesis:first_token_id: minting {} tokens from id {} would overflow the token id range",
            genesis.token_count, genesis.first_token_id,
        ));
    }
    if genesis.token_count > 0 && genesis.last_metadata().is_none() {
        invalid_fields.push(format!(
            "genesis:first_metadata: minting {} tokens from metadata {} would overflow the metadata range",
            genesis.token_count, genesis.first_metadata,
        ));
    }
    invalid_fields
}
