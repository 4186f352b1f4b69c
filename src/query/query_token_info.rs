use cosmwasm_std::{to_binary, Binary};

use crate::core::state::{may_load_token_approval, may_load_token_metadata, may_load_token_owner};
use crate::core::types::token_id::TokenId;
use crate::core::types::token_info::TokenInfo;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

/// Collects the owner, metadata, and approval of a token into a single
/// [TokenInfo](crate::core::types::token_info::TokenInfo).  Null is returned for an unknown token.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `token_id` The unique identifier of the token.
pub fn query_token_info(deps: &DepsC, token_id: TokenId) -> ContractResult<Binary> {
    to_binary(&load_token_info(deps, token_id)?)?.to_ok()
}

fn load_token_info(deps: &DepsC, token_id: TokenId) -> ContractResult<Option<TokenInfo>> {
    let owner = match may_load_token_owner(deps.storage, token_id)? {
        Some(owner) => owner,
        None => return Ok(None),
    };
    Some(TokenInfo::new(
        token_id,
        owner,
        may_load_token_metadata(deps.storage, token_id)?,
        may_load_token_approval(deps.storage, token_id)?,
    ))
    .to_ok()
}
