use cosmwasm_std::{to_binary, Binary};

use crate::core::state::may_load_token_owner;
use crate::core::types::token_id::TokenId;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

/// Returns the owner of the token, or null when the token does not exist.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `token_id` The unique identifier of the token.
pub fn query_owner_of(deps: &DepsC, token_id: TokenId) -> ContractResult<Binary> {
    to_binary(&may_load_token_owner(deps.storage, token_id)?)?.to_ok()
}
