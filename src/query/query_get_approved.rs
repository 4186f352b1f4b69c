use cosmwasm_std::{to_binary, Binary};

use crate::core::state::may_load_token_approval;
use crate::core::types::token_id::TokenId;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

/// Returns the single address approved to transfer the token.  Null is returned when the token
/// has no approval or does not exist.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `token_id` The unique identifier of the token.
pub fn query_get_approved(deps: &DepsC, token_id: TokenId) -> ContractResult<Binary> {
    to_binary(&may_load_token_approval(deps.storage, token_id)?)?.to_ok()
}
