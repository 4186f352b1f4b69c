use cosmwasm_std::{to_binary, Binary};

use crate::core::state::may_load_token_approval;
use crate::core::types::token_id::TokenId;
use crate::util::address_utils::validate_address;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

/// Returns true only if `user` is the address explicitly approved for the token.  Owners and
/// operators are not reported as approved by this query.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `token_id` The unique identifier of the token.
/// * `user` The bech32 address to check.
pub fn query_is_approved<S: AsRef<str>>(
    deps: &DepsC,
    token_id: TokenId,
    user: S,
) -> ContractResult<Binary> {
    let user = validate_address(deps, user, "user")?;
    let approved = may_load_token_approval(deps.storage, token_id)?
        .map_or(false, |approved| approved == user);
    to_binary(&approved)?.to_ok()
}
