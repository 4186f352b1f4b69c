use cosmwasm_std::{to_binary, Binary};

use crate::core::state::list_owned_token_ids;
use crate::core::types::token_id::TokenId;
use crate::util::address_utils::validate_address;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::functions::resolve_query_limit;
use crate::util::traits::ResultExtensions;

/// Lists the ids of the tokens held by `owner` in ascending order.  Results are paginated: pass
/// the last id of a page as `start_after` to fetch the next one.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `owner` The bech32 address of the account whose tokens are listed.
/// * `start_after` An exclusive lower bound for the returned ids.
/// * `limit` The maximum amount of ids to return.  Defaults to
/// [DEFAULT_QUERY_LIMIT](crate::util::constants::DEFAULT_QUERY_LIMIT) and is capped at
/// [MAX_QUERY_LIMIT](crate::util::constants::MAX_QUERY_LIMIT).
pub fn query_tokens<S: AsRef<str>>(
    deps: &DepsC,
    owner: S,
    start_after: Option<TokenId>,
    limit: Option<u32>,
) -> ContractResult<Binary> {
    let owner = validate_address(deps, owner, "owner")?;
    let token_ids = list_owned_token_ids(
        deps.storage,
        &owner,
        start_after,
        resolve_query_limit(limit),
    )?;
    to_binary(&token_ids)?.to_ok()
}
