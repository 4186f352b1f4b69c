use cosmwasm_std::{to_binary, Binary};

use crate::core::state::balance_of_or_zero;
use crate::util::address_utils::validate_address;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

/// Returns the number of tokens held by `owner`.  Accounts that have never held a token report
/// zero.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `owner` The bech32 address of the account to inspect.
pub fn query_balance_of<S: AsRef<str>>(deps: &DepsC, owner: S) -> ContractResult<Binary> {
    let owner = validate_address(deps, owner, "owner")?;
    to_binary(&balance_of_or_zero(deps.storage, &owner)?)?.to_ok()
}
