use cosmwasm_std::{to_binary, Binary};

use crate::core::state::is_operator_for;
use crate::util::address_utils::validate_address;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

/// Returns true if `operator` currently controls every token held by `owner`.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `owner` The bech32 address of the account that granted the approval.
/// * `operator` The bech32 address of the potential operator.
pub fn query_is_approved_for_all<S1: AsRef<str>, S2: AsRef<str>>(
    deps: &DepsC,
    owner: S1,
    operator: S2,
) -> ContractResult<Binary> {
    let owner = validate_address(deps, owner, "owner")?;
    let operator = validate_address(deps, operator, "operator")?;
    to_binary(&is_operator_for(deps.storage, &owner, &operator)?)?.to_ok()
}
