use crate::core::error::ContractError;
use crate::util::aliases::ContractResult;
use crate::util::traits::ResultExtensions;

use cosmwasm_std::MessageInfo;

/// Ensures that the info provided to the route does not include any funds.
///
/// # Parameters
///
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use base_nft_smart_contract::util::contract_helpers::check_funds_are_empty;
/// use cosmwasm_std::testing::mock_info;
///
/// let info = mock_info("sender-name", &[]);
/// check_funds_are_empty(&info).expect("no coin provided in info - should be success");
/// ```
pub fn check_funds_are_empty(info: &MessageInfo) -> ContractResult<()> {
    if !info.funds.is_empty() {
        ContractError::InvalidFunds("route requires no funds be present".to_string()).to_err()
    } else {
        Ok(())
    }
}
