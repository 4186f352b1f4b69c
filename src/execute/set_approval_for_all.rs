use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::set_operator_approval;
use crate::util::address_utils::validate_recipient_address;
use crate::util::aliases::{ContractResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{MessageInfo, Response};

/// A transformation of [ExecuteMsg::SetApprovalForAll](crate::core::msg::ExecuteMsg::SetApprovalForAll)
/// for ease of use in the underlying [set_approval_for_all](self::set_approval_for_all) function.
///
/// # Parameters
///
/// * `operator` The bech32 address to grant or revoke control over all of the sender's tokens.
/// * `approved` If true, the operator is granted control.  If false, it is revoked.
#[derive(Clone, PartialEq)]
pub struct SetApprovalForAllV1 {
    pub operator: String,
    pub approved: bool,
}
impl SetApprovalForAllV1 {
    pub fn new<S: Into<String>>(operator: S, approved: bool) -> Self {
        Self {
            operator: operator.into(),
            approved,
        }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [SetApprovalForAll](crate::core::msg::ExecuteMsg::SetApprovalForAll)
    /// variant, then an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType)
    /// error will be returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> ContractResult<SetApprovalForAllV1> {
        match msg {
            ExecuteMsg::SetApprovalForAll { operator, approved } => {
                SetApprovalForAllV1::new(operator, approved).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::SetApprovalForAll".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::SetApprovalForAll](crate::core::msg::ExecuteMsg::SetApprovalForAll).
/// Operator status applies to every token the sender owns now or later, until it is revoked.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the set approval for all v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn set_approval_for_all(
    deps: DepsMutC,
    info: MessageInfo,
    msg: SetApprovalForAllV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let operator = validate_recipient_address(&deps.as_ref(), &msg.operator, "operator")?;
    if operator == info.sender {
        return ContractError::not_allowed("an address cannot be its own operator").to_err();
    }
    set_operator_approval(deps.storage, &info.sender, &operator, msg.approved)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::ApprovalForAll)
                .set_owner(&info.sender)
                .set_operator(&operator)
                .set_new_value(msg.approved),
        )
        .to_ok()
}
