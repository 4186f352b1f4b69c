use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{may_load_token_owner, set_token_approval};
use crate::core::types::token_id::TokenId;
use crate::execute::token_movement::can_manage_all;
use crate::util::address_utils::validate_recipient_address;
use crate::util::aliases::{ContractResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{MessageInfo, Response};

/// A transformation of [ExecuteMsg::Approve](crate::core::msg::ExecuteMsg::Approve) for ease of
/// use in the underlying [approve](self::approve) function.
///
/// # Parameters
///
/// * `to` The bech32 address that will be allowed to transfer the token.
/// * `token_id` The unique identifier of the token to approve.
#[derive(Clone, PartialEq)]
pub struct ApproveV1 {
    pub to: String,
    pub token_id: TokenId,
}
impl ApproveV1 {
    pub fn new<S: Into<String>>(to: S, token_id: TokenId) -> Self {
        Self {
            to: to.into(),
            token_id,
        }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [Approve](crate::core::msg::ExecuteMsg::Approve) variant, then an
    /// [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType) error will be
    /// returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> ContractResult<ApproveV1> {
        match msg {
            ExecuteMsg::Approve { to, token_id } => ApproveV1::new(to, token_id).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::Approve".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::Approve](crate::core::msg::ExecuteMsg::Approve).  The
/// sender must own the token or be an operator for its owner.  A token holds at most one approved
/// address at a time, so a new approval replaces the previous one.
///
/// Operators approving on an owner's behalf follow ERC-721.  The ink! baseNFT contract this ledger
/// is modeled on only let the owner approve, and rejected operators with `NotAllowed`.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the approve v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn approve(deps: DepsMutC, info: MessageInfo, msg: ApproveV1) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let owner = match may_load_token_owner(deps.storage, msg.token_id)? {
        Some(owner) if can_manage_all(deps.storage, &owner, &info.sender)? => owner,
        _ => {
            return ContractError::not_allowed(format!(
                "sender [{}] cannot approve token [{}]",
                info.sender, msg.token_id,
            ))
            .to_err()
        }
    };
    let approved = validate_recipient_address(&deps.as_ref(), &msg.to, "to")?;
    set_token_approval(deps.storage, &owner, msg.token_id, &approved)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_token_event(EventType::Approve, msg.token_id, &owner)
                .set_approved(&approved),
        )
        .to_ok()
}
