use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::load_token_owner;
use crate::core::types::token_id::TokenId;
use crate::execute::token_movement::move_token;
use crate::util::address_utils::validate_recipient_address;
use crate::util::aliases::{ContractResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{MessageInfo, Response};

/// A transformation of [ExecuteMsg::Transfer](crate::core::msg::ExecuteMsg::Transfer) for ease of
/// use in the underlying [transfer](self::transfer) function.
///
/// # Parameters
///
/// * `to` The bech32 address that will receive the token.
/// * `token_id` The unique identifier of the token to move.
#[derive(Clone, PartialEq)]
pub struct TransferV1 {
    pub to: String,
    pub token_id: TokenId,
}
impl TransferV1 {
    pub fn new<S: Into<String>>(to: S, token_id: TokenId) -> Self {
        Self {
            to: to.into(),
            token_id,
        }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [Transfer](crate::core::msg::ExecuteMsg::Transfer) variant, then an
    /// [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType) error will be
    /// returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> ContractResult<TransferV1> {
        match msg {
            ExecuteMsg::Transfer { to, token_id } => TransferV1::new(to, token_id).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::Transfer".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::Transfer](crate::core::msg::ExecuteMsg::Transfer).  Only
/// the owner of a token may move it with this route.  Approved addresses and operators must use
/// [transfer_from](crate::execute::transfer_from::transfer_from) instead.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the transfer v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn transfer(deps: DepsMutC, info: MessageInfo, msg: TransferV1) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let owner = load_token_owner(deps.storage, msg.token_id)?;
    if owner != info.sender {
        return ContractError::not_allowed(format!(
            "sender [{}] is not the owner of token [{}]",
            info.sender, msg.token_id,
        ))
        .to_err();
    }
    let to = validate_recipient_address(&deps.as_ref(), &msg.to, "to")?;
    move_token(deps.storage, &owner, &to, msg.token_id)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::Transfer)
                .set_token_id(msg.token_id)
                .set_from(&owner)
                .set_to(&to),
        )
        .to_ok()
}
