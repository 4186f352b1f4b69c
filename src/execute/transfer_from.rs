use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::load_token_owner;
use crate::core::types::token_id::TokenId;
use crate::execute::token_movement::{can_transfer, move_token};
use crate::util::address_utils::{validate_address, validate_recipient_address};
use crate::util::aliases::{ContractResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{MessageInfo, Response};

/// A transformation of [ExecuteMsg::TransferFrom](crate::core::msg::ExecuteMsg::TransferFrom) for
/// ease of use in the underlying [transfer_from](self::transfer_from) function.
///
/// # Parameters
///
/// * `from` The bech32 address expected to currently own the token.
/// * `to` The bech32 address that will receive the token.
/// * `token_id` The unique identifier of the token to move.
#[derive(Clone, PartialEq)]
pub struct TransferFromV1 {
    pub from: String,
    pub to: String,
    pub token_id: TokenId,
}
impl TransferFromV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(from: S1, to: S2, token_id: TokenId) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            token_id,
        }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [TransferFrom](crate::core::msg::ExecuteMsg::TransferFrom) variant,
    /// then an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType) error
    /// will be returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> ContractResult<TransferFromV1> {
        match msg {
            ExecuteMsg::TransferFrom { from, to, token_id } => {
                TransferFromV1::new(from, to, token_id).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::TransferFrom".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::TransferFrom](crate::core::msg::ExecuteMsg::TransferFrom).
/// The sender may be the token's owner, the single address approved for the token, or an operator
/// approved for every token of the owner.
///
/// This follows ERC-721 rather than the ink! baseNFT contract this ledger is modeled on, which only
/// accepted the approved address here and answered the owner with `NotApproved`.  Owners that
/// integrate against that behavior can keep using [transfer](crate::execute::transfer::transfer).
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the transfer from v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn transfer_from(deps: DepsMutC, info: MessageInfo, msg: TransferFromV1) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let owner = load_token_owner(deps.storage, msg.token_id)?;
    if !can_transfer(deps.storage, &owner, &info.sender, msg.token_id)? {
        return ContractError::NotApproved {
            token_id: msg.token_id,
            address: info.sender.to_string(),
        }
        .to_err();
    }
    let from = validate_address(&deps.as_ref(), &msg.from, "from")?;
    if from != owner {
        return ContractError::NotOwner {
            token_id: msg.token_id,
            address: from.to_string(),
            owner: owner.to_string(),
        }
        .to_err();
    }
    let to = validate_recipient_address(&deps.as_ref(), &msg.to, "to")?;
    move_token(deps.storage, &from, &to, msg.token_id)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::Transfer)
                .set_token_id(msg.token_id)
                .set_from(&from)
                .set_to(&to),
        )
        .to_ok()
}
