use cosmwasm_std::{Addr, Storage};

use crate::core::error::ContractError;
use crate::core::state::{
    clear_token_approval, decrease_counter_of, increase_counter_of, is_operator_for,
    may_load_token_approval, TOKEN_OWNERS,
};
use crate::core::types::token_id::TokenId;
use crate::util::address_utils::is_null_address;
use crate::util::aliases::ContractResult;
use crate::util::traits::ResultExtensions;

/// Moves token `token_id` from `from` to `to`.  Any approval on the token is dropped, and both
/// owners' token counts are updated.
pub fn move_token(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    token_id: TokenId,
) -> ContractResult<()> {
    clear_token_approval(storage, from, token_id);
    remove_token_from(storage, from, token_id)?;
    add_token_to(storage, to, token_id)
}

/// Removes token `token_id` from the owner.
fn remove_token_from(storage: &mut dyn Storage, from: &Addr, token_id: TokenId) -> ContractResult<()> {
    if !TOKEN_OWNERS.has(storage, token_id) {
        return ContractError::TokenNotFound { token_id }.to_err();
    }
    decrease_counter_of(storage, from)?;
    TOKEN_OWNERS.remove(storage, token_id);
    Ok(())
}

/// Adds the token `token_id` to the `to` address.
fn add_token_to(storage: &mut dyn Storage, to: &Addr, token_id: TokenId) -> ContractResult<()> {
    if TOKEN_OWNERS.has(storage, token_id) {
        return ContractError::TokenExists { token_id }.to_err();
    }
    if is_null_address(to) {
        return ContractError::not_allowed(format!(
            "token [{}] cannot be moved to the null address",
            token_id
        ))
        .to_err();
    }
    increase_counter_of(storage, to)?;
    TOKEN_OWNERS.save(storage, token_id, to)?;
    Ok(())
}

/// Returns true if `caller` may act on every token held by `owner`: either as the owner itself or
/// as one of the owner's approved operators.
pub fn can_manage_all(storage: &dyn Storage, owner: &Addr, caller: &Addr) -> ContractResult<bool> {
    if owner == caller {
        return true.to_ok();
    }
    is_operator_for(storage, owner, caller)
}

/// Returns true if `caller` may transfer the token: as its owner, its approved address, or an
/// operator for its owner.
pub fn can_transfer(
    storage: &dyn Storage,
    owner: &Addr,
    caller: &Addr,
    token_id: TokenId,
) -> ContractResult<bool> {
    if can_manage_all(storage, owner, caller)? {
        return true.to_ok();
    }
    may_load_token_approval(storage, token_id)?
        .map_or(false, |approved| &approved == caller)
        .to_ok()
}
