use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::types::token_id::TokenId;
use crate::util::aliases::ContractResult;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{Addr, Order, Storage};
use cosmwasm_storage::{singleton, singleton_read, ReadonlySingleton, Singleton};
use cw_storage_plus::{Bound, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub static STATE_KEY: &[u8] = b"state";

/// Mapping from token to owner.
pub const TOKEN_OWNERS: Map<TokenId, Addr> = Map::new("token_owners");
/// Mapping from owner to number of owned tokens.
pub const OWNED_TOKEN_COUNTS: Map<&Addr, u32> = Map::new("owned_token_counts");
/// Mapping from token to its metadata value.
pub const TOKEN_METADATA: Map<TokenId, u32> = Map::new("token_metadata");
/// Mapping from (owner, token) to the single address approved to transfer it.
pub const TOKEN_APPROVALS: Map<(&Addr, TokenId), Addr> = Map::new("token_approvals");
/// Mapping from (owner, operator) to approval status.  Only approved pairs are stored.
pub const OPERATOR_APPROVALS: Map<(&Addr, &Addr), bool> = Map::new("operator_approvals");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct State {
    pub contract_name: String,
}
impl State {
    pub fn new(msg: &InitMsg) -> State {
        State {
            contract_name: msg.contract_name.to_owned(),
        }
    }
}

pub fn config(storage: &mut dyn Storage) -> Singleton<State> {
    singleton(storage, STATE_KEY)
}

pub fn config_read(storage: &dyn Storage) -> ReadonlySingleton<State> {
    singleton_read(storage, STATE_KEY)
}

pub fn may_load_token_owner(
    storage: &dyn Storage,
    token_id: TokenId,
) -> ContractResult<Option<Addr>> {
    TOKEN_OWNERS.may_load(storage, token_id)?.to_ok()
}

/// Fetches the owner of a token, producing a [TokenNotFound](crate::core::error::ContractError::TokenNotFound)
/// error if the token does not exist.
pub fn load_token_owner(storage: &dyn Storage, token_id: TokenId) -> ContractResult<Addr> {
    match may_load_token_owner(storage, token_id)? {
        Some(owner) => owner.to_ok(),
        None => ContractError::TokenNotFound { token_id }.to_err(),
    }
}

/// Returns the total number of tokens held by an account, or zero if it has never held any.
pub fn balance_of_or_zero(storage: &dyn Storage, owner: &Addr) -> ContractResult<u32> {
    OWNED_TOKEN_COUNTS
        .may_load(storage, owner)?
        .unwrap_or(0)
        .to_ok()
}

pub fn may_load_token_metadata(
    storage: &dyn Storage,
    token_id: TokenId,
) -> ContractResult<Option<u32>> {
    TOKEN_METADATA.may_load(storage, token_id)?.to_ok()
}

pub fn insert_token_metadata(
    storage: &mut dyn Storage,
    token_id: TokenId,
    metadata: u32,
) -> ContractResult<()> {
    TOKEN_METADATA.save(storage, token_id, &metadata)?.to_ok()
}

/// Fetches the address approved for the token under its current owner.  A missing token has no
/// approval.
pub fn may_load_token_approval(
    storage: &dyn Storage,
    token_id: TokenId,
) -> ContractResult<Option<Addr>> {
    match may_load_token_owner(storage, token_id)? {
        Some(owner) => TOKEN_APPROVALS
            .may_load(storage, (&owner, token_id))?
            .to_ok(),
        None => Ok(None),
    }
}

pub fn set_token_approval(
    storage: &mut dyn Storage,
    owner: &Addr,
    token_id: TokenId,
    approved: &Addr,
) -> ContractResult<()> {
    TOKEN_APPROVALS
        .save(storage, (owner, token_id), approved)?
        .to_ok()
}

/// Removes the existing approval for the token under the given owner.  No-op if none exists.
pub fn clear_token_approval(storage: &mut dyn Storage, owner: &Addr, token_id: TokenId) {
    TOKEN_APPROVALS.remove(storage, (owner, token_id));
}

pub fn is_operator_for(
    storage: &dyn Storage,
    owner: &Addr,
    operator: &Addr,
) -> ContractResult<bool> {
    OPERATOR_APPROVALS
        .may_load(storage, (owner, operator))?
        .unwrap_or(false)
        .to_ok()
}

pub fn set_operator_approval(
    storage: &mut dyn Storage,
    owner: &Addr,
    operator: &Addr,
    approved: bool,
) -> ContractResult<()> {
    if approved {
        OPERATOR_APPROVALS.save(storage, (owner, operator), &true)?;
    } else {
        OPERATOR_APPROVALS.remove(storage, (owner, operator));
    }
    Ok(())
}

/// Increases the token counter of the `of` address.
pub fn increase_counter_of(storage: &mut dyn Storage, of: &Addr) -> ContractResult<u32> {
    OWNED_TOKEN_COUNTS.update(storage, of, |count| -> ContractResult<u32> {
        count
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| ContractError::CannotInsert {
                address: of.to_string(),
                explanation: "token count would overflow".to_string(),
            })
    })
}

/// Decreases the token counter of the `of` address.  Errors if the address has no counted tokens.
pub fn decrease_counter_of(storage: &mut dyn Storage, of: &Addr) -> ContractResult<u32> {
    OWNED_TOKEN_COUNTS.update(storage, of, |count| -> ContractResult<u32> {
        match count {
            Some(count) => count
                .checked_sub(1)
                .ok_or_else(|| ContractError::CannotFetchValue {
                    address: of.to_string(),
                    explanation: "token count is already zero".to_string(),
                }),
            None => ContractError::CannotFetchValue {
                address: of.to_string(),
                explanation: "no token count is stored".to_string(),
            }
            .to_err(),
        }
    })
}

/// Lists the ids of the tokens owned by `owner` in ascending order, beginning after `start_after`.
pub fn list_owned_token_ids(
    storage: &dyn Storage,
    owner: &Addr,
    start_after: Option<TokenId>,
    limit: usize,
) -> ContractResult<Vec<TokenId>> {
    TOKEN_OWNERS
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .filter(|result| match result {
            Ok((_, token_owner)) => token_owner == owner,
            // Errors are kept so that they surface when collecting
            Err(_) => true,
        })
        .take(limit)
        .map(|result| result.map(|(token_id, _)| token_id))
        .collect::<Result<Vec<TokenId>, _>>()?
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::MockStorage;
    use cosmwasm_std::Addr;

    use crate::core::error::ContractError;

    use super::*;

    #[test]
    fn test_counter_increase_and_decrease() {
        let mut storage = MockStorage::new();
        let owner = Addr::unchecked("owner");
        assert_eq!(
            0,
            balance_of_or_zero(&storage, &owner).unwrap(),
            "an address with no stored count should have a zero balance",
        );
        assert_eq!(1, increase_counter_of(&mut storage, &owner).unwrap());
        assert_eq!(2, increase_counter_of(&mut storage, &owner).unwrap());
        assert_eq!(1, decrease_counter_of(&mut storage, &owner).unwrap());
        assert_eq!(
            1,
            balance_of_or_zero(&storage, &owner).unwrap(),
            "the stored balance should reflect all counter changes",
        );
    }

    #[test]
    fn test_decrease_counter_without_stored_count_fails() {
        let mut storage = MockStorage::new();
        let error = decrease_counter_of(&mut storage, &Addr::unchecked("nobody")).unwrap_err();
        assert!(
            matches!(error, ContractError::CannotFetchValue { .. }),
            "expected a missing count to produce a cannot fetch value error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_decrease_counter_below_zero_fails() {
        let mut storage = MockStorage::new();
        let owner = Addr::unchecked("owner");
        OWNED_TOKEN_COUNTS.save(&mut storage, &owner, &0).unwrap();
        let error = decrease_counter_of(&mut storage, &owner).unwrap_err();
        assert!(
            matches!(error, ContractError::CannotFetchValue { .. }),
            "expected a zero count to produce a cannot fetch value error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_increase_counter_overflow_fails() {
        let mut storage = MockStorage::new();
        let owner = Addr::unchecked("owner");
        OWNED_TOKEN_COUNTS
            .save(&mut storage, &owner, &u32::MAX)
            .unwrap();
        let error = increase_counter_of(&mut storage, &owner).unwrap_err();
        assert!(
            matches!(error, ContractError::CannotInsert { .. }),
            "expected an overflowing count to produce a cannot insert error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_approval_is_scoped_to_current_owner() {
        let mut storage = MockStorage::new();
        let owner = Addr::unchecked("owner");
        let approved = Addr::unchecked("approved");
        TOKEN_OWNERS.save(&mut storage, 1, &owner).unwrap();
        set_token_approval(&mut storage, &owner, 1, &approved).unwrap();
        assert_eq!(
            Some(approved),
            may_load_token_approval(&storage, 1).unwrap(),
            "the approval should be visible while the owner holds the token",
        );
        TOKEN_OWNERS
            .save(&mut storage, 1, &Addr::unchecked("someone-else"))
            .unwrap();
        assert_eq!(
            None,
            may_load_token_approval(&storage, 1).unwrap(),
            "an approval granted by a previous owner should not apply to the new owner",
        );
        assert_eq!(
            None,
            may_load_token_approval(&storage, 2).unwrap(),
            "a missing token should have no approval",
        );
    }

    #[test]
    fn test_operator_approval_toggle() {
        let mut storage = MockStorage::new();
        let owner = Addr::unchecked("owner");
        let operator = Addr::unchecked("operator");
        assert!(!is_operator_for(&storage, &owner, &operator).unwrap());
        set_operator_approval(&mut storage, &owner, &operator, true).unwrap();
        assert!(is_operator_for(&storage, &owner, &operator).unwrap());
        assert!(
            !is_operator_for(&storage, &operator, &owner).unwrap(),
            "operator approval should be directional",
        );
        set_operator_approval(&mut storage, &owner, &operator, false).unwrap();
        assert!(!is_operator_for(&storage, &owner, &operator).unwrap());
    }

    #[test]
    fn test_list_owned_token_ids_pagination() {
        let mut storage = MockStorage::new();
        let owner = Addr::unchecked("owner");
        let other = Addr::unchecked("other");
        for token_id in [5, 1, 3, 9] {
            TOKEN_OWNERS.save(&mut storage, token_id, &owner).unwrap();
        }
        TOKEN_OWNERS.save(&mut storage, 4, &other).unwrap();
        assert_eq!(
            vec![1, 3, 5, 9],
            list_owned_token_ids(&storage, &owner, None, 10).unwrap(),
            "all owned tokens should be listed in ascending order",
        );
        assert_eq!(
            vec![5, 9],
            list_owned_token_ids(&storage, &owner, Some(3), 10).unwrap(),
            "tokens at or below start_after should be skipped",
        );
        assert_eq!(
            vec![5, 9],
            list_owned_token_ids(&storage, &owner, Some(4), 10).unwrap(),
            "a start_after id held by another owner should still bound the page",
        );
        assert!(
            list_owned_token_ids(&storage, &owner, Some(9), 10)
                .unwrap()
                .is_empty(),
            "no tokens should be listed after the final id",
        );
        assert_eq!(
            vec![1, 3],
            list_owned_token_ids(&storage, &owner, None, 2).unwrap(),
            "the limit should cap the amount of returned tokens",
        );
        assert_eq!(
            vec![4],
            list_owned_token_ids(&storage, &other, None, 10).unwrap(),
            "tokens owned by other addresses should not be listed",
        );
    }
}
