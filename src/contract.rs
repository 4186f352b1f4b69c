use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::execute::approve::{approve, ApproveV1};
use crate::execute::set_approval_for_all::{set_approval_for_all, SetApprovalForAllV1};
use crate::execute::transfer::{transfer, TransferV1};
use crate::execute::transfer_from::{transfer_from, TransferFromV1};
use crate::instantiate::init_contract::init_contract;
use crate::migrate::migrate_contract::migrate_contract;
use crate::query::query_balance_of::query_balance_of;
use crate::query::query_get_approved::query_get_approved;
use crate::query::query_is_approved::query_is_approved;
use crate::query::query_is_approved_for_all::query_is_approved_for_all;
use crate::query::query_owner_of::query_owner_of;
use crate::query::query_state::query_state;
use crate::query::query_token_info::query_token_info;
use crate::query::query_token_metadata::query_token_metadata;
use crate::query::query_tokens::query_tokens;
use crate::query::query_version::query_version;
use crate::util::aliases::{ContractResult, DepsC, DepsMutC, EntryPointResponse};
use crate::validation::validate_execute_msg::validate_execute_msg;
use crate::validation::validate_init_msg::validate_init_msg;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Env, MessageInfo};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    // Ensure the init message is properly formatted before doing anything
    validate_init_msg(&msg)?;
    // Execute the core instantiation code
    init_contract(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: DepsC, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::BalanceOf { owner } => query_balance_of(&deps, owner),
        QueryMsg::OwnerOf { token_id } => query_owner_of(&deps, token_id),
        QueryMsg::GetApproved { token_id } => query_get_approved(&deps, token_id),
        QueryMsg::IsApproved { token_id, user } => query_is_approved(&deps, token_id, user),
        QueryMsg::IsApprovedForAll { owner, operator } => {
            query_is_approved_for_all(&deps, owner, operator)
        }
        QueryMsg::TokenMetadata { token_id } => query_token_metadata(&deps, token_id),
        QueryMsg::TokenInfo { token_id } => query_token_info(&deps, token_id),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => query_tokens(&deps, owner, start_after, limit),
        QueryMsg::QueryState {} => query_state(&deps),
        QueryMsg::QueryVersion {} => query_version(&deps),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(deps: DepsMutC, _env: Env, info: MessageInfo, msg: ExecuteMsg) -> EntryPointResponse {
    // Ensure the execute message is properly formatted before doing anything
    validate_execute_msg(&msg)?;
    match msg {
        ExecuteMsg::Approve { .. } => approve(deps, info, ApproveV1::from_execute_msg(msg)?),
        ExecuteMsg::Transfer { .. } => transfer(deps, info, TransferV1::from_execute_msg(msg)?),
        ExecuteMsg::TransferFrom { .. } => {
            transfer_from(deps, info, TransferFromV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::SetApprovalForAll { .. } => {
            set_approval_for_all(deps, info, SetApprovalForAllV1::from_execute_msg(msg)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMutC, _env: Env, msg: MigrateMsg) -> EntryPointResponse {
    match msg {
        MigrateMsg::ContractUpgrade {} => migrate_contract(deps),
    }
}
