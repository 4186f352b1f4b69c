use cosmwasm_std::{
    testing::{mock_env, mock_info, MockApi, MockStorage, MOCK_CONTRACT_ADDR},
    Addr, Coin, CosmosMsg, Env, MessageInfo, OwnedDeps, Response, SubMsg, Uint128,
};
use provwasm_mocks::ProvenanceMockQuerier;
use provwasm_std::{NameMsgParams, ProvenanceMsg, ProvenanceMsgParams, ProvenanceQuery};

use crate::contract::{execute, instantiate};
use crate::core::msg::{ExecuteMsg, InitMsg};
use crate::core::types::genesis_mint::GenesisMint;
use crate::core::types::token_id::TokenId;
use crate::util::aliases::{DepsMutC, EntryPointResponse};

use super::test_constants::{DEFAULT_OWNER_ADDRESS, DEFAULT_CONTRACT_NAME};

pub type MockOwnedDeps = OwnedDeps<MockStorage, MockApi, ProvenanceMockQuerier, ProvenanceQuery>;

pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub contract_name: String,
    pub bind_contract_name: bool,
    pub genesis: Option<GenesisMint>,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: mock_info(DEFAULT_OWNER_ADDRESS, &[]),
            contract_name: DEFAULT_CONTRACT_NAME.into(),
            bind_contract_name: true,
            // Specifying None will cause the underlying code to mint the default genesis range
            genesis: None,
        }
    }
}

pub fn test_instantiate(deps: DepsMutC, args: InstArgs) -> EntryPointResponse {
    instantiate(
        deps,
        args.env,
        args.info,
        InitMsg {
            contract_name: args.contract_name,
            bind_contract_name: args.bind_contract_name,
            genesis: args.genesis,
        },
    )
}

pub fn test_instantiate_success(deps: DepsMutC, args: InstArgs) -> Response<ProvenanceMsg> {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

pub fn empty_mock_info<S: Into<String>>(sender: S) -> MessageInfo {
    mock_info(&sender.into(), &[])
}

pub fn mock_info_with_funds<S: Into<String>>(sender: S, funds: &[Coin]) -> MessageInfo {
    mock_info(&sender.into(), funds)
}

pub fn mock_info_with_nhash<S: Into<String>>(sender: S, amount: u128) -> MessageInfo {
    mock_info_with_funds(
        sender,
        &[Coin {
            denom: "nhash".into(),
            amount: Uint128::from(amount),
        }],
    )
}

/// Executes a transfer of the given token from the sender to the recipient, panicking on failure.
pub fn transfer_success<S1: Into<String>, S2: Into<String>>(
    deps: DepsMutC,
    sender: S1,
    to: S2,
    token_id: TokenId,
) -> Response<ProvenanceMsg> {
    execute(
        deps,
        mock_env(),
        empty_mock_info(sender),
        ExecuteMsg::Transfer {
            to: to.into(),
            token_id,
        },
    )
    .expect("expected the transfer to succeed")
}

/// Executes an approval of the given token from the sender to the target, panicking on failure.
pub fn approve_success<S1: Into<String>, S2: Into<String>>(
    deps: DepsMutC,
    sender: S1,
    to: S2,
    token_id: TokenId,
) -> Response<ProvenanceMsg> {
    execute(
        deps,
        mock_env(),
        empty_mock_info(sender),
        ExecuteMsg::Approve {
            to: to.into(),
            token_id,
        },
    )
    .expect("expected the approval to succeed")
}

/// Grants or revokes operator status from the sender to the operator, panicking on failure.
pub fn set_approval_for_all_success<S1: Into<String>, S2: Into<String>>(
    deps: DepsMutC,
    sender: S1,
    operator: S2,
    approved: bool,
) -> Response<ProvenanceMsg> {
    execute(
        deps,
        mock_env(),
        empty_mock_info(sender),
        ExecuteMsg::SetApprovalForAll {
            operator: operator.into(),
            approved,
        },
    )
    .expect("expected setting operator approval to succeed")
}

pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}

pub fn assert_single_item<T: Clone, S: Into<String>>(slice: &[T], message: S) -> T {
    assert_eq!(1, slice.len(), "{}", message.into());
    slice.first().unwrap().clone()
}

/// Asserts that the slice contains a restricted name binding of the expected name to the mock
/// contract address.
pub fn test_message_is_name_bind<S: Into<String>>(
    messages: &[SubMsg<ProvenanceMsg>],
    expected_name: S,
) {
    let expected_name: String = expected_name.into();
    let message = assert_single_item(messages, "expected a single message to be emitted");
    match message.msg {
        CosmosMsg::Custom(ProvenanceMsg {
            params:
                ProvenanceMsgParams::Name(NameMsgParams::BindName {
                    name,
                    address,
                    restrict,
                }),
            ..
        }) => {
            assert_eq!(expected_name, name, "expected the correct name to be bound");
            assert_eq!(
                Addr::unchecked(MOCK_CONTRACT_ADDR),
                address,
                "expected the contract's address to be bound to the name",
            );
            assert!(restrict, "expected the name binding to be restricted");
        }
        msg => panic!("unexpected message encountered: {:?}", msg),
    }
}
