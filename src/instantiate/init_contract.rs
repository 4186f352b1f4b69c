use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::state::{config, increase_counter_of, insert_token_metadata, State, TOKEN_OWNERS};
use crate::core::types::genesis_mint::GenesisMint;
use crate::migrate::version_info::migrate_version_info;
use crate::util::address_utils::is_null_address;
use crate::util::aliases::{ContractResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{Addr, CosmosMsg, Env, MessageInfo, Response, Storage};
use provwasm_std::{bind_name, NameBinding, ProvenanceMsg};

/// The main functionality executed when the smart contract is first instantiated.  This creates
/// the internal contract [State](crate::core::state::State) value and mints the genesis tokens
/// described by the init msg to the sender.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `env` An environment object provided by the cosmwasm framework.  Describes the contract's
/// details, as well as blockchain information at the time of the transaction.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` A custom instantiation message defined by this contract for creating the initial
/// configuration used by the contract.
pub fn init_contract(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let mut messages: Vec<CosmosMsg<ProvenanceMsg>> = vec![];
    if msg.bind_contract_name {
        messages.push(bind_name(
            &msg.contract_name,
            env.contract.address,
            NameBinding::Restricted,
        )?);
    }
    let genesis = msg.genesis.clone().unwrap_or_default();
    let minted_count = mint_genesis_tokens(deps.storage, &info.sender, &genesis)?;
    // Convert the init message into a state value that will drive the contract's future executions
    let state = State::new(&msg);
    config(deps.storage).save(&state)?;
    // Set the version info to the default contract values on instantiation
    migrate_version_info(deps.storage)?;
    Response::new()
        .add_messages(messages)
        .add_attributes(
            EventAttributes::new(EventType::InstantiateContract)
                .set_owner(&info.sender)
                .set_new_value(minted_count),
        )
        .to_ok()
}

/// Assigns every token in the genesis range to the owner, along with its metadata value.  No
/// transfer attributes are emitted for these tokens.
fn mint_genesis_tokens(
    storage: &mut dyn Storage,
    owner: &Addr,
    genesis: &GenesisMint,
) -> ContractResult<u32> {
    if is_null_address(owner) {
        return ContractError::not_allowed("genesis tokens cannot be minted to the null address")
            .to_err();
    }
    let mut minted_count: u32 = 0;
    for (token_id, metadata) in genesis.token_metadata_pairs() {
        if TOKEN_OWNERS.has(storage, token_id) {
            return ContractError::TokenExists { token_id }.to_err();
        }
        TOKEN_OWNERS.save(storage, token_id, owner)?;
        increase_counter_of(storage, owner)?;
        insert_token_metadata(storage, token_id, metadata)?;
        minted_count += 1;
    }
    minted_count.to_ok()
}
