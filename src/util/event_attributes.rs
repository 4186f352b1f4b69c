use super::constants::{
    APPROVED_ADDRESS_KEY, FROM_ADDRESS_KEY, NEW_VALUE_KEY, NFT_EVENT_TYPE_KEY,
    OPERATOR_ADDRESS_KEY, OWNER_ADDRESS_KEY, TOKEN_ID_KEY, TO_ADDRESS_KEY,
};
use crate::core::types::token_id::TokenId;

/// Every distinct kind of event the contract emits in a response's attributes.
pub enum EventType {
    InstantiateContract,
    MigrateContract,
    Transfer,
    Approve,
    ApprovalForAll,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::Transfer => "transfer",
            EventType::Approve => "approve",
            EventType::ApprovalForAll => "approval_for_all",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

/// A builder for the attributes appended to a route's response.  The event type is always the
/// first attribute.
pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(NFT_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    /// Shortcut for the attributes shared by every event that targets a single token.
    pub fn for_token_event<T: ToString>(
        event_type: EventType,
        token_id: TokenId,
        owner_address: T,
    ) -> Self {
        Self::new(event_type)
            .set_token_id(token_id)
            .set_owner(owner_address)
    }

    pub fn set_token_id(mut self, token_id: TokenId) -> Self {
        self.attributes
            .push((TOKEN_ID_KEY.into(), token_id.to_string()));
        self
    }

    pub fn set_owner<T: ToString>(mut self, owner_address: T) -> Self {
        self.attributes
            .push((OWNER_ADDRESS_KEY.into(), owner_address.to_string()));
        self
    }

    pub fn set_from<T: ToString>(mut self, from_address: T) -> Self {
        self.attributes
            .push((FROM_ADDRESS_KEY.into(), from_address.to_string()));
        self
    }

    pub fn set_to<T: ToString>(mut self, to_address: T) -> Self {
        self.attributes
            .push((TO_ADDRESS_KEY.into(), to_address.to_string()));
        self
    }

    pub fn set_approved<T: ToString>(mut self, approved_address: T) -> Self {
        self.attributes
            .push((APPROVED_ADDRESS_KEY.into(), approved_address.to_string()));
        self
    }

    pub fn set_operator<T: ToString>(mut self, operator_address: T) -> Self {
        self.attributes
            .push((OPERATOR_ADDRESS_KEY.into(), operator_address.to_string()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
