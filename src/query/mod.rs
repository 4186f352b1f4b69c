//! Contains the functionality used in the [contract file](crate::contract) to perform a contract query.

pub mod query_balance_of;
pub mod query_get_approved;
pub mod query_is_approved;
pub mod query_is_approved_for_all;
pub mod query_owner_of;
pub mod query_state;
pub mod query_token_info;
pub mod query_token_metadata;
pub mod query_tokens;
pub mod query_version;
