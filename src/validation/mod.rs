//! Contains functionality that verifies the structure of incoming messages before they reach the
//! core contract logic.

/// Validates the [ExecuteMsg](crate::core::msg::ExecuteMsg) received by the [execute](crate::contract::execute)
/// function.
pub mod validate_execute_msg;
/// Validates the [InitMsg](crate::core::msg::InitMsg) received by the [instantiate](crate::contract::instantiate)
/// function.
pub mod validate_init_msg;
