//! Contains all execution routes used by the [contract file](crate::contract).

/// Contains the functionality used by the [Approve](crate::core::msg::ExecuteMsg::Approve)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod approve;
/// Contains the functionality used by the [SetApprovalForAll](crate::core::msg::ExecuteMsg::SetApprovalForAll)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod set_approval_for_all;
/// Ownership bookkeeping and permission checks shared by the routes that move or approve tokens.
pub mod token_movement;
/// Contains the functionality used by the [Transfer](crate::core::msg::ExecuteMsg::Transfer)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod transfer;
/// Contains the functionality used by the [TransferFrom](crate::core::msg::ExecuteMsg::TransferFrom)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod transfer_from;
