//! Shared fixtures for the contract's unit tests.

/// Constant values used as the defaults throughout the test suite.
pub mod test_constants;
/// Helper functions for instantiating the contract and inspecting responses.
pub mod test_utilities;
