use cosmwasm_std::Storage;
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use semver::Version;

use crate::util::aliases::ContractResult;
use crate::util::traits::ResultExtensions;

pub const CONTRACT_NAME: &str = env!("CARGO_CRATE_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stores the provided version info, overwriting any existing value.
pub fn set_version_info<S1: Into<String>, S2: Into<String>>(
    storage: &mut dyn Storage,
    contract: S1,
    version: S2,
) -> ContractResult<()> {
    set_contract_version(storage, contract, version)?.to_ok()
}

/// Fetches the version info stored by the most recent instantiation or migration.
pub fn get_version_info(storage: &dyn Storage) -> ContractResult<ContractVersion> {
    get_contract_version(storage)?.to_ok()
}

/// Sets the stored version info to this code's name and package version, returning the new value.
pub fn migrate_version_info(storage: &mut dyn Storage) -> ContractResult<ContractVersion> {
    set_version_info(storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    get_version_info(storage)
}

/// Parses the version contained in the stored version info as a semantic version.
pub fn parse_sem_ver(version_info: &ContractVersion) -> ContractResult<Version> {
    version_info.version.parse::<Version>()?.to_ok()
}
