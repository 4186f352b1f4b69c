use crate::core::error::ContractError;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;
use bech32::{FromBase32, ToBase32, Variant};
use cosmwasm_std::Addr;

/// Standard bech32 encoding for account addresses in the Provenance Blockchain is 20 bytes long
const ACCOUNT_ADDRESS_BYTE_LENGTH: usize = 20;

/// Determines if the given address is the null account: a valid bech32 address whose payload is
/// made up entirely of zero bytes.  Values that cannot be decoded as bech32 are never considered
/// null, and are instead left to the blockchain's address validation.
///
/// # Parameters
///
/// * `address` The address to inspect.
///
/// # Examples
/// ```
/// use base_nft_smart_contract::util::address_utils::{is_null_address, null_address};
///
/// let null = null_address("tp").expect("the null address should encode without issue");
/// assert!(is_null_address(&null));
/// assert!(!is_null_address("tp1grjeedyfmx0hujsgmqhdr6thjrye4hfesvh2lz"));
/// ```
pub fn is_null_address<S: AsRef<str>>(address: S) -> bool {
    match bech32::decode(address.as_ref()) {
        Ok((_, base_32, _)) => match Vec::<u8>::from_base32(&base_32) {
            Ok(bytes) => !bytes.is_empty() && bytes.iter().all(|byte| *byte == 0),
            Err(_) => false,
        },
        Err(_) => false,
    }
}

/// Produces the null account address for the given human readable prefix.
///
/// # Parameters
///
/// * `hrp` The human readable prefix of the address, ex: "tp" for testnet or "pb" for mainnet.
pub fn null_address<S: Into<String>>(hrp: S) -> ContractResult<String> {
    bech32::encode(
        &hrp.into(),
        vec![0u8; ACCOUNT_ADDRESS_BYTE_LENGTH].to_base32(),
        Variant::Bech32,
    )?
    .to_ok()
}

/// Validates an input address with the blockchain's api, producing an
/// [InvalidAddress](crate::core::error::ContractError::InvalidAddress) error on failure.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `address` The address to validate.
/// * `field_name` The name of the field that supplied the address, used in error output.
pub fn validate_address<S: AsRef<str>>(
    deps: &DepsC,
    address: S,
    field_name: &str,
) -> ContractResult<Addr> {
    deps.api
        .addr_validate(address.as_ref())
        .map_err(|e| ContractError::InvalidAddress {
            address: address.as_ref().to_string(),
            explanation: format!("{}: {}", field_name, e),
        })
}

/// Validates an address that is about to take ownership of a token or permissions over a token.
/// In addition to the standard address validation, the null account is rejected with a
/// [NotAllowed](crate::core::error::ContractError::NotAllowed) error.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `address` The address to validate.
/// * `field_name` The name of the field that supplied the address, used in error output.
pub fn validate_recipient_address<S: AsRef<str>>(
    deps: &DepsC,
    address: S,
    field_name: &str,
) -> ContractResult<Addr> {
    let addr = validate_address(deps, &address, field_name)?;
    if is_null_address(&addr) {
        return ContractError::not_allowed(format!(
            "{}: the null address [{}] cannot be used",
            field_name, addr,
        ))
        .to_err();
    }
    addr.to_ok()
}
