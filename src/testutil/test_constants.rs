/// All addresses in these test constants were randomly generated for testing purposes
/// The instantiating address, so it receives every genesis token
pub const DEFAULT_OWNER_ADDRESS: &str = "tp1grjeedyfmx0hujsgmqhdr6thjrye4hfesvh2lz";
/// Use this address in a circumstance that is testing a token being received
pub const DEFAULT_RECIPIENT_ADDRESS: &str = "tp1dv7562fvlvf74904t222ze362m036ugtmg45ll";
/// Use this address in a circumstance that is testing a third party acting on an owner's token
pub const DEFAULT_SPENDER_ADDRESS: &str = "tp1dj50kvzsknr3ydypw3lt8f4dulrrncw4j626vk";
/// Use this address in a circumstance that is testing an address with no relation to any token
pub const DEFAULT_UNRELATED_ADDRESS: &str = "tp1kq5zx7w0x6jvavcay8tutqldync62r29gp8e68";
/// This is the default value that test_instantiate uses to create the contract's name
pub const DEFAULT_CONTRACT_NAME: &str = "basenft.pb";
/// The first token id minted by default instantiation
pub const DEFAULT_TOKEN_ID: u32 = 188;
/// The metadata value attached to DEFAULT_TOKEN_ID by default instantiation
pub const DEFAULT_TOKEN_METADATA: u32 = 20;
/// The amount of tokens minted by default instantiation
pub const DEFAULT_TOKEN_COUNT: u32 = 10;
/// A token id that default instantiation never mints
pub const MISSING_TOKEN_ID: u32 = 2;
