// Execution output attributes.  All should be prefixed with "nft_" to make them easy to
// discern when observed in the event stream

//////////////////////////////
// Shared output attributes //
//////////////////////////////

/// Value = Event Type correlating to EventType enum into String values (String)
pub const NFT_EVENT_TYPE_KEY: &str = "nft_event_type";
/// Value = The token id targeted by the event (String)
pub const TOKEN_ID_KEY: &str = "nft_token_id";
/// Value = The address that owns the token(s) involved in the event (String)
pub const OWNER_ADDRESS_KEY: &str = "nft_owner_address";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "nft_new_value";

//////////////////////////////////
// Transfer output attributes //
//////////////////////////////////

/// Value = The address that held the token before the transfer (String)
pub const FROM_ADDRESS_KEY: &str = "nft_from_address";
/// Value = The address that holds the token after the transfer (String)
pub const TO_ADDRESS_KEY: &str = "nft_to_address";

//////////////////////////////////
// Approval output attributes //
//////////////////////////////////

/// Value = The address granted transfer rights for a single token (String)
pub const APPROVED_ADDRESS_KEY: &str = "nft_approved_address";
/// Value = The address granted or stripped of transfer rights for all of an owner's tokens (String)
pub const OPERATOR_ADDRESS_KEY: &str = "nft_operator_address";

//////////////////////
// Global Constants //
//////////////////////

/// The first token id minted during instantiation when no genesis configuration is provided.
pub const DEFAULT_GENESIS_TOKEN_ID: u32 = 188;
/// The metadata value attached to the first genesis token when no genesis configuration is provided.
pub const DEFAULT_GENESIS_METADATA: u32 = 20;
/// The amount of tokens minted during instantiation when no genesis configuration is provided.
pub const DEFAULT_GENESIS_TOKEN_COUNT: u32 = 10;
/// Instantiation can only mint this many tokens in a single transaction.
pub const MAX_GENESIS_TOKEN_COUNT: u32 = 100;
/// The page size used by the tokens query when no limit is requested.
pub const DEFAULT_QUERY_LIMIT: u32 = 10;
/// The largest page size the tokens query will return.
pub const MAX_QUERY_LIMIT: u32 = 30;
