use crate::core::types::token_id::TokenId;
use crate::util::constants::{
    DEFAULT_GENESIS_METADATA, DEFAULT_GENESIS_TOKEN_COUNT, DEFAULT_GENESIS_TOKEN_ID,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Describes the contiguous range of tokens minted to the instantiating account.  Token
/// `first_token_id + i` is assigned the metadata value `first_metadata + i`.
///
/// # Parameters
///
/// * `first_token_id` The id of the first token in the minted range.
/// * `first_metadata` The metadata value attached to the first token in the minted range.
/// * `token_count` The total amount of tokens to mint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct GenesisMint {
    pub first_token_id: TokenId,
    pub first_metadata: u32,
    pub token_count: u32,
}
impl GenesisMint {
    /// Constructs a new instance of this struct.
    pub fn new(first_token_id: TokenId, first_metadata: u32, token_count: u32) -> Self {
        Self {
            first_token_id,
            first_metadata,
            token_count,
        }
    }

    /// Produces each (token id, metadata) pair in the range, in ascending order.  Pairs that would
    /// overflow a u32 are omitted; init msg validation rejects those ranges before minting.
    pub fn token_metadata_pairs(&self) -> Vec<(TokenId, u32)> {
        (0..self.token_count)
            .filter_map(|offset| {
                Some((
                    self.first_token_id.checked_add(offset)?,
                    self.first_metadata.checked_add(offset)?,
                ))
            })
            .collect()
    }

    /// The id of the final token in the range, or None if the range is empty or overflows.
    pub fn last_token_id(&self) -> Option<TokenId> {
        last_in_range(self.first_token_id, self.token_count)
    }

    /// The metadata of the final token in the range, or None if the range is empty or overflows.
    pub fn last_metadata(&self) -> Option<u32> {
        last_in_range(self.first_metadata, self.token_count)
    }
}
impl Default for GenesisMint {
    fn default() -> Self {
        Self::new(
            DEFAULT_GENESIS_TOKEN_ID,
            DEFAULT_GENESIS_METADATA,
            DEFAULT_GENESIS_TOKEN_COUNT,
        )
    }
}

fn last_in_range(first: u32, count: u32) -> Option<u32> {
    count.checked_sub(1).and_then(|offset| first.checked_add(offset))
}
