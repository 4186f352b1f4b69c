/// A token ID.
pub type TokenId = u32;
