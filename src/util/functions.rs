use crate::util::constants::{DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT};

/// Converts an optional requested page size into the amount of items a paginated query should
/// return, falling back to the default and never exceeding the maximum.
///
/// # Parameters
///
/// * `limit` The page size requested by the caller, if any.
///
/// # Examples
/// ```
/// use base_nft_smart_contract::util::functions::resolve_query_limit;
///
/// assert_eq!(10, resolve_query_limit(None));
/// assert_eq!(5, resolve_query_limit(Some(5)));
/// assert_eq!(30, resolve_query_limit(Some(500)));
/// ```
pub fn resolve_query_limit(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize
}

/// Collects the names of all blank string fields in the provided slice of (name, value) pairs.
/// Used by message validation to produce invalid field output in a consistent format.
///
/// # Parameters
///
/// * `fields` Each field name paired with the value provided for it.
pub fn blank_field_messages(fields: &[(&str, &str)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| format!("{}: must not be blank", name))
        .collect()
}
