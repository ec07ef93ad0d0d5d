// Flat query string encoding for the API request and the embed URL

use std::fmt::Display;

/// Join `key=value` pairs with `&`, in iteration order.
///
/// Values are inserted verbatim through their `Display` form; nothing is
/// percent-encoded. Both the playlistItems API and the embed player accept
/// the plain identifiers and flags this crate produces.
pub fn to_query_string<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}
