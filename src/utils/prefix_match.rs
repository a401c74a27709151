// src/utils/prefix_match.rs

/// Finds the table entry whose bytes are the longest prefix of `haystack`.
///
/// Empty table entries never match, and an empty `haystack` matches nothing.
/// Entries are visited in iteration order and only a strictly longer match
/// replaces the current best, so among equal-length matches the first one wins.
///
/// # Example
///
/// ```
/// use ndef_tlv::utils::longest_prefix_match;
///
/// let table: [(u8, &[u8]); 2] = [(3, b"http://"), (1, b"http://www.")];
/// assert_eq!(longest_prefix_match(b"http://www.example.com", table), Some(1));
/// assert_eq!(longest_prefix_match(b"ftp://example.com", table), None);
/// ```
pub fn longest_prefix_match<'a, K, I>(haystack: &[u8], table: I) -> Option<K>
where
    I: IntoIterator<Item = (K, &'a [u8])>,
{
    if haystack.is_empty() {
        return None;
    }

    let mut best: Option<(K, usize)> = None;
    for (key, prefix) in table {
        if prefix.is_empty() || !haystack.starts_with(prefix) {
            continue;
        }
        let longer = best.as_ref().map_or(true, |(_, len)| prefix.len() > *len);
        if longer {
            best = Some((key, prefix.len()));
        }
    }

    best.map(|(key, _)| key)
}
