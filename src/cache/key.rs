//! Cache key derivation from document content.

/// Namespace prefix for converted-document cache keys.
pub const KEY_PREFIX: &str = "md-";

/// Derive the cache key for a document's content.
///
/// A 32-bit rolling value is accumulated over every character
/// (`hash = hash * 31 + codepoint`, with wraparound) and rendered in
/// base 36 under the `md-` namespace. Identical content always yields
/// the identical key; distinct contents may collide, so callers that
/// cannot tolerate collisions must not rely on this cache alone.
pub fn cache_key(content: &str) -> String {
    let mut hash: i32 = 0;
    for c in content.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    format!("{KEY_PREFIX}{}", base36(hash.unsigned_abs()))
}

fn base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut buf = [0u8; 7]; // 36^7 > u32::MAX
    let mut at = buf.len();
    while value > 0 {
        at -= 1;
        buf[at] = DIGITS[(value % 36) as usize];
        value /= 36;
    }
    buf[at..].iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let content = "# Heading\n\nsome body text";
        assert_eq!(cache_key(content), cache_key(content));
        assert_eq!(cache_key(content), cache_key(&content.to_string()));
    }

    #[test]
    fn test_known_values() {
        // hash("a") = 97 = 2 * 36 + 25
        assert_eq!(cache_key("a"), "md-2p");
        assert_eq!(cache_key(""), "md-0");
    }

    #[test]
    fn test_prefix_and_alphabet() {
        let key = cache_key("arbitrary content with unicode: \u{00e9}\u{4e2d}");
        let suffix = key.strip_prefix(KEY_PREFIX).unwrap();
        assert!(!suffix.is_empty());
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_distinct_content_usually_differs() {
        assert_ne!(cache_key("document one"), cache_key("document two"));
    }

    #[test]
    fn test_long_content_wraps_without_panic() {
        let long = "x".repeat(100_000);
        let key = cache_key(&long);
        assert!(key.starts_with(KEY_PREFIX));
    }
}
