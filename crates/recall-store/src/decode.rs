use regex::{Captures, Regex};
use std::sync::LazyLock;

static UNICODE_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\u([0-9a-fA-F]{4})").expect("unicode escape pattern"));

/// Replace literal `\uXXXX` escapes with the characters they name.
///
/// Escapes in the UTF-16 surrogate range have no standalone `char`, so they
/// are left as written.
pub fn decode_unicode_escapes(content: &str) -> String {
    UNICODE_ESCAPE
        .replace_all(content, |caps: &Captures| {
            u32::from_str_radix(&caps[1], 16)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
