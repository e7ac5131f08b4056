//! Literal escaping for names embedded in generated patterns.

use crate::constants::REGEX_META_CHARS;

/// Escapes every regex metacharacter in `value` so it matches only itself.
///
/// The escaped set is [`REGEX_META_CHARS`]. Characters outside it pass
/// through untouched, which keeps the output valid in Unicode-mode
/// JavaScript patterns as well as in the Rust engines.
///
/// # Examples
///
/// ```rust
/// use packages_excluder::pattern::escape_literal;
///
/// assert_eq!(escape_literal("react"), "react");
/// assert_eq!(escape_literal("@myorg/ui.button"), r"@myorg\/ui\.button");
/// assert_eq!(escape_literal("@myorg+ui"), r"@myorg\+ui");
/// ```
#[must_use]
pub fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() * 2);
    for c in value.chars() {
        if REGEX_META_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
