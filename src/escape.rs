//! Escaping for Ninja path tokens.
//!
//! Ninja gives spaces, colons, and dollar signs syntactic meaning on `build`
//! lines. Tokens containing any of them must be escaped before being passed
//! to the builder API; the builder itself never escapes values it stores, so
//! the responsibility sits with the caller.

/// Escape characters that carry syntactic meaning in Ninja paths.
///
/// Every space, colon, and dollar sign is prefixed with `$`. No other
/// transformation is applied.
///
/// # Examples
///
/// ```rust
/// assert_eq!(ninjafile::escape("a b:c$d"), "a$ b$:c$$d");
/// ```
#[must_use]
pub fn escape(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for ch in token.chars() {
        if matches!(ch, ' ' | ':' | '$') {
            out.push('$');
        }
        out.push(ch);
    }
    out
}

/// Reverse [`escape`], recovering the original token.
///
/// Only the three escape sequences produced by [`escape`] (`$ `, `$:`, and
/// `$$`) are collapsed; any other `$` passes through untouched so Ninja
/// variable references such as `$out` survive a round trip.
///
/// # Examples
///
/// ```rust
/// assert_eq!(ninjafile::unescape("a$ b$:c$$d"), "a b:c$d");
/// assert_eq!(ninjafile::unescape("$out"), "$out");
/// ```
#[must_use]
pub fn unescape(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '$'
            && let Some(escaped) = chars.next_if(|&next| matches!(next, ' ' | ':' | '$'))
        {
            out.push(escaped);
        } else {
            out.push(ch);
        }
    }
    out
}
