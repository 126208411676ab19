//! Helpers for characters.

/// Checks if the given byte matches `sub-delims` rule.
#[inline]
#[must_use]
pub(crate) fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Checks if the given byte is one of the non-alphanumeric `unreserved` marks.
#[inline]
#[must_use]
pub(crate) fn is_unreserved_mark(b: u8) -> bool {
    matches!(b, b'-' | b'_' | b'.' | b'~')
}

/// Checks if the given byte is reserved by RFC 2396 section 2.2.
///
/// This is the set the per-context escaping table is keyed on.
#[inline]
#[must_use]
pub(crate) fn is_reserved(b: u8) -> bool {
    matches!(
        b,
        b'$' | b'&' | b'+' | b',' | b'/' | b':' | b';' | b'=' | b'?' | b'@'
    )
}

/// Checks if the given byte may appear unescaped in a host or zone.
///
/// `sub-delims` of `reg-name`, `:` for the port, `[` and `]` for IP literals,
/// and `<`, `>`, `"` which the host parser would otherwise reject.
#[inline]
#[must_use]
pub(crate) fn is_host_extra(b: u8) -> bool {
    is_sub_delim(b) || matches!(b, b':' | b'[' | b']' | b'<' | b'>' | b'"')
}

/// Checks if the given byte may appear in a raw `userinfo`.
///
/// Percent-encoded triplets are not validated here; unescaping does that.
#[inline]
#[must_use]
pub(crate) fn is_userinfo(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || is_unreserved_mark(b)
        || is_sub_delim(b)
        || matches!(b, b':' | b'%' | b'@')
}

/// Checks if the given byte is an ASCII control character.
#[inline]
#[must_use]
pub(crate) fn is_ctl(b: u8) -> bool {
    b < b' ' || b == 0x7f
}

/// Decodes the given hexadecimal digit.
///
/// # Precondition
///
/// The byte must be an ASCII hex digit.
#[inline]
#[must_use]
pub(crate) fn unhex(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => unreachable!("[precondition] the byte must be a hex digit"),
    }
}
