//! Percent encoding and decoding.
//!
//! Which bytes must be escaped depends on the part of the URL being written,
//! so every function here takes an [`Encoding`] context.

use core::fmt::{self, Write as _};

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::Error;
use crate::parser::char::{is_host_extra, is_reserved, is_unreserved_mark, unhex};

/// Context for percent encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// The whole path, segments joined with `/`.
    ///
    /// Only `?` among the reserved characters is escaped.
    Path,
    /// A single path segment.
    ///
    /// `/`, `;`, `,`, and `?` are escaped.
    PathSegment,
    /// A host, including the `:port` suffix and IP literal brackets.
    ///
    /// Percent encoding may only be used for non-ASCII bytes (and `%25`).
    Host,
    /// An IPv6 zone identifier (RFC 6874).
    Zone,
    /// A username or a password in `userinfo`.
    ///
    /// `@`, `/`, `?`, and `:` are escaped.
    UserPassword,
    /// A key or a value of a query.
    ///
    /// All reserved characters are escaped, and a space is written as `+`.
    QueryComponent,
    /// A fragment (without the `#` prefix).
    Fragment,
}

/// Returns true if the byte must be percent-encoded in the given context.
///
/// # Examples
///
/// ```
/// use url_parts::escape::{should_escape, Encoding};
///
/// assert!(!should_escape(b'a', Encoding::QueryComponent));
/// assert!(should_escape(b'?', Encoding::Path));
/// assert!(!should_escape(b'/', Encoding::Path));
/// assert!(should_escape(b'/', Encoding::PathSegment));
/// assert!(!should_escape(b'[', Encoding::Host));
/// ```
#[must_use]
pub fn should_escape(b: u8, encoding: Encoding) -> bool {
    // RFC 3986 section 2.3: unreserved characters.
    if b.is_ascii_alphanumeric() {
        return false;
    }

    if matches!(encoding, Encoding::Host | Encoding::Zone) && is_host_extra(b) {
        return false;
    }

    if is_unreserved_mark(b) {
        return false;
    }

    if is_reserved(b) {
        return match encoding {
            // `/`, `;`, and `,` have meaning only inside of individual
            // segments, and the path is handled as a whole.
            Encoding::Path => b == b'?',
            Encoding::PathSegment => matches!(b, b'/' | b';' | b',' | b'?'),
            // `:` separates the username from the password.
            Encoding::UserPassword => matches!(b, b'@' | b'/' | b'?' | b':'),
            Encoding::QueryComponent => true,
            Encoding::Fragment => false,
            Encoding::Host | Encoding::Zone => true,
        };
    }

    // Sub-delims outside of RFC 2396 reserved set. `'` stays escaped.
    if encoding == Encoding::Fragment && matches!(b, b'!' | b'(' | b')' | b'*') {
        return false;
    }

    true
}

/// A proxy to percent-encode a string.
///
/// Formatting this value writes the escaped form of the raw string without
/// allocating an intermediate buffer.
///
/// # Examples
///
/// ```
/// use url_parts::escape::{Encoding, Escaped};
///
/// let escaped = Escaped::new("one two/three", Encoding::QueryComponent);
/// assert_eq!(escaped.to_string(), "one+two%2Fthree");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a> {
    /// Raw string before being encoded.
    raw: &'a str,
    /// Encoding context.
    encoding: Encoding,
}

impl<'a> Escaped<'a> {
    /// Creates a new proxy.
    #[inline]
    #[must_use]
    pub fn new(raw: &'a str, encoding: Encoding) -> Self {
        Self { raw, encoding }
    }

    /// Returns true if formatting would change the string.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.raw.bytes().any(|b| should_escape(b, self.encoding))
    }
}

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.raw.as_bytes();
        let mut start = 0;
        for (i, &b) in bytes.iter().enumerate() {
            if !should_escape(b, self.encoding) {
                continue;
            }
            // A non-empty run consists of ASCII bytes only, so both ends are
            // on character boundaries.
            if start < i {
                f.write_str(&self.raw[start..i])?;
            }
            start = i + 1;
            if b == b' ' && self.encoding == Encoding::QueryComponent {
                f.write_char('+')?;
            } else {
                write!(f, "%{:02X}", b)?;
            }
        }
        if start < bytes.len() {
            f.write_str(&self.raw[start..])?;
        }
        Ok(())
    }
}

/// Percent-encodes the string for the given context.
///
/// The input is returned as is when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use url_parts::escape::{escape, Encoding};
///
/// assert_eq!(escape("10%", Encoding::QueryComponent), "10%25");
/// assert_eq!(escape("/a b", Encoding::Path), "/a%20b");
/// assert_eq!(escape("[fe80::1%en0]", Encoding::Host), "[fe80::1%25en0]");
/// ```
#[must_use]
pub fn escape(s: &str, encoding: Encoding) -> Cow<'_, str> {
    let escaped = Escaped::new(s, encoding);
    if escaped.is_changed() {
        Cow::Owned(escaped.to_string())
    } else {
        Cow::Borrowed(s)
    }
}

/// Returns the percent-encoded triplet starting at `start`, truncated at the
/// end of the string.
fn triplet_at(s: &str, start: usize) -> String {
    let end = (start + 3).min(s.len());
    String::from_utf8_lossy(&s.as_bytes()[start..end]).into_owned()
}

/// Decodes percent-encoded triplets in the string.
///
/// In [`Encoding::QueryComponent`], `+` is decoded to a space.
/// The input is returned as is when it contains nothing to decode.
///
/// # Errors
///
/// * [`ErrorKind::Range`][`crate::ErrorKind::Range`] if a `%` is not followed
///   by two characters. The error carries the whole input.
/// * [`ErrorKind::Escape`][`crate::ErrorKind::Escape`] if a `%` is not
///   followed by two hex digits, or the escape is not allowed in the context,
///   or the decoded bytes are not valid UTF-8.
/// * [`ErrorKind::InvalidHost`][`crate::ErrorKind::InvalidHost`] if a byte
///   not allowed in a host appears literally in [`Encoding::Host`] or
///   [`Encoding::Zone`].
///
/// # Examples
///
/// ```
/// use url_parts::escape::{unescape, Encoding};
/// use url_parts::ErrorKind;
///
/// assert_eq!(unescape("a%20b+c", Encoding::QueryComponent)?, "a b c");
/// assert_eq!(unescape("a%20b+c", Encoding::Path)?, "a b+c");
///
/// let err = unescape("%zz", Encoding::QueryComponent).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Escape);
/// let err = unescape("%a", Encoding::QueryComponent).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Range);
/// # Ok::<_, url_parts::Error>(())
/// ```
pub fn unescape(s: &str, encoding: Encoding) -> Result<Cow<'_, str>, Error> {
    let bytes = s.as_bytes();
    let is_host = matches!(encoding, Encoding::Host | Encoding::Zone);
    let mut num_escapes = 0_usize;
    let mut has_plus = false;

    // Validate first, so that well-formed input without escapes can be
    // returned without allocation.
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                num_escapes += 1;
                let hi = *bytes.get(i + 1).ok_or_else(|| Error::range(s))?;
                if !hi.is_ascii_hexdigit() {
                    return Err(Error::escape(triplet_at(s, i)));
                }
                let lo = *bytes.get(i + 2).ok_or_else(|| Error::range(s))?;
                if !lo.is_ascii_hexdigit() {
                    return Err(Error::escape(triplet_at(s, i)));
                }
                let triplet = &s[i..(i + 3)];
                match encoding {
                    // RFC 3986 section 3.2.2 allows percent encoding in a
                    // host only for non-ASCII bytes, and RFC 6874 adds `%25`
                    // for zone identifiers.
                    Encoding::Host if unhex(hi) < 8 && triplet != "%25" => {
                        return Err(Error::escape(triplet));
                    }
                    // Zone identifiers may escape only what could be written
                    // literally in a host, plus a space.
                    Encoding::Zone => {
                        let v = (unhex(hi) << 4) | unhex(lo);
                        if triplet != "%25" && v != b' ' && should_escape(v, Encoding::Host) {
                            return Err(Error::escape(triplet));
                        }
                    }
                    _ => {}
                }
                i += 3;
                continue;
            }
            b'+' => has_plus |= encoding == Encoding::QueryComponent,
            b => {
                if is_host && b.is_ascii() && should_escape(b, encoding) {
                    return Err(Error::invalid_host(&s[i..(i + 1)]));
                }
            }
        }
        i += 1;
    }

    if num_escapes == 0 && !has_plus {
        return Ok(Cow::Borrowed(s));
    }

    let mut decoded = Vec::with_capacity(bytes.len() - 2 * num_escapes);
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                decoded.push((unhex(bytes[i + 1]) << 4) | unhex(bytes[i + 2]));
                i += 3;
                continue;
            }
            b'+' if encoding == Encoding::QueryComponent => decoded.push(b' '),
            b => decoded.push(b),
        }
        i += 1;
    }

    String::from_utf8(decoded)
        .map(Cow::Owned)
        .map_err(|_| Error::escape(s))
}

/// Escapes the string so it can be safely placed inside a URL path segment.
///
/// # Examples
///
/// ```
/// assert_eq!(url_parts::escape_path("a/b c"), "a%2Fb%20c");
/// ```
#[inline]
#[must_use]
pub fn escape_path(s: &str) -> Cow<'_, str> {
    escape(s, Encoding::PathSegment)
}

/// Decodes a string escaped by [`escape_path`].
///
/// `+` is not decoded to a space.
#[inline]
pub fn unescape_path(s: &str) -> Result<Cow<'_, str>, Error> {
    unescape(s, Encoding::PathSegment)
}

/// Escapes the string so it can be safely placed inside a URL query.
///
/// # Examples
///
/// ```
/// assert_eq!(url_parts::escape_query("one two&three"), "one+two%26three");
/// ```
#[inline]
#[must_use]
pub fn escape_query(s: &str) -> Cow<'_, str> {
    escape(s, Encoding::QueryComponent)
}

/// Decodes a string escaped by [`escape_query`].
///
/// `+` is decoded to a space.
#[inline]
pub fn unescape_query(s: &str) -> Result<Cow<'_, str>, Error> {
    unescape(s, Encoding::QueryComponent)
}
