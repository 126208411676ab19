//! Splitting of URL components.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;
use crate::escape::{escape, unescape, Encoding};

use super::char::is_userinfo;
use super::str::{
    find, find_split, find_split_hole, rfind, rfind_split, rfind_split_hole, split2,
};

/// Decoded query: keys in sorted order, each with its values in the order
/// they appeared.
pub type QueryMap = BTreeMap<String, Vec<String>>;

/// Splits the string into two at the first occurrence of `delimiter`.
///
/// If the delimiter does not appear, returns `(s, "")`.
/// If `cut` is true, the delimiter is dropped; otherwise it is kept at the head
/// of the second part.
///
/// # Examples
///
/// ```
/// use url_parts::parser::split;
///
/// assert_eq!(split("a?b?c", b'?', true), ("a", "b?c"));
/// assert_eq!(split("a/b/c", b'/', false), ("a", "/b/c"));
/// assert_eq!(split("abc", b'?', true), ("abc", ""));
/// ```
#[must_use]
pub fn split(s: &str, delimiter: u8, cut: bool) -> (&str, &str) {
    let found = if cut {
        find_split_hole(s, delimiter)
    } else {
        find_split(s, delimiter)
    };
    found.unwrap_or((s, ""))
}

/// Splits `scheme:` off the head of the URL.
///
/// Returns `(scheme, rest)`. A string which does not start with a scheme
/// is not an error: it is returned as `("", raw)`.
///
/// # Errors
///
/// Returns [`ErrorKind::Parse`][`crate::ErrorKind::Parse`] if the string
/// starts with `:`.
///
/// # Examples
///
/// ```
/// use url_parts::parser::parse_scheme;
///
/// assert_eq!(parse_scheme("http://example.com")?, ("http", "//example.com"));
/// assert_eq!(parse_scheme("/no/scheme")?, ("", "/no/scheme"));
/// assert_eq!(parse_scheme("1http:foo")?, ("", "1http:foo"));
/// assert!(parse_scheme(":foo").is_err());
/// # Ok::<_, url_parts::Error>(())
/// ```
pub fn parse_scheme(raw: &str) -> Result<(&str, &str), Error> {
    for (i, b) in raw.bytes().enumerate() {
        match b {
            b if b.is_ascii_alphabetic() => {}
            b'0'..=b'9' | b'+' | b'-' | b'.' => {
                if i == 0 {
                    return Ok(("", raw));
                }
            }
            b':' => {
                if i == 0 {
                    return Err(Error::parse("missing protocol scheme"));
                }
                return Ok((&raw[..i], &raw[(i + 1)..]));
            }
            // Not a scheme character, so the string has no scheme.
            _ => return Ok(("", raw)),
        }
    }
    Ok(("", raw))
}

/// Splits `#fragment` off the tail of the URL and decodes it.
///
/// Returns `(fragment, rest)`.
///
/// # Errors
///
/// Returns an error if the fragment is not correctly escaped.
pub fn parse_fragment(raw: &str) -> Result<(Cow<'_, str>, &str), Error> {
    let (rest, fragment) = split(raw, b'#', true);
    if fragment.is_empty() {
        return Ok((Cow::Borrowed(""), rest));
    }
    let fragment = unescape(fragment, Encoding::Fragment)?;
    Ok((fragment, rest))
}

/// Splits `userinfo@` off the authority and decodes it.
///
/// Returns `(username, password, host)`, where `host` still contains the
/// optional `:port` suffix. The last `@` is used as the separator, so a `@`
/// in the userinfo does not truncate it.
///
/// # Errors
///
/// Returns [`ErrorKind::Parse`][`crate::ErrorKind::Parse`] if the userinfo
/// contains disallowed characters, or an escaping error if it is not
/// correctly escaped.
///
/// # Examples
///
/// ```
/// use url_parts::parser::parse_authority;
///
/// let (user, password, host) = parse_authority("john:p%40ss@example.com:8080")?;
/// assert_eq!(user, "john");
/// assert_eq!(password.as_deref(), Some("p@ss"));
/// assert_eq!(host, "example.com:8080");
/// # Ok::<_, url_parts::Error>(())
/// ```
pub fn parse_authority(authority: &str) -> Result<(String, Option<String>, &str), Error> {
    let (userinfo, host) = match rfind_split_hole(authority, b'@') {
        Some(v) => v,
        None => return Ok((String::new(), None, authority)),
    };
    if !valid_userinfo(userinfo) {
        return Err(Error::parse("invalid userinfo"));
    }

    match find_split_hole(userinfo, b':') {
        Some((username, password)) => {
            let username = unescape(username, Encoding::UserPassword)?;
            let password = unescape(password, Encoding::UserPassword)?;
            Ok((username.into_owned(), Some(password.into_owned()), host))
        }
        None => {
            let username = unescape(userinfo, Encoding::UserPassword)?;
            Ok((username.into_owned(), None, host))
        }
    }
}

/// Splits the host into the hostname and the port, and decodes the hostname.
///
/// Returns `(hostname, port)`. IPv6 literals keep their brackets, and an
/// RFC 6874 zone identifier introduced by `%25` is decoded into `%zone`.
///
/// # Errors
///
/// Returns [`ErrorKind::Parse`][`crate::ErrorKind::Parse`] if the port is not
/// numeric or an IP literal is not closed, or an escaping error if the
/// hostname is not correctly escaped.
///
/// # Examples
///
/// ```
/// use url_parts::parser::parse_host;
///
/// assert_eq!(parse_host("foo.com:80")?, ("foo.com".into(), "80".into()));
/// assert_eq!(parse_host("[::1]:80")?, ("[::1]".into(), "80".into()));
/// assert_eq!(
///     parse_host("[fe80::1%25en0]")?,
///     ("[fe80::1%en0]".into(), "".into())
/// );
/// # Ok::<_, url_parts::Error>(())
/// ```
pub fn parse_host(host: &str) -> Result<(String, String), Error> {
    if host.starts_with('[') {
        // IP-literal of RFC 3986, with the zone identifier of RFC 6874.
        let close = rfind(host, b']').ok_or_else(|| Error::parse("missing ']' in host"))?;
        let (literal, colon_port) = host.split_at(close + 1);
        let port = port_of(colon_port)?;

        // The zone identifier may use any escapes, while the address part
        // may escape only non-ASCII bytes.
        if let Some(zone) = literal.find("%25") {
            let address = unescape(&literal[..zone], Encoding::Host)?;
            let zone_id = unescape(&literal[zone..close], Encoding::Zone)?;
            let mut hostname = String::with_capacity(address.len() + zone_id.len() + 1);
            hostname.push_str(&address);
            hostname.push_str(&zone_id);
            hostname.push(']');
            return Ok((hostname, port));
        }
        let hostname = unescape(literal, Encoding::Host)?;
        return Ok((hostname.into_owned(), port));
    }

    let (hostname, port) = match rfind_split(host, b':') {
        Some((hostname, colon_port)) => (hostname, port_of(colon_port)?),
        None => (host, String::new()),
    };
    let hostname = unescape(hostname, Encoding::Host)?;
    Ok((hostname.into_owned(), port))
}

/// Validates the `:port` suffix and returns the port without the colon.
fn port_of(colon_port: &str) -> Result<String, Error> {
    if !valid_optional_port(colon_port) {
        return Err(Error::parse(alloc::format!(
            "invalid port {:?} after host",
            colon_port
        )));
    }
    Ok(colon_port.get(1..).unwrap_or("").into())
}

/// Returns true if the string is empty or a colon followed by decimal digits.
///
/// # Examples
///
/// ```
/// use url_parts::parser::valid_optional_port;
///
/// assert!(valid_optional_port(""));
/// assert!(valid_optional_port(":"));
/// assert!(valid_optional_port(":8080"));
/// assert!(!valid_optional_port("8080"));
/// assert!(!valid_optional_port(":80a"));
/// ```
#[must_use]
pub fn valid_optional_port(port: &str) -> bool {
    if port.is_empty() {
        return true;
    }
    match port.strip_prefix(':') {
        Some(digits) => digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Returns true if the string is a valid raw `userinfo` of RFC 3986.
///
/// ```text
/// userinfo    = *( unreserved / pct-encoded / sub-delims / ":" )
/// ```
///
/// Percent-encoded triplets are not validated; unescaping does that.
/// `@` is accepted since the authority is split at its last `@`.
#[must_use]
pub fn valid_userinfo(s: &str) -> bool {
    s.bytes().all(is_userinfo)
}

/// Parses a raw query into a multimap.
///
/// Settings are separated by `&` or `;`, and each setting must be exactly
/// one `key=value` pair. An empty query gives an empty map.
///
/// # Errors
///
/// Returns [`ErrorKind::Parse`][`crate::ErrorKind::Parse`] carrying the
/// whole query if a setting is empty or does not have exactly one `=`, or an
/// escaping error if a key or a value is not correctly escaped.
///
/// # Examples
///
/// ```
/// use url_parts::parser::parse_query;
///
/// let map = parse_query("a=1&a=2;a=banana&b=x+y")?;
/// assert_eq!(map["a"], ["1", "2", "banana"]);
/// assert_eq!(map["b"], ["x y"]);
///
/// let err = parse_query("a=1&&a=2").unwrap_err();
/// assert_eq!(err.detail(), "a=1&&a=2");
/// # Ok::<_, url_parts::Error>(())
/// ```
pub fn parse_query(query: &str) -> Result<QueryMap, Error> {
    let mut map = QueryMap::new();
    if query.is_empty() {
        return Ok(map);
    }

    for setting in split2(query, b'&', b';') {
        let (key, value) = match find_split_hole(setting, b'=') {
            Some((key, value)) if find(value, b'=').is_none() => (key, value),
            _ => return Err(Error::parse(query)),
        };
        let key = unescape(key, Encoding::QueryComponent)?;
        let value = unescape(value, Encoding::QueryComponent)?;
        map.entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    Ok(map)
}

/// Builds a raw query from key-value pairs.
///
/// Keys and values are escaped and joined as `key=value` with `&`.
///
/// # Examples
///
/// ```
/// use url_parts::parser::build_query;
///
/// assert_eq!(build_query([("a", "1"), ("b", "x y")]), "a=1&b=x+y");
/// assert_eq!(build_query::<_, &str, &str>([]), "");
/// ```
#[must_use]
pub fn build_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut buf = String::new();
    for (key, value) in pairs {
        if !buf.is_empty() {
            buf.push('&');
        }
        buf.push_str(&escape(key.as_ref(), Encoding::QueryComponent));
        buf.push('=');
        buf.push_str(&escape(value.as_ref(), Encoding::QueryComponent));
    }
    buf
}
