//! Functions for common string operations.

/// Returns the position of the first occurrence of the given byte.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &str, needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack.as_bytes())
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.bytes().position(|b| b == needle)
    }
}

/// Returns the position of the last occurrence of the given byte.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &str, needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memrchr(needle, haystack.as_bytes())
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.bytes().rposition(|b| b == needle)
    }
}

/// Returns the position of the first occurrence of either of the given bytes.
#[inline]
#[must_use]
pub(crate) fn find2(haystack: &str, needle1: u8, needle2: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr2(needle1, needle2, haystack.as_bytes())
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack
            .bytes()
            .position(|b| (b == needle1) || (b == needle2))
    }
}

/// Splits the string at the first occurrence of the byte, and drops the byte.
///
/// Returns `None` if the byte does not appear.
///
/// # Precondition
///
/// `needle` must be an ASCII byte.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(haystack: &str, needle: u8) -> Option<(&str, &str)> {
    debug_assert!(needle.is_ascii(), "[precondition] needle must be ASCII");
    find(haystack, needle).map(|pos| (&haystack[..pos], &haystack[(pos + 1)..]))
}

/// Splits the string at the first occurrence of the byte, and keeps the byte
/// at the head of the second part.
///
/// # Precondition
///
/// `needle` must be an ASCII byte.
#[inline]
#[must_use]
pub(crate) fn find_split(haystack: &str, needle: u8) -> Option<(&str, &str)> {
    debug_assert!(needle.is_ascii(), "[precondition] needle must be ASCII");
    find(haystack, needle).map(|pos| haystack.split_at(pos))
}

/// Splits the string at the last occurrence of the byte, and drops the byte.
///
/// # Precondition
///
/// `needle` must be an ASCII byte.
#[inline]
#[must_use]
pub(crate) fn rfind_split_hole(haystack: &str, needle: u8) -> Option<(&str, &str)> {
    debug_assert!(needle.is_ascii(), "[precondition] needle must be ASCII");
    rfind(haystack, needle).map(|pos| (&haystack[..pos], &haystack[(pos + 1)..]))
}

/// Splits the string at the last occurrence of the byte, and keeps the byte
/// at the head of the second part.
///
/// # Precondition
///
/// `needle` must be an ASCII byte.
#[inline]
#[must_use]
pub(crate) fn rfind_split(haystack: &str, needle: u8) -> Option<(&str, &str)> {
    debug_assert!(needle.is_ascii(), "[precondition] needle must be ASCII");
    rfind(haystack, needle).map(|pos| haystack.split_at(pos))
}

/// Counts the occurrences of the byte.
#[inline]
#[must_use]
pub(crate) fn count(haystack: &str, needle: u8) -> usize {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr_iter(needle, haystack.as_bytes()).count()
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.bytes().filter(|&b| b == needle).count()
    }
}

/// Returns an iterator over the parts separated by either of the given bytes.
///
/// Empty parts are yielded too, so `"a&&b"` yields `"a"`, `""`, and `"b"`.
pub(crate) fn split2(haystack: &str, sep1: u8, sep2: u8) -> Split2<'_> {
    Split2 {
        rest: Some(haystack),
        sep1,
        sep2,
    }
}

/// Iterator returned by [`split2`].
#[derive(Debug, Clone)]
pub(crate) struct Split2<'a> {
    /// Unconsumed part, or `None` after the last part is yielded.
    rest: Option<&'a str>,
    /// First separator.
    sep1: u8,
    /// Second separator.
    sep2: u8,
}

impl<'a> Iterator for Split2<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match find2(rest, self.sep1, self.sep2) {
            Some(pos) => {
                self.rest = Some(&rest[(pos + 1)..]);
                Some(&rest[..pos])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
