//! URL parsing and escaping error.

use core::fmt;

use alloc::string::String;

#[cfg(feature = "std")]
use std::error;

/// URL parsing or escaping error.
///
/// Success is represented by `Ok(_)`, so an `Error` always carries one of
/// the [`ErrorKind`]s below. The numeric [`code`][`Error::code`] reserves `0`
/// for "no error".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// Error kind.
    kind: ErrorKind,
    /// Offending input or a description of the problem.
    detail: String,
}

impl Error {
    /// Creates a new error.
    #[inline]
    #[must_use]
    pub(crate) fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// Creates a new [`ErrorKind::Parse`] error.
    #[inline]
    #[must_use]
    pub(crate) fn parse(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, detail)
    }

    /// Creates a new [`ErrorKind::Escape`] error.
    #[inline]
    #[must_use]
    pub(crate) fn escape(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Escape, detail)
    }

    /// Creates a new [`ErrorKind::InvalidHost`] error.
    #[inline]
    #[must_use]
    pub(crate) fn invalid_host(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidHost, detail)
    }

    /// Creates a new [`ErrorKind::Range`] error.
    #[inline]
    #[must_use]
    pub(crate) fn range(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Range, detail)
    }

    /// Returns the error kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error payload.
    ///
    /// This is the offending part of the input (e.g. `"%zz"` for a bad
    /// escape) or a short description such as `"invalid userinfo"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_parts::{unescape_query, ErrorKind};
    ///
    /// let err = unescape_query("%zzzzz").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Escape);
    /// assert_eq!(err.detail(), "%zz");
    /// ```
    #[inline]
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Returns the numeric error code.
    ///
    /// `0` is never returned: it stands for success.
    #[inline]
    #[must_use]
    pub fn code(&self) -> u8 {
        self.kind.code()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Parse => write!(f, "parse error: {}", self.detail),
            ErrorKind::Escape => write!(f, "invalid URL escape {:?}", self.detail),
            ErrorKind::InvalidHost => {
                write!(f, "invalid character {:?} in host name", self.detail)
            }
            ErrorKind::Range => write!(
                f,
                "'%' was not followed by two characters: {:?}",
                self.detail
            ),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl error::Error for Error {}

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structural grammar violation.
    ///
    /// Malformed userinfo, colon in the first segment of a relative path,
    /// malformed query segment, control characters, and so on.
    Parse,
    /// Malformed percent-encoded triplet, or an escape not allowed in the
    /// context (e.g. an escaped ASCII byte in a host).
    Escape,
    /// Literal byte that is not allowed in a host or zone identifier.
    InvalidHost,
    /// `%` not followed by two characters.
    Range,
}

impl ErrorKind {
    /// Returns the numeric error code.
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Parse => 1,
            Self::Escape => 2,
            Self::InvalidHost => 3,
            Self::Range => 4,
        }
    }
}
