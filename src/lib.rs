//! URL decomposition, recomposition, and context-aware percent encoding.
//!
//! [`Url::parse`] slices a URL reference into its components
//! (`scheme:[//[userinfo@]host[:port]]path[?query][#fragment]`) and decodes
//! each of them, and the [`Display`] implementation writes them back with
//! the escaping required by each part. Canonical inputs survive the round
//! trip unchanged.
//!
//! ```
//! use url_parts::Url;
//!
//! let url = Url::parse("http://[fe80::1%25en0]:8080/a%2Fb?q=1#frag")?;
//! assert_eq!(url.hostname(), "[fe80::1%en0]");
//! assert_eq!(url.port(), "8080");
//! assert_eq!(url.path(), "/a/b");
//! assert_eq!(url.raw_path(), "/a%2Fb");
//! assert_eq!(url.to_string(), "http://[fe80::1%25en0]:8080/a%2Fb?q=1#frag");
//! # Ok::<_, url_parts::Error>(())
//! ```
//!
//! Note that this crate does not have any extra knowledge about schemes.
//! There are no default ports, and paths are not validated per scheme. URLs
//! are not normalized, and relative references are not resolved.
//!
//! # `std` support
//!
//! This crate supports `no_std` usage, but the `alloc` crate is always
//! required.
//!
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + The feature lets the crate implement `std::error::Error` for
//!       [`Error`].
//! * `memchr` feature:
//!     + Uses `memchr` crate to find delimiters.
//! * `serde` feature:
//!     + Implements `Serialize` and `Deserialize` for [`Url`] and [`Query`]
//!       through their string forms.
//! * `log` feature:
//!     + Emits diagnostics through the `log` facade with the `url_parts`
//!       target. Parse failures are logged at the debug level.
//!
//! [`Display`]: `core::fmt::Display`
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[macro_use]
mod macros;

mod error;
pub mod escape;
pub(crate) mod format;
pub mod parser;
mod query;
mod url;

pub use self::error::{Error, ErrorKind};
pub use self::escape::{escape_path, escape_query, unescape_path, unescape_query};
pub use self::query::Query;
pub use self::url::Url;
