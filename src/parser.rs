//! Component splitters.
//!
//! These functions slice a raw URL (or a part of it) into components.
//! Slices are borrowed from the input; owned strings are created only where a
//! component has to be unescaped.

pub(crate) mod char;
mod split;
pub(crate) mod str;

pub use self::split::{
    build_query, parse_authority, parse_fragment, parse_host, parse_query, parse_scheme, split,
    valid_optional_port, valid_userinfo, QueryMap,
};
