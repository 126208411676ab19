//! Query store.

use core::cell::OnceCell;
use core::fmt;
use core::str::FromStr;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::parser::{build_query, parse_query, QueryMap};

/// Decoded query of a URL.
///
/// This is a multimap from keys to values. Keys are kept in sorted order, and
/// values of the same key are kept in the order they were added.
///
/// The encoded form is cached: it is the parsed string until the query is
/// modified, and is rebuilt on the next read after a modification.
///
/// # Examples
///
/// ```
/// use url_parts::Query;
///
/// let mut query: Query = "b=2&a=1".parse()?;
/// // Parsed string is kept as is.
/// assert_eq!(query.to_string(), "?b=2&a=1");
///
/// query.add("a", "x y");
/// assert_eq!(query.to_string(), "?a=1&a=x+y&b=2");
/// # Ok::<_, url_parts::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Decoded settings.
    map: QueryMap,
    /// Encoded form without the leading `?`.
    ///
    /// Uninitialized while dirty.
    raw: OnceCell<String>,
    /// Whether an empty query is still written as `?`.
    force_query: bool,
}

impl Query {
    /// Creates an empty query.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the raw query (without the leading `?`) and replaces the
    /// content with it.
    ///
    /// The current content is cleared even if parsing fails.
    ///
    /// # Errors
    ///
    /// See [`parse_query`][`crate::parser::parse_query`].
    pub fn parse(&mut self, raw: &str) -> Result<(), Error> {
        self.map.clear();
        self.raw = OnceCell::new();
        self.map = parse_query(raw)?;
        self.raw = OnceCell::from(String::from(raw));
        Ok(())
    }

    /// Returns the encoded query without the leading `?`.
    #[must_use]
    pub fn raw(&self) -> &str {
        self.raw.get_or_init(|| {
            trace_log!("rebuilding raw query from {} keys", self.map.len());
            build_query(self.iter())
        })
    }

    /// Returns whether an empty query is written as `?`.
    #[inline]
    #[must_use]
    pub fn force_query(&self) -> bool {
        self.force_query
    }

    /// Sets whether an empty query is written as `?`.
    #[inline]
    pub fn set_force_query(&mut self, force: bool) {
        self.force_query = force;
    }

    /// Replaces all values of the key with the given value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.invalidate();
        self.map.insert(key.into(), vec![value.into()]);
    }

    /// Adds a value to the key, keeping the existing values.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.invalidate();
        self.map.entry(key.into()).or_default().push(value.into());
    }

    /// Removes all values of the key.
    pub fn del(&mut self, key: &str) {
        self.invalidate();
        self.map.remove(key);
    }

    /// Returns all key-value pairs.
    #[must_use]
    pub fn values(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect()
    }

    /// Returns all key-value pairs of the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Vec<(String, String)> {
        self.map
            .get(key)
            .into_iter()
            .flatten()
            .map(|value| (key.into(), value.clone()))
            .collect()
    }

    /// Returns the first value of the key.
    #[must_use]
    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.map
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns true if the key has at least one value.
    #[inline]
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the number of key-value pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }

    /// Returns true if the query has no key-value pairs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator of the key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.map.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    /// Marks the cached raw form outdated.
    #[inline]
    fn invalidate(&mut self) {
        self.raw = OnceCell::new();
    }
}

impl PartialEq for Query {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl Eq for Query {}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.map.is_empty() {
            return if self.force_query {
                f.write_str("?")
            } else {
                Ok(())
            };
        }
        f.write_str("?")?;
        f.write_str(self.raw())
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut query = Self::new();
        query.parse(s)?;
        Ok(query)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Query {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        query.extend(iter);
        query
    }
}

impl From<Vec<(String, String)>> for Query {
    #[inline]
    fn from(values: Vec<(String, String)>) -> Self {
        values.into_iter().collect()
    }
}

#[cfg(feature = "serde")]
mod __serde {
    use super::Query;

    use core::fmt;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for Query {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.raw())
        }
    }

    /// `Query` visitor.
    #[derive(Debug, Clone, Copy)]
    struct QueryVisitor;

    impl<'de> Visitor<'de> for QueryVisitor {
        type Value = Query;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a URL query")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Query {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(QueryVisitor)
        }
    }
}
