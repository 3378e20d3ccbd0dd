//! Adapters for `#[serde(with = "...")]`.
//!
//! Each module picks one wire form for an id field:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use shardid::{ShardableId, TimeUuid};
//! use shardid::serde::{as_base64_shardable, as_hyphenated_time_uuid};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Row {
//!     #[serde(with = "as_base64_shardable")]
//!     id: ShardableId,
//!     #[serde(with = "as_hyphenated_time_uuid")]
//!     event: TimeUuid,
//! }
//! ```

mod shardable;
mod time_uuid;

pub use shardable::*;
pub use time_uuid::*;

use crate::Result;
use core::fmt;
use core::marker::PhantomData;

/// Deserializes a string through one of the id parsers.
pub(crate) struct TextVisitor<T> {
    expecting: &'static str,
    parse: fn(&str) -> Result<T>,
    _id: PhantomData<fn() -> T>,
}

impl<T> TextVisitor<T> {
    pub(crate) const fn new(expecting: &'static str, parse: fn(&str) -> Result<T>) -> Self {
        Self {
            expecting,
            parse,
            _id: PhantomData,
        }
    }
}

impl<T> ::serde::de::Visitor<'_> for TextVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: ::serde::de::Error,
    {
        (self.parse)(v).map_err(E::custom)
    }
}
