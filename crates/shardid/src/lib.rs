//! Shardable object ids and time UUIDs with a sortable text form.
//!
//! Two identifier shapes are provided:
//!
//! - [`ShardableId`]: 12 bytes laid out as `machine | time | inc`, so ids from
//!   the same machine cluster together when sorted.
//! - [`TimeUuid`]: a version-1 style UUID whose bytes are permuted so the time
//!   field leads, making byte order follow creation time.
//!
//! Both render through a modified Base64 alphabet (`-0-9A-Z_a-z`) whose symbol
//! order equals the 6-bit value order, so comparing the text compares the
//! bytes.
//!
//! ```
//! use shardid::{ShardableId, SortableBase64Ext};
//!
//! let id = ShardableId::from_parts(1_700_000_000, 7, 42);
//! let text = id.encode();
//! assert_eq!(text.as_str().len(), 16);
//! assert_eq!(ShardableId::decode(text.as_str()).unwrap(), id);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod base64;
mod error;
mod generator;
mod id;
mod machine;
mod rand;
#[cfg(feature = "serde")]
pub mod serde;
mod time;
mod unsigned;

pub use crate::base64::{Base64Formatter, SortableBase64Ext};
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::machine::*;
pub use crate::rand::*;
pub use crate::time::*;
pub use crate::unsigned::*;
