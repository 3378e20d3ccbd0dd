mod interface;
mod shardable;
mod text;
mod time_uuid;

pub use interface::*;
pub use shardable::*;
pub use text::{babble, is_hex};
pub use time_uuid::*;
