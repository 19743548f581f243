//! Pool records and the store that owns them.
//!
//! A pool is identified by its canonical [`TokenPair`](crate::domain::TokenPair)
//! and holds one reserve per canonical slot. The [`PoolStore`] creates pools
//! lazily and remembers the order in which they were created.

mod record;
mod store;

pub use record::{PoolInfo, PoolRecord};
pub use store::PoolStore;
