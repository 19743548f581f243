//! Asset ledger registry and an in-memory ledger.

mod book;
mod memory;

pub use book::AssetBook;
pub use memory::MemoryLedger;
