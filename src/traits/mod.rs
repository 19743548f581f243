//! Seams between the exchange and its environment.
//!
//! The engine never touches balances or the wall clock directly. It talks
//! to each asset through an [`AssetLedger`], reads time through a
//! [`Clock`], and is built from configuration through [`FromConfig`].

mod asset_ledger;
mod clock;
mod from_config;

pub use asset_ledger::{AssetLedger, AssetLedgerError};
pub use clock::{Clock, ManualClock, SystemClock};
pub use from_config::FromConfig;
