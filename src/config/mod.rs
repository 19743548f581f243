//! Exchange configuration.
//!
//! [`ExchangeConfig`] holds the few parameters fixed for the lifetime of an
//! [`Exchange`](crate::exchange::Exchange): the custody account and the
//! fee tier. It can be built in code or read from JSON.

mod exchange_config;

pub use exchange_config::ExchangeConfig;
