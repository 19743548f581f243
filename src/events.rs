//! Events emitted by state-changing exchange operations.
//!
//! An event is appended only when its operation commits. A failed call
//! leaves the log untouched.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, PoolId, Shares, TokenAddress};

/// A committed state change.
///
/// Serialized externally tagged by the snake-case variant name, so a log
/// can be shipped as JSON lines:
///
/// ```
/// use hydra_exchange::domain::{Amount, TokenAddress};
/// use hydra_exchange::events::ExchangeEvent;
///
/// let event = ExchangeEvent::Swap {
///     token_in: TokenAddress::from_bytes([1; 32]),
///     token_out: TokenAddress::from_bytes([2; 32]),
///     amount_in: Amount::new(10),
///     amount_out: Amount::new(8),
/// };
/// let Ok(json) = serde_json::to_string(&event) else { panic!("serialize") };
/// assert!(json.starts_with(r#"{"swap":{"#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeEvent {
    /// A pool was created by the first deposit into its pair.
    PoolCreated {
        /// Canonically smaller asset.
        token0: TokenAddress,
        /// Canonically larger asset.
        token1: TokenAddress,
        /// The new pool's id.
        pool_id: PoolId,
    },

    /// Liquidity was added or removed. Assets are in the caller's order.
    LiquidityChanged {
        /// First asset as named by the caller.
        token_a: TokenAddress,
        /// Second asset as named by the caller.
        token_b: TokenAddress,
        /// Amount of `token_a` moved.
        amount_a: Amount,
        /// Amount of `token_b` moved.
        amount_b: Amount,
        /// Shares minted or burned.
        share_delta: Shares,
        /// `true` for a deposit, `false` for a withdrawal.
        is_add: bool,
    },

    /// A swap was executed.
    Swap {
        /// Asset sold to the pool.
        token_in: TokenAddress,
        /// Asset bought from the pool.
        token_out: TokenAddress,
        /// Amount sold, fee included.
        amount_in: Amount,
        /// Amount bought.
        amount_out: Amount,
    },
}

/// Append-only record of committed events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<ExchangeEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: ExchangeEvent) {
        self.events.push(event);
    }

    /// All events in emission order.
    #[must_use]
    pub fn as_slice(&self) -> &[ExchangeEvent] {
        &self.events
    }

    /// Number of events recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Removes and returns every event.
    pub fn drain(&mut self) -> Vec<ExchangeEvent> {
        core::mem::take(&mut self.events)
    }
}
