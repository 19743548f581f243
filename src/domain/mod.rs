//! Fundamental domain value types used throughout the exchange engine.
//!
//! Assets, accounts, canonical pairs and pool ids, amounts and shares,
//! prices, deadlines, and the request/receipt shapes of the liquidity and
//! swap operations. All numeric types are newtypes over `u128` with
//! checked arithmetic.

mod account;
mod amount;
mod basis_points;
mod fee_tier;
mod liquidity;
mod pool_id;
mod price;
mod rounding;
mod shares;
mod swap_path;
mod swap_spec;
mod timestamp;
mod token_address;
mod token_pair;

pub use account::AccountId;
pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use fee_tier::FeeTier;
pub use liquidity::{AddLiquidity, Deposit, RemoveLiquidity, Withdrawal};
pub use pool_id::PoolId;
pub use price::Price;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_path::SwapPath;
pub use swap_spec::{SwapResult, SwapSpec};
pub use timestamp::Timestamp;
pub use token_address::TokenAddress;
pub use token_pair::TokenPair;
