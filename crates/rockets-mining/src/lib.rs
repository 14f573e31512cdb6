//! # rockets-mining
//!
//! Turns a flat launch record set into ranked top-k lists and grouped
//! statistics.
//!
//! - [`aggregate`]: grouping by a derived key, counting, and decimal/integer sums
//! - [`rank`]: top-k selection with an explicit tie-break
//! - [`queries`]: the report functions, pure over a [`rockets_core::Snapshot`]
//! - [`RocketMiner`]: loads one snapshot per call from a repository and runs a report
//!
//! Every ranking breaks score ties by the entity's natural key, ascending
//! (countries by name), so results do not depend on map iteration order.

pub mod aggregate;
pub mod error;
pub mod miner;
pub mod queries;
pub mod rank;
pub mod reliability;

pub use error::MiningError;
pub use miner::RocketMiner;
pub use reliability::Reliability;
