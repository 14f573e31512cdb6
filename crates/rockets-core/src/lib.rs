//! # rockets-core
//!
//! Core types shared across the launch analytics crates.
//!
//! This crate provides:
//! - Entity structs for the domain objects (providers, rockets, rocket families, payloads, launches)
//! - Natural-key identity for every entity (equality and hashing ignore the storage id)
//! - `Snapshot`, the read-only arena a query runs against
//! - ID prefix constants and formatting helpers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod snapshot;

pub use entities::{Entity, Launch, Payload, Provider, Rocket, RocketFamily};
pub use enums::{EntityKind, LaunchOutcome};
pub use errors::CoreError;
pub use snapshot::Snapshot;
