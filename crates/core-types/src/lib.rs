//! # Tradebook Core Types
//!
//! The foundational data structures shared by every crate in the workspace:
//! journaled trade records and the small enums used to slice them.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Granularity, Horizon, Outcome, Session};
pub use error::CoreError;
pub use structs::{TradeRecord, UNKNOWN_TRADER};
