//! # Tradebook Journal
//!
//! The adapter between stored trades and the analytics engine.
//!
//! - `TradeSource`: the trait every trade store implements. It returns a fully
//!   materialized snapshot, so the engine only ever sees in-memory data.
//! - `JsonFileSource`: reads a JSON array of trade records from disk.
//! - `InMemorySource`: wraps an existing list of trades.
//! - `JournalError`: the specific error types that can be returned from this crate.

pub mod error;
pub mod source;

pub use error::JournalError;
pub use source::{InMemorySource, JsonFileSource, TradeSource};
