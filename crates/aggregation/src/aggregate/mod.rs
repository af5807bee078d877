//! Aggregation engine.
//!
//! Fans out per-product provider calls, fans the results back in with
//! partial-failure tolerance, and assembles batch responses with timing
//! diagnostics.

mod service;

pub use service::{AggregatorService, AggregatorServiceTrait};
