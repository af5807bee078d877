//! Error types for provider calls and aggregation operations.

use thiserror::Error;

/// Failure of a single provider call.
///
/// Provider failures never cross the per-product boundary: the aggregation
/// fan-out absorbs and logs them, and the affected provider is simply
/// missing from the product's price or stock list.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider reported a structured failure for this call.
    #[error("provider {provider} unavailable: {message}")]
    Unavailable {
        /// Stable id of the failing provider
        provider: String,
        /// Provider-supplied reason
        message: String,
    },

    /// The provider task panicked instead of returning an outcome. Built by
    /// the engine from the join error and handled like any other failure.
    #[error("provider task faulted: {message}")]
    Faulted {
        /// Join error description
        message: String,
    },

    /// The call observed the cancellation signal before completing.
    #[error("call cancelled")]
    Cancelled,
}

/// Failure of a whole aggregation operation.
///
/// Per-provider and per-product trouble is absorbed into the response
/// instead of surfacing here; the only way an aggregation call returns
/// `Err` is external cancellation.
#[derive(Error, Debug)]
pub enum AggregateError {
    /// The cancellation signal fired before the operation completed.
    #[error("aggregation cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display() {
        let err = ProviderError::Unavailable {
            provider: "PRICEWATCH".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "provider PRICEWATCH unavailable: connection refused"
        );

        let err = ProviderError::Faulted {
            message: "task panicked".to_string(),
        };
        assert_eq!(err.to_string(), "provider task faulted: task panicked");

        assert_eq!(ProviderError::Cancelled.to_string(), "call cancelled");
    }

    #[test]
    fn aggregate_error_display() {
        assert_eq!(AggregateError::Cancelled.to_string(), "aggregation cancelled");
    }
}
