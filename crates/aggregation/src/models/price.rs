use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One price observation from one provider.
///
/// Quotes are attributed, never merged: an aggregated product carries the
/// full list of quotes it received and leaves ranking to the consumer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Stable id of the provider that produced the quote.
    pub provider_id: String,
    /// Human-readable provider name.
    pub provider_name: String,
    /// Quoted price, never negative.
    pub price: Decimal,
    /// Currency code, e.g. "USD".
    pub currency: String,
    /// When the provider produced the quote.
    pub observed_at: DateTime<Utc>,
}

impl PriceQuote {
    /// Builds a quote observed now.
    pub fn new(
        provider_id: impl Into<String>,
        provider_name: impl Into<String>,
        price: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            provider_name: provider_name.into(),
            price,
            currency: currency.into(),
            observed_at: Utc::now(),
        }
    }
}
