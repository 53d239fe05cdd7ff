use rust_decimal::Decimal;
use thiserror::Error;

/// The only inputs the engine refuses outright. Every other degenerate
/// input (unknown recurrence, unknown lead time, unknown provider, empty
/// subscription set) resolves by a defined fallback instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unparseable purchase date: '{0}' (expected YYYY-MM-DD)")]
    InvalidPurchaseDate(String),

    #[error("cost must be non-negative, got {0}")]
    NegativeCost(Decimal),
}
