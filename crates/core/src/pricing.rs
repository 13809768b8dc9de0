//! Inclusive price range used by the `/price/{min}/{max}` filter.

use crate::error::CoreError;

/// A validated, inclusive `[min, max]` price window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    /// Parse the raw path segments into a range.
    ///
    /// Rejects empty segments, non-integer values and `min > max`. All
    /// failures are [`CoreError::Validation`] so they surface as client
    /// errors without touching storage.
    pub fn parse(min: &str, max: &str) -> Result<Self, CoreError> {
        if min.is_empty() || max.is_empty() {
            return Err(CoreError::Validation(
                "min and max price parameters are required".to_string(),
            ));
        }

        let min: i64 = min
            .parse()
            .map_err(|_| CoreError::Validation("min price must be a valid integer".to_string()))?;
        let max: i64 = max
            .parse()
            .map_err(|_| CoreError::Validation("max price must be a valid integer".to_string()))?;

        if min > max {
            return Err(CoreError::Validation(
                "min price cannot be greater than max price".to_string(),
            ));
        }

        Ok(Self { min, max })
    }
}
