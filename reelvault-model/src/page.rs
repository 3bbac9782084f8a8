use crate::error::ValidationError;

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 100;
/// Replacement for limits below 1. Out-of-range values are corrected
/// silently rather than rejected.
pub const FALLBACK_LIMIT: i64 = 10;

/// A clamped page request for the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl PageRequest {
    /// Parse raw `limit`/`offset` query values. Non-integer input fails
    /// with [`ValidationError::InvalidParameter`]; out-of-range integers
    /// are clamped without error.
    pub fn from_raw(
        limit: Option<&str>,
        offset: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let limit = match limit {
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                ValidationError::InvalidParameter {
                    name: "limit",
                    expected: "an integer",
                }
            })?,
            None => DEFAULT_LIMIT,
        };

        let offset = match offset {
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                ValidationError::InvalidParameter {
                    name: "offset",
                    expected: "an integer",
                }
            })?,
            None => 0,
        };

        Ok(Self { limit, offset }.clamped())
    }

    fn clamped(mut self) -> Self {
        if self.limit > MAX_LIMIT {
            self.limit = MAX_LIMIT;
        }
        if self.limit < 1 {
            self.limit = FALLBACK_LIMIT;
        }
        if self.offset < 0 {
            self.offset = 0;
        }
        self
    }

    /// Whether records remain past this page in a collection of `total`.
    pub fn has_more(&self, total: i64) -> bool {
        self.offset + self.limit < total
    }
}
