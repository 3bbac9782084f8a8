use serde_json::Value;

use crate::error::ValidationError;

/// Typed predicate set for catalog queries. Filters combine as a
/// conjunction; a `None` field is omitted from the query entirely rather
/// than matching an empty value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleFilters {
    /// Exact match on `category`.
    pub category: Option<String>,
    /// Exact match on the record `type` (movie, series, ...).
    pub kind: Option<String>,
    /// Case-insensitive substring match on `title`.
    pub title: Option<String>,
    /// Exact match on `release_year`.
    pub year: Option<i32>,
    /// Inclusive lower bound on `rating`.
    pub rating_min: Option<f64>,
}

impl TitleFilters {
    /// Build a filter set from raw query-string values. Empty strings are
    /// treated as absent. `year` and `rating_min` that are present but
    /// unparseable fail with [`ValidationError::InvalidParameter`].
    pub fn from_raw(
        category: Option<&str>,
        kind: Option<&str>,
        title: Option<&str>,
        year: Option<&str>,
        rating_min: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let year = match supplied(year) {
            Some(raw) => Some(raw.parse::<i32>().map_err(|_| {
                ValidationError::InvalidParameter {
                    name: "year",
                    expected: "an integer",
                }
            })?),
            None => None,
        };

        let rating_min = match supplied(rating_min) {
            Some(raw) => Some(raw.parse::<f64>().map_err(|_| {
                ValidationError::InvalidParameter {
                    name: "rating_min",
                    expected: "a number",
                }
            })?),
            None => None,
        };

        Ok(Self {
            category: supplied(category).map(str::to_owned),
            kind: supplied(kind).map(str::to_owned),
            title: supplied(title).map(str::to_owned),
            year,
            rating_min,
        })
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    // Fluent builders for programmatic queries.

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn rating_min(mut self, rating_min: f64) -> Self {
        self.rating_min = Some(rating_min);
        self
    }

    /// Evaluate the conjunction against a catalog document. This is the
    /// reference semantic the SQL predicate builder must agree with:
    /// documents whose field is missing or of the wrong type do not match
    /// the corresponding predicate.
    pub fn matches(&self, doc: &Value) -> bool {
        if let Some(category) = &self.category {
            if doc.get("category").and_then(Value::as_str) != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(kind) = &self.kind {
            if doc.get("type").and_then(Value::as_str) != Some(kind.as_str()) {
                return false;
            }
        }

        if let Some(needle) = &self.title {
            let matched = doc
                .get("title")
                .and_then(Value::as_str)
                .is_some_and(|t| t.to_lowercase().contains(&needle.to_lowercase()));
            if !matched {
                return false;
            }
        }

        if let Some(year) = self.year {
            if doc.get("release_year").and_then(Value::as_i64) != Some(i64::from(year)) {
                return false;
            }
        }

        if let Some(min) = self.rating_min {
            let matched = doc
                .get("rating")
                .and_then(Value::as_f64)
                .is_some_and(|r| r >= min);
            if !matched {
                return false;
            }
        }

        true
    }
}

fn supplied(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}
