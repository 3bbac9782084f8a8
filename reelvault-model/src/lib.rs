//! # Reelvault Model
//!
//! Shared data types and pure logic for the Reelvault catalog API:
//! filter predicates, pagination clamping, creation-payload validation and
//! document shaping, and page-level summaries.
//!
//! Catalog records are schemaless at the storage boundary, so documents move
//! through the system as [`serde_json::Value`]. The types here carry the
//! typed logic around those documents.

pub mod error;
pub mod filters;
pub mod page;
pub mod summary;
pub mod title;

pub use error::ValidationError;
pub use filters::TitleFilters;
pub use page::PageRequest;
pub use summary::{PageSummary, page_summary};
pub use title::{NewTitle, REQUIRED_FIELDS, utc_timestamp};
