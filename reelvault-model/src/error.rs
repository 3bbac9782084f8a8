use thiserror::Error;

/// Client-caused validation failures. Every variant maps to a 400 response
/// at the handler boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A query parameter was supplied but could not be parsed as the
    /// expected type.
    #[error("{name} must be {expected}")]
    InvalidParameter {
        name: &'static str,
        expected: &'static str,
    },

    /// The request body is not a JSON object.
    #[error("request body must be a valid JSON object")]
    MalformedPayload,

    /// One or more required fields are absent from the creation payload.
    /// Carries every missing field, not just the first.
    #[error("missing required fields: {}", missing.join(", "))]
    MissingFields {
        missing: Vec<String>,
        required: &'static [&'static str],
    },
}
