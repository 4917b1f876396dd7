use thiserror::Error;

/// Internal issues with the codebase or stored data indicating unexpected behavior
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored timestamp could not be parsed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse timestamp '{value}'")]
    InvalidTimestamp {
        /// The string value that failed to parse
        value: String,
    },

    /// A stored document is missing a field the application relies on.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Document '{document_id}' is missing field '{field}'")]
    MissingField {
        /// Id of the malformed document
        document_id: String,
        /// Name of the missing field
        field: &'static str,
    },
}
