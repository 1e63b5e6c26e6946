use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Every way a store operation can fail. All variants are recoverable at the
/// shell: they are reported to the user and the interactive loop continues.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Create was given an ID that already exists
    #[error("a student with ID '{0}' already exists")]
    DuplicateId(String),

    /// No record matched the requested ID or search term
    #[error("no student matches '{0}'")]
    NotFound(String),

    /// Update named a field that is unknown or immutable (ID)
    #[error("'{0}' is not an updatable field")]
    InvalidField(String),

    /// Sort named a key outside {ID, Last Name, Class}
    #[error("'{0}' is not a sortable attribute")]
    InvalidAttribute(String),

    /// The caller declined a destructive confirmation; nothing was changed
    #[error("operation cancelled")]
    Cancelled,

    /// The persistence adapter failed underneath an operation
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = StoreError::DuplicateId("100".to_string());
        assert!(format!("{error}").contains("'100' already exists"));

        let error = StoreError::InvalidField("Shoe Size".to_string());
        assert!(format!("{error}").contains("not an updatable field"));

        let error = StoreError::InvalidAttribute("Email".to_string());
        assert!(format!("{error}").contains("not a sortable attribute"));
    }
}
