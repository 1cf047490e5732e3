use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeoCadError {
    #[error("Missing designation in input record")]
    MissingDesignation,

    #[error("Missing field at position {0} in close-approach record")]
    MissingField(usize),

    #[error("Unable to parse {field} value: {value}")]
    UnparseableFloat { field: &'static str, value: String },

    #[error("Invalid close-approach date: {0}")]
    InvalidDateTime(String),

    #[error("Close approach of {0} is not linked to any NEO")]
    UnlinkedApproach(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PartialEq for NeoCadError {
    fn eq(&self, other: &Self) -> bool {
        use NeoCadError::*;
        match (self, other) {
            (MissingDesignation, MissingDesignation) => true,
            (MissingField(a), MissingField(b)) => a == b,
            (
                UnparseableFloat {
                    field: fa,
                    value: va,
                },
                UnparseableFloat {
                    field: fb,
                    value: vb,
                },
            ) => fa == fb && va == vb,
            (InvalidDateTime(a), InvalidDateTime(b)) => a == b,
            (UnlinkedApproach(a), UnlinkedApproach(b)) => a == b,

            // Wrapped errors are not comparable: equality on same variant only
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            _ => false,
        }
    }
}
