use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input. Please enter a number.")]
    InvalidNumber(String),

    #[error("Invalid record number.")]
    InvalidSelection(usize),

    #[error("Invalid input. Page size unchanged.")]
    InvalidPageSizeInput(String),

    #[error("Page size must be a positive number.")]
    NonPositivePageSize(i64),

    #[error("Selected record no longer exists.")]
    RecordNotFound,

    #[error("Config error: {0}")]
    Config(String),
}

impl PhonebookError {
    /// Errors caused by what the user typed at a prompt, as opposed to
    /// storage or configuration failures.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            PhonebookError::InvalidNumber(_)
                | PhonebookError::InvalidSelection(_)
                | PhonebookError::InvalidPageSizeInput(_)
                | PhonebookError::NonPositivePageSize(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
