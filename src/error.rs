use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failure while loading the launch records file. Fatal: the dashboard
/// cannot render without a dataset, so startup aborts on any of these.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: invalid {column} value '{value}'")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("data file contains no launch records")]
    NoRecords,
}

/// A site name that is neither the "All Sites" sentinel nor a site present
/// in the loaded dataset. Surfaced in the UI as a status message and an
/// empty chart rather than a crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown launch site '{site}'")]
pub struct SelectionError {
    pub site: String,
}
