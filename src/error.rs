// Error types for folio-term
//
// Everything that can go wrong while loading content or hosting the terminal.
// Command-level failures (unknown command, bad args) never show up here, they
// become transcript lines instead. See terminal::CommandError.

use thiserror::Error;

/// Main error type for folio-term operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// I/O errors (reading the content file, talking to the tty)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content document is not valid JSON or doesn't match the schema
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Content parsed fine but breaks a rule we rely on
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Two projects share an id, so `view <id>` would be ambiguous
    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(String),

    /// Project id can't be typed as a single token
    #[error("Invalid project id: '{0}'")]
    InvalidProjectId(String),

    /// Bad command line or environment
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for folio-term operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Convert the error to something a person can act on
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Io(e) => {
                format!("File system error. Check the path and permissions. Details: {}", e)
            }
            FolioError::Serialization(e) => {
                format!("Portfolio data is not valid JSON. Details: {}", e)
            }
            FolioError::InvalidContent(reason) => {
                format!("Portfolio data is incomplete: {}", reason)
            }
            FolioError::DuplicateProjectId(id) => {
                format!("Project id '{}' is used more than once", id)
            }
            FolioError::InvalidProjectId(id) => {
                format!(
                    "Project id '{}' must be a single word (letters, digits, '.', '_' or '-')",
                    id
                )
            }
            FolioError::Config(msg) => format!("Configuration issue: {}", msg),
        }
    }
}
