use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("{0} is not installed or not in your PATH")]
    MissingDependency(String),

    #[error("Failed to list files: {0}")]
    Enumeration(String),

    #[error("Selector failed: {0}")]
    Selector(String),

    #[error("Selection cancelled")]
    SelectionCancelled,

    #[error("Could not read file {0}: {1}")]
    FileReadError(String, String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for ContextError {
    fn from(err: std::io::Error) -> Self {
        ContextError::IoError(err.to_string())
    }
}

impl From<walkdir::Error> for ContextError {
    fn from(err: walkdir::Error) -> Self {
        ContextError::Enumeration(err.to_string())
    }
}
