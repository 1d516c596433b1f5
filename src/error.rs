use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pbn operations
#[derive(Error, Diagnostic, Debug)]
pub enum PbnError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pbn::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pbn::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(pbn::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pbn::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Image is empty ({width}x{height})")]
    #[diagnostic(code(pbn::empty))]
    EmptyImage { width: u32, height: u32 },

    #[error("Internal invariant violated: {message}")]
    #[diagnostic(code(pbn::internal))]
    InternalInvariant { message: String },
}

pub type Result<T> = std::result::Result<T, PbnError>;
