use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error: {0}")]
    #[diagnostic(code(swatch::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A capability was requested from a palette kind that does not have it.
    #[error("Unsupported palette: {message}")]
    #[diagnostic(code(swatch::palette::unsupported))]
    UnsupportedPalette {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// The palette geometry is degenerate (zero size or radius).
    #[error("Invalid palette: {message}")]
    #[diagnostic(code(swatch::palette::invalid))]
    InvalidPalette { message: String },

    #[error("Transform is not invertible (determinant {determinant})")]
    #[diagnostic(
        code(swatch::transform),
        help("The palette was scaled to zero along at least one axis")
    )]
    NonInvertible { determinant: f32 },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(swatch::config))]
    InvalidConfiguration {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SwatchError>;
