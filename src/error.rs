use std::fmt;

/// Result type for Minerva operations
pub type Result<T> = std::result::Result<T, MinervaError>;

/// Main error type for the Minerva library
#[derive(Debug, Clone)]
pub enum MinervaError {
    /// Invalid dimensions for operations
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// A loss function paired with an incompatible final layer
    UnsupportedPairing {
        loss: String,
        layer: String,
    },

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for MinervaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinervaError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            MinervaError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            MinervaError::UnsupportedPairing { loss, layer } => {
                write!(f, "Loss {} cannot be paired with final layer {}", loss, layer)
            }
            MinervaError::IoError(msg) => write!(f, "IO error: {}", msg),
            MinervaError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for MinervaError {}

// Conversion from std::io::Error
impl From<std::io::Error> for MinervaError {
    fn from(err: std::io::Error) -> Self {
        MinervaError::IoError(err.to_string())
    }
}

// Conversion from bincode::Error
impl From<bincode::Error> for MinervaError {
    fn from(err: bincode::Error) -> Self {
        MinervaError::SerializationError(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MinervaError {
    fn from(err: serde_json::Error) -> Self {
        MinervaError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl MinervaError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        MinervaError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        MinervaError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
