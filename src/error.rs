//! Error types for PitchAI.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Onboarding error: {0}")]
    Onboarding(#[from] OnboardingError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings-store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to open store: {0}")]
    Open(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Authentication collaborator errors. The signup view surfaces the
/// provider's message verbatim, so every variant carries one.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Signup failed: {message}")]
    SignupFailed { message: String },

    #[error("Signout failed: {message}")]
    SignoutFailed { message: String },

    #[error("Auth provider unreachable: {0}")]
    Http(String),
}

impl AuthError {
    /// The user-facing message for this error.
    pub fn message(&self) -> &str {
        match self {
            Self::SignupFailed { message } | Self::SignoutFailed { message } => message,
            Self::Http(message) => message,
        }
    }
}

/// Clipboard collaborator errors. Always non-fatal.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Onboarding wizard errors.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error("Field {name} is not declared by the current step")]
    UnknownField { name: String },

    #[error("Step {step} is incomplete, cannot advance")]
    StepIncomplete { step: u32 },

    #[error("Submission already in flight")]
    SubmissionInFlight,

    #[error("Submission failed: {0}")]
    SubmissionFailed(#[from] StorageError),

    #[error("Step {id} is out of range (1..={count})")]
    StepOutOfRange { id: u32, count: u32 },
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
