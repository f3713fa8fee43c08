use thiserror::Error;

/// Centralized error types for infrastructure failures.
///
/// Bot-plane errors are wire envelopes with an HTTP status, not Rust errors;
/// this enum covers the failures that happen around the request pipeline:
/// loading configuration and binding the listener.
#[derive(Error, Debug)]
pub enum MockError {
    /// IO errors (listener bind, config file read)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parse errors
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Type alias for Result with MockError
pub type MockResult<T> = Result<T, MockError>;
