use thiserror::Error;

/// Convenient result alias for the gas-planning library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a usable-gas partition method is not ALL, HALF or THIRDS.
    #[error("unknown partition method: {method}; expected one of ALL, HALF, THIRDS")]
    InvalidMethod { method: String },

    /// Raised when a tank name is absent from the registry.
    #[error("unknown tank: {name}")]
    UnknownTank { name: String },
}
