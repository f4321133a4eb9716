//! Error types for the configuration tools.
//!
//! All fallible library operations return [`Result<T>`], which uses the
//! [`Error`] enum for error variants.

/// Errors raised while turning input data into router commands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Text that does not parse as an IPv4 address.
    #[error("invalid ip address: {0}")]
    InvalidAddress(String),

    /// A classless route spec that is not `"<network>/<prefix> <gateway>"`.
    ///
    /// Raised when the spec does not split into exactly two tokens, or when
    /// the network or the gateway token fails to parse.
    #[error("invalid route spec: {0}")]
    InvalidRouteSpec(String),

    /// Text that does not parse as a 48-bit MAC address.
    #[error("invalid MAC address: {0}")]
    InvalidMacAddress(String),

    /// A host table row with the wrong shape or an unparsable cell.
    #[error("invalid host definition at line {line}: {reason}")]
    InvalidHostDefinition { line: usize, reason: String },

    /// GitHub answered, but not with a usable list of keys.
    #[error("Invalid HTTP response from {url}: {reason}")]
    Github { url: String, reason: String },

    /// The host table is not well-formed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// A specialized Result type for the configuration tools.
pub type Result<T> = std::result::Result<T, Error>;
