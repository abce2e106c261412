use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConnectionFailure {
    HostResolution,
    Authentication,
    Refused,
    Transport,
    Other,
}

impl Display for ConnectionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionFailure::HostResolution => write!(
                f,
                "Database hostname resolution failed. Verify network connectivity and connection string."
            ),
            ConnectionFailure::Authentication => {
                write!(f, "Database authentication rejected. Verify credentials.")
            }
            ConnectionFailure::Refused => write!(
                f,
                "Database connection refused. Ensure database service is running."
            ),
            ConnectionFailure::Transport => {
                write!(f, "Secure connection failed. Check SSL/TLS configuration.")
            }
            ConnectionFailure::Other => write!(f, "Database connection error"),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    Connection(ConnectionFailure),
    InvalidIdentifier,
    PublicationNotFound,
    WriterNotFound,
    DuplicateIdentifier,
    Validation,
    Internal,
}

impl KernelError {
    /// Stable machine-readable name, used as the `code` of API errors.
    pub fn code(&self) -> &'static str {
        match self {
            KernelError::Connection(_) => "CONNECTION_FAILURE",
            KernelError::InvalidIdentifier => "INVALID_IDENTIFIER",
            KernelError::PublicationNotFound => "PUBLICATION_NOT_FOUND",
            KernelError::WriterNotFound => "WRITER_NOT_FOUND",
            KernelError::DuplicateIdentifier => "DUPLICATE_IDENTIFIER",
            KernelError::Validation => "VALIDATION",
            KernelError::Internal => "INTERNAL",
        }
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Connection(failure) => Display::fmt(failure, f),
            KernelError::InvalidIdentifier => write!(f, "Identifier format is invalid"),
            KernelError::PublicationNotFound => write!(f, "Publication not found in catalog."),
            KernelError::WriterNotFound => {
                write!(f, "Selected writer not found in our database.")
            }
            KernelError::DuplicateIdentifier => {
                write!(f, "This publication identifier already exists in our catalog.")
            }
            KernelError::Validation => write!(f, "Submitted fields failed validation"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Text shown to API clients instead of the context's default message.
///
/// Attached as a printable, so it also appears in technical details.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ClientMessage(&'static str);

impl ClientMessage {
    pub const fn new(message: &'static str) -> Self {
        Self(message)
    }

    pub fn message(&self) -> &'static str {
        self.0
    }
}

impl Display for ClientMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
