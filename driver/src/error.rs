use error_stack::Report;
use mongodb::error::{Error, ErrorKind, WriteFailure};

use kernel::{ConnectionFailure, KernelError};

const DUPLICATE_KEY: i32 = 11000;

pub(crate) trait ConvertError {
    type Ok;
    /// Maps a failure of a regular read/write operation.
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
    /// Maps a failure while establishing the connection; every cause is a
    /// connection failure here.
    fn convert_connection_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;

    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = if is_duplicate_key(&error) {
                KernelError::DuplicateIdentifier
            } else {
                match classify_connection_failure(&error) {
                    Some(failure) => KernelError::Connection(failure),
                    None => KernelError::Internal,
                }
            };
            Report::new(error).change_context(context)
        })
    }

    fn convert_connection_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let failure = classify_connection_failure(&error).unwrap_or(ConnectionFailure::Other);
            Report::new(error).change_context(KernelError::Connection(failure))
        })
    }
}

pub fn is_duplicate_key(error: &Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(error)) => error.code == DUPLICATE_KEY,
        ErrorKind::BulkWrite(failure) => failure
            .write_errors
            .as_ref()
            .is_some_and(|errors| errors.iter().any(|error| error.code == DUPLICATE_KEY)),
        ErrorKind::Command(error) => error.code == DUPLICATE_KEY,
        _ => false,
    }
}

pub fn classify_connection_failure(error: &Error) -> Option<ConnectionFailure> {
    match error.kind.as_ref() {
        ErrorKind::DnsResolve { .. } => Some(ConnectionFailure::HostResolution),
        ErrorKind::Authentication { .. } => Some(ConnectionFailure::Authentication),
        ErrorKind::InvalidTlsConfig { .. } => Some(ConnectionFailure::Transport),
        ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::ConnectionRefused => {
            Some(ConnectionFailure::Refused)
        }
        // Selection failures wrap the last error seen per server as text.
        ErrorKind::Io(_) | ErrorKind::ServerSelection { .. } => Some(
            classify_message(&error.to_string()).unwrap_or(ConnectionFailure::Other),
        ),
        _ => None,
    }
}

pub(crate) fn classify_message(message: &str) -> Option<ConnectionFailure> {
    let message = message.to_lowercase();
    if message.contains("failed to lookup address")
        || message.contains("name or service not known")
        || message.contains("no such host")
        || message.contains("dns")
    {
        Some(ConnectionFailure::HostResolution)
    } else if message.contains("authentication failed") {
        Some(ConnectionFailure::Authentication)
    } else if message.contains("connection refused") {
        Some(ConnectionFailure::Refused)
    } else if message.contains("tls") || message.contains("ssl") || message.contains("certificate")
    {
        Some(ConnectionFailure::Transport)
    } else {
        None
    }
}

/// Hides the user and password of a connection string for logging.
pub fn mask_credentials(uri: &str) -> String {
    let Some(scheme_end) = uri.find("://").map(|index| index + 3) else {
        return uri.to_string();
    };
    let rest = &uri[scheme_end..];
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}***:***{}", &uri[..scheme_end], &rest[at..]),
        None => uri.to_string(),
    }
}
