use error_stack::Report;
use kernel::KernelError;

pub mod database;
pub mod error;

/// Reads `key` from the environment or a `.env` file. `None` when unset.
pub(crate) fn env(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(Report::new(error)
            .change_context(KernelError::Internal)
            .attach_printable(format!("Failed to read environment variable {key}"))),
    }
}
