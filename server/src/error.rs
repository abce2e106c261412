use std::process::{ExitCode, Termination};

use async_graphql::ErrorExtensions;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::{AttachmentKind, FrameKind, Report};
use serde::Serialize;

use application::form::FormErrors;
use kernel::{ClientMessage, ConnectionFailure, KernelError};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Every context and printable attachment of the report, outermost first.
pub fn technical_details(report: &Report<KernelError>) -> String {
    let mut messages: Vec<String> = Vec::new();
    for frame in report.frames() {
        let message = match frame.kind() {
            FrameKind::Context(context) => context.to_string(),
            FrameKind::Attachment(AttachmentKind::Printable(printable)) => printable.to_string(),
            _ => continue,
        };
        if !messages.contains(&message) {
            messages.push(message);
        }
    }
    messages.join(": ")
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl ErrorStatus {
    pub fn context(&self) -> &KernelError {
        self.0.current_context()
    }

    /// Message for operators triggering a reseed.
    pub fn description(&self) -> String {
        match self.context() {
            KernelError::Connection(ConnectionFailure::HostResolution) => {
                "Network connectivity issue. Please check your internet connection.".to_string()
            }
            KernelError::Connection(ConnectionFailure::Authentication) => {
                "Database authentication failed. Please verify your credentials.".to_string()
            }
            KernelError::DuplicateIdentifier => {
                "Duplicate data detected. The population may have been run previously.".to_string()
            }
            _ => technical_details(&self.0),
        }
    }

    pub fn technical_details(&self) -> String {
        technical_details(&self.0)
    }

    /// Message for API clients: the attached `ClientMessage` when present.
    pub fn message(&self) -> String {
        match self.0.downcast_ref::<ClientMessage>() {
            Some(message) => message.to_string(),
            None => self.context().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureResponse {
    success: bool,
    error: String,
    technical_details: String,
}

impl From<&ErrorStatus> for FailureResponse {
    fn from(value: &ErrorStatus) -> Self {
        Self {
            success: false,
            error: value.description(),
            technical_details: value.technical_details(),
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = ?self.0, "request failed");
        let body = FailureResponse::from(&self);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl ErrorExtensions for ErrorStatus {
    fn extend(&self) -> async_graphql::Error {
        let context = *self.context();
        if matches!(context, KernelError::Connection(_) | KernelError::Internal) {
            tracing::error!(error = ?self.0, "operation failed");
        }
        let details = self.technical_details();
        async_graphql::Error::new(self.message()).extend_with(|_, extensions| {
            extensions.set("code", context.code());
            extensions.set("details", details);
        })
    }
}

/// Form gate failure of a mutation. Carries one message per rejected field.
#[derive(Debug)]
pub struct Rejected(FormErrors);

impl From<FormErrors> for Rejected {
    fn from(e: FormErrors) -> Self {
        Rejected(e)
    }
}

impl ErrorExtensions for Rejected {
    fn extend(&self) -> async_graphql::Error {
        let fields = self
            .0
            .iter()
            .map(|(field, message)| (field.name(), message))
            .collect::<std::collections::BTreeMap<_, _>>();
        let fields = async_graphql::to_value(fields).ok();
        let message = format!("{}: {}", KernelError::Validation, self.0);
        async_graphql::Error::new(message).extend_with(|_, extensions| {
            extensions.set("code", KernelError::Validation.code());
            if let Some(fields) = fields {
                extensions.set("fields", fields);
            }
        })
    }
}

#[cfg(test)]
mod test {
    use application::form::PublicationForm;
    use async_graphql::{ErrorExtensions, Value};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::{ClientMessage, ConnectionFailure, KernelError};

    use super::{ErrorStatus, Rejected};

    fn status(context: KernelError) -> ErrorStatus {
        ErrorStatus::from(
            Report::new(context).attach_printable("getaddrinfo ENOTFOUND cluster0.example.net"),
        )
    }

    #[test]
    fn friendly_descriptions_for_known_failures() {
        assert_eq!(
            status(KernelError::Connection(ConnectionFailure::HostResolution)).description(),
            "Network connectivity issue. Please check your internet connection."
        );
        assert_eq!(
            status(KernelError::Connection(ConnectionFailure::Authentication)).description(),
            "Database authentication failed. Please verify your credentials."
        );
        assert_eq!(
            status(KernelError::DuplicateIdentifier).description(),
            "Duplicate data detected. The population may have been run previously."
        );
    }

    #[test]
    fn unclassified_failure_surfaces_underlying_message() {
        let status = ErrorStatus::from(
            Report::new(std::io::Error::other("server closed the stream"))
                .change_context(KernelError::Connection(ConnectionFailure::Other)),
        );
        assert_eq!(
            status.description(),
            "Database connection error: server closed the stream"
        );
    }

    #[tokio::test]
    async fn failure_body_shape() {
        let response = status(KernelError::Connection(ConnectionFailure::Refused)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is json");
        assert_eq!(body["success"], false);
        assert_eq!(
            body["technicalDetails"],
            "getaddrinfo ENOTFOUND cluster0.example.net: Database connection refused. Ensure database service is running."
        );
        assert_eq!(body["error"], body["technicalDetails"]);
    }

    #[test]
    fn graphql_message_prefers_client_message() {
        let error = ErrorStatus::from(
            Report::new(KernelError::DuplicateIdentifier)
                .attach_printable(ClientMessage::new(
                    "Another publication already uses this identifier.",
                ))
                .attach_printable("identifier: 9780441013593"),
        )
        .extend();
        assert_eq!(error.message, "Another publication already uses this identifier.");
        let code = error
            .extensions
            .as_ref()
            .and_then(|extensions| extensions.get("code").cloned());
        assert_eq!(code, Some(Value::from("DUPLICATE_IDENTIFIER")));

        let error = ErrorStatus::from(Report::new(KernelError::WriterNotFound)).extend();
        assert_eq!(error.message, "Selected writer not found in our database.");
    }

    #[test]
    fn validation_message_lists_rejected_fields() {
        let form = PublicationForm {
            title: "Dune".to_string(),
            writer_id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            category: "Sci-Fi".to_string(),
            release_year: "3000".to_string(),
            identifier: "9780441013593".to_string(),
        };
        let errors = form.validate_until(2024).unwrap_err();
        let error = Rejected::from(errors).extend();
        assert_eq!(
            error.message,
            "Submitted fields failed validation: releaseYear: Release year must be between 1000 and 2024."
        );
    }
}
