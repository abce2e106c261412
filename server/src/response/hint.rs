use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Static answer to a `GET` on an endpoint that only acts on `POST`.
#[derive(Debug, Serialize)]
pub struct UsageHint {
    message: &'static str,
    instructions: &'static str,
}

impl UsageHint {
    pub fn graphql() -> Self {
        Self {
            message: "Publication catalog GraphQL endpoint. Send POST request with a query or mutation.",
            instructions: "POST a JSON body such as {\"query\": \"{ fetchAllPublications { id bookTitle } }\"} to this endpoint.",
        }
    }

    pub fn seed() -> Self {
        Self {
            message: "Catalog population service. Send POST request to populate database.",
            instructions: "Use POST method to this endpoint to fill the database with sample catalog data.",
        }
    }
}

impl IntoResponse for UsageHint {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::UsageHint;

    #[tokio::test]
    async fn seed_hint_points_to_post() {
        let response = UsageHint::seed().into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is json");
        assert_eq!(
            body["message"],
            "Catalog population service. Send POST request to populate database."
        );
        assert!(body["instructions"].is_string());
    }
}
