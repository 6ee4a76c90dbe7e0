use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use crate::core::MatchError;
use crate::models::ErrorResponse;

/// Errors surfaced to HTTP callers
///
/// The detail text goes in the body's `error` field and the category label in
/// `message`. Collaborator failures arrive here already stripped of internals;
/// only the text given to `Internal` is sent back.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    MalformedRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn label(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Validation failed",
            ApiError::MalformedRequest(_) => "Malformed request",
            ApiError::NotFound(_) => "Not found",
            ApiError::Internal(_) => "Internal error",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
            message: self.label().to_string(),
            status_code: status.as_u16(),
        })
    }
}

impl From<MatchError> for ApiError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::EmptyPreferences => ApiError::Validation(err.to_string()),
            MatchError::EmptyCatalog => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report the field messages rather than the derive's debug layout
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        ApiError::Validation(messages.join(" "))
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::MalformedRequest(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    ApiError::MalformedRequest(format!("Invalid query: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_match_errors_map_to_status() {
        let empty_prefs: ApiError = MatchError::EmptyPreferences.into();
        assert_eq!(empty_prefs.status_code(), StatusCode::BAD_REQUEST);

        let empty_catalog: ApiError = MatchError::EmptyCatalog.into();
        assert_eq!(empty_catalog.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(empty_catalog.to_string(), "No study spots available to recommend.");
    }

    #[test]
    fn test_internal_error_status() {
        let err = ApiError::Internal("Failed to save review".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_error_body_carries_detail_in_error_field() {
        let resp = ApiError::NotFound("Study spot not found".to_string()).error_response();
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body["error"], "Study spot not found");
        assert_eq!(body["message"], "Not found");
        assert_eq!(body["status_code"], 404);
    }
}
