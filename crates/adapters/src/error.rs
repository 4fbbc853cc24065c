//! Mapping of roster and request errors onto HTTP responses.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mergington_protocol::{ErrorDetail, RosterError};

/// Errors a handler can return to the client.
#[derive(Debug)]
pub enum ApiError {
    /// A roster change the store rejected
    Roster(RosterError),
    /// The request itself was malformed (e.g. missing `email`)
    InvalidRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Roster(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Roster(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Roster(err) => err.to_string(),
            ApiError::InvalidRequest(reason) => reason.clone(),
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        ApiError::Roster(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorDetail::new(self.detail()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = ApiError::from(RosterError::ActivityNotFound {
            activity: "Fencing".to_string(),
        });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.detail(), "Activity not found");

        let full = ApiError::from(RosterError::ActivityFull {
            activity: "Soccer".to_string(),
            capacity: 22,
        });
        assert_eq!(full.status(), StatusCode::BAD_REQUEST);

        let invalid = ApiError::InvalidRequest("missing field `email`".to_string());
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }
}
