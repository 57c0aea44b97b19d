use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use roster_core::{ApiResponse, RosterError};
use thiserror::Error;

use crate::response::Envelope;

/// Every way a member request can fail, mapped onto the response envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid ID")]
    InvalidId,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Data not found")]
    DataNotFound,

    #[error("Student not found")]
    MemberNotFound,

    /// Detail is logged, never sent to the client.
    #[error("Server Error")]
    Internal(RosterError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::DataNotFound | ApiError::MemberNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::Empty => ApiError::DataNotFound,
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            tracing::error!(error = %err, "Server Error");
        }

        let status = self.status();
        let body: ApiResponse<()> = ApiResponse::error(status.as_u16(), self.to_string());
        let mut response = Envelope(body).into_response();

        if status == StatusCode::METHOD_NOT_ALLOWED {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("GET"));
        }
        response
    }
}
