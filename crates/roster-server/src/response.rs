use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::ApiResponse;
use serde::Serialize;

/// Wrapper around `ApiResponse` that implements `IntoResponse` for Axum.
///
/// The HTTP status line always mirrors the `status` field of the body.
pub struct Envelope<T>(pub ApiResponse<T>);

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0)).into_response()
    }
}

impl<T> From<ApiResponse<T>> for Envelope<T> {
    fn from(resp: ApiResponse<T>) -> Self {
        Envelope(resp)
    }
}
