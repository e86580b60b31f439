use crate::{ApiResponse, ServiceError};
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.is_server_error() {
            tracing::error!(
                status = %status,
                process = %self.process(),
                message = %self.message(),
                "Request failed"
            );
        } else {
            tracing::debug!(
                status = %status,
                process = %self.process(),
                message = %self.message(),
                "Request rejected"
            );
        }
        (status, Json(self.to_body())).into_response()
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
