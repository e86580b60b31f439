use http::StatusCode;
use serde::{Deserialize, Serialize};
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// The category of a [`ServiceError`].
///
/// Each kind carries a default HTTP status and a default `process` label. `Base` and
/// `Business` have no fixed label; their status can be overridden at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Base,
    Business,
    Validation,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    UnprocessableEntity,
    InternalServerError,
    ServiceUnavailable,
}

impl ErrorKind {
    pub fn default_status(&self) -> StatusCode {
        match self {
            ErrorKind::Base => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Business => StatusCode::BAD_REQUEST,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// `None` for the kinds whose process label must be given by the caller.
    pub fn default_process(&self) -> Option<&'static str> {
        match self {
            ErrorKind::Base | ErrorKind::Business => None,
            ErrorKind::Validation => Some("Validation Error"),
            ErrorKind::BadRequest => Some("Bad Request"),
            ErrorKind::Unauthorized => Some("Unauthorized"),
            ErrorKind::Forbidden => Some("Forbidden"),
            ErrorKind::NotFound => Some("Resource Not Found"),
            ErrorKind::Conflict => Some("Resource Conflict"),
            ErrorKind::UnprocessableEntity => Some("Unprocessable Entity"),
            ErrorKind::InternalServerError => Some("Internal Server Error"),
            ErrorKind::ServiceUnavailable => Some("Service Unavailable"),
        }
    }
}

/// The error shared by every service built on this crate.
///
/// A `ServiceError` describes a failure that must be reported to an HTTP client. It carries:
/// - `kind`: the category of failure (see [`ErrorKind`]),
/// - `message`: a human readable description,
/// - `process`: the operation or process in which the failure happened,
/// - `status`: the HTTP status to answer with,
/// - `errors`: optional structured details, for instance one entry per invalid field.
///
/// All kinds share the same fields and the same serialisation, so a single struct is
/// enough; match on [`ServiceError::kind`] when the category matters.
///
/// Example:
/// ```
/// use sucrim::{ErrorKind, ServiceError, ServiceResult};
///
/// fn find_user(id: &str) -> ServiceResult<()> {
///     Err(ServiceError::not_found(format!("user {id} does not exist")))
/// }
///
/// let err = find_user("42").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.to_string(), "Resource Not Found: user 42 does not exist");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{process}: {message}")]
pub struct ServiceError {
    kind: ErrorKind,
    message: String,
    process: String,
    status: StatusCode,
    errors: Vec<serde_json::Value>,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// JSON payload of a [`ServiceError`]. The status travels in the HTTP response line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct ErrorBody {
    pub message: String,
    pub process: String,
    #[cfg_attr(feature = "utoipa", schema(value_type = Vec<Object>))]
    pub errors: Vec<serde_json::Value>,
}

impl ServiceError {
    /// Builds an error of `kind` using the kind's default status and process label.
    /// Kinds without a default label fall back to the generic `"Error"` label.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            process: kind.default_process().unwrap_or("Error").to_string(),
            status: kind.default_status(),
            errors: Vec::new(),
        }
    }

    /// Root error with an explicit process and status.
    pub fn base(message: impl Into<String>, process: impl Into<String>, status: StatusCode) -> Self {
        Self::new(ErrorKind::Base, message)
            .with_process(process)
            .with_status(status)
    }

    /// Business rule violation, `400 Bad Request` unless `status` says otherwise.
    pub fn business(
        message: impl Into<String>,
        process: impl Into<String>,
        status: Option<StatusCode>,
    ) -> Self {
        let error = Self::new(ErrorKind::Business, message).with_process(process);
        match status {
            Some(status) => error.with_status(status),
            None => error,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    #[must_use]
    pub fn with_process(mut self, process: impl Into<String>) -> Self {
        self.process = process.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_errors(mut self, errors: Vec<serde_json::Value>) -> Self {
        self.errors = errors;
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<serde_json::Value>) -> Self {
        self.errors.push(error.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn process(&self) -> &str {
        &self.process
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn errors(&self) -> &[serde_json::Value] {
        &self.errors
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            message: self.message.clone(),
            process: self.process.clone(),
            errors: self.errors.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.message,
            "process": self.process,
            "errors": self.errors,
        })
    }
}

impl From<ServiceError> for ErrorBody {
    fn from(error: ServiceError) -> Self {
        Self {
            message: error.message,
            process: error.process,
            errors: error.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_status_and_process_per_kind() {
        let cases = [
            (ServiceError::validation("x"), 400, "Validation Error"),
            (ServiceError::bad_request("x"), 400, "Bad Request"),
            (ServiceError::unauthorized("x"), 401, "Unauthorized"),
            (ServiceError::forbidden("x"), 403, "Forbidden"),
            (ServiceError::not_found("x"), 404, "Resource Not Found"),
            (ServiceError::conflict("x"), 409, "Resource Conflict"),
            (ServiceError::unprocessable_entity("x"), 422, "Unprocessable Entity"),
            (ServiceError::internal_server_error("x"), 500, "Internal Server Error"),
            (ServiceError::service_unavailable("x"), 503, "Service Unavailable"),
        ];
        for (error, status, process) in cases {
            assert_eq!(error.status().as_u16(), status);
            assert_eq!(error.process(), process);
            assert!(error.errors().is_empty());
        }
    }

    #[test]
    fn test_business_status_override() {
        let default = ServiceError::business("Insufficient balance", "withdraw", None);
        assert_eq!(default.kind(), ErrorKind::Business);
        assert_eq!(default.status(), StatusCode::BAD_REQUEST);
        assert_eq!(default.process(), "withdraw");

        let gone = ServiceError::business("Account closed", "withdraw", Some(StatusCode::GONE));
        assert_eq!(gone.status(), StatusCode::GONE);
    }

    #[test]
    fn test_base_error() {
        let error = ServiceError::base("boom", "sync-job", StatusCode::BAD_GATEWAY);
        assert_eq!(error.kind(), ErrorKind::Base);
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
        assert!(error.is_server_error());
        assert_eq!(error.to_string(), "sync-job: boom");
    }

    #[test]
    fn test_display_uses_process_and_message() {
        let error = ServiceError::conflict("email already used").with_process("create_user");
        assert_eq!(error.to_string(), "create_user: email already used");
    }

    #[test]
    fn test_to_json_omits_status() {
        let error = ServiceError::validation("invalid payload")
            .with_error(json!({"field": "email", "reason": "required"}))
            .with_error("name too long");

        assert_eq!(
            error.to_json(),
            json!({
                "message": "invalid payload",
                "process": "Validation Error",
                "errors": [{"field": "email", "reason": "required"}, "name too long"],
            })
        );
        assert_eq!(serde_json::to_value(error.to_body()).unwrap(), error.to_json());
    }

    #[test]
    fn test_with_errors_replaces_details() {
        let error = ServiceError::bad_request("bad")
            .with_error("first")
            .with_errors(vec![json!("second")]);
        assert_eq!(error.errors(), &[json!("second")]);
    }
}
