use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload embedded in API responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application error taxonomy.
///
/// Each variant carries a human-readable message plus structured details so
/// callers can render "not found" / "bad request" / "server error" classes
/// without parsing internal strings.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or absent submission payload. Caller must fix the input.
    Validation { message: String, details: Value },
    /// A referenced entity does not exist. Fatal for the current operation.
    NotFound { message: String, details: Value },
    /// Terminal business rejection (e.g. duplicate favorite/scrap).
    BadRequest { message: String, details: Value },
    /// Store uniqueness violation or an enabled invariant check failed.
    Conflict { message: String, details: Value },
    /// Store-level failure while inserting a relation record.
    RelationCreation { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn relation_creation(message: impl Into<String>, details: Value) -> Self {
        Self::RelationCreation {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::BadRequest { message, details } => {
                (StatusCode::BAD_REQUEST, "bad_request", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::RelationCreation { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "relation_creation_failed",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }

    /// Converts the error into its serializable payload form.
    pub fn to_error_info(self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    AppError::internal("Database error", json!({}))
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::validation(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                AppError::validation("v", json!({})),
                StatusCode::BAD_REQUEST,
                "validation_error",
            ),
            (
                AppError::not_found("n", json!({})),
                StatusCode::NOT_FOUND,
                "not_found",
            ),
            (
                AppError::bad_request("b", json!({})),
                StatusCode::BAD_REQUEST,
                "bad_request",
            ),
            (
                AppError::conflict("c", json!({})),
                StatusCode::CONFLICT,
                "conflict",
            ),
            (
                AppError::relation_creation("r", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
                "relation_creation_failed",
            ),
            (
                AppError::internal("i", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
            ),
        ];

        for (err, status, code) in cases {
            let (s, c, _, _) = err.parts();
            assert_eq!(s, status);
            assert_eq!(c, code);
        }
    }

    #[test]
    fn test_to_error_info_keeps_details() {
        let info = AppError::bad_request("Already scraped", json!({ "member_id": 1 }))
            .to_error_info();
        assert_eq!(info.code, "bad_request");
        assert_eq!(info.message, "Already scraped");
        assert_eq!(info.details["member_id"], 1);
    }

    #[test]
    fn test_sqlx_error_maps_to_internal() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
