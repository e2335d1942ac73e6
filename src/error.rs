use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use diesel::result::DatabaseErrorKind;

use crate::protocol::ErrorResponse;

/// Error kinds every operation can surface. Domain-expected conditions keep
/// their message; anything unexpected collapses into `Internal` and only a
/// generic message leaves the server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Internal server error occurred")]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Error::Internal(err) = self {
            log::error!("internal fault: {:#}", err);
        }
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            status: status.as_u16(),
            message: self.to_string(),
        })
    }
}

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Error::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                // Constraint names and key values stay in the log only.
                log::warn!("unique violation: {}", info.message());
                Error::Conflict("Record already exists".to_string())
            }
            err => Error::Internal(err.into()),
        }
    }
}

impl From<r2d2::Error> for Error {
    fn from(err: r2d2::Error) -> Self {
        Error::Internal(anyhow::Error::new(err).context("DB connection"))
    }
}

impl From<BlockingError<Error>> for Error {
    fn from(err: BlockingError<Error>) -> Self {
        match err {
            BlockingError::Error(err) => err,
            BlockingError::Canceled => Error::Internal(anyhow::anyhow!("blocking task canceled")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            Error::BadRequest("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::Unauthorized("x".to_string()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            Error::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Conflict("x".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            Error::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_row_maps_to_not_found() {
        let err: Error = diesel::result::Error::NotFound.into();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn duplicate_key_maps_to_conflict_without_raw_detail() {
        let err: Error = diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("Duplicate entry '7' for key 'PRIMARY'".to_string()),
        )
        .into();
        match err {
            Error::Conflict(message) => assert_eq!(message, "Record already exists"),
            err => panic!("expected a conflict, got {:?}", err),
        }
    }

    #[test]
    fn internal_fault_message_stays_generic() {
        let err = Error::Internal(anyhow::anyhow!("password column dump"));
        assert_eq!(err.to_string(), "Internal server error occurred");
    }
}
