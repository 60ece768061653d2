use actix_web::HttpResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("duplicate data")]
    Conflict,

    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(entity: &'static str) -> Self {
        AppError::NotFound { entity }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => AppError::Conflict,
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Unavailable(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound { .. } => HttpResponse::NotFound().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Conflict => HttpResponse::Conflict().json(serde_json::json!({
                "error": "duplicate data"
            })),
            AppError::Unavailable(detail) => {
                log::error!("database unavailable: {}", detail);
                HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "error": "service unavailable"
                }))
            }
            AppError::Internal(detail) => {
                log::error!("internal error: {}", detail);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "internal server error"
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::not_found("product").error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_found_display_names_the_entity() {
        assert_eq!(
            AppError::not_found("client").to_string(),
            "client not found"
        );
    }

    #[test]
    fn conflict_returns_409() {
        let resp = AppError::Conflict.error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn unavailable_returns_503() {
        let resp = AppError::Unavailable("pool timed out".to_string()).error_response();
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let db_err = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value".to_string()),
        );
        let app_err: AppError = db_err.into();
        assert!(matches!(app_err, AppError::Conflict));
    }

    #[test]
    fn other_diesel_errors_map_to_internal() {
        let app_err: AppError = DieselError::NotFound.into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }
}
