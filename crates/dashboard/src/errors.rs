use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use seed_data::db::SeedError;
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Seed(#[from] SeedError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = match &self {
            AppError::Database(e) => {
                error!("Database error: {e}");
                "Internal server error".to_string()
            }
            // Seeding is an operator action; report the cause as-is.
            AppError::Seed(e) => {
                error!("Seed error: {e}");
                e.to_string()
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_seed_error_exposes_cause() {
        let err = AppError::Seed(SeedError::PasswordHash("bad salt".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Password hashing error: bad salt");
    }

    #[tokio::test]
    async fn test_database_error_is_generic() {
        let err = AppError::Database(sqlx::Error::RowNotFound);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }
}
