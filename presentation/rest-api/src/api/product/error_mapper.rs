use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::NegativeQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.negative_quantity",
            ),
            ProductError::Repository(RepositoryError::Duplicated) => (
                StatusCode::CONFLICT,
                "Conflict",
                "repository.duplicated",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_negative_quantity_to_bad_request() {
        let (status, json) = ProductError::NegativeQuantity.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "product.negative_quantity");
    }

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = ProductError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.name, "NotFound");
    }

    #[test]
    fn should_map_duplicate_id_to_conflict() {
        let (status, _) =
            ProductError::Repository(RepositoryError::Duplicated).into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn should_hide_database_details() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
