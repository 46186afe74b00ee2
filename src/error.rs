use std::error::Error as _;

use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::db::DbError;

/// Failures surfaced by the handlers.
///
/// Each route has its own fixed message. The cause is logged and never sent
/// back to the client.
#[derive(Error, Debug)]
pub(crate) enum ApiError {
    #[error("Error retrieving restaurants from database")]
    LegacyRestaurants(#[source] DbError),

    #[error("Error retrieving restaurants")]
    Restaurants(#[source] DbError),

    #[error("Error retrieving restaurant")]
    Restaurant(#[source] DbError),

    #[error("Restaurant not found")]
    RestaurantNotFound,

    #[error("Error creating user")]
    CreateUser(#[source] DbError),

    #[error("Error updating allergies")]
    UpdateAllergies(#[source] DbError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::RestaurantNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Some(cause) = self.source() {
            log::error!("{self}: {cause}");
        }

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
