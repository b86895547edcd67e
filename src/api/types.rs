use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::pet::PetError;

#[derive(Deserialize, Default)]
pub struct ActionRequest {
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn from_pet(err: &PetError, locale: Locale) -> Self {
        match err {
            PetError::UnknownAction(_) => Self {
                status: StatusCode::BAD_REQUEST,
                message: locale.unknown_action().to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
