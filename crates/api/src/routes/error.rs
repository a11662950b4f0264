use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::service;

/// Wire shape of every non-success response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Error half of every handler's return type; serializes as
/// `{"error": <message>}` with the mapped status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<service::Error> for ApiError {
    fn from(err: service::Error) -> Self {
        match &err {
            // User errors surface with their message, never as a 5xx
            service::Error::InvalidDate(_) | service::Error::EmptyDataset => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            service::Error::Date(_) | service::Error::Store(_) => {
                error!("error handling request: {}", err);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "internal server error".to_owned(),
                }
            }
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
