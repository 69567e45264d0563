//! HTTP Error Mapping - ServiceError to Status Codes
//!
//! NotFound becomes a real 404 and validation failures a 400, each
//! with a JSON body `{"error", "code"}` the front-end can branch on.
//! Store failures are logged server-side and surfaced as an opaque 500.
//!
//! `ApiJson` replaces the stock `Json` extractor for request bodies:
//! a body that fails to parse (malformed JSON, missing required key,
//! wrong type) is a validation failure here too, so it answers with
//! the same 400 JSON shape instead of axum's plain-text 422.

use axum::Json;
use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::usecases::ServiceError;

/// Everything a handler can fail with, mapped to a status code.
#[derive(Debug)]
pub enum ApiError {
    /// A service operation failed.
    Service(ServiceError),
    /// The request body never parsed into the draft shape.
    MalformedBody(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl ApiError {
    /// Status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::Validation(_)) | Self::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(ServiceError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Service(err @ ServiceError::NotFound { .. }) => ErrorBody {
                error: err.to_string(),
                code: "NOT_FOUND",
            },
            Self::Service(err @ ServiceError::Validation(_)) => ErrorBody {
                error: err.to_string(),
                code: "VALIDATION_ERROR",
            },
            Self::Service(ServiceError::Store(e)) => {
                error!(error = %e, "Store failure");
                ErrorBody {
                    error: "Internal server error".to_string(),
                    code: "INTERNAL_ERROR",
                }
            }
            Self::MalformedBody(message) => ErrorBody {
                error: message.clone(),
                code: "VALIDATION_ERROR",
            },
        };
        (status, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejection speaks the API's error contract.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(malformed(&rejection)),
        }
    }
}

fn malformed(rejection: &JsonRejection) -> ApiError {
    ApiError::MalformedBody(rejection.body_text())
}
