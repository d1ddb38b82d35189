use axum::{
    extract::{FromRequest, Request, State, rejection::JsonRejection},
    middleware::Next,
    response::{IntoResponse, Response},
};
use error_stack::Report;
use model::AccessToken;
use serde::Serialize;
use simple_backend_config::RUNNING_IN_DEBUG_MODE;
use utoipa::{
    Modify,
    openapi::security::{ApiKeyValue, SecurityScheme},
};

use crate::{DataError, app::GetAccessTokens, result::WrappedReport};

pub const ACCESS_TOKEN_HEADER_STR: &str = AccessToken::HEADER_NAME;

/// Middleware for authenticating requests with access tokens.
///
/// Adds `User` extension to request, so that adding
/// "Extension(api_caller): Extension<User>"
/// to handlers is possible.
pub async fn authenticate_with_access_token<S: GetAccessTokens>(
    State(state): State<S>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let header = req
        .headers()
        .get(ACCESS_TOKEN_HEADER_STR)
        .ok_or(StatusCode::BAD_REQUEST)?;
    let key_str = header.to_str().map_err(|_| StatusCode::BAD_REQUEST)?;
    let key = AccessToken::new(key_str.to_string());

    if let Some(user) = state.access_token_exists(&key).await? {
        req.extensions_mut().insert(user);
        Ok(next.run(req).await)
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

/// Utoipa API doc security config
pub struct SecurityApiAccessTokenDefault;

impl Modify for SecurityApiAccessTokenDefault {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "access_token",
            SecurityScheme::ApiKey(utoipa::openapi::security::ApiKey::Header(
                ApiKeyValue::new(ACCESS_TOKEN_HEADER_STR),
            )),
        )
    }
}

// Prevent axum from exposing API details in errors when not running in
// debug mode.

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[derive(Debug)]
pub struct ApiError {
    status: http::StatusCode,
    message: String,
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self {
            status: value.status(),
            message: value.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let json_error = if RUNNING_IN_DEBUG_MODE.value() {
            serde_json::json!({
                "status": self.status.as_u16(),
                "status_message": self.status.to_string(),
                "message": self.message,
            })
        } else {
            serde_json::json!({
                "status": self.status.as_u16(),
            })
        };

        (self.status, axum::Json(json_error)).into_response()
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 400
    BAD_REQUEST,
    /// 401
    UNAUTHORIZED,
    /// 500
    INTERNAL_SERVER_ERROR,
    /// 404
    NOT_FOUND,
}

impl From<StatusCode> for http::StatusCode {
    fn from(value: StatusCode) -> Self {
        match value {
            StatusCode::BAD_REQUEST => http::StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED => http::StatusCode::UNAUTHORIZED,
            StatusCode::INTERNAL_SERVER_ERROR => http::StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::NOT_FOUND => http::StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        let status: http::StatusCode = self.into();
        status.into_response()
    }
}

#[derive(thiserror::Error, Debug)]
enum RequestError {
    #[error("Data reading or writing failed")]
    Data,
}

/// Convert error to status code. This is workaround for track_caller seems
/// to not work when converting using Into::into. Early return with ? seems
/// to have the correct caller location. This fixes error location printed
/// from db_write macro.
pub trait ConvertDataErrorToStatusCode<Ok> {
    #[track_caller]
    fn convert_data_error_to_status_code(self) -> std::result::Result<Ok, StatusCode>;
}

impl<Ok> ConvertDataErrorToStatusCode<Ok>
    for std::result::Result<Ok, WrappedReport<Report<DataError>>>
{
    #[track_caller]
    fn convert_data_error_to_status_code(self) -> std::result::Result<Ok, StatusCode> {
        self.map_err(data_error_to_status_code)
    }
}

impl From<WrappedReport<Report<DataError>>> for StatusCode {
    #[track_caller]
    fn from(value: WrappedReport<Report<DataError>>) -> Self {
        data_error_to_status_code(value)
    }
}

/// Client errors are returned without logging. Other errors are logged
/// and hidden behind status 500.
#[track_caller]
fn data_error_to_status_code(error: WrappedReport<Report<DataError>>) -> StatusCode {
    match error.current_context() {
        DataError::NotFound => StatusCode::NOT_FOUND,
        DataError::NotAllowed | DataError::InvalidInput | DataError::ReferenceNotFound => {
            tracing::debug!("{:?}", error);
            StatusCode::BAD_REQUEST
        }
        DataError::Diesel | DataError::Init => {
            tracing::error!("{:?}", error.change_context(RequestError::Data));
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
