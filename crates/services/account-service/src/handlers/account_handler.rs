//! Sign-up and login handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{LoginCommand, LoginResponse, SignUpCommand, SignUpResponse};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Sign-up request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Email address, unique per account
    // Format is checked by the domain when the command runs
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "test@example.com")]
    pub email: String,
    /// Raw password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "password123", min_length = 8)]
    pub password: String,
    #[validate(length(min = 1, message = "Country is required"))]
    #[schema(example = "Korea")]
    pub country: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    #[schema(example = "010-1234-5678")]
    pub phone_number: String,
}

impl From<SignUpRequest> for SignUpCommand {
    fn from(req: SignUpRequest) -> Self {
        SignUpCommand::new(req.email, req.password, req.country, req.phone_number)
    }
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "test@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

impl From<LoginRequest> for LoginCommand {
    fn from(req: LoginRequest) -> Self {
        LoginCommand::new(req.email, req.password)
    }
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/login", post(login))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/users/signup",
    tag = "Accounts",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created", body = SignUpResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignUpRequest>,
) -> AppResult<(StatusCode, Json<SignUpResponse>)> {
    let response = state.user_service.sign_up(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Check credentials
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "Accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Email or password is incorrect")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state.user_service.login(payload.into()).await?;
    Ok(Json(response))
}
