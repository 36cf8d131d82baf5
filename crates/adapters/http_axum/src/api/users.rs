//! JSON REST handlers for registration, login and the admin list.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use carwash_app::ports::CollectionStore;
use carwash_domain::user::{Credentials, NewUser, PublicUser, Role};
use carwash_domain::view::AdminView;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a user.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Request body for logging in.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login body.
#[derive(Serialize)]
pub struct LoginBody {
    pub message: &'static str,
    pub user: PublicUser,
}

/// Possible responses from the register endpoint.
pub enum RegisterResponse {
    Created(Json<PublicUser>),
}

impl IntoResponse for RegisterResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the login endpoint.
pub enum LoginResponse {
    Ok(Json<LoginBody>),
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the admins endpoint.
pub enum AdminsResponse {
    Ok(Json<Vec<AdminView>>),
}

impl IntoResponse for AdminsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /register`
pub async fn register<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<RegisterRequest>,
) -> Result<RegisterResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let user = state
        .user_service
        .register(NewUser {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
        })
        .await?;
    Ok(RegisterResponse::Created(Json(user)))
}

/// `POST /login`
pub async fn login<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<LoginRequest>,
) -> Result<LoginResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let user = state
        .user_service
        .login(Credentials {
            email: req.email,
            password: req.password,
        })
        .await?;
    Ok(LoginResponse::Ok(Json(LoginBody {
        message: "Login exitoso",
        user,
    })))
}

/// `GET /admins`
pub async fn admins<S>(State(state): State<AppState<S>>) -> Result<AdminsResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let admins = state.user_service.list_admins().await?;
    Ok(AdminsResponse::Ok(Json(admins)))
}
