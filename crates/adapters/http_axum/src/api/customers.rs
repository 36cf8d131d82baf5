//! JSON REST handlers for customer profiles.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use carwash_app::ports::CollectionStore;
use carwash_domain::customer::{Customer, NewCustomer};
use carwash_domain::id::UserId;
use carwash_domain::view::CustomerView;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for completing a customer profile.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub user_id: UserId,
    pub address: String,
    pub phone: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CustomerView>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Customer>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /customers`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let customers = state.customer_service.list_views().await?;
    Ok(ListResponse::Ok(Json(customers)))
}

/// `POST /customers`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let customer = state
        .customer_service
        .create(NewCustomer {
            user_id: req.user_id,
            address: req.address,
            phone: req.phone,
        })
        .await?;
    Ok(CreateResponse::Created(Json(customer)))
}
