//! Counters for the dashboard header.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use carwash_app::ports::CollectionStore;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CustomerTotal {
    pub total_customers: usize,
}

#[derive(Serialize)]
pub struct ServiceTotal {
    pub total_services: usize,
}

/// `GET /total/customers`
pub async fn customers<S>(State(state): State<AppState<S>>) -> Result<Json<CustomerTotal>, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let total_customers = state.customer_service.count().await?;
    Ok(Json(CustomerTotal { total_customers }))
}

/// `GET /total/services`
pub async fn services<S>(State(state): State<AppState<S>>) -> Result<Json<ServiceTotal>, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let total_services = state.catalog_service.count().await?;
    Ok(Json(ServiceTotal { total_services }))
}
