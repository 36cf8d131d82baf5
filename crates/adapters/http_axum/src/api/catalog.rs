//! JSON REST handler for the wash service catalog.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use carwash_app::ports::CollectionStore;
use carwash_domain::service::Service;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Service>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /services`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let services = state.catalog_service.list().await?;
    Ok(ListResponse::Ok(Json(services)))
}
