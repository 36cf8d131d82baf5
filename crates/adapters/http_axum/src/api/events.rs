//! JSON REST handlers for bookings.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use carwash_app::ports::CollectionStore;
use carwash_domain::event::{Event, NewEvent};
use carwash_domain::id::{CustomerId, EventId, ServiceId, UserId};
use carwash_domain::view::{AdminEventDetail, AdminEventView, CustomerEventView};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for booking a service.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub customer_id: CustomerId,
    pub admin_id: UserId,
    pub service_id: ServiceId,
    pub vehicle: String,
    #[serde(rename = "date_time")]
    pub date_time: String,
    pub status: String,
    #[serde(default, deserialize_with = "carwash_domain::text::or_empty")]
    pub comments: String,
}

/// Request body for changing a booking's status.
#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Serialize)]
pub struct CreatedBody {
    pub id: EventId,
}

#[derive(Serialize)]
pub struct StatusUpdatedBody {
    pub message: &'static str,
    pub event: Event,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreatedBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the status endpoint.
pub enum UpdateStatusResponse {
    Ok(Json<StatusUpdatedBody>),
}

impl IntoResponse for UpdateStatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the customer events endpoint.
pub enum CustomerEventsResponse {
    Ok(Json<Vec<CustomerEventView>>),
}

impl IntoResponse for CustomerEventsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the admin board endpoint.
pub enum AdminListResponse {
    Ok(Json<Vec<AdminEventView>>),
}

impl IntoResponse for AdminListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the admin detail endpoint.
pub enum AdminGetResponse {
    Ok(Json<AdminEventDetail>),
}

impl IntoResponse for AdminGetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /events`: book a service.
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateEventRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let event = state
        .event_service
        .book(NewEvent {
            customer_id: req.customer_id,
            admin_id: req.admin_id,
            service_id: req.service_id,
            vehicle: req.vehicle,
            date_time: req.date_time,
            status: req.status,
            comments: req.comments,
        })
        .await?;
    Ok(CreateResponse::Created(Json(CreatedBody { id: event.id })))
}

/// `PUT /events/:id/status`
pub async fn update_status<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<UpdateStatusResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let event_id: EventId = parse_id(&id)?;
    let event = state
        .event_service
        .update_status(event_id, req.status)
        .await?;
    Ok(UpdateStatusResponse::Ok(Json(StatusUpdatedBody {
        message: "Estado actualizado",
        event,
    })))
}

/// `GET /customers/:customer_id/events`
pub async fn customer_events<S>(
    State(state): State<AppState<S>>,
    Path(customer_id): Path<String>,
) -> Result<CustomerEventsResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let customer_id: CustomerId = parse_id(&customer_id)?;
    let events = state.event_service.customer_events(customer_id).await?;
    Ok(CustomerEventsResponse::Ok(Json(events)))
}

/// `GET /admin/events`: the whole booking board.
pub async fn admin_list<S>(State(state): State<AppState<S>>) -> Result<AdminListResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let events = state.event_service.admin_events().await?;
    Ok(AdminListResponse::Ok(Json(events)))
}

/// `GET /admin/events/:id`
pub async fn admin_get<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<AdminGetResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let event_id: EventId = parse_id(&id)?;
    let detail = state.event_service.admin_event(event_id).await?;
    Ok(AdminGetResponse::Ok(Json(detail)))
}
