//! JSON REST handlers for the product inventory.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use carwash_app::ports::CollectionStore;
use carwash_domain::id::ProductId;
use carwash_domain::product::{Product, ProductDraft};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a product.
#[derive(Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
    #[serde(default, deserialize_with = "carwash_domain::text::or_empty")]
    pub description: String,
    #[serde(default)]
    pub stock: u32,
}

impl From<ProductRequest> for ProductDraft {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            description: req.description,
            stock: req.stock,
        }
    }
}

#[derive(Serialize)]
pub struct DeletedBody {
    pub message: &'static str,
    pub product: Product,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Product>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and replace endpoints.
pub enum GetResponse {
    Ok(Json<Product>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Product>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<DeletedBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /products`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let products = state.product_service.list().await?;
    Ok(ListResponse::Ok(Json(products)))
}

/// `GET /products/:id`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let product_id: ProductId = parse_id(&id)?;
    let product = state.product_service.get(product_id).await?;
    Ok(GetResponse::Ok(Json(product)))
}

/// `POST /products`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<ProductRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let product = state.product_service.create(req.into()).await?;
    Ok(CreateResponse::Created(Json(product)))
}

/// `PUT /products/:id`: full replace.
pub async fn replace<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(req): Json<ProductRequest>,
) -> Result<GetResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let product_id: ProductId = parse_id(&id)?;
    let product = state.product_service.replace(product_id, req.into()).await?;
    Ok(GetResponse::Ok(Json(product)))
}

/// `DELETE /products/:id`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let product_id: ProductId = parse_id(&id)?;
    let product = state.product_service.delete(product_id).await?;
    Ok(DeleteResponse::Ok(Json(DeletedBody {
        message: "Producto eliminado",
        product,
    })))
}
