//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod catalog;
#[allow(clippy::missing_errors_doc)]
pub mod customers;
#[allow(clippy::missing_errors_doc)]
pub mod events;
#[allow(clippy::missing_errors_doc)]
pub mod products;
#[allow(clippy::missing_errors_doc)]
pub mod totals;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, post, put};

use carwash_app::ports::CollectionStore;
use carwash_domain::error::{CarwashError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the API router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: CollectionStore + Send + Sync + 'static,
{
    Router::new()
        // Users
        .route("/register", post(users::register::<S>))
        .route("/login", post(users::login::<S>))
        .route("/admins", get(users::admins::<S>))
        // Customers
        .route(
            "/customers",
            get(customers::list::<S>).post(customers::create::<S>),
        )
        .route(
            "/customers/{customer_id}/events",
            get(events::customer_events::<S>),
        )
        // Catalog
        .route("/services", get(catalog::list::<S>))
        // Events
        .route("/events", post(events::create::<S>))
        .route("/events/{id}/status", put(events::update_status::<S>))
        .route("/admin/events", get(events::admin_list::<S>))
        .route("/admin/events/{id}", get(events::admin_get::<S>))
        // Products
        .route(
            "/products",
            get(products::list::<S>).post(products::create::<S>),
        )
        .route(
            "/products/{id}",
            get(products::get::<S>)
                .put(products::replace::<S>)
                .delete(products::delete::<S>),
        )
        // Totals
        .route("/total/customers", get(totals::customers::<S>))
        .route("/total/services", get(totals::services::<S>))
}

/// Parse a numeric path id, reporting the raw text on failure.
pub(crate) fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::from(CarwashError::from(ValidationError::InvalidId(
            raw.to_string(),
        )))
    })
}
