//! Application services: use-case implementations.
//!
//! Each service struct is generic over the storage port and shares one
//! [`Store`](crate::store::Store) (constructor injection), keeping this layer
//! decoupled from concrete adapters.

pub mod catalog_service;
pub mod customer_service;
pub mod event_service;
pub mod product_service;
pub mod user_service;
