//! # carwash-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage port** ([`ports::CollectionStore`]) that adapters
//!   implement: whole-collection load and save
//! - Provide the generic [`store::Store`]: find-by-id, append, update and
//!   delete on top of the port, with one exclusive scope per collection so
//!   read-modify-write cycles never lose updates
//! - Define **use-case services**:
//!   - `UserService`: register, login, list admins
//!   - `CustomerService`: profiles and the customer list view
//!   - `CatalogService`: wash service catalog
//!   - `EventService`: bookings, status changes, booking views
//!   - `ProductService`: inventory CRUD
//!
//! ## Dependency rule
//! Depends on `carwash-domain` only (plus `tokio::sync` for locks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod store;

#[cfg(test)]
mod test_support;
