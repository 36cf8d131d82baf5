//! # carwash-domain
//!
//! Pure domain model for the carwash booking backend.
//!
//! ## Responsibilities
//! - Foundational types: typed integer identifiers, error conventions,
//!   booking date/time parsing
//! - The [`collection::Record`] abstraction tying each record type to the
//!   collection it is persisted in
//! - Records: users, customers, admin roster, service catalog, booking
//!   events, products
//! - Payload validation for everything that can be created or changed
//! - Join views ([`view`]) assembled from several collections
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod collection;
pub mod error;
pub mod id;
pub mod text;
pub mod time;

pub mod admin;
pub mod customer;
pub mod event;
pub mod product;
pub mod service;
pub mod user;
pub mod view;
