//! Event: a booking of a catalog service for a customer's vehicle.

use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Record};
use crate::error::{CarwashError, ValidationError};
use crate::id::{CustomerId, EventId, ServiceId, UserId};
use crate::time::parse_booking_time;

/// A booked wash.
///
/// `admin_id` points at the [`User`](crate::user::User) handling the
/// booking, not at an admin roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub customer_id: CustomerId,
    pub admin_id: UserId,
    pub service_id: ServiceId,
    pub vehicle: String,
    #[serde(rename = "date_time")]
    pub date_time: String,
    pub status: String,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub comments: String,
}

impl Event {
    /// Replace the status, leaving every other field untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::Validation`] when `status` is blank.
    pub fn set_status(&mut self, status: &str) -> Result<(), CarwashError> {
        self.status = validate_status(status)?;
        Ok(())
    }
}

impl Record for Event {
    type Id = EventId;
    const COLLECTION: Collection = Collection::Events;
    const LABEL: &'static str = "Evento";

    fn id(&self) -> EventId {
        self.id
    }
}

/// Booking payload, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub customer_id: CustomerId,
    pub admin_id: UserId,
    pub service_id: ServiceId,
    pub vehicle: String,
    pub date_time: String,
    pub status: String,
    pub comments: String,
}

impl NewEvent {
    /// # Errors
    ///
    /// Returns [`CarwashError::Validation`] when the vehicle or status is
    /// blank, or when `date_time` is not a recognisable date/time.
    pub fn validate(&self) -> Result<(), CarwashError> {
        if self.vehicle.trim().is_empty() {
            return Err(ValidationError::EmptyField("vehicle").into());
        }
        if self.date_time.trim().is_empty() {
            return Err(ValidationError::EmptyField("date_time").into());
        }
        if parse_booking_time(&self.date_time).is_none() {
            return Err(ValidationError::InvalidDateTime(self.date_time.clone()).into());
        }
        validate_status(&self.status)?;
        Ok(())
    }

    #[must_use]
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            customer_id: self.customer_id,
            admin_id: self.admin_id,
            service_id: self.service_id,
            vehicle: self.vehicle,
            date_time: self.date_time,
            status: self.status.trim().to_string(),
            comments: self.comments,
        }
    }
}

fn validate_status(status: &str) -> Result<String, CarwashError> {
    let status = status.trim();
    if status.is_empty() {
        return Err(ValidationError::EmptyField("status").into());
    }
    Ok(status.to_string())
}
