//! Event service: bookings and the views built from them.

use std::sync::Arc;

use carwash_domain::customer::Customer;
use carwash_domain::error::CarwashError;
use carwash_domain::event::{Event, NewEvent};
use carwash_domain::id::{CustomerId, EventId};
use carwash_domain::service::Service;
use carwash_domain::user::User;
use carwash_domain::view::{AdminEventDetail, AdminEventView, CustomerEventView, Directory};

use crate::ports::CollectionStore;
use crate::store::Store;

/// Collections an event view is resolved against.
struct Lookups {
    users: Vec<User>,
    customers: Vec<Customer>,
    services: Vec<Service>,
}

impl Lookups {
    fn directory(&self) -> Directory<'_> {
        Directory {
            users: &self.users,
            customers: &self.customers,
            services: &self.services,
        }
    }
}

/// Application service for bookings.
pub struct EventService<S> {
    store: Arc<Store<S>>,
}

impl<S> EventService<S>
where
    S: CollectionStore + Send + Sync,
{
    /// Create a new service backed by the given store.
    pub fn new(store: Arc<Store<S>>) -> Self {
        Self { store }
    }

    /// Book a service. Referenced customer, admin and service are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::Validation`] if the payload is invalid, or a
    /// storage error.
    #[tracing::instrument(skip(self, new_event), fields(customer_id = %new_event.customer_id))]
    pub async fn book(&self, new_event: NewEvent) -> Result<Event, CarwashError> {
        new_event.validate()?;
        let event = self
            .store
            .append::<Event, _>(move |_, id| Ok(new_event.into_event(id)))
            .await?;
        tracing::info!(event_id = %event.id, "booking created");
        Ok(event)
    }

    /// Change only the status of a booking.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::NotFound`] if the booking does not exist,
    /// [`CarwashError::Validation`] for a blank status, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(&self, id: EventId, status: String) -> Result<Event, CarwashError> {
        self.store
            .update::<Event, _>(id, move |event| event.set_status(&status))
            .await
    }

    /// Bookings of one customer with names resolved.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn customer_events(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<CustomerEventView>, CarwashError> {
        let (events, lookups) = tokio::try_join!(self.store.get_all::<Event>(), self.lookups())?;
        Ok(lookups.directory().customer_events(&events, customer_id))
    }

    /// Every booking with names resolved.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn admin_events(&self) -> Result<Vec<AdminEventView>, CarwashError> {
        let (events, lookups) = tokio::try_join!(self.store.get_all::<Event>(), self.lookups())?;
        Ok(lookups.directory().admin_events(&events))
    }

    /// One booking with names resolved and the vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::NotFound`] if the booking does not exist, or a
    /// storage error.
    pub async fn admin_event(&self, id: EventId) -> Result<AdminEventDetail, CarwashError> {
        let event = self.store.get::<Event>(id).await?;
        let lookups = self.lookups().await?;
        Ok(lookups.directory().admin_event_detail(&event))
    }

    async fn lookups(&self) -> Result<Lookups, CarwashError> {
        let (users, customers, services) = tokio::try_join!(
            self.store.get_all::<User>(),
            self.store.get_all::<Customer>(),
            self.store.get_all::<Service>()
        )?;
        Ok(Lookups {
            users,
            customers,
            services,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeStore;
    use carwash_domain::error::ValidationError;
    use carwash_domain::id::{ServiceId, UserId};
    use carwash_domain::user::Role;
    use carwash_domain::view::placeholder;

    fn make_service() -> EventService<FakeStore> {
        let store = Arc::new(Store::new(FakeStore::default()));
        store.backend().seed(vec![
            User {
                id: UserId::new(1),
                name: "Ana".to_string(),
                email: "a@x.com".to_string(),
                password: "p".to_string(),
                role: Role::Customer,
            },
            User {
                id: UserId::new(2),
                name: "Beto".to_string(),
                email: "b@x.com".to_string(),
                password: "p".to_string(),
                role: Role::Admin,
            },
        ]);
        store.backend().seed(vec![Customer {
            id: CustomerId::new(1),
            user_id: UserId::new(1),
            address: "Calle 1".to_string(),
            phone: "555-1".to_string(),
        }]);
        store.backend().seed(vec![Service {
            id: ServiceId::new(1),
            name: "Lavado completo".to_string(),
            extra: serde_json::Map::new(),
        }]);
        EventService::new(store)
    }

    fn booking(customer_id: u64, service_id: u64) -> NewEvent {
        NewEvent {
            customer_id: CustomerId::new(customer_id),
            admin_id: UserId::new(2),
            service_id: ServiceId::new(service_id),
            vehicle: "ABC-123".to_string(),
            date_time: "2024-05-01T10:00".to_string(),
            status: "pendiente".to_string(),
            comments: "sin cera".to_string(),
        }
    }

    #[tokio::test]
    async fn should_book_with_sequential_ids() {
        let svc = make_service();
        let first = svc.book(booking(1, 1)).await.unwrap();
        let second = svc.book(booking(1, 1)).await.unwrap();
        assert_eq!(first.id, EventId::new(1));
        assert_eq!(second.id, EventId::new(2));
    }

    #[tokio::test]
    async fn should_reject_booking_without_vehicle() {
        let svc = make_service();
        let mut draft = booking(1, 1);
        draft.vehicle = " ".to_string();
        let result = svc.book(draft).await;
        assert!(matches!(
            result,
            Err(CarwashError::Validation(ValidationError::EmptyField("vehicle")))
        ));
    }

    #[tokio::test]
    async fn should_update_only_status() {
        let svc = make_service();
        let booked = svc.book(booking(1, 1)).await.unwrap();

        let updated = svc
            .update_status(booked.id, "completado".to_string())
            .await
            .unwrap();
        assert_eq!(updated.status, "completado");

        let mut expected = booked;
        expected.status = "completado".to_string();
        assert_eq!(updated, expected);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_event() {
        let svc = make_service();
        let result = svc
            .update_status(EventId::new(99), "completado".to_string())
            .await;
        assert!(matches!(result, Err(CarwashError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_filter_customer_events() {
        let svc = make_service();
        svc.book(booking(1, 1)).await.unwrap();
        svc.book(booking(2, 1)).await.unwrap();
        svc.book(booking(1, 7)).await.unwrap();

        let views = svc.customer_events(CustomerId::new(1)).await.unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].customer, "Ana");
        assert_eq!(views[0].admin, "Beto");
        assert_eq!(views[0].service, "Lavado completo");
        assert_eq!(views[1].service, placeholder::SERVICE);
    }

    #[tokio::test]
    async fn should_fall_back_for_unknown_customer_on_admin_board() {
        let svc = make_service();
        svc.book(booking(5, 1)).await.unwrap();

        let board = svc.admin_events().await.unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].customer, placeholder::CUSTOMER);
        assert_eq!(board[0].phone, placeholder::PHONE);
    }

    #[tokio::test]
    async fn should_include_vehicle_in_detail() {
        let svc = make_service();
        let booked = svc.book(booking(1, 1)).await.unwrap();

        let detail = svc.admin_event(booked.id).await.unwrap();
        assert_eq!(detail.vehicle, "ABC-123");
        assert_eq!(detail.summary.phone, "555-1");
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_detail() {
        let svc = make_service();
        let result = svc.admin_event(EventId::new(3)).await;
        assert!(matches!(result, Err(CarwashError::NotFound(_))));
    }
}
