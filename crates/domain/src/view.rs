//! Join views: response shapes assembled from several collections.
//!
//! Every foreign key is resolved through [`Lookup`], so a dangling reference
//! never aborts a request. Views that extend a record with looked-up fields
//! emit `null` for them; views that replace ids with labels use the
//! placeholders in [`placeholder`].

pub mod lookup;

use serde::Serialize;

pub use lookup::{Lookup, lookup};

use crate::admin::Admin;
use crate::customer::Customer;
use crate::event::Event;
use crate::id::{CustomerId, EventId, UserId};
use crate::service::Service;
use crate::user::User;

/// Labels used when a join target does not exist.
pub mod placeholder {
    pub const CUSTOMER: &str = "Cliente no encontrado";
    pub const ADMIN: &str = "Admin no encontrado";
    pub const SERVICE: &str = "Servicio no disponible";
    pub const PHONE: &str = "No disponible";
}

/// A customer joined to its owning user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: CustomerId,
    pub user_id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: String,
    pub phone: String,
}

/// An admin as listed by `/admins`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminView {
    pub user_id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub active: bool,
}

/// A booking as seen by the customer who made it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerEventView {
    pub id: EventId,
    pub customer: String,
    pub admin: String,
    pub service: String,
    pub date_time: String,
    pub status: String,
    pub comments: String,
}

/// A booking as listed on the admin board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminEventView {
    pub id: EventId,
    pub customer: String,
    pub phone: String,
    pub service: String,
    pub admin: String,
    pub date_time: String,
    pub status: String,
    pub comments: String,
}

/// [`AdminEventView`] plus the vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminEventDetail {
    #[serde(flatten)]
    pub summary: AdminEventView,
    pub vehicle: String,
}

/// Join each customer to its user; missing users yield `null` name/email.
#[must_use]
pub fn customer_views(customers: &[Customer], users: &[User]) -> Vec<CustomerView> {
    customers
        .iter()
        .map(|customer| {
            let user = lookup(users, customer.user_id);
            CustomerView {
                id: customer.id,
                user_id: customer.user_id,
                name: user.field(|u| u.name.clone()),
                email: user.field(|u| u.email.clone()),
                address: customer.address.clone(),
                phone: customer.phone.clone(),
            }
        })
        .collect()
}

/// Every user holding the admin role.
#[must_use]
pub fn admin_views_by_role(users: &[User]) -> Vec<AdminView> {
    users
        .iter()
        .filter(|user| user.is_admin())
        .map(|user| AdminView {
            user_id: user.id,
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            active: true,
        })
        .collect()
}

/// Active roster entries joined to their users.
#[must_use]
pub fn admin_views_from_roster(admins: &[Admin], users: &[User]) -> Vec<AdminView> {
    admins
        .iter()
        .filter(|admin| admin.status)
        .map(|admin| {
            let user = lookup(users, admin.user_id);
            AdminView {
                user_id: admin.user_id,
                name: user.field(|u| u.name.clone()),
                email: user.field(|u| u.email.clone()),
                active: admin.status,
            }
        })
        .collect()
}

/// Borrowed collections that event views are resolved against.
#[derive(Debug, Clone, Copy)]
pub struct Directory<'a> {
    pub users: &'a [User],
    pub customers: &'a [Customer],
    pub services: &'a [Service],
}

impl<'a> Directory<'a> {
    fn customer(&self, id: CustomerId) -> Lookup<'a, Customer> {
        lookup(self.customers, id)
    }

    fn customer_user(&self, customer: Lookup<'a, Customer>) -> Lookup<'a, User> {
        let users = self.users;
        customer.and_then(|c| lookup(users, c.user_id))
    }

    fn admin_name(&self, event: &Event) -> String {
        lookup(self.users, event.admin_id).label_or(|u| &u.name, placeholder::ADMIN)
    }

    fn service_name(&self, event: &Event) -> String {
        lookup(self.services, event.service_id).label_or(|s| &s.name, placeholder::SERVICE)
    }

    /// Bookings of one customer, in storage order.
    #[must_use]
    pub fn customer_events(
        &self,
        events: &[Event],
        customer_id: CustomerId,
    ) -> Vec<CustomerEventView> {
        let customer_name = self
            .customer_user(self.customer(customer_id))
            .label_or(|u| &u.name, placeholder::CUSTOMER);

        events
            .iter()
            .filter(|event| event.customer_id == customer_id)
            .map(|event| CustomerEventView {
                id: event.id,
                customer: customer_name.clone(),
                admin: self.admin_name(event),
                service: self.service_name(event),
                date_time: event.date_time.clone(),
                status: event.status.clone(),
                comments: event.comments.clone(),
            })
            .collect()
    }

    /// One board row.
    #[must_use]
    pub fn admin_event(&self, event: &Event) -> AdminEventView {
        let customer = self.customer(event.customer_id);
        let phone = match customer {
            Lookup::Found(c) => c.phone.clone(),
            Lookup::Missing => placeholder::PHONE.to_string(),
        };

        AdminEventView {
            id: event.id,
            customer: self
                .customer_user(customer)
                .label_or(|u| &u.name, placeholder::CUSTOMER),
            phone,
            service: self.service_name(event),
            admin: self.admin_name(event),
            date_time: event.date_time.clone(),
            status: event.status.clone(),
            comments: event.comments.clone(),
        }
    }

    /// The whole board, in storage order.
    #[must_use]
    pub fn admin_events(&self, events: &[Event]) -> Vec<AdminEventView> {
        events.iter().map(|event| self.admin_event(event)).collect()
    }

    #[must_use]
    pub fn admin_event_detail(&self, event: &Event) -> AdminEventDetail {
        AdminEventDetail {
            summary: self.admin_event(event),
            vehicle: event.vehicle.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{AdminId, ServiceId};
    use crate::user::Role;

    fn user(id: u64, name: &str, role: Role) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            password: "secret".to_string(),
            role,
        }
    }

    fn customer(id: u64, user_id: u64) -> Customer {
        Customer {
            id: CustomerId::new(id),
            user_id: UserId::new(user_id),
            address: "Calle 1".to_string(),
            phone: format!("555-{id}"),
        }
    }

    fn service(id: u64, name: &str) -> Service {
        Service {
            id: ServiceId::new(id),
            name: name.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    fn event(id: u64, customer_id: u64, admin_id: u64, service_id: u64) -> Event {
        Event {
            id: EventId::new(id),
            customer_id: CustomerId::new(customer_id),
            admin_id: UserId::new(admin_id),
            service_id: ServiceId::new(service_id),
            vehicle: "ABC-123".to_string(),
            date_time: "2024-05-01T10:00".to_string(),
            status: "pendiente".to_string(),
            comments: "sin cera".to_string(),
        }
    }

    struct Fixture {
        users: Vec<User>,
        customers: Vec<Customer>,
        services: Vec<Service>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                users: vec![user(1, "Ana", Role::Customer), user(2, "Beto", Role::Admin)],
                customers: vec![customer(1, 1), customer(2, 99)],
                services: vec![service(1, "Lavado completo")],
            }
        }

        fn directory(&self) -> Directory<'_> {
            Directory {
                users: &self.users,
                customers: &self.customers,
                services: &self.services,
            }
        }
    }

    #[test]
    fn should_join_customer_to_user_name_and_email() {
        let fx = Fixture::new();
        let views = customer_views(&fx.customers, &fx.users);
        assert_eq!(views[0].name.as_deref(), Some("Ana"));
        assert_eq!(views[0].email.as_deref(), Some("ana@x.com"));
    }

    #[test]
    fn should_emit_null_name_when_customer_user_is_missing() {
        let fx = Fixture::new();
        let views = customer_views(&fx.customers, &fx.users);
        assert_eq!(views[1].name, None);
        assert_eq!(views[1].email, None);

        let json = serde_json::to_value(&views[1]).unwrap();
        assert!(json["name"].is_null());
        assert_eq!(json["userId"], 99);
    }

    #[test]
    fn should_list_only_admin_role_users() {
        let fx = Fixture::new();
        let admins = admin_views_by_role(&fx.users);
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].user_id, UserId::new(2));
        let json = serde_json::to_value(&admins[0]).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn should_list_only_active_roster_entries() {
        let fx = Fixture::new();
        let roster = vec![
            Admin {
                id: AdminId::new(1),
                user_id: UserId::new(2),
                status: true,
            },
            Admin {
                id: AdminId::new(2),
                user_id: UserId::new(1),
                status: false,
            },
            Admin {
                id: AdminId::new(3),
                user_id: UserId::new(50),
                status: true,
            },
        ];
        let admins = admin_views_from_roster(&roster, &fx.users);
        assert_eq!(admins.len(), 2);
        assert_eq!(admins[0].name.as_deref(), Some("Beto"));
        assert_eq!(admins[1].name, None);
    }

    #[test]
    fn should_resolve_names_in_customer_events() {
        let fx = Fixture::new();
        let events = vec![event(1, 1, 2, 1), event(2, 2, 2, 1), event(3, 1, 2, 1)];
        let views = fx.directory().customer_events(&events, CustomerId::new(1));

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].customer, "Ana");
        assert_eq!(views[0].admin, "Beto");
        assert_eq!(views[0].service, "Lavado completo");
        assert_eq!(views[1].id, EventId::new(3));
    }

    #[test]
    fn should_use_placeholders_for_dangling_event_references() {
        let fx = Fixture::new();
        let events = vec![event(1, 7, 40, 9)];
        let views = fx.directory().admin_events(&events);

        assert_eq!(views[0].customer, placeholder::CUSTOMER);
        assert_eq!(views[0].phone, placeholder::PHONE);
        assert_eq!(views[0].admin, placeholder::ADMIN);
        assert_eq!(views[0].service, placeholder::SERVICE);
    }

    #[test]
    fn should_keep_phone_when_only_customer_user_is_missing() {
        let fx = Fixture::new();
        let detail = fx.directory().admin_event_detail(&event(1, 2, 2, 1));
        assert_eq!(detail.summary.customer, placeholder::CUSTOMER);
        assert_eq!(detail.summary.phone, "555-2");
    }

    #[test]
    fn should_flatten_detail_with_vehicle() {
        let fx = Fixture::new();
        let detail = fx.directory().admin_event_detail(&event(4, 1, 2, 1));
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["vehicle"], "ABC-123");
        assert_eq!(json["date_time"], "2024-05-01T10:00");
        assert_eq!(json["phone"], "555-1");
    }
}
