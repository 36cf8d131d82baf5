//! Customer service: use-cases for customer profiles.

use std::sync::Arc;

use carwash_domain::customer::{Customer, NewCustomer};
use carwash_domain::error::CarwashError;
use carwash_domain::user::User;
use carwash_domain::view::{self, CustomerView};

use crate::ports::CollectionStore;
use crate::store::Store;

/// Application service for customer profiles.
pub struct CustomerService<S> {
    store: Arc<Store<S>>,
}

impl<S> CustomerService<S>
where
    S: CollectionStore + Send + Sync,
{
    /// Create a new service backed by the given store.
    pub fn new(store: Arc<Store<S>>) -> Self {
        Self { store }
    }

    /// Create a customer profile. The referenced user is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::Validation`] if the payload is invalid, or a
    /// storage error.
    #[tracing::instrument(skip(self, new_customer), fields(user_id = %new_customer.user_id))]
    pub async fn create(&self, new_customer: NewCustomer) -> Result<Customer, CarwashError> {
        new_customer.validate()?;
        self.store
            .append::<Customer, _>(move |_, id| Ok(new_customer.into_customer(id)))
            .await
    }

    /// Every customer joined to its user.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_views(&self) -> Result<Vec<CustomerView>, CarwashError> {
        let (customers, users) = tokio::try_join!(
            self.store.get_all::<Customer>(),
            self.store.get_all::<User>()
        )?;
        Ok(view::customer_views(&customers, &users))
    }

    /// Number of customer profiles.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn count(&self) -> Result<usize, CarwashError> {
        self.store.count::<Customer>().await
    }
}
