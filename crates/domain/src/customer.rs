//! Customer: contact details completing a user's profile.

use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Record};
use crate::error::{CarwashError, ValidationError};
use crate::id::{CustomerId, UserId};

/// A customer profile owned by one [`User`](crate::user::User).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub user_id: UserId,
    pub address: String,
    pub phone: String,
}

impl Record for Customer {
    type Id = CustomerId;
    const COLLECTION: Collection = Collection::Customers;
    const LABEL: &'static str = "Cliente";

    fn id(&self) -> CustomerId {
        self.id
    }
}

/// Customer payload, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub user_id: UserId,
    pub address: String,
    pub phone: String,
}

impl NewCustomer {
    /// # Errors
    ///
    /// Returns [`CarwashError::Validation`] when address or phone is empty.
    pub fn validate(&self) -> Result<(), CarwashError> {
        if self.address.trim().is_empty() {
            return Err(ValidationError::EmptyField("address").into());
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::EmptyField("phone").into());
        }
        Ok(())
    }

    #[must_use]
    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            user_id: self.user_id,
            address: self.address,
            phone: self.phone,
        }
    }
}
