//! User: an account that can log in, either as staff or as a customer.

use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Record};
use crate::error::{CarwashError, ValidationError};
use crate::id::UserId;

/// What a user is allowed to act as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

/// A stored user account. The password is kept in plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl User {
    /// Whether the user carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Record for User {
    type Id = UserId;
    const COLLECTION: Collection = Collection::Users;
    const LABEL: &'static str = "Usuario";

    fn id(&self) -> UserId {
        self.id
    }
}

/// The outward-facing projection of a [`User`], without the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Registration payload, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl NewUser {
    /// Check the payload can be persisted.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::Validation`] when a field is empty or the
    /// email is malformed.
    pub fn validate(&self) -> Result<(), CarwashError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::EmptyField("password").into());
        }
        Ok(())
    }

    /// Attach the assigned id.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            role: self.role,
        }
    }
}

/// Email/password pair submitted at login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Email compared the way registration stores and deduplicates it
    /// (trimmed, ASCII case-insensitive); password compared exactly.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        user.email.eq_ignore_ascii_case(self.email.trim()) && user.password == self.password
    }
}

fn validate_email(email: &str) -> Result<(), CarwashError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmptyField("email").into());
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail(email.to_string()).into()),
    }
}
