//! User service: registration, login and the admin list.

use std::sync::Arc;

use carwash_domain::admin::Admin;
use carwash_domain::error::{CarwashError, NotFoundError, ValidationError};
use carwash_domain::user::{Credentials, NewUser, PublicUser, User};
use carwash_domain::view::{self, AdminView};

use crate::ports::CollectionStore;
use crate::store::Store;

/// Where `/admins` takes its list from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminSource {
    /// Every user whose role is `admin`.
    #[default]
    Role,
    /// Active entries of the admin roster, joined to their users.
    Roster,
}

/// Application service for user accounts.
pub struct UserService<S> {
    store: Arc<Store<S>>,
    admin_source: AdminSource,
}

impl<S> UserService<S>
where
    S: CollectionStore + Send + Sync,
{
    /// Create a new service backed by the given store.
    pub fn new(store: Arc<Store<S>>, admin_source: AdminSource) -> Self {
        Self {
            store,
            admin_source,
        }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::Validation`] if the payload is invalid or the
    /// email is already registered, or a storage error.
    #[tracing::instrument(
        skip(self, new_user),
        fields(email = %new_user.email, role = ?new_user.role)
    )]
    pub async fn register(&self, new_user: NewUser) -> Result<PublicUser, CarwashError> {
        new_user.validate()?;
        let user = self
            .store
            .append::<User, _>(move |existing, id| {
                let email = new_user.email.trim();
                if existing.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
                    return Err(ValidationError::EmailTaken(email.to_string()).into());
                }
                Ok(new_user.into_user(id))
            })
            .await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(PublicUser::from(&user))
    }

    /// Check credentials against the stored users.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::Unauthorized`] unless a user has exactly this
    /// email and password, or a storage error.
    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: Credentials) -> Result<PublicUser, CarwashError> {
        let users = self.store.get_all::<User>().await?;
        match users.iter().find(|user| credentials.matches(user)) {
            Some(user) => Ok(PublicUser::from(user)),
            None => {
                tracing::warn!("login rejected");
                Err(CarwashError::Unauthorized)
            }
        }
    }

    /// List admins according to the configured [`AdminSource`].
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::NotFound`] when the list is empty, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn list_admins(&self) -> Result<Vec<AdminView>, CarwashError> {
        let users = self.store.get_all::<User>().await?;
        let admins = match self.admin_source {
            AdminSource::Role => view::admin_views_by_role(&users),
            AdminSource::Roster => {
                let roster = self.store.get_all::<Admin>().await?;
                view::admin_views_from_roster(&roster, &users)
            }
        };
        if admins.is_empty() {
            return Err(NotFoundError {
                entity: "Admin",
                id: "*".to_string(),
            }
            .into());
        }
        Ok(admins)
    }
}
