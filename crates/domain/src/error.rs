//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CarwashError`] via `#[from]`.

/// Top-level error returned by services and storage ports.
#[derive(Debug, thiserror::Error)]
pub enum CarwashError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// Email/password pair did not match any user.
    #[error("invalid credentials")]
    Unauthorized,

    /// Backing storage could not be read or written.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A payload or path parameter that cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("el campo '{0}' es obligatorio")]
    EmptyField(&'static str),

    #[error("el email '{0}' no es válido")]
    InvalidEmail(String),

    #[error("el email '{0}' ya está registrado")]
    EmailTaken(String),

    #[error("el campo '{0}' debe ser un número no negativo")]
    InvalidAmount(&'static str),

    #[error("la fecha '{0}' no es válida")]
    InvalidDateTime(String),

    #[error("el identificador '{0}' no es válido")]
    InvalidId(String),
}

/// Lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} no encontrado")]
pub struct NotFoundError {
    /// Human-readable record kind (`"Evento"`, `"Producto"`, …).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}
