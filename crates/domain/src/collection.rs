//! Collections: the named sets of records persisted as one unit.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::id::RecordId;

/// Every collection known to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Customers,
    Admins,
    Services,
    Events,
    Products,
}

impl Collection {
    /// All collections, in a stable order.
    pub const ALL: [Self; 6] = [
        Self::Users,
        Self::Customers,
        Self::Admins,
        Self::Services,
        Self::Events,
        Self::Products,
    ];

    /// Canonical storage name (`users`, `customers`, …).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Customers => "customers",
            Self::Admins => "admins",
            Self::Services => "services",
            Self::Events => "events",
            Self::Products => "products",
        }
    }

    /// Position of this collection inside [`Collection::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record that lives in exactly one [`Collection`] and is identified by a
/// typed integer id.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Identifier type of this record.
    type Id: RecordId;

    /// Collection holding records of this type.
    const COLLECTION: Collection;

    /// Human-readable kind used in "not found" messages.
    const LABEL: &'static str;

    /// This record's identifier.
    fn id(&self) -> Self::Id;
}
