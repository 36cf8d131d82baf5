//! Service: an entry of the read-only wash catalog.
//!
//! The catalog file is maintained by hand. Only `id` and `name` are read by
//! the backend; every other field is carried through as written.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collection::{Collection, Record};
use crate::id::ServiceId;

/// A bookable wash service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    /// `price`, `description` and anything else the catalog carries.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Service {
    type Id = ServiceId;
    const COLLECTION: Collection = Collection::Services;
    const LABEL: &'static str = "Servicio";

    fn id(&self) -> ServiceId {
        self.id
    }
}
