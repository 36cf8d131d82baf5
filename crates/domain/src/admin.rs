//! Admin roster: staff entries with an active flag, linked to users.

use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Record};
use crate::id::{AdminId, UserId};

/// One roster entry. `status` is `true` while the admin is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: AdminId,
    pub user_id: UserId,
    pub status: bool,
}

impl Record for Admin {
    type Id = AdminId;
    const COLLECTION: Collection = Collection::Admins;
    const LABEL: &'static str = "Admin";

    fn id(&self) -> AdminId {
        self.id
    }
}
