use serde::{Deserialize, Serialize};

use super::{EntityId, Keyed};

/// A member account within a group, selectable as creditor or debitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: EntityId,
    pub group_id: EntityId,
    pub name: String,
}

impl Keyed for Account {
    fn id(&self) -> EntityId {
        self.id
    }
}
