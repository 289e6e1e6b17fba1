use serde::{Deserialize, Serialize};

use super::{EntityId, Keyed};

/// A shared-expense group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub currency_symbol: String,
    #[serde(default)]
    pub terms: String,
    #[serde(default)]
    pub add_user_account_on_join: bool,
}

/// Fields sent to the backend when creating a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPayload {
    pub name: String,
    pub description: String,
    pub currency_symbol: String,
    pub terms: String,
    pub add_user_account_on_join: bool,
}

impl Keyed for Group {
    fn id(&self) -> EntityId {
        self.id
    }
}
