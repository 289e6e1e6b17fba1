use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, Keyed};

/// An invite link token for joining a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteToken {
    pub id: EntityId,
    pub group_id: EntityId,
    pub token: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub single_use: bool,
}

/// Fields sent to the backend when creating an invite token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvitePayload {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    pub single_use: bool,
}

impl Keyed for InviteToken {
    fn id(&self) -> EntityId {
        self.id
    }
}
