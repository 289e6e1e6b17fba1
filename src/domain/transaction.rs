use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EntityId, Keyed};

/// Transaction kinds understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Purchase,
    Transfer,
    Mimo,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Purchase => "Purchase",
            TransactionKind::Transfer => "Transfer",
            TransactionKind::Mimo => "MIMO",
        }
    }
}

/// Account id mapped to its share weight. Transfers carry a single entry
/// on each side.
pub type ShareMap = BTreeMap<EntityId, f64>;

/// A purchase, transfer, or MIMO booked against a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EntityId,
    pub group_id: EntityId,
    pub kind: TransactionKind,
    pub description: String,
    pub value: f64,
    pub billed_at: NaiveDate,
    pub currency_symbol: String,
    pub currency_conversion_rate: f64,
    #[serde(default)]
    pub creditor_shares: ShareMap,
    #[serde(default)]
    pub debitor_shares: ShareMap,
}

/// Fields sent to the backend when creating a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    pub kind: TransactionKind,
    pub description: String,
    pub value: f64,
    pub billed_at: NaiveDate,
    pub currency_symbol: String,
    pub currency_conversion_rate: f64,
    pub creditor_shares: ShareMap,
    pub debitor_shares: ShareMap,
}

impl Keyed for Transaction {
    fn id(&self) -> EntityId {
        self.id
    }
}
