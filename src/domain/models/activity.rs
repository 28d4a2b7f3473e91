use serde::{Deserialize, Serialize};

/// Kind of state change an activity entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    TaskCompleted,
    RewardClaimed,
    MoneyCollected,
    MoneySpent,
}

/// One line in the append-only activity log.
///
/// An entry is written for every user action that moves hearts or money.
/// Entries keep insertion order; the timestamp is wall-clock at creation and
/// is used only for display, never as a correctness mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub entry_type: ActivityType,
    /// Epoch milliseconds at creation.
    pub timestamp: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearts_earned: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearts_spent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_earned: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_spent: Option<f64>,
}
