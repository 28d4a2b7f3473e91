use serde::{Deserialize, Serialize};

/// A chore the child can complete to earn hearts.
///
/// Tasks are created by the user, completed any number of times, and removed
/// only by explicit deletion. They are never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    /// What the child has to do (trimmed, non-empty).
    pub text: String,
    /// Hearts awarded each time the task is completed.
    pub reward_value: u32,
}
