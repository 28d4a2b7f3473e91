use serde::{Deserialize, Serialize};

/// Something the child can spend hearts on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    /// What the reward is (trimmed, non-empty).
    pub text: String,
    /// Heart cost to claim the reward.
    pub cost: u32,
    /// Money paid out when a claimed reward is collected.
    ///
    /// `Some(0.0)` is a real zero payout and still goes through the collect
    /// step; `None` means the reward has no money attached and is renewed
    /// back to claimable instead. The two must not be conflated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_value: Option<f64>,
}

impl Reward {
    /// Whether a claimed copy of this reward pays out money on collection.
    pub fn has_money_value(&self) -> bool {
        self.money_value.is_some()
    }
}
