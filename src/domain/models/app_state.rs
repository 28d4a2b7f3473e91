use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::activity::ActivityEntry;
use super::purchase::Purchase;
use super::reward::Reward;
use super::task::Task;

/// Display currency for money amounts.
///
/// The currency is cosmetic: switching it never converts balances, it only
/// changes the symbol shown next to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "YEN")]
    Yen,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    /// Every supported currency, in selector order.
    pub const ALL: [Currency; 4] = [Currency::Yen, Currency::Usd, Currency::Eur, Currency::Gbp];

    /// Symbol shown next to money amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Yen => "¥",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    /// The next currency in selector order, wrapping around. The toggle
    /// cycles through all four supported currencies.
    pub fn next(&self) -> Currency {
        let index = Currency::ALL.iter().position(|c| c == self).unwrap_or(0);
        Currency::ALL[(index + 1) % Currency::ALL.len()]
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Yen
    }
}

/// The single root aggregate holding everything the app persists.
///
/// Created once at startup from the persisted blob (or defaults), mutated
/// only through [`RewardTracker`](crate::domain::tracker::RewardTracker)
/// operations, and written back after every mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub child_name: String,
    pub currency: Currency,
    /// Primary earned currency. Never negative.
    pub hearts: u32,
    /// Secondary currency, earned by collecting monetary rewards. Never
    /// negative.
    pub money: f64,
    pub tasks: Vec<Task>,
    pub rewards: Vec<Reward>,
    /// Ids of rewards whose heart cost has been paid but which have not yet
    /// been money-collected or renewed. Always a subset of `rewards` ids.
    pub claimed_rewards: Vec<String>,
    pub activity_history: Vec<ActivityEntry>,
    pub purchases: Vec<Purchase>,
}

impl AppState {
    /// Tolerantly decode a persisted blob, defaulting every field
    /// independently when it is absent or malformed. Older or partial blobs
    /// upgrade forward without losing the fields they do carry.
    pub fn from_json_value(value: &Value) -> AppState {
        fn field<T: DeserializeOwned + Default>(value: &Value, key: &str) -> T {
            value
                .get(key)
                .cloned()
                .map(|v| serde_json::from_value(v).unwrap_or_default())
                .unwrap_or_default()
        }

        let money: f64 = field(value, "money");
        AppState {
            child_name: field(value, "childName"),
            currency: field(value, "currency"),
            hearts: field(value, "hearts"),
            money: money.max(0.0),
            tasks: field(value, "tasks"),
            rewards: field(value, "rewards"),
            claimed_rewards: field(value, "claimedRewards"),
            activity_history: field(value, "activityHistory"),
            purchases: field(value, "purchases"),
        }
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn find_reward(&self, reward_id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == reward_id)
    }

    /// Whether the reward's heart cost has been paid and not yet resolved by
    /// collection or renewal.
    pub fn is_claimed(&self, reward_id: &str) -> bool {
        self.claimed_rewards.iter().any(|id| id == reward_id)
    }
}
