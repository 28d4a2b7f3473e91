//! Command and result types for the state controller.
//!
//! These structs are the inputs and outputs of
//! [`RewardTracker`](crate::domain::tracker::RewardTracker) operations. The
//! success/sub messages carry the overlay copy the UI shows after each
//! action; they are part of the result, not of the persisted state.

pub mod tasks {
    use crate::domain::models::Task;

    /// Input for creating a new task.
    #[derive(Debug, Clone)]
    pub struct CreateTaskCommand {
        pub text: String,
        pub reward_value: u32,
    }

    /// Result of creating a task.
    #[derive(Debug, Clone)]
    pub struct CreateTaskResult {
        pub task: Task,
        pub success_message: String,
        pub sub_message: String,
    }

    /// Result of completing a task.
    #[derive(Debug, Clone)]
    pub struct CompleteTaskResult {
        pub task: Task,
        /// Heart balance after the completion.
        pub hearts: u32,
        pub success_message: String,
        pub sub_message: String,
    }

    /// Result of deleting a task.
    #[derive(Debug, Clone)]
    pub struct DeleteTaskResult {
        pub task: Task,
    }
}

pub mod rewards {
    use crate::domain::models::Reward;

    /// Input for creating a new reward.
    #[derive(Debug, Clone)]
    pub struct CreateRewardCommand {
        pub text: String,
        pub cost: u32,
        pub money_value: Option<f64>,
    }

    /// Result of creating a reward.
    #[derive(Debug, Clone)]
    pub struct CreateRewardResult {
        pub reward: Reward,
        pub success_message: String,
        pub sub_message: String,
    }

    /// Result of opening the parent gate for a claim. No state has changed
    /// yet; the claim waits for [`resolve_claim`].
    ///
    /// [`resolve_claim`]: crate::domain::tracker::RewardTracker::resolve_claim
    #[derive(Debug, Clone)]
    pub struct ClaimRequestResult {
        pub reward: Reward,
    }

    /// Outcome of resolving the parent gate.
    #[derive(Debug, Clone)]
    pub enum ClaimOutcome {
        Approved(ClaimApproved),
        Denied(ClaimDenied),
    }

    /// The claim went through: hearts were deducted and the reward marked
    /// claimed.
    #[derive(Debug, Clone)]
    pub struct ClaimApproved {
        pub reward: Reward,
        /// Heart balance after the claim.
        pub hearts: u32,
        pub success_message: String,
        pub sub_message: String,
    }

    /// The claim was denied at the gate. Nothing changed.
    #[derive(Debug, Clone)]
    pub struct ClaimDenied {
        pub message: String,
        pub sub_message: String,
    }

    /// Result of collecting money from a claimed reward.
    #[derive(Debug, Clone)]
    pub struct CollectMoneyResult {
        pub reward: Reward,
        /// Money collected (the reward's money value).
        pub amount: f64,
        /// Money balance after the collection.
        pub money: f64,
        pub success_message: String,
        pub sub_message: String,
    }

    /// Result of renewing a claimed, non-monetary reward.
    #[derive(Debug, Clone)]
    pub struct RenewRewardResult {
        pub reward: Reward,
        pub success_message: String,
        pub sub_message: String,
    }

    /// Result of deleting a reward.
    #[derive(Debug, Clone)]
    pub struct DeleteRewardResult {
        pub reward: Reward,
        /// Whether the reward was sitting in the claimed list when deleted.
        pub was_claimed: bool,
    }
}

pub mod spending {
    use crate::domain::models::{Purchase, PurchaseCategory};

    /// Input for recording a purchase.
    #[derive(Debug, Clone)]
    pub struct RecordPurchaseCommand {
        pub description: String,
        pub amount: f64,
        pub category: PurchaseCategory,
    }

    /// Result of recording a purchase.
    #[derive(Debug, Clone)]
    pub struct RecordPurchaseResult {
        pub purchase: Purchase,
        /// Money balance after the purchase.
        pub money: f64,
        pub success_message: String,
        pub sub_message: String,
    }
}
