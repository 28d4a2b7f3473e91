//! The state controller.
//!
//! [`RewardTracker`] owns the single [`AppState`] aggregate and is its only
//! mutation surface: UI code dispatches the operations below and re-renders
//! from the returned state, never touching the aggregate directly. Every
//! successful mutation is followed by a best-effort persist; a failed write
//! is logged and swallowed, because the in-memory state stays authoritative
//! for the session and the next mutation writes again.
//!
//! Operations that reference an entity by id return `Ok(None)` (or plain
//! `None`) when the id is unknown: unknown-id calls are documented no-ops
//! that leave state untouched. Precondition failures that are not lookups —
//! insufficient hearts, double claims, collecting a reward with no money
//! value — are typed [`TrackerError`]s, and validation failures list every
//! invalid field.

use log::{info, warn};
use thiserror::Error;

use crate::domain::commands::rewards::{
    ClaimApproved, ClaimDenied, ClaimOutcome, ClaimRequestResult, CollectMoneyResult,
    CreateRewardCommand, CreateRewardResult, DeleteRewardResult, RenewRewardResult,
};
use crate::domain::commands::spending::{RecordPurchaseCommand, RecordPurchaseResult};
use crate::domain::commands::tasks::{
    CompleteTaskResult, CreateTaskCommand, CreateTaskResult, DeleteTaskResult,
};
use crate::domain::models::{
    ActivityEntry, ActivityType, AppState, Currency, Purchase, PurchaseCategory, Reward, Task,
};
use crate::domain::parent_gate::{GateDecision, ParentGate, PendingClaim};
use crate::domain::reward_service::{self, RewardValidationError};
use crate::domain::spending_service::{PurchaseValidationError, SpendingService};
use crate::domain::task_service::{self, TaskValidationError};
use crate::storage::{generate_id, now_millis, StateStore};

/// Why a state transition was rejected. State is never mutated when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("task form has {} invalid field(s)", .0.len())]
    InvalidTask(Vec<TaskValidationError>),
    #[error("reward form has {} invalid field(s)", .0.len())]
    InvalidReward(Vec<RewardValidationError>),
    #[error("purchase form has {} invalid field(s)", .0.len())]
    InvalidPurchase(Vec<PurchaseValidationError>),
    #[error("not enough hearts: need {required}, have {available}")]
    InsufficientHearts { required: u32, available: u32 },
    #[error("reward is already claimed")]
    AlreadyClaimed,
    #[error("reward has not been claimed")]
    NotClaimed,
    #[error("reward has no money value to collect")]
    NoMoneyValue,
    #[error("reward pays out money and must be collected, not renewed")]
    HasMoneyValue,
    #[error("another claim is already waiting at the parent gate")]
    ClaimPending,
}

/// Controller owning the app state and its persistence.
pub struct RewardTracker<S: StateStore> {
    state: AppState,
    store: S,
    gate: ParentGate,
    spending: SpendingService,
}

impl<S: StateStore> RewardTracker<S> {
    /// Load the persisted state (or defaults) and wrap it in a controller.
    pub fn load(store: S) -> Self {
        let state = store.load();
        info!(
            "Loaded app state: {} hearts, {} tasks, {} rewards",
            state.hearts,
            state.tasks.len(),
            state.rewards.len()
        );
        Self {
            state,
            store,
            gate: ParentGate::new(),
            spending: SpendingService::new(),
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The parent gate, for inspecting the pending claim and attempt log.
    pub fn gate(&self) -> &ParentGate {
        &self.gate
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            // In-memory state stays authoritative; the next mutation writes
            // again.
            warn!("Failed to persist app state: {:#}", e);
        }
    }

    fn push_activity(
        &mut self,
        entry_type: ActivityType,
        description: String,
    ) -> &mut ActivityEntry {
        self.state.activity_history.push(ActivityEntry {
            id: generate_id(),
            entry_type,
            timestamp: now_millis(),
            description,
            hearts_earned: None,
            hearts_spent: None,
            money_earned: None,
            money_spent: None,
        });
        self.state.activity_history.last_mut().unwrap()
    }

    // --- tasks ---

    /// Create a task from the task form.
    pub fn create_task(&mut self, cmd: CreateTaskCommand) -> Result<CreateTaskResult, TrackerError> {
        let validation = task_service::validate_task_form(&cmd.text, cmd.reward_value);
        if !validation.is_valid {
            return Err(TrackerError::InvalidTask(validation.errors));
        }

        let task = Task {
            id: generate_id(),
            text: validation.cleaned_text.unwrap_or_default(),
            reward_value: cmd.reward_value,
        };
        info!("Created task '{}' worth {} hearts", task.text, task.reward_value);
        self.state.tasks.push(task.clone());
        self.persist();

        Ok(CreateTaskResult {
            task,
            success_message: "Task Created!".to_string(),
            sub_message: "Ready to earn some hearts!".to_string(),
        })
    }

    /// Complete a task, earning its hearts. Unknown ids are a no-op.
    pub fn complete_task(&mut self, task_id: &str) -> Option<CompleteTaskResult> {
        let task = self.state.find_task(task_id)?.clone();

        self.state.hearts += task.reward_value;
        let entry = self.push_activity(
            ActivityType::TaskCompleted,
            format!("Completed \"{}\"", task.text),
        );
        entry.hearts_earned = Some(task.reward_value);
        self.persist();

        Some(CompleteTaskResult {
            hearts: self.state.hearts,
            success_message: "Amazing Job!".to_string(),
            sub_message: format!("You earned {} hearts!", task.reward_value),
            task,
        })
    }

    /// Delete a task. Unknown ids are a no-op. The confirmation prompt is
    /// the UI's responsibility.
    pub fn delete_task(&mut self, task_id: &str) -> Option<DeleteTaskResult> {
        let index = self.state.tasks.iter().position(|t| t.id == task_id)?;
        let task = self.state.tasks.remove(index);
        self.persist();
        Some(DeleteTaskResult { task })
    }

    // --- rewards ---

    /// Create a reward from the reward form.
    pub fn create_reward(
        &mut self,
        cmd: CreateRewardCommand,
    ) -> Result<CreateRewardResult, TrackerError> {
        let validation = reward_service::validate_reward_form(&cmd.text, cmd.cost, cmd.money_value);
        if !validation.is_valid {
            return Err(TrackerError::InvalidReward(validation.errors));
        }

        let reward = Reward {
            id: generate_id(),
            text: validation.cleaned_text.unwrap_or_default(),
            cost: cmd.cost,
            money_value: cmd.money_value,
        };
        info!("Created reward '{}' costing {} hearts", reward.text, reward.cost);
        self.state.rewards.push(reward.clone());
        self.persist();

        Ok(CreateRewardResult {
            reward,
            success_message: "Reward Created!".to_string(),
            sub_message: "Something to work towards!".to_string(),
        })
    }

    /// Open the parent gate for a claim. Checks the preconditions but
    /// mutates nothing; the claim takes effect only when
    /// [`resolve_claim`](Self::resolve_claim) approves it. Unknown ids are a
    /// no-op.
    pub fn request_claim(
        &mut self,
        reward_id: &str,
    ) -> Result<Option<ClaimRequestResult>, TrackerError> {
        if self.gate.pending().is_some() {
            return Err(TrackerError::ClaimPending);
        }

        let reward = match self.state.find_reward(reward_id) {
            Some(reward) => reward.clone(),
            None => return Ok(None),
        };
        if self.state.is_claimed(reward_id) {
            return Err(TrackerError::AlreadyClaimed);
        }
        if self.state.hearts < reward.cost {
            return Err(TrackerError::InsufficientHearts {
                required: reward.cost,
                available: self.state.hearts,
            });
        }

        self.gate.request(&reward, now_millis());
        Ok(Some(ClaimRequestResult { reward }))
    }

    /// Resolve the open parent gate prompt. Approval deducts the hearts and
    /// marks the reward claimed; denial changes nothing and surfaces a
    /// message. Returns `Ok(None)` when no prompt is open.
    pub fn resolve_claim(
        &mut self,
        decision: GateDecision,
    ) -> Result<Option<ClaimOutcome>, TrackerError> {
        let pending = match self.gate.resolve(decision, now_millis()) {
            Some(pending) => pending,
            None => return Ok(None),
        };

        if decision == GateDecision::Denied {
            return Ok(Some(ClaimOutcome::Denied(ClaimDenied {
                message: "Ask a Parent".to_string(),
                sub_message: "Please ask a parent to help you claim your reward!".to_string(),
            })));
        }

        // Re-check everything against the current state; the reward could
        // have been deleted or the hearts spent while the prompt was open.
        let reward = match self.state.find_reward(&pending.reward_id) {
            Some(reward) => reward.clone(),
            None => return Ok(None),
        };
        if self.state.is_claimed(&reward.id) {
            return Err(TrackerError::AlreadyClaimed);
        }
        if self.state.hearts < reward.cost {
            return Err(TrackerError::InsufficientHearts {
                required: reward.cost,
                available: self.state.hearts,
            });
        }

        self.state.hearts -= reward.cost;
        self.state.claimed_rewards.push(reward.id.clone());
        let entry = self.push_activity(
            ActivityType::RewardClaimed,
            format!("Claimed \"{}\"", reward.text),
        );
        entry.hearts_spent = Some(reward.cost);
        self.persist();

        Ok(Some(ClaimOutcome::Approved(ClaimApproved {
            hearts: self.state.hearts,
            success_message: "Reward Claimed!".to_string(),
            sub_message: "Enjoy your reward!".to_string(),
            reward,
        })))
    }

    /// Dismiss the open gate prompt without a decision.
    pub fn cancel_claim(&mut self) -> Option<PendingClaim> {
        self.gate.cancel()
    }

    /// Collect the money value of a claimed reward, moving its payout into
    /// the money balance and releasing the claim. Unknown ids are a no-op.
    pub fn collect_money(
        &mut self,
        reward_id: &str,
    ) -> Result<Option<CollectMoneyResult>, TrackerError> {
        let reward = match self.state.find_reward(reward_id) {
            Some(reward) => reward.clone(),
            None => return Ok(None),
        };
        if !self.state.is_claimed(reward_id) {
            return Err(TrackerError::NotClaimed);
        }
        let amount = match reward.money_value {
            Some(amount) => amount,
            None => return Err(TrackerError::NoMoneyValue),
        };

        let symbol = self.state.currency.symbol();
        self.state.money += amount;
        self.state.claimed_rewards.retain(|id| id != reward_id);
        let entry = self.push_activity(
            ActivityType::MoneyCollected,
            format!("Collected {}{} from \"{}\"", symbol, amount, reward.text),
        );
        entry.money_earned = Some(amount);
        self.persist();

        Ok(Some(CollectMoneyResult {
            amount,
            money: self.state.money,
            success_message: "Money Collected!".to_string(),
            sub_message: format!("You earned {}{}!", symbol, amount),
            reward,
        }))
    }

    /// Renew a claimed reward that has no money value, making it claimable
    /// again. Unknown ids are a no-op.
    pub fn renew_reward(
        &mut self,
        reward_id: &str,
    ) -> Result<Option<RenewRewardResult>, TrackerError> {
        let reward = match self.state.find_reward(reward_id) {
            Some(reward) => reward.clone(),
            None => return Ok(None),
        };
        if !self.state.is_claimed(reward_id) {
            return Err(TrackerError::NotClaimed);
        }
        if reward.has_money_value() {
            return Err(TrackerError::HasMoneyValue);
        }

        self.state.claimed_rewards.retain(|id| id != reward_id);
        self.persist();

        Ok(Some(RenewRewardResult {
            reward,
            success_message: "Reward Renewed!".to_string(),
            sub_message: "Ready to earn again!".to_string(),
        }))
    }

    /// Delete a reward, releasing any claim on it and dismissing a gate
    /// prompt that references it. Unknown ids are a no-op.
    pub fn delete_reward(&mut self, reward_id: &str) -> Option<DeleteRewardResult> {
        let index = self.state.rewards.iter().position(|r| r.id == reward_id)?;
        let reward = self.state.rewards.remove(index);
        let was_claimed = self.state.is_claimed(reward_id);
        self.state.claimed_rewards.retain(|id| id != reward_id);
        if self
            .gate
            .pending()
            .map_or(false, |pending| pending.reward_id == reward_id)
        {
            self.gate.cancel();
        }
        self.persist();
        Some(DeleteRewardResult { reward, was_claimed })
    }

    // --- spending ---

    /// Record a purchase against the money balance.
    pub fn record_purchase(
        &mut self,
        cmd: RecordPurchaseCommand,
    ) -> Result<RecordPurchaseResult, TrackerError> {
        let validation =
            self.spending
                .validate_purchase_form(&cmd.description, cmd.amount, self.state.money);
        if !validation.is_valid {
            return Err(TrackerError::InvalidPurchase(validation.errors));
        }

        let purchase = Purchase {
            id: generate_id(),
            description: cmd.description.trim().to_string(),
            amount: cmd.amount,
            category: cmd.category,
            timestamp: now_millis(),
        };
        let symbol = self.state.currency.symbol();
        self.state.money = (self.state.money - purchase.amount).max(0.0);
        self.state.purchases.push(purchase.clone());
        let entry = self.push_activity(
            ActivityType::MoneySpent,
            format!(
                "Spent {}{} on \"{}\"",
                symbol, purchase.amount, purchase.description
            ),
        );
        entry.money_spent = Some(purchase.amount);
        self.persist();

        Ok(RecordPurchaseResult {
            money: self.state.money,
            success_message: "Purchase Recorded!".to_string(),
            sub_message: format!(
                "You spent {}{} on {}",
                symbol, purchase.amount, purchase.description
            ),
            purchase,
        })
    }

    // --- settings ---

    /// Cycle the display currency through all supported currencies.
    pub fn toggle_currency(&mut self) -> Currency {
        self.state.currency = self.state.currency.next();
        self.persist();
        self.state.currency
    }

    /// Set the display currency directly.
    pub fn set_currency(&mut self, currency: Currency) {
        self.state.currency = currency;
        self.persist();
    }

    /// Set the child's name (trimmed).
    pub fn set_child_name(&mut self, name: &str) {
        self.state.child_name = name.trim().to_string();
        self.persist();
    }

    // --- read surface ---

    /// The activity log, oldest first.
    pub fn activity_history(&self) -> &[ActivityEntry] {
        &self.state.activity_history
    }

    /// Purchases in a single category, oldest first.
    pub fn purchases_by_category(&self, category: PurchaseCategory) -> Vec<&Purchase> {
        self.state
            .purchases
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Total spend per category, in category order, for categories with at
    /// least one purchase.
    pub fn category_totals(&self) -> Vec<(PurchaseCategory, f64)> {
        PurchaseCategory::ALL
            .iter()
            .filter_map(|&category| {
                let total: f64 = self
                    .state
                    .purchases
                    .iter()
                    .filter(|p| p.category == category)
                    .map(|p| p.amount)
                    .sum();
                (total > 0.0).then_some((category, total))
            })
            .collect()
    }
}
