//! Parent approval gate for reward claims.
//!
//! Claiming a reward is a two-step flow: the child requests the claim, and
//! an adult approves or denies it at a confirmation prompt. The gate is a
//! plain yes/no question with no credential check, so it is advisory only;
//! it keeps an impulsive tap from spending hearts, nothing more. It must
//! never be treated as an access-control boundary.
//!
//! Every resolved prompt is recorded in an in-memory attempt log so the
//! approval history can be inspected for the session.

use log::info;

use crate::domain::models::Reward;

/// Decision taken at the gate prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Approved,
    Denied,
}

/// A claim waiting for a gate decision. At most one exists at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingClaim {
    pub reward_id: String,
    /// Epoch milliseconds when the prompt was opened.
    pub requested_at: i64,
}

/// One resolved gate prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GateAttempt {
    pub reward_id: String,
    pub decision: GateDecision,
    /// Epoch milliseconds when the decision was taken.
    pub timestamp: i64,
}

/// Summary of gate decisions for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct GateStats {
    pub total_attempts: usize,
    pub approved: usize,
    pub denied: usize,
    /// Percentage of prompts that were approved.
    pub approval_rate: f64,
}

/// The gate itself: the pending claim, if any, plus the attempt log.
#[derive(Debug, Clone, Default)]
pub struct ParentGate {
    pending: Option<PendingClaim>,
    attempts: Vec<GateAttempt>,
}

impl ParentGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The claim currently waiting for a decision, if any.
    pub fn pending(&self) -> Option<&PendingClaim> {
        self.pending.as_ref()
    }

    /// Open the prompt for a reward. Callers check preconditions (reward
    /// exists, not already claimed, hearts sufficient) before requesting.
    pub fn request(&mut self, reward: &Reward, now: i64) {
        info!("Opening parent gate for reward '{}'", reward.text);
        self.pending = Some(PendingClaim {
            reward_id: reward.id.clone(),
            requested_at: now,
        });
    }

    /// Resolve the open prompt, recording the attempt. Returns the pending
    /// claim that was resolved, or `None` when no prompt was open.
    pub fn resolve(&mut self, decision: GateDecision, now: i64) -> Option<PendingClaim> {
        let pending = self.pending.take()?;
        info!(
            "Parent gate resolved as {:?} for reward id {}",
            decision, pending.reward_id
        );
        self.attempts.push(GateAttempt {
            reward_id: pending.reward_id.clone(),
            decision,
            timestamp: now,
        });
        Some(pending)
    }

    /// Dismiss the open prompt without a decision (modal closed, or the
    /// reward was deleted out from under it). Nothing is recorded.
    pub fn cancel(&mut self) -> Option<PendingClaim> {
        self.pending.take()
    }

    /// All resolved prompts, oldest first.
    pub fn attempts(&self) -> &[GateAttempt] {
        &self.attempts
    }

    /// Summary statistics over the attempt log.
    pub fn stats(&self) -> GateStats {
        let total_attempts = self.attempts.len();
        let approved = self
            .attempts
            .iter()
            .filter(|a| a.decision == GateDecision::Approved)
            .count();
        let denied = total_attempts - approved;
        let approval_rate = if total_attempts > 0 {
            (approved as f64 / total_attempts as f64) * 100.0
        } else {
            0.0
        };

        GateStats {
            total_attempts,
            approved,
            denied,
            approval_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reward(id: &str) -> Reward {
        Reward {
            id: id.to_string(),
            text: "Ice cream".to_string(),
            cost: 8,
            money_value: None,
        }
    }

    #[test]
    fn test_request_then_approve() {
        let mut gate = ParentGate::new();
        assert!(gate.pending().is_none());

        gate.request(&reward("r1"), 100);
        assert_eq!(gate.pending().unwrap().reward_id, "r1");

        let resolved = gate.resolve(GateDecision::Approved, 200).unwrap();
        assert_eq!(resolved.reward_id, "r1");
        assert!(gate.pending().is_none());
        assert_eq!(gate.attempts().len(), 1);
        assert_eq!(gate.attempts()[0].decision, GateDecision::Approved);
    }

    #[test]
    fn test_resolve_without_pending_is_a_no_op() {
        let mut gate = ParentGate::new();
        assert!(gate.resolve(GateDecision::Approved, 100).is_none());
        assert!(gate.attempts().is_empty());
    }

    #[test]
    fn test_cancel_records_nothing() {
        let mut gate = ParentGate::new();
        gate.request(&reward("r1"), 100);
        assert!(gate.cancel().is_some());
        assert!(gate.pending().is_none());
        assert!(gate.attempts().is_empty());
    }

    #[test]
    fn test_stats() {
        let mut gate = ParentGate::new();
        assert_eq!(gate.stats().total_attempts, 0);
        assert_eq!(gate.stats().approval_rate, 0.0);

        for (id, decision) in [
            ("r1", GateDecision::Approved),
            ("r2", GateDecision::Denied),
            ("r1", GateDecision::Approved),
            ("r3", GateDecision::Approved),
        ] {
            gate.request(&reward(id), 100);
            gate.resolve(decision, 200);
        }

        let stats = gate.stats();
        assert_eq!(stats.total_attempts, 4);
        assert_eq!(stats.approved, 3);
        assert_eq!(stats.denied, 1);
        assert_eq!(stats.approval_rate, 75.0);
    }
}
