//! # Domain Module
//!
//! Business logic for the heart rewards tracker.
//!
//! The core idea: a child earns hearts by completing tasks, spends hearts
//! claiming rewards behind a parent-approval gate, collects money from
//! rewards that pay out, and spends that money on tracked purchases. Every
//! hearts- or money-moving action is recorded in an append-only activity
//! log.
//!
//! ## Module Organization
//!
//! - **models**: the serializable entities and the `AppState` aggregate
//! - **commands**: command/result types for controller operations
//! - **task_service / reward_service**: batch form validation for tasks
//!   and rewards
//! - **spending_service**: purchase-form business logic (validation,
//!   amount parsing, error messages)
//! - **parent_gate**: the two-step approve/deny flow for reward claims
//! - **tracker**: the state controller, the only mutation surface
//!
//! ## Business Rules
//!
//! - Hearts and money never go negative
//! - A claim needs enough hearts up front and an approval at the gate
//! - Monetary rewards are collected, non-monetary rewards are renewed
//! - Purchases are capped at the available balance
//! - Form validation collects every field error before rejecting
//! - Unknown-id operations are no-ops, never crashes

pub mod commands;
pub mod models;
pub mod parent_gate;
pub mod reward_service;
pub mod spending_service;
pub mod task_service;
pub mod tracker;

pub use models::*;
pub use parent_gate::{GateAttempt, GateDecision, GateStats, ParentGate, PendingClaim};
pub use reward_service::{RewardFormValidation, RewardValidationError};
pub use spending_service::{
    PurchaseFormValidation, PurchaseValidationError, SpendingConfig, SpendingService,
};
pub use task_service::{TaskFormValidation, TaskValidationError};
pub use tracker::{RewardTracker, TrackerError};
