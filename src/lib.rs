//! # Heart Rewards
//!
//! A single-user reward tracker: a child earns hearts by completing tasks,
//! spends hearts claiming rewards (behind a parent-approval gate), collects
//! money from rewards that pay out, and spends that money on tracked
//! purchases. All state lives in one serializable aggregate that persists
//! locally; there is no server and no concurrency.
//!
//! ## Architecture
//!
//! ```text
//! UI layer (out of scope here)
//!     ↓ commands            ↑ state + results
//! Domain layer (controller, services, parent gate)
//!     ↓
//! Storage layer (single JSON blob)
//! ```
//!
//! The [`domain::tracker::RewardTracker`] controller owns the
//! [`domain::models::AppState`] aggregate and is the only code allowed to
//! mutate it; UI code dispatches operations and re-renders from the result.
//! Cosmetic effects (overlays, confetti, floating numbers) live in
//! [`effects`], outside the controller, and can never touch the state.

pub mod domain;
pub mod effects;
pub mod storage;

pub use domain::*;
pub use storage::*;
