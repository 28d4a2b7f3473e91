//! Serializable domain entities.
//!
//! Everything in here is part of the persisted state layout: field names
//! serialize in camelCase to match the stored JSON blob, and optional money
//! fields are omitted entirely when absent.

pub mod activity;
pub mod app_state;
pub mod purchase;
pub mod reward;
pub mod task;

pub use activity::{ActivityEntry, ActivityType};
pub use app_state::{AppState, Currency};
pub use purchase::{Purchase, PurchaseCategory};
pub use reward::Reward;
pub use task::Task;
