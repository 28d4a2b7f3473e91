//! Reward form validation.

/// Smallest heart cost a reward may have.
pub const REWARD_COST_MIN: u32 = 1;
/// Largest heart cost a reward may have.
pub const REWARD_COST_MAX: u32 = 200;
/// Largest money value a reward may pay out on collection.
pub const MONEY_VALUE_MAX: f64 = 100.0;

/// Per-field validation errors for the reward form.
#[derive(Debug, Clone, PartialEq)]
pub enum RewardValidationError {
    EmptyText,
    CostOutOfRange(u32),
    MoneyValueOutOfRange(f64),
}

/// Result of validating the reward form.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardFormValidation {
    pub is_valid: bool,
    pub errors: Vec<RewardValidationError>,
    /// Trimmed description, present when the text field validated.
    pub cleaned_text: Option<String>,
}

/// Validate a reward form, collecting all field errors. The money value is
/// optional; when present it must lie in `0..=100`.
pub fn validate_reward_form(
    text: &str,
    cost: u32,
    money_value: Option<f64>,
) -> RewardFormValidation {
    let mut errors = Vec::new();

    let trimmed = text.trim();
    let cleaned_text = if trimmed.is_empty() {
        errors.push(RewardValidationError::EmptyText);
        None
    } else {
        Some(trimmed.to_string())
    };

    if !(REWARD_COST_MIN..=REWARD_COST_MAX).contains(&cost) {
        errors.push(RewardValidationError::CostOutOfRange(cost));
    }

    if let Some(value) = money_value {
        if !value.is_finite() || value < 0.0 || value > MONEY_VALUE_MAX {
            errors.push(RewardValidationError::MoneyValueOutOfRange(value));
        }
    }

    RewardFormValidation {
        is_valid: errors.is_empty(),
        errors,
        cleaned_text,
    }
}

/// User-facing message for a reward validation error.
pub fn error_message(error: &RewardValidationError) -> String {
    match error {
        RewardValidationError::EmptyText => "Please describe your reward".to_string(),
        RewardValidationError::CostOutOfRange(_) => format!(
            "Cost must be between {} and {} hearts",
            REWARD_COST_MIN, REWARD_COST_MAX
        ),
        RewardValidationError::MoneyValueOutOfRange(_) => {
            format!("Money value must be between 0 and {}", MONEY_VALUE_MAX)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_without_money_value() {
        let validation = validate_reward_form("Ice cream", 20, None);
        assert!(validation.is_valid);
        assert_eq!(validation.cleaned_text.as_deref(), Some("Ice cream"));
    }

    #[test]
    fn test_valid_form_with_zero_money_value() {
        // An explicit zero payout is allowed and distinct from "no payout".
        let validation = validate_reward_form("Sticker", 5, Some(0.0));
        assert!(validation.is_valid);
    }

    #[test]
    fn test_cost_bounds() {
        assert!(validate_reward_form("A", REWARD_COST_MIN, None).is_valid);
        assert!(validate_reward_form("A", REWARD_COST_MAX, None).is_valid);
        assert!(!validate_reward_form("A", 0, None).is_valid);
        assert!(!validate_reward_form("A", REWARD_COST_MAX + 1, None).is_valid);
    }

    #[test]
    fn test_money_value_bounds() {
        assert!(validate_reward_form("A", 5, Some(MONEY_VALUE_MAX)).is_valid);
        assert!(!validate_reward_form("A", 5, Some(-1.0)).is_valid);
        assert!(!validate_reward_form("A", 5, Some(MONEY_VALUE_MAX + 0.5)).is_valid);
        assert!(!validate_reward_form("A", 5, Some(f64::NAN)).is_valid);
    }

    #[test]
    fn test_all_errors_are_collected() {
        let validation = validate_reward_form("", 0, Some(500.0));
        assert_eq!(validation.errors.len(), 3);
        assert!(validation
            .errors
            .contains(&RewardValidationError::EmptyText));
        assert!(validation
            .errors
            .contains(&RewardValidationError::CostOutOfRange(0)));
    }
}
