//! Task form validation.
//!
//! Validation collects every field error before rejecting, so a form with a
//! blank description and an out-of-range heart value reports both problems
//! at once.

/// Smallest heart value a task may award.
pub const TASK_REWARD_MIN: u32 = 1;
/// Largest heart value a task may award.
pub const TASK_REWARD_MAX: u32 = 10;

/// Per-field validation errors for the task form.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskValidationError {
    EmptyText,
    RewardValueOutOfRange(u32),
}

/// Result of validating the task form.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFormValidation {
    pub is_valid: bool,
    pub errors: Vec<TaskValidationError>,
    /// Trimmed description, present when the text field validated.
    pub cleaned_text: Option<String>,
}

/// Validate a task form, collecting all field errors.
pub fn validate_task_form(text: &str, reward_value: u32) -> TaskFormValidation {
    let mut errors = Vec::new();

    let trimmed = text.trim();
    let cleaned_text = if trimmed.is_empty() {
        errors.push(TaskValidationError::EmptyText);
        None
    } else {
        Some(trimmed.to_string())
    };

    if !(TASK_REWARD_MIN..=TASK_REWARD_MAX).contains(&reward_value) {
        errors.push(TaskValidationError::RewardValueOutOfRange(reward_value));
    }

    TaskFormValidation {
        is_valid: errors.is_empty(),
        errors,
        cleaned_text,
    }
}

/// User-facing message for a task validation error.
pub fn error_message(error: &TaskValidationError) -> String {
    match error {
        TaskValidationError::EmptyText => "Please describe your task".to_string(),
        TaskValidationError::RewardValueOutOfRange(_) => format!(
            "Hearts must be between {} and {}",
            TASK_REWARD_MIN, TASK_REWARD_MAX
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let validation = validate_task_form("  Clean my room  ", 5);
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
        assert_eq!(validation.cleaned_text.as_deref(), Some("Clean my room"));
    }

    #[test]
    fn test_empty_text() {
        let validation = validate_task_form("   ", 5);
        assert!(!validation.is_valid);
        assert_eq!(validation.errors, vec![TaskValidationError::EmptyText]);
        assert!(validation.cleaned_text.is_none());
    }

    #[test]
    fn test_reward_value_bounds() {
        assert!(validate_task_form("Homework", TASK_REWARD_MIN).is_valid);
        assert!(validate_task_form("Homework", TASK_REWARD_MAX).is_valid);
        assert!(!validate_task_form("Homework", 0).is_valid);
        assert!(!validate_task_form("Homework", TASK_REWARD_MAX + 1).is_valid);
    }

    #[test]
    fn test_all_errors_are_collected() {
        let validation = validate_task_form("", 0);
        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![
                TaskValidationError::EmptyText,
                TaskValidationError::RewardValueOutOfRange(0),
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            error_message(&TaskValidationError::EmptyText),
            "Please describe your task"
        );
        assert!(error_message(&TaskValidationError::RewardValueOutOfRange(99))
            .contains("between 1 and 10"));
    }
}
