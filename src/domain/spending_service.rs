//! Purchase form handling for the money shop.
//!
//! This module owns the business rules for recording a purchase: form
//! validation, amount parsing and formatting, and user-facing error
//! messages. The UI only handles presentation.

use crate::domain::models::Currency;

/// Configuration for purchase forms.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingConfig {
    pub max_description_length: usize,
    /// Cap on a single purchase, independent of the available balance.
    pub max_amount: f64,
}

impl Default for SpendingConfig {
    fn default() -> Self {
        Self {
            max_description_length: 256,
            max_amount: 500.0,
        }
    }
}

/// Per-field validation errors for the purchase form.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseValidationError {
    EmptyDescription,
    DescriptionTooLong(usize),
    AmountNotPositive,
    /// The purchase would overdraw the money balance.
    OverBalance { available: f64 },
    AmountTooLarge(f64),
    InvalidAmountFormat(String),
}

/// Result of validating the purchase form.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseFormValidation {
    pub is_valid: bool,
    pub errors: Vec<PurchaseValidationError>,
    /// The amount, present when the amount field validated.
    pub cleaned_amount: Option<f64>,
    pub suggestions: Vec<String>,
}

/// Service handling purchase-form business logic.
#[derive(Debug, Clone, Default)]
pub struct SpendingService {
    config: SpendingConfig,
}

impl SpendingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SpendingConfig) -> Self {
        Self { config }
    }

    /// Validate the purchase form against the available money balance,
    /// collecting all field errors before rejecting.
    pub fn validate_purchase_form(
        &self,
        description: &str,
        amount: f64,
        available: f64,
    ) -> PurchaseFormValidation {
        let mut errors = Vec::new();
        let mut suggestions = Vec::new();

        let trimmed = description.trim();
        if trimmed.is_empty() {
            errors.push(PurchaseValidationError::EmptyDescription);
            suggestions.push("Try: New toy car, ice cream, art supplies, etc.".to_string());
        } else if trimmed.len() > self.config.max_description_length {
            errors.push(PurchaseValidationError::DescriptionTooLong(trimmed.len()));
        }

        let cleaned_amount = if !amount.is_finite() || amount <= 0.0 {
            errors.push(PurchaseValidationError::AmountNotPositive);
            suggestions.push("Enter a positive amount like 5.00 or 10".to_string());
            None
        } else if amount > available {
            errors.push(PurchaseValidationError::OverBalance { available });
            None
        } else if amount > self.config.max_amount {
            errors.push(PurchaseValidationError::AmountTooLarge(self.config.max_amount));
            None
        } else {
            Some(amount)
        };

        PurchaseFormValidation {
            is_valid: errors.is_empty(),
            errors,
            cleaned_amount,
            suggestions,
        }
    }

    /// Clean and parse an amount typed into the form, stripping the currency
    /// symbol, commas, and spaces.
    pub fn parse_amount(&self, input: &str, currency: Currency) -> Result<f64, String> {
        let cleaned = input
            .trim()
            .replace(currency.symbol(), "")
            .replace(',', "")
            .replace(' ', "");

        if cleaned.is_empty() {
            return Err("Empty amount after cleaning".to_string());
        }

        cleaned
            .parse::<f64>()
            .map_err(|e| format!("Invalid number format: {}", e))
    }

    /// Format an amount for display with the currency symbol.
    pub fn format_amount(&self, currency: Currency, amount: f64) -> String {
        format!("{}{:.2}", currency.symbol(), amount)
    }

    /// User-facing message for a purchase validation error.
    pub fn error_message(&self, error: &PurchaseValidationError, currency: Currency) -> String {
        match error {
            PurchaseValidationError::EmptyDescription => {
                "Please describe what you bought".to_string()
            }
            PurchaseValidationError::DescriptionTooLong(len) => format!(
                "Description is too long ({} characters). Maximum is {}.",
                len, self.config.max_description_length
            ),
            PurchaseValidationError::AmountNotPositive => {
                "Amount must be greater than 0".to_string()
            }
            PurchaseValidationError::OverBalance { available } => format!(
                "You only have {}{} available",
                currency.symbol(),
                available
            ),
            PurchaseValidationError::AmountTooLarge(max) => {
                format!("Amount must be less than {}{}", currency.symbol(), max)
            }
            PurchaseValidationError::InvalidAmountFormat(msg) => {
                format!("Please enter a valid amount (like 5 or 5.00): {}", msg)
            }
        }
    }

    /// All validation error messages as a list.
    pub fn error_messages(
        &self,
        errors: &[PurchaseValidationError],
        currency: Currency,
    ) -> Vec<String> {
        errors.iter().map(|e| self.error_message(e, currency)).collect()
    }

    /// The first error message, for single-line form feedback.
    pub fn first_error_message(
        &self,
        errors: &[PurchaseValidationError],
        currency: Currency,
    ) -> Option<String> {
        errors.first().map(|e| self.error_message(e, currency))
    }

    pub fn config(&self) -> &SpendingConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SpendingService {
        SpendingService::new()
    }

    #[test]
    fn test_valid_purchase_form() {
        let validation = service().validate_purchase_form("New toy car", 4.5, 10.0);
        assert!(validation.is_valid);
        assert_eq!(validation.cleaned_amount, Some(4.5));
        assert!(validation.suggestions.is_empty());
    }

    #[test]
    fn test_empty_description() {
        let validation = service().validate_purchase_form("", 4.5, 10.0);
        assert!(!validation.is_valid);
        assert!(matches!(
            validation.errors[0],
            PurchaseValidationError::EmptyDescription
        ));
        assert!(!validation.suggestions.is_empty());
    }

    #[test]
    fn test_amount_over_balance() {
        let validation = service().validate_purchase_form("Robot", 15.0, 10.0);
        assert!(!validation.is_valid);
        assert!(matches!(
            validation.errors[0],
            PurchaseValidationError::OverBalance { .. }
        ));
        assert!(validation.cleaned_amount.is_none());
    }

    #[test]
    fn test_amount_over_cap() {
        // Over the per-purchase cap even with a large enough balance.
        let validation = service().validate_purchase_form("Bike", 501.0, 1000.0);
        assert!(!validation.is_valid);
        assert!(matches!(
            validation.errors[0],
            PurchaseValidationError::AmountTooLarge(_)
        ));
    }

    #[test]
    fn test_zero_and_negative_amounts() {
        assert!(!service().validate_purchase_form("Robot", 0.0, 10.0).is_valid);
        assert!(!service().validate_purchase_form("Robot", -2.0, 10.0).is_valid);
        assert!(!service()
            .validate_purchase_form("Robot", f64::NAN, 10.0)
            .is_valid);
    }

    #[test]
    fn test_all_errors_are_collected() {
        let validation = service().validate_purchase_form("", 0.0, 10.0);
        assert_eq!(validation.errors.len(), 2);
    }

    #[test]
    fn test_parse_amount() {
        let service = service();
        assert_eq!(service.parse_amount("10.50", Currency::Usd).unwrap(), 10.50);
        assert_eq!(service.parse_amount("$10.50", Currency::Usd).unwrap(), 10.50);
        assert_eq!(
            service.parse_amount(" ¥1,234 ", Currency::Yen).unwrap(),
            1234.0
        );
        assert!(service.parse_amount("abc", Currency::Usd).is_err());
        assert!(service.parse_amount("", Currency::Usd).is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(service().format_amount(Currency::Gbp, 2.5), "£2.50");
    }

    #[test]
    fn test_error_messages() {
        let service = service();
        assert_eq!(
            service.error_message(&PurchaseValidationError::EmptyDescription, Currency::Yen),
            "Please describe what you bought"
        );
        assert_eq!(
            service.error_message(
                &PurchaseValidationError::OverBalance { available: 10.0 },
                Currency::Yen
            ),
            "You only have ¥10 available"
        );
        assert_eq!(
            service.error_message(&PurchaseValidationError::AmountTooLarge(500.0), Currency::Usd),
            "Amount must be less than $500"
        );
    }
}
