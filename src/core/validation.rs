//! # Registration Validation
//!
//! Turns the four raw text fields of the registration form into a
//! [`Product`], or says why it can't.
//!
//! ```text
//! RegistrationInput ──validate()──► Ok(Product)
//!                                   Err(MissingField)   any field blank
//!                                   Err(InvalidNumber)  price/quantity bad
//! ```
//!
//! Blank checks run over every field before any number is parsed, so an
//! empty category wins over a bad price.

use crate::core::error::{Field, ValidationError};
use crate::core::product::Product;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Raw form text, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl RegistrationInput {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Category => &self.category,
            Field::Price => &self.price,
            Field::Quantity => &self.quantity,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Category => &mut self.category,
            Field::Price => &mut self.price,
            Field::Quantity => &mut self.quantity,
        }
    }

    /// Check every rule and build the product. Name and category are stored
    /// trimmed.
    pub fn validate(&self) -> ValidationResult<Product> {
        for field in Field::ALL {
            if self.field(field).trim().is_empty() {
                return Err(ValidationError::MissingField { field });
            }
        }

        let price = parse_price(&self.price)?;
        let quantity = parse_quantity(&self.quantity)?;
        if !(price * f64::from(quantity)).is_finite() {
            return Err(ValidationError::InvalidNumber { field: Field::Price });
        }

        Ok(Product::new(
            self.name.trim(),
            self.category.trim(),
            price,
            quantity,
        ))
    }
}

/// Finite and `>= 0`. `NaN` and `inf` parse as `f64` but are rejected.
/// `-0` is accepted and stored as `0`.
pub fn parse_price(text: &str) -> ValidationResult<f64> {
    let invalid = ValidationError::InvalidNumber { field: Field::Price };
    let price: f64 = text.trim().parse().map_err(|_| invalid.clone())?;
    if !price.is_finite() || price < 0.0 {
        return Err(invalid);
    }
    Ok(price.abs())
}

/// Whole number, `> 0`, fits in `u32`.
pub fn parse_quantity(text: &str) -> ValidationResult<u32> {
    let invalid = ValidationError::InvalidNumber { field: Field::Quantity };
    let quantity: i64 = text.trim().parse().map_err(|_| invalid.clone())?;
    if quantity <= 0 {
        return Err(invalid);
    }
    u32::try_from(quantity).map_err(|_| invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ValidationErrorKind;
    use crate::core::product::format_money;

    fn kind_of(input: RegistrationInput) -> ValidationErrorKind {
        input.validate().unwrap_err().kind()
    }

    #[test]
    fn test_valid_input_builds_product() {
        let product = RegistrationInput::new("Widget", "Tools", "9.99", "3")
            .validate()
            .unwrap();
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.category(), "Tools");
        assert_eq!(product.price(), 9.99);
        assert_eq!(product.quantity(), 3);
    }

    #[test]
    fn test_trims_text_fields() {
        let product = RegistrationInput::new("  Widget ", "\tTools", " 1.5 ", " 2 ")
            .validate()
            .unwrap();
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.category(), "Tools");
        assert_eq!(product.price(), 1.5);
        assert_eq!(product.quantity(), 2);
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = RegistrationInput::new("Widget", "Tools", "-1", "3")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber { field: Field::Price });
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = RegistrationInput::new("Widget", "Tools", "9.99", "0")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber { field: Field::Quantity });
    }

    #[test]
    fn test_empty_category_is_missing_field() {
        let err = RegistrationInput::new("Widget", "", "9.99", "3")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: Field::Category });
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        assert_eq!(
            kind_of(RegistrationInput::new("   ", "Tools", "1", "1")),
            ValidationErrorKind::MissingField
        );
        assert_eq!(
            kind_of(RegistrationInput::new("Widget", "Tools", "1", " \t")),
            ValidationErrorKind::MissingField
        );
    }

    #[test]
    fn test_blank_field_reported_before_bad_number() {
        let err = RegistrationInput::new("Widget", "", "abc", "3")
            .validate()
            .unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MissingField);
    }

    #[test]
    fn test_unparsable_numbers() {
        assert_eq!(
            kind_of(RegistrationInput::new("W", "T", "abc", "3")),
            ValidationErrorKind::InvalidNumber
        );
        assert_eq!(
            kind_of(RegistrationInput::new("W", "T", "1", "2.5")),
            ValidationErrorKind::InvalidNumber
        );
        assert_eq!(
            kind_of(RegistrationInput::new("W", "T", "1", "-4")),
            ValidationErrorKind::InvalidNumber
        );
    }

    #[test]
    fn test_non_finite_price_rejected() {
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("-inf").is_err());
    }

    #[test]
    fn test_zero_price_allowed() {
        assert_eq!(parse_price("0"), Ok(0.0));
    }

    #[test]
    fn test_negative_zero_price_normalized() {
        let product = RegistrationInput::new("Widget", "Tools", "-0", "3")
            .validate()
            .unwrap();
        assert!(product.price().is_sign_positive());
        assert_eq!(format_money("$", product.price()), "$ 0.00");
        assert_eq!(format_money("$", product.stock_value()), "$ 0.00");
    }

    #[test]
    fn test_stock_value_overflow_rejected() {
        let err = RegistrationInput::new("Widget", "Tools", "1e308", "10")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber { field: Field::Price });

        // The same price alone is fine.
        assert!(RegistrationInput::new("Widget", "Tools", "1e308", "1").validate().is_ok());
    }

    #[test]
    fn test_quantity_overflow_rejected() {
        assert!(parse_quantity("4294967296").is_err());
        assert_eq!(parse_quantity("4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn test_field_mut_edits_the_right_field() {
        let mut input = RegistrationInput::default();
        input.field_mut(Field::Price).push_str("12");
        assert_eq!(input.price, "12");
        assert_eq!(input.field(Field::Price), "12");
        assert!(input.name.is_empty());
    }
}
