//! Validation helpers for DTOs.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Rejects strings that are empty once surrounding whitespace is removed.
///
/// # Examples
///
/// ```ignore
/// validate_not_blank("SNES")  // Ok
/// validate_not_blank("   ")   // Err - whitespace only
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be empty".into());
        return Err(err);
    }
    Ok(())
}

/// Prices are stored as-is, so anything below zero is refused up front.
pub fn validate_non_negative_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        let mut err = ValidationError::new("price_negative");
        err.message = Some(format!("price must be zero or positive (got {price})").into());
        return Err(err);
    }
    Ok(())
}

/// Stock counts units on hand and cannot go below zero.
pub fn validate_non_negative_stock(
    stock: impl std::borrow::Borrow<i32>,
) -> Result<(), ValidationError> {
    let stock = *stock.borrow();
    if stock < 0 {
        let mut err = ValidationError::new("stock_negative");
        err.message = Some(format!("stock must be zero or positive (got {stock})").into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Chrono Trigger").is_ok());
        assert!(validate_not_blank(" SNES ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank(" \t ").is_err());
    }

    #[test]
    fn test_validate_non_negative_price() {
        assert!(validate_non_negative_price(&Decimal::ZERO).is_ok());
        assert!(validate_non_negative_price(&Decimal::new(5999, 2)).is_ok());
        assert!(validate_non_negative_price(&Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_validate_non_negative_stock() {
        assert!(validate_non_negative_stock(&0).is_ok());
        assert!(validate_non_negative_stock(&12).is_ok());
        assert!(validate_non_negative_stock(&-1).is_err());
    }
}
