//! # Validation Module
//!
//! Input validation for cart mutations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (UI)                                                  │
//! │  └── Disables "-" at quantity 1                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart store (THIS MODULE)                                     │
//! │  └── Enforces 1 ≤ quantity ≤ 999 regardless of caller                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a cart line identifier.
///
/// ## Rules
/// - Must not be blank
/// - At most 100 characters
///
/// ```rust
/// use storefront_core::validation::validate_item_id;
///
/// assert!(validate_item_id("17").is_ok());
/// assert!(validate_item_id("  ").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// Cart screen: quantity edited to 0
///       │
///       ▼
/// validate_quantity(0) ← THIS FUNCTION
///       │
///       └── Error: "quantity must be positive" (line untouched)
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("1").is_ok());
        assert!(validate_item_id("coat-42").is_ok());

        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("   ").is_err());
        assert!(validate_item_id(&"9".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }
}
