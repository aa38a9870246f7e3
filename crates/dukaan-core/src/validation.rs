//! # Validation Module
//!
//! Field-level validation rules for Dukaan records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Type checks (numbers are numbers)                                 │
//! │  └── Enum values (transactionType must be Cash/Banking)                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields present and non-empty                             │
//! │  └── Non-negative quantities and prices                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL on id and required columns                               │
//! │                                                                         │
//! │  Deliberately ABSENT: total consistency checks. Client-computed        │
//! │  bill totals are trusted as supplied (see crate::billing).             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required name field (shop name, customer name, item name).
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use dukaan_core::validation::validate_name;
///
/// assert!(validate_name("name", "Gold House").is_ok());
/// assert!(validate_name("name", "").is_err());
/// assert!(validate_name("name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a bill serial number.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
pub fn validate_serial_no(serial_no: &str) -> ValidationResult<()> {
    let serial_no = serial_no.trim();

    if serial_no.is_empty() {
        return Err(ValidationError::Required {
            field: "serialNo".to_string(),
        });
    }

    if serial_no.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "serialNo".to_string(),
            max: 50,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an inventory or line-item quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0). Zero is legal: an item can be out of
///   stock, and a bill line can record a zero-quantity placeholder.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in paise.
///
/// ## Rules
/// - Must be non-negative (>= 0). Zero is allowed (gifted items).
///
/// ## Example
/// ```rust
/// use dukaan_core::validation::validate_price;
///
/// assert!(validate_price(50000).is_ok());  // ₹500.00
/// assert!(validate_price(0).is_ok());
/// assert!(validate_price(-100).is_err());
/// ```
pub fn validate_price(paise: i64) -> ValidationResult<()> {
    if paise < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// Malformed identifiers are a validation failure (HTTP 400), distinct
/// from a well-formed identifier that matches nothing (HTTP 404).
///
/// ## Example
/// ```rust
/// use dukaan_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Gold House").is_ok());
        assert!(validate_name("name", "A. Kumar").is_ok());

        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", "   ").is_err());
        assert!(validate_name("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_serial_no() {
        assert!(validate_serial_no("B001").is_ok());
        assert!(validate_serial_no("").is_err());
        assert!(validate_serial_no(&"9".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_quantity_allows_zero() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(5).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(50000).is_ok());
        assert!(validate_price(-100).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
        assert!(validate_uuid("123").is_err());
    }
}
