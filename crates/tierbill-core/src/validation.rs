//! # Validation Module
//!
//! Boundary validation for the three raw string inputs to `compute`.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller surface (external)                                    │
//! │  ├── Whatever format checks the surface wants                          │
//! │  └── NOT trusted here                                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (the only layer this crate owns)                 │
//! │  ├── Presence: id and usage must be non-blank                          │
//! │  ├── Tier: closed-set, case-insensitive match                          │
//! │  └── Usage: non-negative exact decimal                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Calculation - only ever sees typed, validated values                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tierbill_core::validation::{parse_usage, validate_customer_id};
//!
//! assert!(validate_customer_id("CUST-042").is_ok());
//! assert!(validate_customer_id("   ").is_err());
//! assert!(parse_usage("1000.333").is_ok());
//! assert!(parse_usage("-5").is_err());
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer id.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - No format is imposed beyond that; the id is opaque to billing
///
/// ## Returns
/// The trimmed id string.
pub fn validate_customer_id(customer_id: &str) -> ValidationResult<String> {
    let customer_id = customer_id.trim();

    if customer_id.is_empty() {
        return Err(ValidationError::MissingInput);
    }

    Ok(customer_id.to_string())
}

/// Checks that a usage amount was supplied at all.
///
/// A blank usage string is classified as missing input (same message as a
/// blank id), distinct from a present-but-malformed value which
/// [`parse_usage`] rejects as invalid.
pub fn validate_usage_present(usage_amount: &str) -> ValidationResult<()> {
    if usage_amount.trim().is_empty() {
        return Err(ValidationError::MissingInput);
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a usage amount.
///
/// ## Rules
/// - Must parse as an exact decimal (no thousands separators, no units)
/// - Must be non-negative; zero usage is a legitimate billable quantity
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  compute("CUST-042", "PREMIUM", usage)                                  │
/// │                                                                         │
/// │  usage = "1000.333"                                                    │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_usage("1000.333") ← THIS FUNCTION                               │
/// │       │                                                                 │
/// │       ├── not a decimal? → Error: "invalid usage amount"               │
/// │       │                                                                 │
/// │       ├── negative?      → Error: "invalid usage amount"               │
/// │       │                                                                 │
/// │       └── OK → Decimal(1000.333) into the discount calculation         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_usage(usage_amount: &str) -> ValidationResult<Decimal> {
    let raw = usage_amount.trim();

    let usage = Decimal::from_str(raw).map_err(|_| ValidationError::InvalidUsage {
        value: raw.to_string(),
    })?;

    if usage.is_sign_negative() && !usage.is_zero() {
        return Err(ValidationError::InvalidUsage {
            value: raw.to_string(),
        });
    }

    Ok(usage)
}

// =============================================================================
// Unit Tests
// =============================================================================
