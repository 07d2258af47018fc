//! # Error Types
//!
//! Domain-specific error types for tierbill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tierbill-core errors (this file)                                      │
//! │  └── ValidationError  - Malformed or missing caller input              │
//! │                                                                         │
//! │  There is deliberately nothing else: the calculation itself cannot     │
//! │  fail once its inputs are validated, and validation failures never    │
//! │  cross the compute() boundary as Err - they are folded into an        │
//! │  ERROR-status BillingResult so callers branch on status, not catch.   │
//! │                                                                         │
//! │  Flow: raw strings → ValidationError → BillingOutcome::Error → caller  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Error display text IS the user-visible message in ERROR results
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable by the caller correcting its input

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller-supplied raw strings don't meet requirements.
/// All validation happens before any calculation runs; a failure
/// short-circuits to an ERROR result with the message below.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Customer id or usage amount is missing/blank.
    ///
    /// ## When This Occurs
    /// - `customer_id` is empty or whitespace-only
    /// - `usage_amount` is empty or whitespace-only
    #[error("Customer ID and usage amount are required")]
    MissingInput,

    /// Tier string is not one of BASIC, PREMIUM, ENTERPRISE.
    ///
    /// The tier set is closed; matching is case-insensitive, everything
    /// else is rejected here at the boundary rather than deeper in the
    /// calculation.
    #[error("invalid customer tier: {value}")]
    InvalidTier { value: String },

    /// Usage amount is present but not a non-negative decimal.
    ///
    /// ## When This Occurs
    /// - Not parseable as a decimal ("12x", "1,000")
    /// - Parseable but negative ("-5")
    #[error("invalid usage amount: {value}")]
    InvalidUsage { value: String },

    /// Discount rate in basis points is out of the [0, 10000) range.
    ///
    /// Only reachable when building a custom [`crate::DiscountPolicy`];
    /// the stock policy rates are always valid.
    #[error("discount rate must be below 10000 basis points, got {bps}")]
    RateOutOfRange { bps: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
