//! # Domain Types
//!
//! Core domain types for the billing calculation.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ BillingRequest  │   │  BillingResult  │   │  CustomerTier   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  customer_id    │   │  customer_id    │   │  Basic          │       │
//! │  │  tier           │   │  computed_at    │   │  Premium        │       │
//! │  │  usage          │   │  outcome ───────┼─┐ │  Enterprise     │       │
//! │  └─────────────────┘   └─────────────────┘ │ └─────────────────┘       │
//! │                                            │                            │
//! │                        ┌───────────────────▼─────────────────┐          │
//! │                        │          BillingOutcome             │          │
//! │                        │  Success { discount_rate, amount }  │          │
//! │                        │  Error   { message }                │          │
//! │                        └─────────────────────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Never-Partial Results
//! The outcome is a sum type: a result either has BOTH discount rate and
//! amount, or an error message and neither. A half-populated result is
//! unrepresentable, not merely unvalidated.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation;

// =============================================================================
// Customer Tier
// =============================================================================

/// A customer classification determining discount eligibility.
///
/// Closed set: these three variants are the entire universe. Raw strings
/// are matched case-insensitively at the parsing boundary; anything else
/// is rejected there, never deeper in the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerTier {
    /// Standard customers; never discounted.
    Basic,
    /// Discount-eligible customers (above the usage threshold).
    Premium,
    /// Contract-priced customers; never discounted here.
    Enterprise,
}

impl CustomerTier {
    /// Canonical uppercase name, as it appears in raw inputs and logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CustomerTier::Basic => "BASIC",
            CustomerTier::Premium => "PREMIUM",
            CustomerTier::Enterprise => "ENTERPRISE",
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerTier {
    type Err = ValidationError;

    /// Case-insensitive parse; surrounding whitespace is tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BASIC" => Ok(CustomerTier::Basic),
            "PREMIUM" => Ok(CustomerTier::Premium),
            "ENTERPRISE" => Ok(CustomerTier::Enterprise),
            _ => Err(ValidationError::InvalidTier {
                value: s.trim().to_string(),
            }),
        }
    }
}

// =============================================================================
// Billing Request
// =============================================================================

/// A validated, typed billing request.
///
/// Constructed per invocation from caller-supplied raw strings via
/// [`BillingRequest::parse`]; no calculation ever sees unvalidated input.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingRequest {
    /// Opaque caller identifier; guaranteed non-blank, stored trimmed.
    pub customer_id: String,

    /// Validated customer tier.
    pub tier: CustomerTier,

    /// Non-negative usage quantity (billed units/currency).
    pub usage: Decimal,
}

impl BillingRequest {
    /// Validates and converts raw string inputs into a typed request.
    ///
    /// ## Validation Order
    /// ```text
    /// customer_id blank? ──► MissingInput ("... are required")
    /// usage blank?       ──► MissingInput ("... are required")
    /// tier unknown?      ──► InvalidTier  ("invalid customer tier")
    /// usage not a non-negative decimal? ──► InvalidUsage
    /// ```
    /// First failure wins; nothing is partially computed.
    pub fn parse(
        customer_id: &str,
        customer_tier: &str,
        usage_amount: &str,
    ) -> Result<Self, ValidationError> {
        let customer_id = validation::validate_customer_id(customer_id)?;
        validation::validate_usage_present(usage_amount)?;
        let tier = customer_tier.parse::<CustomerTier>()?;
        let usage = validation::parse_usage(usage_amount)?;

        Ok(BillingRequest {
            customer_id,
            tier,
            usage,
        })
    }
}

// =============================================================================
// Billing Outcome
// =============================================================================

/// The outcome half of a [`BillingResult`].
///
/// Serialized with a `status` tag of `SUCCESS` / `ERROR`, so consumers on
/// the other side of any surface branch on status rather than sniffing
/// which fields happen to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingOutcome {
    /// Calculation completed; both fields are always set.
    Success {
        /// Computed discount as a decimal fraction (0 ≤ rate < 1).
        discount_rate: Decimal,
        /// Final billed amount, exactly 2 fractional digits.
        amount: Decimal,
    },
    /// Validation failed; the message is the user-visible classification.
    Error {
        /// Plain-language description sufficient to correct and retry.
        message: String,
    },
}

// =============================================================================
// Billing Result
// =============================================================================

/// The value returned by every `compute` invocation.
///
/// Callers always receive one of these - never a thrown/propagated error.
/// Immutable once produced; the timestamp is captured at computation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingResult {
    /// The originating customer id (trimmed; may be echoed back verbatim
    /// on validation failures so callers can correlate).
    pub customer_id: String,

    /// UTC timestamp captured when the computation ran.
    pub computed_at: DateTime<Utc>,

    /// SUCCESS with rate + amount, or ERROR with a message.
    #[serde(flatten)]
    pub outcome: BillingOutcome,
}

impl BillingResult {
    /// Builds a SUCCESS result stamped with the current UTC time.
    pub fn success(customer_id: impl Into<String>, discount_rate: Decimal, amount: Decimal) -> Self {
        BillingResult {
            customer_id: customer_id.into(),
            computed_at: Utc::now(),
            outcome: BillingOutcome::Success {
                discount_rate,
                amount,
            },
        }
    }

    /// Builds an ERROR result stamped with the current UTC time.
    pub fn error(customer_id: impl Into<String>, message: impl Into<String>) -> Self {
        BillingResult {
            customer_id: customer_id.into(),
            computed_at: Utc::now(),
            outcome: BillingOutcome::Error {
                message: message.into(),
            },
        }
    }

    /// True when the outcome is SUCCESS.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, BillingOutcome::Success { .. })
    }

    /// The computed discount rate, if the outcome is SUCCESS.
    pub fn discount_rate(&self) -> Option<Decimal> {
        match &self.outcome {
            BillingOutcome::Success { discount_rate, .. } => Some(*discount_rate),
            BillingOutcome::Error { .. } => None,
        }
    }

    /// The billed amount, if the outcome is SUCCESS.
    pub fn amount(&self) -> Option<Decimal> {
        match &self.outcome {
            BillingOutcome::Success { amount, .. } => Some(*amount),
            BillingOutcome::Error { .. } => None,
        }
    }

    /// The error message, if the outcome is ERROR.
    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            BillingOutcome::Success { .. } => None,
            BillingOutcome::Error { message } => Some(message),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tier_parse_case_insensitive() {
        assert_eq!("BASIC".parse::<CustomerTier>().unwrap(), CustomerTier::Basic);
        assert_eq!(
            "premium".parse::<CustomerTier>().unwrap(),
            CustomerTier::Premium
        );
        assert_eq!(
            " Enterprise ".parse::<CustomerTier>().unwrap(),
            CustomerTier::Enterprise
        );
    }

    #[test]
    fn test_tier_parse_rejects_unknown() {
        let err = "INVALID_TIER".parse::<CustomerTier>().unwrap_err();
        assert!(err.to_string().contains("invalid customer tier"));

        assert!("".parse::<CustomerTier>().is_err());
        assert!("GOLD".parse::<CustomerTier>().is_err());
    }

    #[test]
    fn test_tier_display_roundtrip() {
        for tier in [
            CustomerTier::Basic,
            CustomerTier::Premium,
            CustomerTier::Enterprise,
        ] {
            assert_eq!(tier.as_str().parse::<CustomerTier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_request_parse_happy_path() {
        let req = BillingRequest::parse("CUST-1", "premium", "1000.333").unwrap();
        assert_eq!(req.customer_id, "CUST-1");
        assert_eq!(req.tier, CustomerTier::Premium);
        assert_eq!(req.usage, dec!(1000.333));
    }

    #[test]
    fn test_request_parse_blank_id_short_circuits() {
        // Blank id wins even when the tier is also bad
        let err = BillingRequest::parse("  ", "GOLD", "100").unwrap_err();
        assert_eq!(err, ValidationError::MissingInput);
    }

    #[test]
    fn test_request_parse_blank_usage_is_missing_input() {
        let err = BillingRequest::parse("CUST-1", "BASIC", "").unwrap_err();
        assert_eq!(err, ValidationError::MissingInput);
    }

    #[test]
    fn test_result_success_accessors() {
        let result = BillingResult::success("CUST-1", dec!(0.05), dec!(950.00));
        assert!(result.is_success());
        assert_eq!(result.discount_rate(), Some(dec!(0.05)));
        assert_eq!(result.amount(), Some(dec!(950.00)));
        assert_eq!(result.error_message(), None);
    }

    #[test]
    fn test_result_error_accessors() {
        let result = BillingResult::error("CUST-1", "invalid customer tier: GOLD");
        assert!(!result.is_success());
        assert_eq!(result.discount_rate(), None);
        assert_eq!(result.amount(), None);
        assert_eq!(
            result.error_message(),
            Some("invalid customer tier: GOLD")
        );
    }

    #[test]
    fn test_result_serializes_with_status_tag() {
        let result = BillingResult::success("CUST-1", dec!(0.05), dec!(950.00));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "SUCCESS");
        assert_eq!(json["customer_id"], "CUST-1");
        assert_eq!(json["amount"], "950.00");

        let result = BillingResult::error("CUST-1", "invalid usage amount: -5");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "ERROR");
        assert_eq!(json["message"], "invalid usage amount: -5");
        // ERROR results carry no amount at all, not a null one
        assert!(json.get("amount").is_none());
    }
}
