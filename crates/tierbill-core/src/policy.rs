//! # Discount Policy
//!
//! The tier-conditional discount rules, as an explicit policy value.
//!
//! ## Policy Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Discount Determination                            │
//! │                                                                         │
//! │  tier == PREMIUM  AND  usage ⊳ threshold   →  premium_discount (5%)    │
//! │  anything else                             →  0.00                     │
//! │                                                                         │
//! │  where ⊳ is the configured comparison:                                 │
//! │    Inclusive:  usage >= threshold   (default)                          │
//! │    Exclusive:  usage >  threshold                                      │
//! │                                                                         │
//! │  BASIC and ENTERPRISE never discount, at any usage level.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Is the Comparison Configurable?
//! The upstream business rule exists in two conflicting written forms, one
//! strict (`>`) and one inclusive (`>=`). That changes real invoices at
//! exactly usage = 1000, so the choice is a named policy field with a
//! documented default rather than a silent pick buried in an `if`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::DiscountRate;
use crate::types::CustomerTier;
use crate::{PREMIUM_DISCOUNT_BPS, PREMIUM_USAGE_THRESHOLD};

// =============================================================================
// Threshold Comparison
// =============================================================================

/// How usage is compared against the premium discount threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdComparison {
    /// `usage >= threshold` - a customer exactly at the threshold gets the
    /// discount. The default.
    Inclusive,
    /// `usage > threshold` - the threshold itself does not qualify.
    Exclusive,
}

impl ThresholdComparison {
    /// Evaluates the comparison for a given usage and threshold.
    #[inline]
    pub fn qualifies(&self, usage: Decimal, threshold: Decimal) -> bool {
        match self {
            ThresholdComparison::Inclusive => usage >= threshold,
            ThresholdComparison::Exclusive => usage > threshold,
        }
    }
}

impl Default for ThresholdComparison {
    fn default() -> Self {
        ThresholdComparison::Inclusive
    }
}

// =============================================================================
// Discount Policy
// =============================================================================

/// The complete discount policy for the calculator.
///
/// The default policy is the stock business rule: 5% for PREMIUM customers
/// at or above 1000 usage units. Embedders with the strict reading of the
/// threshold build one with [`ThresholdComparison::Exclusive`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountPolicy {
    /// Usage level at which the premium discount starts to apply.
    pub threshold: Decimal,

    /// Whether the threshold itself qualifies.
    pub comparison: ThresholdComparison,

    /// The discount granted to qualifying PREMIUM customers.
    pub premium_discount: DiscountRate,
}

impl DiscountPolicy {
    /// Determines the discount rate for a tier/usage pair.
    ///
    /// The rate depends on nothing else - not the customer id, not any
    /// prior invocation. Non-premium tiers always come back zero.
    pub fn rate_for(&self, tier: CustomerTier, usage: Decimal) -> DiscountRate {
        match tier {
            CustomerTier::Premium if self.comparison.qualifies(usage, self.threshold) => {
                self.premium_discount
            }
            _ => DiscountRate::zero(),
        }
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        DiscountPolicy {
            threshold: PREMIUM_USAGE_THRESHOLD,
            comparison: ThresholdComparison::default(),
            // Stock rate is a compile-time constant well below 10000 bps
            premium_discount: DiscountRate::from_bps(PREMIUM_DISCOUNT_BPS)
                .unwrap_or_else(|_| DiscountRate::zero()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
