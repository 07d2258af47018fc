//! # Money Module
//!
//! Discount rates and regulatory rounding for monetary values.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  For billing that drift matters at the cent level:                     │
//! │    1000.333 × 0.95 must be EXACTLY 950.31635, every time, so the       │
//! │    regulatory rounding to 950.32 holds bit-for-bit.                    │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal::Decimal                                   │
//! │    Exact base-10 arithmetic; rounding is an explicit, named step       │
//! │    (round-half-up), never whatever the platform FPU happens to do.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal_macros::dec;
//! use tierbill_core::money::{round_to_cents, DiscountRate};
//!
//! let rate = DiscountRate::from_bps(500).unwrap(); // 5%
//! let discounted = rate.apply(dec!(1000.333));
//! assert_eq!(discounted, dec!(950.31635));
//! assert_eq!(round_to_cents(discounted), dec!(950.32));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Regulatory Rounding
// =============================================================================

/// Rounds a monetary value to exactly 2 fractional digits, round-half-up.
///
/// ## Round-Half-Up Explained
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  ROUND-HALF-UP (Round Half Away From Zero)                          │
/// │                                                                     │
/// │  A value exactly halfway between two cents rounds to the larger    │
/// │  magnitude:                                                         │
/// │    950.315  → 950.32     950.314  → 950.31                         │
/// │    950.31635 → 950.32    (regulatory requirement)                  │
/// │                                                                     │
/// │  This is NOT the platform float default (round half to even) and   │
/// │  must not depend on it - hence an explicit RoundingStrategy.       │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
///
/// The result always carries scale 2, so `500` comes back as `500.00` -
/// billed amounts have exactly two fractional digits, full stop.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use tierbill_core::money::round_to_cents;
///
/// assert_eq!(round_to_cents(dec!(950.3165)).to_string(), "950.32");
/// assert_eq!(round_to_cents(dec!(500)).to_string(), "500.00");
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Pin the scale so whole amounts still render with two digits
    rounded.rescale(2);
    rounded
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (the premium-tier discount)
///
/// Storing an integer keeps rate comparison and serialization exact; the
/// decimal fraction is derived on demand via [`DiscountRate::fraction`].
/// Rates are always below 10000 bps - a 100% discount is not a thing here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    ///
    /// Fails with [`ValidationError::RateOutOfRange`] when `bps >= 10000`,
    /// keeping the 0 ≤ rate < 1 invariant at the construction boundary.
    pub fn from_bps(bps: u32) -> ValidationResult<Self> {
        if bps >= 10_000 {
            return Err(ValidationError::RateOutOfRange { bps });
        }
        Ok(DiscountRate(bps))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a decimal fraction (500 bps → 0.05).
    ///
    /// Normalized so trailing zeros don't leak into serialized results.
    pub fn fraction(&self) -> Decimal {
        Decimal::new(self.0 as i64, 4).normalize()
    }

    /// Applies the discount: `amount × (1 − rate)`, exact, unrounded.
    ///
    /// Rounding is a separate, explicit step ([`round_to_cents`]) so the
    /// raw product stays inspectable in tests.
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * (Decimal::ONE - self.fraction())
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
