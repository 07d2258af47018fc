//! # tierbill-core: Pure Billing Logic for Tierbill
//!
//! This crate is the **heart** of Tierbill. It contains the billing amount
//! calculation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tierbill Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Caller Surface (HTTP/CLI/batch - external)         │   │
//! │  │    raw customer_id ── raw tier ── raw usage_amount              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ compute()                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tierbill-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  policy   │  │ validation│  │   │
//! │  │   │   Tier    │  │ Discount  │  │ Threshold │  │  parsing  │  │   │
//! │  │   │  Request  │  │ Rounding  │  │   rules   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │calculator │  │   audit   │                                 │   │
//! │  │   │ compute() │  │ log sink  │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │                        BillingResult                                    │
//! │                 (SUCCESS with rate + amount,                            │
//! │                  or ERROR with a message - never partial)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CustomerTier, BillingRequest, BillingResult)
//! - [`money`] - DiscountRate and regulatory round-half-up to cents
//! - [`policy`] - The tier-conditional discount policy
//! - [`validation`] - Boundary parsing of raw string inputs
//! - [`calculator`] - The single `compute` operation
//! - [`audit`] - Injected log sink (structured record per invocation)
//! - [`error`] - Typed validation errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input
//!    = same discount rate and amount (timestamps aside)
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Decimals**: All monetary values are `rust_decimal::Decimal`,
//!    never binary floating point
//! 4. **Explicit Errors**: Validation failures become ERROR results at the
//!    `compute` boundary; nothing panics, nothing propagates
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tierbill_core::BillingCalculator;
//!
//! let calc = BillingCalculator::new();
//!
//! // Premium customer at the discount threshold: 5% off, rounded to cents
//! let result = calc.compute("CUST-042", "PREMIUM", "1000");
//! assert!(result.is_success());
//! assert_eq!(result.discount_rate(), Some(dec!(0.05)));
//! assert_eq!(result.amount(), Some(dec!(950.00)));
//!
//! // Bad input never panics - it comes back as an ERROR result
//! let result = calc.compute("CUST-042", "GOLD", "1000");
//! assert!(!result.is_success());
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod audit;
pub mod calculator;
pub mod error;
pub mod money;
pub mod policy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tierbill_core::BillingCalculator` instead of
// `use tierbill_core::calculator::BillingCalculator`

pub use audit::{AuditRecord, AuditSink, MemoryAudit, TracingAudit};
pub use calculator::BillingCalculator;
pub use error::ValidationError;
pub use money::{round_to_cents, DiscountRate};
pub use policy::{DiscountPolicy, ThresholdComparison};
pub use types::{BillingOutcome, BillingRequest, BillingResult, CustomerTier};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Premium-tier discount in basis points (500 = 5%).
///
/// ## Why a constant?
/// The rate is a business rule, never caller-supplied. Callers that need a
/// different rate build a custom [`policy::DiscountPolicy`].
pub const PREMIUM_DISCOUNT_BPS: u32 = 500;

/// Usage threshold at which the premium discount applies.
///
/// ## Business Reason
/// Whether the comparison against this threshold is `>=` or `>` is itself a
/// policy decision - see [`policy::ThresholdComparison`]. The default policy
/// uses the inclusive reading.
pub const PREMIUM_USAGE_THRESHOLD: Decimal = dec!(1000);
