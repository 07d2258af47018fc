//! # Billing Calculator
//!
//! The single operation this crate exists for: `compute`.
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute(customer_id, customer_tier, usage_amount)   [raw strings]      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BillingRequest::parse ── any failure ──► ERROR result + audit record  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DiscountPolicy::rate_for(tier, usage)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  raw = usage × (1 − rate)          [exact decimal]                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  round_to_cents(raw)               [round-half-up, 2 digits]           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SUCCESS result + audit record                                         │
//! │                                                                         │
//! │  Either way the caller gets a BillingResult value. Nothing panics,     │
//! │  nothing is thrown, nothing is retried - the computation is pure and   │
//! │  idempotent, so retry belongs to the caller if it wants one.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use crate::audit::{AuditRecord, AuditSink, TracingAudit};
use crate::money::round_to_cents;
use crate::policy::DiscountPolicy;
use crate::types::{BillingRequest, BillingResult};
use crate::validation;

// =============================================================================
// Billing Calculator
// =============================================================================

/// Stateless billing amount calculator.
///
/// Holds only configuration (the discount policy) and a shared audit sink;
/// every invocation is independent, so one instance may be called from any
/// number of threads without coordination.
#[derive(Clone)]
pub struct BillingCalculator {
    policy: DiscountPolicy,
    audit: Arc<dyn AuditSink>,
}

impl BillingCalculator {
    /// Calculator with the stock policy, logging through [`TracingAudit`].
    pub fn new() -> Self {
        BillingCalculator {
            policy: DiscountPolicy::default(),
            audit: Arc::new(TracingAudit),
        }
    }

    /// Replaces the discount policy.
    pub fn with_policy(mut self, policy: DiscountPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the audit sink.
    ///
    /// Tests typically hand in an `Arc<MemoryAudit>` and assert on the
    /// captured records afterwards.
    pub fn with_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = sink;
        self
    }

    /// The active discount policy.
    pub fn policy(&self) -> &DiscountPolicy {
        &self.policy
    }

    /// Computes the billed amount for one request.
    ///
    /// All three inputs arrive as raw strings from whatever surface the
    /// caller built. The return is always a [`BillingResult`]:
    ///
    /// - SUCCESS carries the discount rate (fraction) and the amount,
    ///   rounded half-up to exactly two fractional digits;
    /// - ERROR carries the validation message, with no amount at all.
    ///
    /// One audit record is emitted per call, success or failure.
    pub fn compute(
        &self,
        customer_id: &str,
        customer_tier: &str,
        usage_amount: &str,
    ) -> BillingResult {
        match BillingRequest::parse(customer_id, customer_tier, usage_amount) {
            Ok(request) => {
                let rate = self.policy.rate_for(request.tier, request.usage);
                let fraction = rate.fraction();
                let amount = round_to_cents(rate.apply(request.usage));

                self.audit.record(&AuditRecord {
                    customer_id: request.customer_id.clone(),
                    tier: Some(request.tier),
                    usage: Some(request.usage),
                    discount_rate: Some(fraction),
                    amount: Some(amount),
                    error: None,
                });

                BillingResult::success(request.customer_id, fraction, amount)
            }
            Err(err) => {
                let message = err.to_string();

                // Log whatever DID parse, so a rejected invocation is
                // still attributable in the audit trail
                self.audit.record(&AuditRecord {
                    customer_id: customer_id.trim().to_string(),
                    tier: customer_tier.parse().ok(),
                    usage: validation::parse_usage(usage_amount).ok(),
                    discount_rate: None,
                    amount: None,
                    error: Some(message.clone()),
                });

                BillingResult::error(customer_id.trim(), message)
            }
        }
    }
}

impl Default for BillingCalculator {
    fn default() -> Self {
        BillingCalculator::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAudit;
    use crate::policy::ThresholdComparison;
    use crate::types::CustomerTier;
    use rust_decimal_macros::dec;

    fn calculator_with_capture() -> (BillingCalculator, Arc<MemoryAudit>) {
        let sink = Arc::new(MemoryAudit::new());
        let calc = BillingCalculator::new().with_sink(sink.clone());
        (calc, sink)
    }

    // -------------------------------------------------------------------------
    // Literal boundary scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_basic_tier_never_discounts() {
        let calc = BillingCalculator::new();
        let result = calc.compute("CUST-1", "BASIC", "500");

        assert!(result.is_success());
        assert_eq!(result.discount_rate(), Some(dec!(0.00)));
        assert_eq!(result.amount(), Some(dec!(500.00)));
        assert_eq!(result.amount().unwrap().to_string(), "500.00");
    }

    #[test]
    fn test_premium_below_threshold() {
        let calc = BillingCalculator::new();
        let result = calc.compute("CUST-1", "PREMIUM", "999");

        assert_eq!(result.discount_rate(), Some(dec!(0.00)));
        assert_eq!(result.amount(), Some(dec!(999.00)));
    }

    #[test]
    fn test_premium_at_threshold_gets_discount() {
        let calc = BillingCalculator::new();
        let result = calc.compute("CUST-1", "PREMIUM", "1000");

        assert_eq!(result.discount_rate(), Some(dec!(0.05)));
        assert_eq!(result.amount(), Some(dec!(950.00)));
        assert_eq!(result.amount().unwrap().to_string(), "950.00");
    }

    #[test]
    fn test_premium_fractional_usage_rounds_half_up() {
        // 1000.333 × 0.95 = 950.31635 → 950.32
        let calc = BillingCalculator::new();
        let result = calc.compute("CUST-1", "PREMIUM", "1000.333");

        assert_eq!(result.discount_rate(), Some(dec!(0.05)));
        assert_eq!(result.amount(), Some(dec!(950.32)));
    }

    #[test]
    fn test_enterprise_never_discounts() {
        let calc = BillingCalculator::new();
        let result = calc.compute("CUST-1", "ENTERPRISE", "1000000");

        assert_eq!(result.discount_rate(), Some(dec!(0.00)));
        assert_eq!(result.amount(), Some(dec!(1000000.00)));
    }

    // -------------------------------------------------------------------------
    // Validation failures
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_customer_id_is_required_error() {
        let calc = BillingCalculator::new();
        let result = calc.compute("", "BASIC", "500");

        assert!(!result.is_success());
        assert!(result.error_message().unwrap().contains("required"));
        assert_eq!(result.amount(), None);
        assert_eq!(result.discount_rate(), None);
    }

    #[test]
    fn test_blank_usage_is_required_error() {
        let calc = BillingCalculator::new();
        let result = calc.compute("CUST-1", "BASIC", "   ");

        assert!(!result.is_success());
        assert!(result.error_message().unwrap().contains("required"));
    }

    #[test]
    fn test_unknown_tier_is_error() {
        let calc = BillingCalculator::new();
        let result = calc.compute("CUST-1", "INVALID_TIER", "500");

        assert!(!result.is_success());
        assert!(result
            .error_message()
            .unwrap()
            .contains("invalid customer tier"));
    }

    #[test]
    fn test_malformed_usage_is_error() {
        let calc = BillingCalculator::new();
        for bad in ["12x", "-5", "1,000"] {
            let result = calc.compute("CUST-1", "PREMIUM", bad);
            assert!(!result.is_success(), "expected rejection of {bad:?}");
            assert!(result
                .error_message()
                .unwrap()
                .contains("invalid usage amount"));
        }
    }

    #[test]
    fn test_tier_matching_is_case_insensitive() {
        let calc = BillingCalculator::new();
        for tier in ["premium", "Premium", "PREMIUM", "pReMiUm"] {
            let result = calc.compute("CUST-1", tier, "1000");
            assert_eq!(result.discount_rate(), Some(dec!(0.05)), "tier {tier:?}");
        }
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    #[test]
    fn test_compute_is_idempotent_modulo_timestamp() {
        let calc = BillingCalculator::new();
        let first = calc.compute("CUST-1", "PREMIUM", "1000.333");
        let second = calc.compute("CUST-1", "PREMIUM", "1000.333");

        assert_eq!(first.discount_rate(), second.discount_rate());
        assert_eq!(first.amount(), second.amount());
        assert_eq!(first.customer_id, second.customer_id);
    }

    #[test]
    fn test_zero_usage_bills_zero() {
        let calc = BillingCalculator::new();
        let result = calc.compute("CUST-1", "PREMIUM", "0");

        assert_eq!(result.discount_rate(), Some(dec!(0.00)));
        assert_eq!(result.amount(), Some(dec!(0.00)));
        assert_eq!(result.amount().unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_exclusive_policy_flips_threshold_case() {
        let policy = DiscountPolicy {
            comparison: ThresholdComparison::Exclusive,
            ..Default::default()
        };
        let calc = BillingCalculator::new().with_policy(policy);

        // The spec-level boundary case changes under the strict reading
        let result = calc.compute("CUST-1", "PREMIUM", "1000");
        assert_eq!(result.discount_rate(), Some(dec!(0.00)));
        assert_eq!(result.amount(), Some(dec!(1000.00)));

        let result = calc.compute("CUST-1", "PREMIUM", "1000.01");
        assert_eq!(result.discount_rate(), Some(dec!(0.05)));
    }

    // -------------------------------------------------------------------------
    // Audit emission
    // -------------------------------------------------------------------------

    #[test]
    fn test_success_emits_one_full_audit_record() {
        let (calc, sink) = calculator_with_capture();
        calc.compute("CUST-1", "PREMIUM", "1000");

        let records = sink.records();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert!(record.is_success());
        assert_eq!(record.customer_id, "CUST-1");
        assert_eq!(record.tier, Some(CustomerTier::Premium));
        assert_eq!(record.usage, Some(dec!(1000)));
        assert_eq!(record.discount_rate, Some(dec!(0.05)));
        assert_eq!(record.amount, Some(dec!(950.00)));
    }

    #[test]
    fn test_failure_emits_partial_audit_record() {
        let (calc, sink) = calculator_with_capture();
        calc.compute("CUST-1", "GOLD", "250");

        let records = sink.records();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert!(!record.is_success());
        assert_eq!(record.customer_id, "CUST-1");
        assert_eq!(record.tier, None); // tier is what failed
        assert_eq!(record.usage, Some(dec!(250))); // usage still attributable
        assert_eq!(record.amount, None);
    }

    #[test]
    fn test_every_invocation_emits_exactly_one_record() {
        let (calc, sink) = calculator_with_capture();
        calc.compute("CUST-1", "BASIC", "500");
        calc.compute("", "BASIC", "500");
        calc.compute("CUST-2", "PREMIUM", "oops");

        assert_eq!(sink.len(), 3);
    }

    // -------------------------------------------------------------------------
    // Concurrency
    // -------------------------------------------------------------------------

    #[test]
    fn test_shared_calculator_across_threads() {
        let (calc, sink) = calculator_with_capture();
        let calc = Arc::new(calc);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let calc = calc.clone();
                std::thread::spawn(move || {
                    let id = format!("CUST-{i}");
                    calc.compute(&id, "PREMIUM", "1000")
                })
            })
            .collect();

        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(result.amount(), Some(dec!(950.00)));
        }
        assert_eq!(sink.len(), 8);
    }
}
