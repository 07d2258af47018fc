//! # Audit Module
//!
//! The per-invocation structured log record and the sink it goes to.
//!
//! ## Why an Injected Sink?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Audit Emission Path                               │
//! │                                                                         │
//! │  compute() ──► AuditRecord ──► dyn AuditSink                           │
//! │                                     │                                   │
//! │                      ┌──────────────┼──────────────┐                    │
//! │                      ▼              ▼              ▼                    │
//! │               TracingAudit    MemoryAudit    (caller's own)            │
//! │               tracing event   Vec in a       forwarder to              │
//! │               (production)    Mutex (tests)  their pipeline            │
//! │                                                                         │
//! │  The sink is a collaborator handed to the calculator, NOT a            │
//! │  process-wide singleton: tests capture emitted records without        │
//! │  touching global subscriber state, and two calculators with           │
//! │  different sinks coexist in one process.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Emission is observability only - it never affects the returned result.

use rust_decimal::Decimal;
use std::sync::Mutex;
use tracing::{info, warn};

use crate::types::CustomerTier;

// =============================================================================
// Audit Record
// =============================================================================

/// One structured record per `compute` invocation, success or failure.
///
/// Failure records carry whatever was known when validation stopped; a bad
/// tier string, for example, leaves `tier` unset but may still have usage.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRecord {
    /// Originating customer id (trimmed; empty when the id itself was the
    /// validation failure).
    pub customer_id: String,

    /// Parsed tier, when validation got that far.
    pub tier: Option<CustomerTier>,

    /// Parsed usage amount, when validation got that far.
    pub usage: Option<Decimal>,

    /// Computed discount rate (fraction), on success.
    pub discount_rate: Option<Decimal>,

    /// Final billed amount, on success.
    pub amount: Option<Decimal>,

    /// Validation message, on failure.
    pub error: Option<String>,
}

impl AuditRecord {
    /// True when this record describes a successful computation.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

// =============================================================================
// Audit Sink
// =============================================================================

/// Destination for audit records.
///
/// `Send + Sync` because the calculator is shared freely across threads;
/// implementations must tolerate concurrent `record` calls.
pub trait AuditSink: Send + Sync {
    /// Receives one record per invocation. Must not panic.
    fn record(&self, record: &AuditRecord);
}

// =============================================================================
// Tracing Sink (default)
// =============================================================================

/// Default sink: emits one `tracing` event per invocation.
///
/// Successes at INFO, validation failures at WARN. Field names are stable;
/// downstream log pipelines key on them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn record(&self, record: &AuditRecord) {
        let tier = record.tier.map(|t| t.as_str()).unwrap_or("-");
        match &record.error {
            None => info!(
                customer_id = %record.customer_id,
                tier = %tier,
                usage = ?record.usage,
                discount = ?record.discount_rate,
                amount = ?record.amount,
                "billing computed"
            ),
            Some(message) => warn!(
                customer_id = %record.customer_id,
                tier = %tier,
                usage = ?record.usage,
                error = %message,
                "billing rejected"
            ),
        }
    }
}

// =============================================================================
// Memory Sink (tests / embedders)
// =============================================================================

/// Capturing sink: stores every record in memory.
///
/// Intended for tests and embedders that assert on emitted records. The
/// mutex is uncontended in practice; `record` holds it only for the push.
#[derive(Debug, Default)]
pub struct MemoryAudit {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAudit {
    /// Creates an empty capturing sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record captured so far, in emission order.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of records captured so far.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// True when nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAudit {
    fn record(&self, record: &AuditRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record.clone());
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
