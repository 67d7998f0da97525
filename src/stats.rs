//! Aggregates derived from a payment snapshot

use crate::payments::{PaymentRecord, PaymentStatus};

/// Totals shown in the dashboard header, recomputed from a full snapshot on
/// every refresh rather than adjusted incrementally.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatsSummary {
    /// Number of payments still awaiting a decision.
    pub pending_count: usize,
    /// Sum of amounts across approved payments.
    pub approved_total: f64,
}

impl StatsSummary {
    /// Derive the summary by scanning a snapshot of payment records.
    pub fn compute(records: &[PaymentRecord]) -> Self {
        let pending_count = records
            .iter()
            .filter(|record| record.status == PaymentStatus::Pending)
            .count();
        let approved_total = records
            .iter()
            .filter(|record| record.status == PaymentStatus::Approved)
            .map(|record| record.amount)
            .sum();

        Self {
            pending_count,
            approved_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::sample_record;

    #[test]
    fn empty_snapshot_yields_zeroes() {
        let stats = StatsSummary::compute(&[]);
        assert_eq!(stats.pending_count, 0);
        assert_eq!(stats.approved_total, 0.0);
    }

    #[test]
    fn counts_pending_and_sums_approved() {
        let records = vec![
            sample_record("a", PaymentStatus::Pending, 10.0),
            sample_record("b", PaymentStatus::Approved, 25.5),
            sample_record("c", PaymentStatus::Approved, 4.5),
            sample_record("d", PaymentStatus::Rejected, 99.0),
        ];

        let stats = StatsSummary::compute(&records);
        assert_eq!(stats.pending_count, 1);
        assert_eq!(stats.approved_total, 30.0);
    }

    #[test]
    fn rejected_payments_affect_neither_figure() {
        let records = vec![
            sample_record("a", PaymentStatus::Rejected, 10.0),
            sample_record("b", PaymentStatus::Rejected, 20.0),
        ];

        let stats = StatsSummary::compute(&records);
        assert_eq!(stats.pending_count, 0);
        assert_eq!(stats.approved_total, 0.0);
    }

    #[test]
    fn ten_record_snapshot_with_four_approvals() {
        // Six pending records and four approved ones summing to 1500.00.
        let mut records = Vec::new();
        for i in 0..6 {
            records.push(sample_record(
                &format!("pending-{}", i),
                PaymentStatus::Pending,
                50.0,
            ));
        }
        records.push(sample_record("appr-0", PaymentStatus::Approved, 100.25));
        records.push(sample_record("appr-1", PaymentStatus::Approved, 200.25));
        records.push(sample_record("appr-2", PaymentStatus::Approved, 599.50));
        records.push(sample_record("appr-3", PaymentStatus::Approved, 600.00));

        let stats = StatsSummary::compute(&records);
        assert_eq!(stats.pending_count, 6);
        assert_eq!(stats.approved_total, 1500.00);
    }
}
