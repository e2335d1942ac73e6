use chrono::NaiveTime;

use crate::models::booking_requests::{
    BOOKING_STATUS_APPROVED, BOOKING_STATUS_CANCELLED, BOOKING_STATUS_PENDING,
};

/// Strict overlap of two half-open intervals `[start, end)`.
pub fn overlaps(
    start: NaiveTime,
    end: NaiveTime,
    other_start: NaiveTime,
    other_end: NaiveTime,
) -> bool {
    start < other_end && end > other_start
}

/// Approved and already-cancelled requests stay put. Rejected requests can
/// still be cancelled by the requester.
pub fn is_cancellable(status: &str) -> bool {
    status != BOOKING_STATUS_APPROVED && status != BOOKING_STATUS_CANCELLED
}

/// Editing a request that already carries a review decision discards that
/// decision: anything not `Pending` goes back to `Pending` first.
pub fn needs_review_reset(status: &str) -> bool {
    status != BOOKING_STATUS_PENDING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking_requests::{BOOKING_STATUS_PENDING, BOOKING_STATUS_REJECTED};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms(h, m, 0)
    }

    // Creation only checks against committed semester schedules; other
    // booking requests are never consulted and approval performs no
    // re-check, so two approved requests can still overlap each other.

    #[test]
    fn partial_overlap_conflicts() {
        // Monday 09:30-10:30 against a committed 09:00-11:00 slot.
        assert!(overlaps(t(9, 30), t(10, 30), t(9, 0), t(11, 0)));
        assert!(overlaps(t(8, 30), t(9, 30), t(9, 0), t(11, 0)));
    }

    #[test]
    fn containment_conflicts_both_ways() {
        assert!(overlaps(t(9, 0), t(12, 0), t(10, 0), t(11, 0)));
        assert!(overlaps(t(10, 0), t(11, 0), t(9, 0), t(12, 0)));
        assert!(overlaps(t(9, 0), t(11, 0), t(9, 0), t(11, 0)));
    }

    #[test]
    fn back_to_back_slots_do_not_conflict() {
        assert!(!overlaps(t(9, 0), t(10, 0), t(10, 0), t(11, 0)));
        assert!(!overlaps(t(10, 0), t(11, 0), t(9, 0), t(10, 0)));
        assert!(!overlaps(t(9, 0), t(10, 0), t(13, 0), t(14, 0)));
    }

    #[test]
    fn pending_and_rejected_requests_are_cancellable() {
        assert!(is_cancellable(BOOKING_STATUS_PENDING));
        assert!(is_cancellable(BOOKING_STATUS_REJECTED));
    }

    #[test]
    fn approved_and_cancelled_requests_are_not_cancellable() {
        assert!(!is_cancellable(BOOKING_STATUS_APPROVED));
        assert!(!is_cancellable(BOOKING_STATUS_CANCELLED));
    }

    #[test]
    fn edits_force_reviewed_requests_back_to_pending() {
        assert!(needs_review_reset(BOOKING_STATUS_APPROVED));
        assert!(needs_review_reset(BOOKING_STATUS_REJECTED));
        assert!(needs_review_reset(BOOKING_STATUS_CANCELLED));
    }

    #[test]
    fn edits_to_pending_requests_skip_the_reset() {
        assert!(!needs_review_reset(BOOKING_STATUS_PENDING));
    }
}
