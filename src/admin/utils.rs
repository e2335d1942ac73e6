use crate::models::verification_requests::VERIF_STATUS_APPROVED;

/// Approval is monotonic: once a verification request is approved,
/// re-approving it reports success without touching the row.
pub fn is_already_approved(status: &str) -> bool {
    status == VERIF_STATUS_APPROVED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::verification_requests::VERIF_STATUS_PENDING;

    #[test]
    fn re_approving_an_approved_request_is_a_no_op() {
        assert!(is_already_approved(VERIF_STATUS_APPROVED));
    }

    #[test]
    fn pending_requests_still_need_approval() {
        assert!(!is_already_approved(VERIF_STATUS_PENDING));
    }
}
