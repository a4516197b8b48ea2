use anchor_lang::prelude::*;

use crate::{errors::ErrorCode, state::OracleTracker, utils::derive_request_id};

impl OracleTracker {
    /// Opens the engine's single request slot for `round_id` and returns the new request id.
    pub fn issue(&mut self, round_id: u64) -> Result<[u8; 32]> {
        require!(!self.outstanding, ErrorCode::AlreadyRequested);

        let request_id = derive_request_id(round_id, self.nonce);
        self.nonce = self.nonce.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        self.outstanding = true;
        self.round_id = round_id;
        self.request_id = request_id;

        Ok(request_id)
    }

    /// Round id the outstanding request was issued for, if `request_id` is that request.
    pub fn check(&self, request_id: &[u8; 32]) -> Result<u64> {
        require!(
            self.outstanding && self.request_id == *request_id,
            ErrorCode::UnknownRequest
        );
        Ok(self.round_id)
    }

    /// Consumes the outstanding request. A second resolve of the same id fails.
    pub fn resolve(&mut self, request_id: &[u8; 32]) -> Result<u64> {
        let round_id = self.check(request_id)?;
        self.clear();
        Ok(round_id)
    }

    /// Drops the outstanding request of `round_id` without a callback. Returns whether one was dropped.
    pub fn cancel(&mut self, round_id: u64) -> bool {
        if self.outstanding && self.round_id == round_id {
            self.clear();
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.outstanding = false;
        self.round_id = 0;
        self.request_id = [0u8; 32];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_resolve_once() {
        let mut tracker = OracleTracker::default();
        let request_id = tracker.issue(4).unwrap();

        assert_eq!(tracker.check(&request_id).unwrap(), 4);
        assert_eq!(tracker.resolve(&request_id).unwrap(), 4);
        assert!(!tracker.outstanding);

        let err = tracker.resolve(&request_id).unwrap_err();
        assert_eq!(err, ErrorCode::UnknownRequest.into());
    }

    #[test]
    fn rejects_second_issue_while_outstanding() {
        let mut tracker = OracleTracker::default();
        let first = tracker.issue(1).unwrap();

        let err = tracker.issue(1).unwrap_err();
        assert_eq!(err, ErrorCode::AlreadyRequested.into());
        assert_eq!(tracker.request_id, first);
        assert_eq!(tracker.nonce, 1);
    }

    #[test]
    fn rejects_mismatched_request_id() {
        let mut tracker = OracleTracker::default();
        tracker.issue(2).unwrap();

        let err = tracker.resolve(&[9u8; 32]).unwrap_err();
        assert_eq!(err, ErrorCode::UnknownRequest.into());
        assert!(tracker.outstanding);
    }

    #[test]
    fn stale_id_rejected_after_reissue() {
        let mut tracker = OracleTracker::default();
        let stale = tracker.issue(2).unwrap();
        assert!(tracker.cancel(2));
        let fresh = tracker.issue(2).unwrap();

        assert_ne!(stale, fresh);
        assert_eq!(tracker.resolve(&stale).unwrap_err(), ErrorCode::UnknownRequest.into());
        assert_eq!(tracker.resolve(&fresh).unwrap(), 2);
    }

    #[test]
    fn cancel_ignores_other_rounds() {
        let mut tracker = OracleTracker::default();
        tracker.issue(7).unwrap();
        assert!(!tracker.cancel(6));
        assert!(tracker.outstanding);
        assert!(tracker.cancel(7));
        assert!(!tracker.cancel(7));
    }
}
