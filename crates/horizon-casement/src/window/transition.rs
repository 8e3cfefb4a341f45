//! Tracking of animated mode transitions.
//!
//! Native full-screen changes may animate. While one is in flight, further
//! mode requests must not be applied on top of the half-finished host state.
//! [`TransitionTracker`] decides what happens to each request:
//!
//! - the same request as the in-flight one is coalesced (dropped);
//! - its inverse supersedes it when nothing is queued: the in-flight token is
//!   abandoned and the inverse applies at once;
//! - anything else is queued and applied in FIFO order after the host reports
//!   completion.
//!
//! Completions carry the [`TransitionToken`] they were started with. A
//! completion for an abandoned token is stale and ignored.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use horizon_casement_core::logging::targets;

/// Identifies one host transition.
///
/// Tokens increase monotonically for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionToken(u64);

impl TransitionToken {
    /// Get the raw u64 value of this token.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransitionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

static NEXT_TRANSITION_TOKEN: AtomicU64 = AtomicU64::new(1);

fn next_token() -> TransitionToken {
    TransitionToken(NEXT_TRANSITION_TOKEN.fetch_add(1, Ordering::Relaxed))
}

/// A request to change the window mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeRequest {
    /// Enter or leave native full screen.
    Fullscreen(bool),
    /// Enter or leave simple full screen.
    SimpleFullscreen(bool),
    /// Enter or leave kiosk mode.
    Kiosk(bool),
    /// Maximize the window.
    Maximize,
    /// Restore from maximized.
    Unmaximize,
    /// Minimize the window.
    Minimize,
    /// Restore from minimized.
    Restore,
}

impl ModeRequest {
    /// Whether `other` undoes `self`.
    pub fn is_inverse_of(self, other: ModeRequest) -> bool {
        use ModeRequest::*;
        match (self, other) {
            (Fullscreen(a), Fullscreen(b))
            | (SimpleFullscreen(a), SimpleFullscreen(b))
            | (Kiosk(a), Kiosk(b)) => a != b,
            (Maximize, Unmaximize) | (Unmaximize, Maximize) => true,
            (Minimize, Restore) | (Restore, Minimize) => true,
            _ => false,
        }
    }
}

/// What the caller should do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Nothing is in flight; apply now.
    Apply,
    /// Identical to the in-flight request; drop it.
    Coalesced,
    /// The in-flight transition was abandoned; apply the inverse now.
    Superseded(TransitionToken),
    /// Queued until the in-flight transition completes.
    Queued,
}

/// One in-flight transition plus a FIFO of pending requests.
#[derive(Debug, Default)]
pub struct TransitionTracker {
    in_flight: Option<(TransitionToken, ModeRequest)>,
    pending: VecDeque<ModeRequest>,
}

impl TransitionTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for a host call.
    pub fn issue(&self) -> TransitionToken {
        next_token()
    }

    /// Decide how to handle `request` given the current in-flight transition.
    pub fn admit(&mut self, request: ModeRequest) -> Admission {
        let Some((token, current)) = self.in_flight else {
            return Admission::Apply;
        };

        if current == request {
            tracing::trace!(
                target: targets::TRANSITION,
                %token,
                ?request,
                "coalesced with in-flight transition"
            );
            return Admission::Coalesced;
        }

        if current.is_inverse_of(request) && self.pending.is_empty() {
            self.in_flight = None;
            tracing::debug!(
                target: targets::TRANSITION,
                %token,
                ?request,
                "in-flight transition superseded"
            );
            return Admission::Superseded(token);
        }

        self.enqueue(request);
        Admission::Queued
    }

    fn enqueue(&mut self, request: ModeRequest) {
        match self.pending.back() {
            Some(&last) if last == request => {}
            Some(&last) if last.is_inverse_of(request) => {
                self.pending.pop_back();
            }
            _ => self.pending.push_back(request),
        }
        tracing::trace!(
            target: targets::TRANSITION,
            ?request,
            pending = self.pending.len(),
            "request queued"
        );
    }

    /// Mark a host transition as animating.
    pub fn begin(&mut self, token: TransitionToken, request: ModeRequest) {
        tracing::debug!(target: targets::TRANSITION, %token, ?request, "transition animating");
        self.in_flight = Some((token, request));
    }

    /// Record the host's completion report.
    ///
    /// Returns `false` for a stale token, which leaves the tracker untouched.
    pub fn complete(&mut self, token: TransitionToken) -> bool {
        match self.in_flight {
            Some((current, _)) if current == token => {
                self.in_flight = None;
                tracing::debug!(target: targets::TRANSITION, %token, "transition finished");
                true
            }
            _ => {
                tracing::trace!(
                    target: targets::TRANSITION,
                    %token,
                    "ignoring stale transition completion"
                );
                false
            }
        }
    }

    /// Put a request at the head of the queue.
    ///
    /// Used when a request has to wait for the exit transition it started.
    pub fn defer(&mut self, request: ModeRequest) {
        self.pending.push_front(request);
    }

    /// Take the next queued request, if nothing is in flight.
    pub fn next_pending(&mut self) -> Option<ModeRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        self.pending.pop_front()
    }

    /// The in-flight token, if a transition is animating.
    pub fn in_flight(&self) -> Option<TransitionToken> {
        self.in_flight.map(|(token, _)| token)
    }

    /// The in-flight request, if a transition is animating.
    pub fn in_flight_request(&self) -> Option<ModeRequest> {
        self.in_flight.map(|(_, request)| request)
    }

    /// Whether a transition is animating.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Number of queued requests.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_monotonic() {
        let tracker = TransitionTracker::new();
        let a = tracker.issue();
        let b = tracker.issue();
        assert!(b > a);
    }

    #[test]
    fn test_idle_applies() {
        let mut tracker = TransitionTracker::new();
        assert_eq!(tracker.admit(ModeRequest::Maximize), Admission::Apply);
    }

    #[test]
    fn test_coalesce_and_supersede() {
        let mut tracker = TransitionTracker::new();
        let token = tracker.issue();
        tracker.begin(token, ModeRequest::Fullscreen(true));

        assert_eq!(tracker.admit(ModeRequest::Fullscreen(true)), Admission::Coalesced);
        assert_eq!(tracker.admit(ModeRequest::Fullscreen(false)), Admission::Superseded(token));
        assert!(!tracker.is_busy());
        assert!(!tracker.complete(token));
    }

    #[test]
    fn test_queue_is_fifo_and_collapses() {
        let mut tracker = TransitionTracker::new();
        let token = tracker.issue();
        tracker.begin(token, ModeRequest::Fullscreen(true));

        assert_eq!(tracker.admit(ModeRequest::Maximize), Admission::Queued);
        assert_eq!(tracker.admit(ModeRequest::Maximize), Admission::Queued);
        assert_eq!(tracker.admit(ModeRequest::Kiosk(true)), Admission::Queued);
        assert_eq!(tracker.admit(ModeRequest::Kiosk(false)), Admission::Queued);
        assert_eq!(tracker.admit(ModeRequest::Minimize), Admission::Queued);
        assert_eq!(tracker.pending_len(), 2);

        assert_eq!(tracker.next_pending(), None);
        assert!(tracker.complete(token));
        assert_eq!(tracker.next_pending(), Some(ModeRequest::Maximize));
        assert_eq!(tracker.next_pending(), Some(ModeRequest::Minimize));
        assert_eq!(tracker.next_pending(), None);
    }

    #[test]
    fn test_inverse_with_queue_is_queued() {
        let mut tracker = TransitionTracker::new();
        tracker.begin(tracker.issue(), ModeRequest::Fullscreen(true));
        tracker.admit(ModeRequest::Maximize);
        assert_eq!(tracker.admit(ModeRequest::Fullscreen(false)), Admission::Queued);
        assert!(tracker.is_busy());
    }

    #[test]
    fn test_inverse_pairs() {
        assert!(ModeRequest::Maximize.is_inverse_of(ModeRequest::Unmaximize));
        assert!(ModeRequest::Restore.is_inverse_of(ModeRequest::Minimize));
        assert!(ModeRequest::Kiosk(true).is_inverse_of(ModeRequest::Kiosk(false)));
        assert!(!ModeRequest::Kiosk(true).is_inverse_of(ModeRequest::Fullscreen(false)));
        assert!(!ModeRequest::Maximize.is_inverse_of(ModeRequest::Maximize));
    }
}
