//! Submission status shown above the contact form.

use std::time::Duration;

/// How long a success or error banner stays before the form goes idle.
pub const STATUS_DISPLAY: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

/// Inputs to [`SubmissionStatus::next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// A validated form went out to the relay.
    Started,
    Delivered(String),
    Failed(String),
    /// The display timeout elapsed. Only a shown banner expires; a
    /// submission in flight keeps loading.
    Expired,
}

impl SubmissionStatus {
    /// Transition function. Events that make no sense in the current state
    /// leave it unchanged.
    pub fn next(self, event: StatusEvent) -> SubmissionStatus {
        use SubmissionStatus::*;
        match (self, event) {
            (_, StatusEvent::Started) => Loading,
            (Loading, StatusEvent::Delivered(msg)) => Success(msg),
            (Loading, StatusEvent::Failed(msg)) => Error(msg),
            (Success(_) | Error(_), StatusEvent::Expired) => Idle,
            (state, _) => state,
        }
    }

    /// Apply an event in place.
    pub fn apply(&mut self, event: StatusEvent) {
        let current = std::mem::take(self);
        *self = current.next(event);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }

    /// Banner text, if the current state shows one.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Success(msg) | SubmissionStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let mut status = SubmissionStatus::Idle;
        status.apply(StatusEvent::Started);
        assert!(status.is_loading());
        status.apply(StatusEvent::Delivered("ok".into()));
        assert_eq!(status, SubmissionStatus::Success("ok".into()));
        assert_eq!(status.message(), Some("ok"));
        status.apply(StatusEvent::Expired);
        assert_eq!(status, SubmissionStatus::Idle);
    }

    #[test]
    fn failure_then_idle() {
        let status = SubmissionStatus::Idle
            .next(StatusEvent::Started)
            .next(StatusEvent::Failed("X".into()));
        assert_eq!(status, SubmissionStatus::Error("X".into()));
        assert_eq!(status.next(StatusEvent::Expired), SubmissionStatus::Idle);
    }

    #[test]
    fn outcome_without_loading_is_ignored() {
        let status = SubmissionStatus::Idle.next(StatusEvent::Delivered("late".into()));
        assert_eq!(status, SubmissionStatus::Idle);

        let status = SubmissionStatus::Error("a".into()).next(StatusEvent::Failed("b".into()));
        assert_eq!(status, SubmissionStatus::Error("a".into()));
    }

    #[test]
    fn expiry_does_not_interrupt_loading() {
        let status = SubmissionStatus::Loading.next(StatusEvent::Expired);
        assert_eq!(status, SubmissionStatus::Loading);
        assert_eq!(SubmissionStatus::Idle.next(StatusEvent::Expired), SubmissionStatus::Idle);
    }

    #[test]
    fn resubmit_from_banner_goes_back_to_loading() {
        let status = SubmissionStatus::Success("ok".into()).next(StatusEvent::Started);
        assert_eq!(status, SubmissionStatus::Loading);
        assert_eq!(status.message(), None);
    }
}
