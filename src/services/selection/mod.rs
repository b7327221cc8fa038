//! Immediate vs. deferred commit of picked values.
//!
//! The engines never talk to the caller directly. Every value leaves through
//! [`SelectionProtocol`], which either reports it at once or stages it until
//! the user confirms.

use chrono::NaiveDateTime;

#[cfg(test)]
use mockall::automock;

use crate::models::selection::{CommitMode, SelectionState};

/// Receives the picker's outgoing calls.
#[cfg_attr(test, automock)]
pub trait PickerListener {
    /// A new value was committed
    fn on_change(&mut self, value: NaiveDateTime);
    /// The picker asks its overlay to close
    fn on_close(&mut self);
}

/// Listener that records what the picker asked for during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSink {
    pub changes: Vec<NaiveDateTime>,
    pub close_requested: bool,
}

impl ChangeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_change(&self) -> Option<NaiveDateTime> {
        self.changes.last().copied()
    }
}

impl PickerListener for ChangeSink {
    fn on_change(&mut self, value: NaiveDateTime) {
        self.changes.push(value);
    }

    fn on_close(&mut self) {
        self.close_requested = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionProtocol {
    state: SelectionState,
}

impl SelectionProtocol {
    pub fn new(mode: CommitMode) -> Self {
        Self {
            state: SelectionState::new(mode),
        }
    }

    pub fn mode(&self) -> CommitMode {
        self.state.mode()
    }

    pub fn is_deferred(&self) -> bool {
        self.state.is_deferred()
    }

    pub fn pending(&self) -> Option<NaiveDateTime> {
        self.state.pending()
    }

    /// Report `value` now (immediate) or hold it (deferred).
    pub fn stage(&mut self, value: NaiveDateTime, listener: &mut dyn PickerListener) {
        match &mut self.state {
            SelectionState::Immediate => listener.on_change(value),
            SelectionState::Deferred { pending } => *pending = Some(value),
        }
    }

    /// Report the staged value and close. Does nothing in immediate mode.
    ///
    /// With nothing staged the overlay closes without a change.
    pub fn confirm(&mut self, listener: &mut dyn PickerListener) {
        if let SelectionState::Deferred { pending } = &mut self.state {
            let value = pending.take();
            listener.on_close();
            if let Some(value) = value {
                listener.on_change(value);
            }
        }
    }

    /// Drop any staged value and close without reporting a change.
    pub fn cancel(&mut self, listener: &mut dyn PickerListener) {
        if let SelectionState::Deferred { pending } = &mut self.state {
            *pending = None;
        }
        listener.on_close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn value() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_immediate_stage_reports_at_once() {
        let mut listener = MockPickerListener::new();
        listener.expect_on_change().with(eq(value())).times(1).return_const(());
        listener.expect_on_close().never();

        let mut protocol = SelectionProtocol::new(CommitMode::Immediate);
        protocol.stage(value(), &mut listener);
        assert_eq!(protocol.pending(), None);
    }

    #[test]
    fn test_deferred_stage_holds_value() {
        let mut listener = MockPickerListener::new();
        listener.expect_on_change().never();
        listener.expect_on_close().never();

        let mut protocol = SelectionProtocol::new(CommitMode::Deferred);
        protocol.stage(value(), &mut listener);
        assert_eq!(protocol.pending(), Some(value()));
    }

    #[test]
    fn test_deferred_confirm_closes_then_reports() {
        let mut seq = Sequence::new();
        let mut listener = MockPickerListener::new();
        listener.expect_on_close().times(1).in_sequence(&mut seq).return_const(());
        listener
            .expect_on_change()
            .with(eq(value()))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut protocol = SelectionProtocol::new(CommitMode::Deferred);
        protocol.stage(value(), &mut listener);
        protocol.confirm(&mut listener);
        assert_eq!(protocol.pending(), None);
    }

    #[test]
    fn test_deferred_cancel_never_reports() {
        let mut listener = MockPickerListener::new();
        listener.expect_on_change().never();
        listener.expect_on_close().times(1).return_const(());

        let mut protocol = SelectionProtocol::new(CommitMode::Deferred);
        protocol.stage(value(), &mut listener);
        protocol.cancel(&mut listener);
        assert_eq!(protocol.pending(), None);
    }

    #[test]
    fn test_confirm_without_pending_only_closes() {
        let mut sink = ChangeSink::new();
        let mut protocol = SelectionProtocol::new(CommitMode::Deferred);
        protocol.confirm(&mut sink);
        assert!(sink.close_requested);
        assert!(sink.changes.is_empty());
    }

    #[test]
    fn test_confirm_is_noop_in_immediate_mode() {
        let mut sink = ChangeSink::new();
        let mut protocol = SelectionProtocol::new(CommitMode::Immediate);
        protocol.confirm(&mut sink);
        assert_eq!(sink, ChangeSink::default());
    }

    #[test]
    fn test_committing_same_value_twice_reports_twice() {
        let mut sink = ChangeSink::new();
        let mut protocol = SelectionProtocol::new(CommitMode::Immediate);
        protocol.stage(value(), &mut sink);
        protocol.stage(value(), &mut sink);
        assert_eq!(sink.changes, vec![value(), value()]);
    }
}
