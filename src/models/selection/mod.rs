//! Commit configuration shared by the calendar and the clock.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How a picked value reaches the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitMode {
    /// Every change is reported at once
    #[default]
    Immediate,
    /// Changes are staged until the user presses OK
    Deferred,
}

impl CommitMode {
    pub fn from_ok_to_confirm(ok_to_confirm: bool) -> Self {
        if ok_to_confirm {
            CommitMode::Deferred
        } else {
            CommitMode::Immediate
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, CommitMode::Deferred)
    }
}

/// Selection state. The variant is fixed when the picker is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Immediate,
    Deferred { pending: Option<NaiveDateTime> },
}

impl SelectionState {
    pub fn new(mode: CommitMode) -> Self {
        match mode {
            CommitMode::Immediate => SelectionState::Immediate,
            CommitMode::Deferred => SelectionState::Deferred { pending: None },
        }
    }

    pub fn mode(&self) -> CommitMode {
        match self {
            SelectionState::Immediate => CommitMode::Immediate,
            SelectionState::Deferred { .. } => CommitMode::Deferred,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, SelectionState::Deferred { .. })
    }

    /// Staged value, always `None` in immediate mode.
    pub fn pending(&self) -> Option<NaiveDateTime> {
        match self {
            SelectionState::Immediate => None,
            SelectionState::Deferred { pending } => *pending,
        }
    }
}
