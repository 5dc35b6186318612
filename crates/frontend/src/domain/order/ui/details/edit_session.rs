//! State machine for editing the measurement record.
//!
//! The draft is always a by-value copy, so the editor can never reach into
//! the controller's live state. The stored record is replaced with the
//! record as submitted; the update endpoint is not trusted to echo it back.

use contracts::domain::order::StretchData;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditSession {
    #[default]
    Closed,
    Open {
        draft: StretchData,
        error: Option<String>,
    },
    Submitting {
        draft: StretchData,
    },
}

impl EditSession {
    /// `Closed → Open`, seeding the editor with a copy of the current
    /// record. No-op while a session is already running.
    pub fn open(&mut self, record: StretchData) {
        if matches!(self, EditSession::Closed) {
            *self = EditSession::Open {
                draft: record,
                error: None,
            };
        }
    }

    /// `Open → Submitting`. Returns the record to send, or `None` when no
    /// submission may start from the current state.
    pub fn begin_submit(&mut self, edited: StretchData) -> Option<StretchData> {
        match self {
            EditSession::Open { .. } => {
                *self = EditSession::Submitting {
                    draft: edited.clone(),
                };
                Some(edited)
            }
            _ => None,
        }
    }

    /// `Submitting → Closed`.
    pub fn submit_succeeded(&mut self) {
        if matches!(self, EditSession::Submitting { .. }) {
            *self = EditSession::Closed;
        }
    }

    /// `Submitting → Open` with the draft retained and the failure surfaced,
    /// so the user can retry or cancel.
    pub fn submit_failed(&mut self, message: String) {
        if let EditSession::Submitting { draft } = self {
            *self = EditSession::Open {
                draft: std::mem::take(draft),
                error: Some(message),
            };
        }
    }

    /// `Open → Closed`, discarding the draft. No-op mid-submission.
    pub fn cancel(&mut self) {
        if matches!(self, EditSession::Open { .. }) {
            *self = EditSession::Closed;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, EditSession::Submitting { .. })
    }
}
