//! State for the compose form.

use crate::reply::{ComposeRequest, Tone};
use crate::ui::mvi::UiState;

/// Where the form is in the request lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ComposePhase {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A request is in flight.
    Submitting {
        /// Sequence number of the in-flight request.
        generation: u64,
        animation_tick: u8,
    },

    /// Last request produced a reply.
    Succeeded,

    /// Last request failed.
    Failed,
}

/// Everything the compose form renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposeState {
    pub email_content: String,
    pub tone: Tone,
    /// Last successful reply; only a later success replaces it.
    pub generated_reply: String,
    /// User-facing error message, empty when there is none.
    pub error: String,
    pub phase: ComposePhase,
    /// Sequence number handed to the most recent submission.
    pub(super) last_generation: u64,
}

impl UiState for ComposeState {}

impl ComposeState {
    pub fn with_tone(tone: Tone) -> Self {
        Self {
            tone,
            ..Self::default()
        }
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ComposePhase::Submitting { .. })
    }

    /// Submit trigger is enabled only with content and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.email_content.is_empty() && !self.is_loading()
    }

    pub fn has_reply(&self) -> bool {
        !self.generated_reply.is_empty()
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Generation number of the request in flight, if any.
    pub fn in_flight_generation(&self) -> Option<u64> {
        match self.phase {
            ComposePhase::Submitting { generation, .. } => Some(generation),
            _ => None,
        }
    }

    pub fn animation_tick(&self) -> u8 {
        match self.phase {
            ComposePhase::Submitting { animation_tick, .. } => animation_tick,
            _ => 0,
        }
    }

    /// Request built from the current form fields.
    pub fn request(&self) -> ComposeRequest {
        ComposeRequest::new(self.email_content.clone(), self.tone)
    }
}
