//! Intents for the compose form.

use crate::reply::Tone;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the compose form.
#[derive(Debug, Clone, PartialEq)]
pub enum ComposeIntent {
    /// Type a character into the email content.
    InsertChar(char),

    /// Delete the last character of the email content.
    Backspace,

    /// Append pasted text to the email content.
    Paste(String),

    /// Replace the email content.
    SetContent(String),

    /// Empty the email content.
    ClearContent,

    SelectTone(Tone),
    NextTone,
    PreviousTone,

    /// User pressed the generate trigger.
    Submit,

    /// Spinner tick while a request is in flight.
    AnimationTick,

    /// Request `generation` produced a reply.
    GenerationSucceeded { generation: u64, reply: String },

    /// Request `generation` failed.
    GenerationFailed { generation: u64 },
}

impl Intent for ComposeIntent {}
