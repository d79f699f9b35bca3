//! Reply generation domain: request types, response normalization and the
//! HTTP client for the external generation service.

mod client;
mod error;
mod types;

pub use client::{ReplyClient, GENERATE_PATH};
pub use error::{ComposeError, GENERATION_FAILED_MESSAGE};
pub use types::{normalize_reply, ComposeRequest, Tone};
