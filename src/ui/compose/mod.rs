//! Compose form feature module.
//!
//! The form collects email text and a tone, sends one generation request
//! at a time and shows either the reply or a generic error.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form state and request phase
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `session.rs` - Request side effects around the reducer
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod session;
mod state;
mod view;

pub use intent::ComposeIntent;
pub use reducer::ComposeReducer;
pub use session::{ComposeSession, GenerationOutcome, PendingGeneration};
pub use state::{ComposePhase, ComposeState};
pub use view::render_compose_form;
