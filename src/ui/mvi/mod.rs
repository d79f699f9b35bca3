//! Model-View-Intent (MVI) primitives for the compose form.
//!
//! ```text
//! key press / network completion
//!          │
//!       Intent ──→ Reducer ──→ State ──→ View
//!          ↑                              │
//!          └──────────────────────────────┘
//! ```
//!
//! - **State**: everything the form renders
//! - **Intent**: user actions and request completions
//! - **Reducer**: the single place state changes

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
