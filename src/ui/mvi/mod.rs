//! Model-View-Intent (MVI) primitives.
//!
//! Every state change in the UI flows in one direction:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: an owned snapshot, replaced on every transition
//! - **Intent**: a key press, paste or scripted action
//! - **Reducer**: pure function `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
