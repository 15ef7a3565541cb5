//! Counter / echo / color board.
//!
//! Uses the MVI pattern:
//! - `state.rs` - the owned snapshot (`count`, `input`, `color`, `dark_mode`)
//! - `intent.rs` - typed actions, one variant per kind
//! - `action.rs` - decoding of raw `{"type", "payload"}` actions
//! - `reducer.rs` - state transitions (pure, total)

mod action;
mod intent;
mod reducer;
mod state;

pub use action::{ActionError, RawAction};
pub use intent::BoardIntent;
pub use reducer::BoardReducer;
pub use state::BoardState;
