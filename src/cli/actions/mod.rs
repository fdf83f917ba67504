//! Actions for rewriting catalogs.
//!
//! Actions convert Issues into Operations and execute them.
//!
//! ```text
//! Issue (problem detected)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (catalog edit)
//!     ↓
//! execute (parse, edit, write back)
//! ```
//!
//! - [`RemoveVanished`]: Delete vanished messages from `.ts` files (clean)

mod operation;
mod remove_vanished;
mod traits;

pub use operation::Operation;
pub use remove_vanished::RemoveVanished;
pub use traits::{Action, ActionStats};
