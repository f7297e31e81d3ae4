//! Application state plumbing shared by the business and UI crates.
//!
//! - [`StateCtx`] stores one value per [`State`] type and hands out typed borrows.
//! - [`LatestOnly`] / [`LatestOnlyUpdater`] carry async results back to the UI thread and
//!   drop anything produced by a superseded request.
//! - [`spawn`] runs a future on the platform runtime (Tokio on native, the JS event loop on web).

mod ctx;
mod error;
mod latest;
mod runtime;
mod state;
mod time;

pub use ctx::StateCtx;
pub use error::Error;
pub use latest::{LatestOnly, LatestOnlyUpdater};
pub use runtime::spawn;
pub use state::State;
pub use time::Time;
