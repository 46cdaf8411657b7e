//! Command implementations

mod candidates;
mod context;
mod deadman;
mod probe;
mod resolve;
mod run;

pub use candidates::candidates;
pub use context::Context;
pub use deadman::deadman;
pub use probe::probe;
pub use resolve::resolve;
pub use run::run;
