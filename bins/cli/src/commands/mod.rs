//! CLI command handlers.

pub mod info;
pub mod users;

pub use info::run_info;
pub use users::{run_discount, run_lookup, run_resolve};
