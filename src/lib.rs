pub mod app;
pub mod cli;
pub mod config;
pub mod draft;
pub mod error;
pub mod refine;
pub mod session;

pub use error::{HookError, Result};
pub use refine::{Platform, RefinementResult, Refiner, refine};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
