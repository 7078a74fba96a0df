//! Workflow orchestration for tagline

mod changelog;
mod release;
mod version;

pub use changelog::*;
pub use release::*;
pub use version::*;
