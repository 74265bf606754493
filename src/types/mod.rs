//! Domain-based type organization
//!
//! - settings: stored settings, form state and the save wire type
//! - status: the status line shown by the shell

pub mod settings;
pub mod status;

pub use settings::*;
pub use status::*;
