//! # PlotKit Settings
//!
//! Machine profile persistence: loading, saving, and validating
//! [`plotkit_core::MachineProfile`] values in JSON or TOML files stored in
//! platform-specific configuration directories.

pub mod error;
pub mod store;

pub use error::{SettingsError, SettingsResult};
pub use store::ProfileStore;
