//! Mode-driven build policy for a front-end bundle.
//!
//! A single environment signal selects [`Mode`]; [`derive_config`] turns it into
//! an immutable [`BuildConfig`] (output naming, plugin set, optimization policy,
//! module rules) that an external bundler consumes.

pub mod config;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod naming;
pub mod optimization;
pub mod plugin;
pub mod rules;
pub mod settings;
pub mod validation;

// Re-export main types
pub use config::*;
pub use dev::*;
pub use error::*;
pub use mode::*;
pub use naming::*;
pub use optimization::*;
pub use plugin::*;
pub use rules::*;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, discover};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
