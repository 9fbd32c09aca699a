//! Profile-aware layered configuration.
//!
//! This crate resolves configuration keys from, in priority order, the process
//! environment, an environment-specific settings file
//! (`application-<profile>.yml`) and a base settings file (`application.yml`).
//! It provides typed getters, required-key enforcement, and helpers for the
//! active deployment profile.
//!
//! ```no_run
//! use profile_config::ConfigStore;
//!
//! # fn main() -> Result<(), profile_config::ConfigError> {
//! let config = ConfigStore::new("resources")?;
//! let endpoint = config.get_required("service.endpoint")?;
//! let pool_size = config.get_int("db.pool_size", 4)?;
//! if config.has_feature("search") {
//!     println!("search enabled against {} ({} connections)", endpoint, pool_size);
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod env;
mod error;
mod flatten;
mod profile;
mod source;
mod store;
mod value;

pub use env::{
    env_alias, env_value, env_value_or, env_var_or_none, load_dotenv, load_dotenv_from,
};
pub use error::ConfigError;
pub use flatten::flatten_mapping;
pub use profile::{active_profile, dataset_name_for, profile_file_name};
pub use source::{SourceError, load_yaml_mapping, resolve_source_path};
pub use store::ConfigStore;
pub use value::ConfigValue;
