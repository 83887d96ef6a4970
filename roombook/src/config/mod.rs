//! Configuration system for roombook.
//!
//! Configuration is layered from YAML files, environment variables and
//! programmatic overrides, then validated.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROOMBOOK_*`)
//! 3. Project config (nearest `roombook.yaml`)
//! 4. User config (`~/.roombook/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use roombook::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         rooms: Some(vec!["101".into(), "102".into()]),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.catalog().unwrap().rooms().len(), 2);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
