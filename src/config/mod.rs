//! Configuration module for Wikipath
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every key has a default, so running without a file is the same as
//! running with an empty one.
//!
//! # Example
//!
//! ```no_run
//! use wikipath::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("wikipath.toml")).unwrap();
//! println!("Search will use {} workers", config.search.workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    BlacklistConfig, BoostRule, Config, FetchConfig, LinkConfig, ScoringConfig, SearchSettings,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};

pub use validation::validate;
