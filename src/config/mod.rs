// src/config/mod.rs
//! Configuration system for identity-migrator
//!
//! TOML file + environment overrides. The environment variable names are
//! the ones operators already export for the migration job.

pub use app::{access_token_from_env, load, load_from, Config, Migration, Source, Target};

mod app;
mod defaults;
