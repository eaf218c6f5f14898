// src/config/defaults.rs
use crate::config::app::{Migration, Source, Target};
use crate::consts::DEFAULT_SCHEMA_ID;

pub const DEFAULT_CONFIG_PATH: &str = "migrator.toml";
pub const DEFAULT_USER_DB: &str = "identity.db";

/// Points at a file, overrides `DEFAULT_CONFIG_PATH`
pub const ENV_CONFIG: &str = "IDM_CONFIG";
pub const ENV_CONNECTION_STRING: &str = "CONNECTION_STRING";
pub const ENV_ADMIN_URL: &str = "KRATOS_ADMIN_URL";
pub const ENV_ACCESS_TOKEN: &str = "KRATOS_ACCESS_TOKEN";

pub fn default_source() -> Source {
    Source {
        user_db: DEFAULT_USER_DB.into(),
    }
}

pub fn default_target() -> Target {
    Target {
        admin_url: String::new(),
        schema_id: default_schema_id(),
    }
}

pub fn default_schema_id() -> String {
    DEFAULT_SCHEMA_ID.into()
}

pub fn default_migration() -> Migration {
    Migration {
        fail_fast: false,
        report_path: None,
    }
}
