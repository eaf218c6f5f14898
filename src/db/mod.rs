// src/db/mod.rs
//! Legacy user store access
//!
//! Reads the ASP.NET Core Identity `AspNetUsers` table. Never writes to it
//! outside of `ensure_schema`, which exists for fixtures.

pub mod user_db_conn;
pub mod user_db_ops;

pub use user_db_conn::{ensure_schema, open_user_db};
pub use user_db_ops::{load_users, UserRecord};
