// src/db/user_db_conn.rs
use std::path::Path;

use rusqlite::{Connection, OpenFlags, Result};

/// Open an existing user database read-only
pub fn open_user_db<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
}

/// Create the subset of the Identity schema the migrator reads
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS AspNetUsers (
            Id TEXT PRIMARY KEY NOT NULL,
            UserName TEXT,
            Email TEXT,
            EmailConfirmed INTEGER NOT NULL DEFAULT 0,
            PasswordHash TEXT
        );
        "#,
    )
}
