// src/db/user_db_ops.rs
use rusqlite::{Connection, Result};

/// One row of `AspNetUsers`, trimmed to what the migration needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub email: Option<String>,
    pub email_confirmed: bool,
    /// Base64-wrapped legacy hash; `None` for external-login-only accounts
    pub password_hash: Option<String>,
}

/// Load every user, ordered by id so repeated runs visit them identically
pub fn load_users(conn: &Connection) -> Result<Vec<UserRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT Id, Email, EmailConfirmed, PasswordHash
        FROM AspNetUsers
        ORDER BY Id
        "#,
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(UserRecord {
            id: row.get(0)?,
            email: row.get(1)?,
            email_confirmed: row.get(2)?,
            password_hash: row.get(3)?,
        })
    })?;

    rows.collect()
}
