// src/identity/body.rs
//! `POST /admin/identities` request body
//!
//! Field names follow the Kratos admin API wire format.

use serde::Serialize;

use crate::consts::EMAIL_VIA;
use crate::db::UserRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityBody {
    pub schema_id: String,
    pub traits: Traits,
    pub verifiable_addresses: Vec<VerifiableAddress>,
    pub metadata_admin: MetadataAdmin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traits {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiableAddress {
    pub via: String,
    pub value: String,
    pub verified: bool,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataAdmin {
    pub imported_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub password: PasswordCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordCredentials {
    pub config: PasswordConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordConfig {
    pub hashed_password: String,
}

impl IdentityBody {
    /// Map a legacy user onto traits, one verifiable e-mail address and the
    /// admin metadata that remembers the old id. No credentials yet.
    pub fn from_record(record: &UserRecord, schema_id: &str) -> Self {
        let email = record.email.clone().unwrap_or_default();
        let status = if record.email_confirmed {
            "completed"
        } else {
            "pending"
        };

        IdentityBody {
            schema_id: schema_id.to_owned(),
            traits: Traits {
                email: email.clone(),
            },
            verifiable_addresses: vec![VerifiableAddress {
                via: EMAIL_VIA.to_owned(),
                value: email,
                verified: record.email_confirmed,
                status: status.to_owned(),
            }],
            metadata_admin: MetadataAdmin {
                imported_id: record.id.clone(),
            },
            credentials: None,
        }
    }

    /// Attach an already-encoded PBKDF2 crypt string as the password credential
    pub fn with_hashed_password(mut self, hashed_password: String) -> Self {
        self.credentials = Some(Credentials {
            password: PasswordCredentials {
                config: PasswordConfig { hashed_password },
            },
        });
        self
    }
}
