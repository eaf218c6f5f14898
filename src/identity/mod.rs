// src/identity/mod.rs
//! Target side of the migration: the identity payload and where it is sent

pub mod body;
pub mod client;

pub use body::{
    Credentials, IdentityBody, MetadataAdmin, PasswordConfig, PasswordCredentials, Traits,
    VerifiableAddress,
};
pub use client::KratosAdminClient;

use serde::Deserialize;

use crate::error::SinkError;

/// What the identity service hands back for a created identity
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIdentity {
    pub id: String,
}

/// Anything that can accept a finished identity payload
pub trait IdentitySink {
    fn create_identity(&self, body: &IdentityBody) -> Result<CreatedIdentity, SinkError>;
}

impl<S: IdentitySink + ?Sized> IdentitySink for &S {
    fn create_identity(&self, body: &IdentityBody) -> Result<CreatedIdentity, SinkError> {
        (**self).create_identity(body)
    }
}
