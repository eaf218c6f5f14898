// src/aliases.rs
//! Secret wrappers from secure-gate
//!
//! Anything that grants access to the identity service lives in one of these
//! so it is zeroized on drop and never shows up in logs by accident.

use secure_gate::dynamic_alias;

// Bearer token for the Kratos admin API
dynamic_alias!(AccessToken, String);
