//! Token Flows
//!
//! OAuth2 grant used to obtain ITS bearer tokens.

pub mod client_credentials;

pub use client_credentials::*;
