//! Token Management
//!
//! Bearer token cache and refresh coordination.

pub mod manager;

pub use manager::*;
