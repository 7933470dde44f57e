//! ITS Endpoints
//!
//! The operation table the facade and validators are driven by.

pub mod catalog;
pub mod descriptor;

pub use descriptor::*;
