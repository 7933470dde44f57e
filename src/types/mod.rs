//! ITS Types
//!
//! Configuration, token, parameter and response types.

pub mod config;
pub mod params;
pub mod request;
pub mod response;
pub mod token;

pub use config::*;
pub use params::*;
pub use request::*;
pub use response::*;
pub use token::*;
