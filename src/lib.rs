//! ITS Integration Module
//!
//! Client for the ITS educational-testing REST API, authenticated with the
//! OAuth2 client-credentials grant (RFC 6749 Section 4.4).
//!
//! # Features
//!
//! - Bearer token cache with single-flight refresh
//! - Local parameter validation driven by a static endpoint table
//! - Typed service wrappers for every catalogued operation
//! - Raw passthrough for ad hoc requests
//! - Configuration from a builder, a Postman environment export or
//!   environment variables
//!
//! # Example
//!
//! ```rust,ignore
//! use integrations_its::{its_config, ItsClient, RequestParameters};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = its_config()
//!         .client_id("my-client-id")
//!         .client_secret("my-client-secret")
//!         .token_url("https://identity.example.com/connect/token")
//!         .base_url("https://api.example.com")
//!         .default_program_id("238")
//!         .build()?;
//!
//!     let client = ItsClient::new(config)?;
//!
//!     let classes = client
//!         .event_classes()
//!         .query(
//!             RequestParameters::new()
//!                 .with("program-institution-id", "1009048")
//!                 .with("event-id", "3"),
//!         )
//!         .await?;
//!
//!     println!("{:?}", classes.json());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `types`: parameters, bodies, responses, tokens and configuration
//! - `error`: error hierarchy
//! - `core`: HTTP transport and clock
//! - `flows`: client-credentials token request
//! - `token`: token cache and refresh coordination
//! - `validation`: pre-flight parameter and body checks
//! - `endpoints`: operation descriptors and the catalog
//! - `client`: request pipeline and the `ItsClient` facade
//! - `services`: per-resource operation wrappers
//! - `builders`: configuration builder and environment loading

pub mod builders;
pub mod client;
pub mod core;
pub mod endpoints;
pub mod error;
pub mod flows;
pub mod services;
pub mod token;
pub mod types;
pub mod validation;

// Re-export main client
pub use client::{
    AuthenticatedRequestClient, ItsClient, OperationExecutor, ParameterDefaults, RawRequest,
    RequestOptions,
};

// Re-export builders
pub use builders::{its_config, ItsConfigBuilder};

// Re-export errors
pub use error::{
    ApiError, AuthError, ConfigurationError, ItsError, ItsResult, NetworkError, TimeoutError,
    TransportError, ValidationError, ViolationKind,
};

// Re-export types
pub use types::{
    // Config
    ClientAuthMethod, Credentials, ItsConfig,
    // Parameters and bodies
    ParamValue, RequestBody, RequestParameters,
    // Responses
    ApiResponse, ResponseBody,
    // Token
    AccessToken, TokenResponse, TokenState,
};

// Re-export core components
pub use core::{
    Clock, HttpBody, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ManualClock,
    MockHttpTransport, MultipartPart, ReqwestHttpTransport, SystemClock,
};

// Re-export flows
pub use flows::{ClientCredentialsFlow, ClientCredentialsFlowImpl, MockClientCredentialsFlow};

// Re-export token management
pub use token::{ClientCredentialsTokenManager, MockTokenManager, TokenManager, TokenManagerConfig};

// Re-export endpoints and validation
pub use endpoints::{catalog, Category, EndpointDescriptor, ParamRequirement};
pub use validation::{validate_request, ValidationContext};
