//! ITS Client
//!
//! High-level facade combining token management, validation and the
//! operation catalog.

pub mod executor;
pub mod operations;

pub use executor::{AuthenticatedRequestClient, RequestOptions};
pub use operations::{OperationExecutor, ParameterDefaults};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::core::{HttpMethod, HttpTransport, ReqwestHttpTransport};
use crate::endpoints::{catalog, EndpointDescriptor};
use crate::error::{ConfigurationError, ItsError, ItsResult};
use crate::flows::ClientCredentialsFlowImpl;
use crate::services::*;
use crate::token::{ClientCredentialsTokenManager, TokenManager, TokenManagerConfig};
use crate::types::{ApiResponse, ItsConfig, RequestBody, RequestParameters, TokenState};
use crate::validation::ValidationContext;

/// Unvalidated ad hoc request.
#[derive(Clone, Debug)]
pub struct RawRequest {
    pub method: HttpMethod,
    pub query: RequestParameters,
    pub body: Option<RequestBody>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl RawRequest {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            query: RequestParameters::new(),
            body: None,
            headers: HashMap::new(),
            timeout: None,
        }
    }

    pub fn get() -> Self {
        Self::new(HttpMethod::Get)
    }

    pub fn post() -> Self {
        Self::new(HttpMethod::Post)
    }

    pub fn query(mut self, query: impl Into<RequestParameters>) -> Self {
        self.query = query.into();
        self
    }

    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// ITS API client.
pub struct ItsClient {
    config: ItsConfig,
    operations: OperationExecutor,
}

impl ItsClient {
    /// Create a client backed by reqwest.
    pub fn new(config: ItsConfig) -> ItsResult<Self> {
        let transport = ReqwestHttpTransport::new(config.timeout, &config.user_agent).map_err(|e| {
            ConfigurationError::InvalidValue {
                field: "http_client".to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a custom transport, shared by token and
    /// resource requests.
    pub fn with_transport(config: ItsConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let flow = Arc::new(ClientCredentialsFlowImpl::new(
            config.credentials.clone(),
            config.token_timeout,
            transport.clone(),
        ));
        let token_manager = ClientCredentialsTokenManager::new(
            flow,
            TokenManagerConfig {
                refresh_margin: config.refresh_margin,
                ..TokenManagerConfig::default()
            },
        );
        Self::with_components(config, transport, Arc::new(token_manager))
    }

    /// Create a client with custom implementations.
    pub fn with_components(
        config: ItsConfig,
        transport: Arc<dyn HttpTransport>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        let requests = AuthenticatedRequestClient::new(
            config.base_url.clone(),
            transport,
            token_manager,
            config.timeout,
        );
        let context = ValidationContext {
            institution_client: config.institution_client,
        };
        let operations =
            OperationExecutor::new(requests, ParameterDefaults::from_config(&config), context);
        Self { config, operations }
    }

    pub fn config(&self) -> &ItsConfig {
        &self.config
    }

    /// Cached token state, without I/O.
    pub fn token_state(&self) -> TokenState {
        self.operations.requests().token_manager().state()
    }

    /// Forget the cached token; the next call refreshes.
    pub fn invalidate_token(&self) {
        self.operations.requests().token_manager().invalidate();
    }

    /// Run a catalog operation.
    pub async fn execute(
        &self,
        descriptor: &EndpointDescriptor,
        params: impl Into<RequestParameters>,
        body: Option<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        self.operations.execute(descriptor, params.into(), body).await
    }

    /// Run an operation by id.
    pub async fn call(
        &self,
        operation_id: &str,
        params: impl Into<RequestParameters>,
        body: Option<RequestBody>,
    ) -> ItsResult<ApiResponse> {
        let descriptor = catalog::find(operation_id).ok_or_else(|| {
            ItsError::Configuration(ConfigurationError::InvalidValue {
                field: "operation_id".to_string(),
                message: format!("unknown operation {}", operation_id),
            })
        })?;
        self.execute(descriptor, params, body).await
    }

    /// Send a request without validation. Non-2xx statuses are returned.
    pub async fn raw(&self, path: &str, request: RawRequest) -> ItsResult<ApiResponse> {
        let options = RequestOptions {
            query: request.query,
            body: request.body,
            headers: request.headers,
            timeout: request.timeout,
        };
        self.operations
            .requests()
            .request(request.method, path, options)
            .await
    }

    // ========== Services ==========

    pub fn event_classes(&self) -> EventClassesService<'_> {
        EventClassesService::new(self)
    }

    pub fn events(&self) -> EventsService<'_> {
        EventsService::new(self)
    }

    pub fn examinees(&self) -> ExamineesService<'_> {
        ExamineesService::new(self)
    }

    pub fn forms(&self) -> FormsService<'_> {
        FormsService::new(self)
    }

    pub fn institutions(&self) -> InstitutionsService<'_> {
        InstitutionsService::new(self)
    }

    pub fn inventory(&self) -> InventoryService<'_> {
        InventoryService::new(self)
    }

    pub fn item_workshop(&self) -> ItemWorkshopService<'_> {
        ItemWorkshopService::new(self)
    }

    pub fn longitudinal_groups(&self) -> LongitudinalGroupsService<'_> {
        LongitudinalGroupsService::new(self)
    }

    pub fn messages(&self) -> MessagesService<'_> {
        MessagesService::new(self)
    }

    pub fn orders(&self) -> OrdersService<'_> {
        OrdersService::new(self)
    }

    pub fn packages(&self) -> PackagesService<'_> {
        PackagesService::new(self)
    }

    pub fn registrations(&self) -> RegistrationsService<'_> {
        RegistrationsService::new(self)
    }

    pub fn remote(&self) -> RemoteService<'_> {
        RemoteService::new(self)
    }

    pub fn results(&self) -> ResultsService<'_> {
        ResultsService::new(self)
    }

    pub fn scheduling(&self) -> SchedulingService<'_> {
        SchedulingService::new(self)
    }

    pub fn security(&self) -> SecurityService<'_> {
        SecurityService::new(self)
    }

    pub fn sessions(&self) -> SessionsService<'_> {
        SessionsService::new(self)
    }

    pub fn system(&self) -> SystemService<'_> {
        SystemService::new(self)
    }

    pub fn testing(&self) -> TestingService<'_> {
        TestingService::new(self)
    }

    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }
}

impl std::fmt::Debug for ItsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItsClient")
            .field("base_url", &self.config.base_url.as_str())
            .field("client_id", &self.config.credentials.client_id)
            .finish()
    }
}
