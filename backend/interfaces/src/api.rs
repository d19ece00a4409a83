use common_utils::{errors::CustomResult, request::Request};
use domain_types::{
    connector_flow::GatewayOperation, errors::HttpClientError,
    router_response_types::Response, types::EnvironmentContext,
};

/// Sends an already encoded request to the gateway and hands back the raw reply.
///
/// Implementations own timeouts and connection handling. Callers never retry.
#[async_trait::async_trait]
pub trait ConnectorTransport: Send + Sync {
    async fn send(&self, request: Request) -> CustomResult<Response, HttpClientError>;
}

/// Maps an operation to the absolute endpoint for the context's environment.
pub trait EndpointResolver: Send + Sync {
    fn resolve(&self, operation: GatewayOperation, context: &EnvironmentContext) -> String;
}
