use crate::core::request::ApiRequest;
use crate::core::response::ApiResponse;
use crate::traits::error::Result;
use async_trait::async_trait;

/// Trait for performing a single HTTP exchange
///
/// The pipeline never talks to the network directly; it hands fully prepared
/// requests (authorization header included) to a transport. Implementations
/// must not retry: transport failures surface to the caller as
/// `ClientError::RequestFailed`, and any HTTP status, 401 included, comes
/// back as an `ApiResponse`.
///
/// # Example
/// ```ignore
/// struct Canned(ApiResponse);
///
/// #[async_trait::async_trait]
/// impl HttpTransport for Canned {
///     async fn execute(&self, _request: &ApiRequest) -> Result<ApiResponse> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` and read the complete response
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse>;
}
