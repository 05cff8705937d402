use crate::config::ClientConfig;
use crate::core::helpers::check_response;
use crate::core::pipeline::{AuthEndpoints, AuthPipeline};
use crate::core::query::QueryParams;
use crate::core::refresh::RefreshState;
use crate::core::request::ApiRequest;
use crate::core::response::ApiResponse;
use crate::core::transport::ReqwestTransport;
use crate::core::vault::TokenVault;
use crate::traits::error::{ClientError, Result};
use crate::traits::redirect::{LogRedirect, LoginRedirect};
use crate::traits::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::traits::transport::HttpTransport;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Client for the scholar directory API
///
/// Cloning is cheap; clones share one pipeline, and with it one token vault
/// and one refresh slot.
#[derive(Clone)]
pub struct ScholarApi {
    base_url: Url,
    pipeline: Arc<AuthPipeline>,
}

impl ScholarApi {
    /// Client with the default transport, store and redirect for `config`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        ScholarApiBuilder::new(config.clone()).build()
    }

    pub fn builder(config: ClientConfig) -> ScholarApiBuilder {
        ScholarApiBuilder::new(config)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn pipeline(&self) -> &AuthPipeline {
        &self.pipeline
    }

    pub fn vault(&self) -> &TokenVault {
        self.pipeline.vault()
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.pipeline.refresh_state()
    }

    /// `base_url` with `segments` appended, each percent-encoded as a path segment
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn url_with_query(&self, segments: &[&str], query: &QueryParams) -> Result<Url> {
        let mut url = self.url(segments)?;
        query.apply(&mut url);
        Ok(url)
    }

    /// Send through the pipeline and map non-success statuses to `ClientError::Api`
    pub(crate) async fn execute(&self, request: ApiRequest, context: &str) -> Result<ApiResponse> {
        let response = self.pipeline.send(request).await?;
        check_response(response, context)
    }

    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        context: &str,
    ) -> Result<T> {
        let response = self.execute(request, context).await?;
        response.json()
    }

    /// For endpoints answering 204 or an ignorable body
    pub(crate) async fn execute_discarding(&self, request: ApiRequest, context: &str) -> Result<()> {
        let response = self.execute(request, context).await?;
        debug!("{} -> {}", context, response.status());
        Ok(())
    }
}

/// Assembles a [`ScholarApi`], defaulting each seam from the config
pub struct ScholarApiBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    store: Option<Arc<dyn KeyValueStore>>,
    redirect: Option<Arc<dyn LoginRedirect>>,
}

impl ScholarApiBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
            store: None,
            redirect: None,
        }
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn redirect(mut self, redirect: Arc<dyn LoginRedirect>) -> Self {
        self.redirect = Some(redirect);
        self
    }

    pub fn build(self) -> Result<ScholarApi> {
        self.config.validate()?;

        let base_url = self.config.endpoint("")?;
        let endpoints = AuthEndpoints {
            refresh_url: self.config.refresh_url()?,
            login_url: self.config.login_url()?,
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(
                self.config.request_timeout(),
                self.config.connect_timeout(),
            )?),
        };

        let store: Arc<dyn KeyValueStore> = match (self.store, &self.config.token_file) {
            (Some(store), _) => store,
            (None, Some(path)) => Arc::new(FileStore::open(path.clone())?),
            (None, None) => Arc::new(MemoryStore::new()),
        };

        let redirect: Arc<dyn LoginRedirect> = match self.redirect {
            Some(redirect) => redirect,
            None => Arc::new(LogRedirect),
        };

        let pipeline = AuthPipeline::new(transport, TokenVault::new(store), redirect, endpoints);

        Ok(ScholarApi {
            base_url,
            pipeline: Arc::new(pipeline),
        })
    }
}
