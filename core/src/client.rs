//! Request dispatcher: turns an [`Endpoint`] plus the current [`Session`]
//! into an HTTP round-trip and a typed result.
//!
//! # Design
//! `ApiClient` sends each call exactly once: no retry, no caching, no
//! in-flight deduplication, no timeout beyond the transport default. It reads
//! the session token on every dispatch and never mutates it — a 401 comes
//! back as `ApiError::Service { status: 401 }` for the caller to interpret.
//! A 2xx with an empty body is a successful `None`, since several write
//! operations answer with no payload.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::endpoint::{Encoding, Endpoint};
use crate::error::{ApiError, ServiceError};
use crate::models::{
    ChartRequest, ChartResponse, CreateWebhookRequest, LoginRequest, LoginResponse, MeResponse,
    OverviewResponse, Project, TransactionActivityResponse, TransactionDetailResponse,
    TransactionsRequest, TransactionsResponse, UpdateWebhookRequest, Webhook, WebhooksResponse,
};
use crate::session::Session;

/// Async client for the analytics API. Cheap to clone; clones share the
/// underlying connection pool and session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Session,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Dispatch `endpoint` and decode the response body into `T`.
    ///
    /// Returns `Ok(None)` on a 2xx with an empty body. Non-2xx statuses map
    /// to [`ApiError::Service`], carrying the vendor error envelope when the
    /// body decodes as one; a body that fails to decode as `T` on a 2xx is
    /// an [`ApiError::Decoding`], never a silent `None`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<Option<T>, ApiError> {
        let method = endpoint.method();
        let url = format!("{}/{}", self.config.root(endpoint.root()), endpoint.path());

        let mut builder = self.http.request(method.clone(), &url);
        for (name, value) in endpoint.headers() {
            builder = builder.header(name, value);
        }
        if let Some(token) = self.session.token().await {
            builder = builder.bearer_auth(token);
        }
        if let Some(params) = endpoint.parameters() {
            builder = match endpoint.encoding() {
                Encoding::Json => builder.json(&params),
                Encoding::Query => builder.query(&query_pairs(&params)),
            };
        }

        debug!(%method, %url, "dispatching");
        let response = builder.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::Transport)?;

        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "service error");
            let body = serde_json::from_slice::<ServiceError>(&bytes).ok();
            return Err(ApiError::Service {
                status: status.as_u16(),
                body,
            });
        }

        if bytes.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(ApiError::Decoding)
    }

    /// Dispatch an operation whose response body, if any, is not interesting.
    async fn request_unit(&self, endpoint: &Endpoint) -> Result<(), ApiError> {
        self.request::<Value>(endpoint).await.map(|_| ())
    }

    // Typed wrappers, one per operation.

    pub async fn login(&self, request: LoginRequest) -> Result<Option<LoginResponse>, ApiError> {
        self.request(&Endpoint::Login(request)).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.request_unit(&Endpoint::Logout).await
    }

    pub async fn me(&self) -> Result<Option<MeResponse>, ApiError> {
        self.request(&Endpoint::Me).await
    }

    pub async fn projects(&self) -> Result<Option<Vec<Project>>, ApiError> {
        self.request(&Endpoint::Projects).await
    }

    pub async fn project_detail(&self, project_id: &str) -> Result<Option<Project>, ApiError> {
        self.request(&Endpoint::ProjectDetail {
            project_id: project_id.to_string(),
        })
        .await
    }

    pub async fn overview(&self) -> Result<Option<OverviewResponse>, ApiError> {
        self.request(&Endpoint::Overview).await
    }

    pub async fn charts(&self, request: ChartRequest) -> Result<Option<ChartResponse>, ApiError> {
        self.request(&Endpoint::Charts(request)).await
    }

    pub async fn transactions(
        &self,
        request: TransactionsRequest,
    ) -> Result<Option<TransactionsResponse>, ApiError> {
        self.request(&Endpoint::Transactions(request)).await
    }

    pub async fn transaction_detail(
        &self,
        project_id: &str,
        subscriber_id: &str,
    ) -> Result<Option<TransactionDetailResponse>, ApiError> {
        self.request(&Endpoint::TransactionDetail {
            project_id: project_id.to_string(),
            subscriber_id: subscriber_id.to_string(),
        })
        .await
    }

    pub async fn transaction_activity(
        &self,
        project_id: &str,
        subscriber_id: &str,
    ) -> Result<Option<TransactionActivityResponse>, ApiError> {
        self.request(&Endpoint::TransactionActivity {
            project_id: project_id.to_string(),
            subscriber_id: subscriber_id.to_string(),
        })
        .await
    }

    pub async fn webhooks(&self, project_id: &str) -> Result<Option<WebhooksResponse>, ApiError> {
        self.request(&Endpoint::Webhooks {
            project_id: project_id.to_string(),
        })
        .await
    }

    pub async fn create_webhook(
        &self,
        project_id: &str,
        request: CreateWebhookRequest,
    ) -> Result<Option<Webhook>, ApiError> {
        self.request(&Endpoint::CreateWebhook {
            project_id: project_id.to_string(),
            request,
        })
        .await
    }

    pub async fn update_webhook(
        &self,
        project_id: &str,
        webhook_id: &str,
        request: UpdateWebhookRequest,
    ) -> Result<Option<Webhook>, ApiError> {
        self.request(&Endpoint::UpdateWebhook {
            project_id: project_id.to_string(),
            webhook_id: webhook_id.to_string(),
            request,
        })
        .await
    }

    pub async fn delete_webhook(
        &self,
        project_id: &str,
        webhook_id: &str,
    ) -> Result<(), ApiError> {
        self.request_unit(&Endpoint::DeleteWebhook {
            project_id: project_id.to_string(),
            webhook_id: webhook_id.to_string(),
        })
        .await
    }

    pub async fn test_webhook(&self, project_id: &str, webhook_id: &str) -> Result<(), ApiError> {
        self.request_unit(&Endpoint::TestWebhook {
            project_id: project_id.to_string(),
            webhook_id: webhook_id.to_string(),
        })
        .await
    }
}

/// Render a parameter map as query pairs. String values go out bare (no JSON
/// quoting); everything else uses its JSON rendering, so the injected
/// `sandbox_mode: false` becomes `sandbox_mode=false`.
fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}
