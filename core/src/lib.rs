//! Async API client core for a subscription-revenue analytics service.
//!
//! # Overview
//! Three layers: an endpoint catalog (`Endpoint`, a closed sum type whose
//! root/path/method/parameters/encoding/headers resolution is pure and
//! total), a request dispatcher (`ApiClient`, one HTTP round-trip per call,
//! typed `ApiError` taxonomy), and per-endpoint response models that flatten
//! the backend's loosely-structured wire envelopes into typed values.
//!
//! # Design
//! - The bearer credential lives in an explicit [`Session`] handle, never in
//!   global state; the dispatcher reads it on every call and never refreshes
//!   or clears it.
//! - The dispatcher never retries, caches, or deduplicates; every call is
//!   independent, which is what makes the [`dashboard`] scatter/gather safe.
//! - Response models tolerate any missing optional field; only genuinely
//!   malformed payloads surface as [`ApiError::Decoding`].
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod session;

pub use client::ApiClient;
pub use config::{ApiConfig, ApiRoot};
pub use dashboard::{fetch_dashboard, CardConfig, Dashboard};
pub use endpoint::{Encoding, Endpoint};
pub use error::{ApiError, ServiceError};
pub use models::{
    ChartName, ChartPoint, ChartRequest, ChartResolution, ChartResponse, CreateWebhookRequest,
    LoginRequest, LoginResponse, MeResponse, OverviewResponse, Project, Transaction,
    TransactionActivityEvent, TransactionActivityResponse, TransactionDetailResponse,
    TransactionsRequest, TransactionsResponse, UpdateWebhookRequest, Webhook, WebhooksResponse,
};
pub use session::Session;
