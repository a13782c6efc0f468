//! Request payloads and response decoding contracts, one module per API area.
//!
//! # Design
//! Response models mirror the backend's wire shapes but are defined
//! independently of the mock server; integration tests catch schema drift.
//! Two policies apply everywhere, sourced from observed wire quirks:
//! every scalar field is optional (decoding never fails on a missing field),
//! and nested wrapper objects are flattened at decode time so consumers never
//! see wire nesting. Request payloads resolve to parameter maps by explicit
//! key insertion, keeping endpoint resolution total.

pub mod auth;
pub mod charts;
pub mod me;
pub mod overview;
pub mod transactions;
pub mod webhooks;

pub use auth::{LoginRequest, LoginResponse};
pub use charts::{ChartName, ChartPoint, ChartRequest, ChartResolution, ChartResponse};
pub use me::{MeResponse, Project};
pub use overview::OverviewResponse;
pub use transactions::{
    Transaction, TransactionActivityEvent, TransactionActivityResponse, TransactionDetailResponse,
    TransactionsRequest, TransactionsResponse,
};
pub use webhooks::{CreateWebhookRequest, UpdateWebhookRequest, Webhook, WebhooksResponse};
