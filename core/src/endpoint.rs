//! Endpoint catalog for the analytics API.
//!
//! # Design
//! `Endpoint` is a closed sum type: one variant per remote operation, each
//! carrying only the data its own request needs. Resolution of root, path,
//! method, parameters, encoding, and headers is a pure total function of the
//! variant — there is no failure path at this layer, and adding an operation
//! forces every `match` below to be extended at compile time.
//!
//! The `Authorization` header is deliberately absent here: the dispatcher
//! attaches it from the [`Session`](crate::Session) so the catalog stays free
//! of shared state.

use reqwest::Method;
use serde_json::{Map, Value};

use crate::config::ApiRoot;
use crate::models::{
    ChartRequest, CreateWebhookRequest, LoginRequest, TransactionsRequest, UpdateWebhookRequest,
};

/// How resolved parameters travel on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Parameters serialized as the JSON request body.
    Json,
    /// Parameters appended to the URL as a query string.
    Query,
}

/// One remote operation of the analytics API.
#[derive(Debug, Clone)]
pub enum Endpoint {
    Login(LoginRequest),
    Logout,
    Me,
    Projects,
    ProjectDetail {
        project_id: String,
    },
    Overview,
    Charts(ChartRequest),
    Transactions(TransactionsRequest),
    TransactionDetail {
        project_id: String,
        subscriber_id: String,
    },
    TransactionActivity {
        project_id: String,
        subscriber_id: String,
    },
    Webhooks {
        project_id: String,
    },
    CreateWebhook {
        project_id: String,
        request: CreateWebhookRequest,
    },
    UpdateWebhook {
        project_id: String,
        webhook_id: String,
        request: UpdateWebhookRequest,
    },
    DeleteWebhook {
        project_id: String,
        webhook_id: String,
    },
    TestWebhook {
        project_id: String,
        webhook_id: String,
    },
}

impl Endpoint {
    /// Which base root this operation lives under. Project listing/detail,
    /// transaction activity, and all webhook operations are only served by
    /// the internal root; everything else is public API.
    pub fn root(&self) -> ApiRoot {
        match self {
            Endpoint::Projects
            | Endpoint::ProjectDetail { .. }
            | Endpoint::TransactionActivity { .. }
            | Endpoint::Webhooks { .. }
            | Endpoint::CreateWebhook { .. }
            | Endpoint::UpdateWebhook { .. }
            | Endpoint::DeleteWebhook { .. }
            | Endpoint::TestWebhook { .. } => ApiRoot::Internal,
            _ => ApiRoot::Public,
        }
    }

    /// URL path suffix under the base root.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login(_) => "login".to_string(),
            Endpoint::Logout => "logout".to_string(),
            Endpoint::Me => "me".to_string(),
            Endpoint::Projects => "me/projects".to_string(),
            Endpoint::ProjectDetail { project_id } => format!("me/projects/{project_id}"),
            Endpoint::Overview => "me/overview".to_string(),
            Endpoint::Charts(request) => format!("me/charts_v2/{}", request.name.as_str()),
            Endpoint::Transactions(_) => "me/transactions".to_string(),
            Endpoint::TransactionDetail {
                project_id,
                subscriber_id,
            } => format!("me/apps/{project_id}/subscribers/{subscriber_id}"),
            Endpoint::TransactionActivity {
                project_id,
                subscriber_id,
            } => format!("me/apps/{project_id}/subscribers/{subscriber_id}/activity"),
            Endpoint::Webhooks { project_id } | Endpoint::CreateWebhook { project_id, .. } => {
                format!("me/projects/{project_id}/integrations/webhooks")
            }
            Endpoint::UpdateWebhook {
                project_id,
                webhook_id,
                ..
            }
            | Endpoint::DeleteWebhook {
                project_id,
                webhook_id,
            } => format!("me/projects/{project_id}/integrations/webhooks/{webhook_id}"),
            Endpoint::TestWebhook {
                project_id,
                webhook_id,
            } => format!(
                "me/projects/{project_id}/integrations/webhooks/{webhook_id}/test_webhook"
            ),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login(_)
            | Endpoint::Logout
            | Endpoint::CreateWebhook { .. }
            | Endpoint::TestWebhook { .. } => Method::POST,
            Endpoint::UpdateWebhook { .. } => Method::PUT,
            Endpoint::DeleteWebhook { .. } => Method::DELETE,
            _ => Method::GET,
        }
    }

    /// Resolved key-value parameters, or `None` for parameterless calls.
    ///
    /// Overview and transaction detail/activity always inject the literal
    /// `sandbox_mode: false` the backend requires; payload-carrying variants
    /// forward their embedded request verbatim (chart `name` is part of the
    /// path, never a parameter).
    pub fn parameters(&self) -> Option<Map<String, Value>> {
        match self {
            Endpoint::Login(request) => Some(request.params()),
            Endpoint::Overview
            | Endpoint::TransactionDetail { .. }
            | Endpoint::TransactionActivity { .. } => {
                let mut params = Map::new();
                params.insert("sandbox_mode".to_string(), Value::Bool(false));
                Some(params)
            }
            Endpoint::Charts(request) => Some(request.params()),
            Endpoint::Transactions(request) => Some(request.params()),
            Endpoint::CreateWebhook { request, .. } => Some(request.params()),
            Endpoint::UpdateWebhook { request, .. } => Some(request.params()),
            _ => None,
        }
    }

    pub fn encoding(&self) -> Encoding {
        match self {
            Endpoint::Login(_) | Endpoint::CreateWebhook { .. } | Endpoint::UpdateWebhook { .. } => {
                Encoding::Json
            }
            _ => Encoding::Query,
        }
    }

    /// Static headers for this operation. `X-Requested-With` goes on every
    /// call; logout and webhook delete/test carry no body but the backend
    /// still expects an explicit JSON content type on them.
    pub fn headers(&self) -> Vec<(&'static str, &'static str)> {
        let mut headers = vec![("X-Requested-With", "XMLHttpRequest")];
        match self {
            Endpoint::Logout | Endpoint::DeleteWebhook { .. } | Endpoint::TestWebhook { .. } => {
                headers.push(("Content-Type", "application/json"));
            }
            _ => {}
        }
        headers
    }
}
