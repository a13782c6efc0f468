//! In-memory fake of the subscription-analytics backend.
//!
//! Serves both API roots (`/v1/developers` and `/internal/v1/developers`)
//! with canned metric data and real webhook CRUD, and enforces the wire
//! contract the production backend enforces: `X-Requested-With` on every
//! call, a bearer token everywhere except login, and `sandbox_mode` on the
//! overview and subscriber detail/activity reads. The `churn` chart is wired
//! to fail with a 500 so clients can exercise per-card degradation.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// The one token the fake backend ever issues.
pub const AUTH_TOKEN: &str = "mock-token";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Webhook {
    pub id: String,
    pub name: String,
    pub url: String,
    pub environment: Option<String>,
    pub authorization_header: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateWebhook {
    pub name: String,
    pub url: String,
    pub environment: Option<String>,
    pub authorization_header: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateWebhook {
    pub name: Option<String>,
    pub url: Option<String>,
    pub environment: Option<String>,
    pub authorization_header: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginInput {
    pub email: String,
    #[allow(dead_code)]
    pub password: String,
    pub otp_code: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<String, Webhook>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/v1/developers/login", post(login))
        .route("/v1/developers/logout", post(logout))
        .route("/v1/developers/me", get(me))
        .route("/v1/developers/me/overview", get(overview))
        .route("/v1/developers/me/charts_v2/{name}", get(chart))
        .route("/v1/developers/me/transactions", get(transactions))
        .route(
            "/v1/developers/me/apps/{project_id}/subscribers/{subscriber_id}",
            get(transaction_detail),
        )
        .route(
            "/internal/v1/developers/me/apps/{project_id}/subscribers/{subscriber_id}/activity",
            get(transaction_activity),
        )
        .route("/internal/v1/developers/me/projects", get(projects))
        .route(
            "/internal/v1/developers/me/projects/{project_id}",
            get(project_detail),
        )
        .route(
            "/internal/v1/developers/me/projects/{project_id}/integrations/webhooks",
            get(list_webhooks).post(create_webhook),
        )
        .route(
            "/internal/v1/developers/me/projects/{project_id}/integrations/webhooks/{webhook_id}",
            axum::routing::put(update_webhook).delete(delete_webhook),
        )
        .route(
            "/internal/v1/developers/me/projects/{project_id}/integrations/webhooks/{webhook_id}/test_webhook",
            post(test_webhook),
        )
        .layer(middleware::from_fn(enforce_wire_contract))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_body(status: StatusCode, code: i64, message: &str) -> Response {
    (status, Json(json!({ "code": code, "message": message }))).into_response()
}

/// Reject requests that break the wire contract before any handler runs.
async fn enforce_wire_contract(req: Request, next: Next) -> Response {
    let csrf_ok = req
        .headers()
        .get("x-requested-with")
        .is_some_and(|v| v == "XMLHttpRequest");
    if !csrf_ok {
        return error_body(StatusCode::BAD_REQUEST, 7000, "missing X-Requested-With");
    }

    if req.uri().path() != "/v1/developers/login" {
        let authorized = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == format!("Bearer {AUTH_TOKEN}"));
        if !authorized {
            return error_body(StatusCode::UNAUTHORIZED, 7224, "invalid auth token");
        }
    }

    next.run(req).await
}

fn require_sandbox_mode(params: &HashMap<String, String>) -> Option<Response> {
    if params.get("sandbox_mode").map(String::as_str) != Some("false") {
        return Some(error_body(
            StatusCode::BAD_REQUEST,
            7001,
            "sandbox_mode is required",
        ));
    }
    None
}

async fn login(Json(input): Json<LoginInput>) -> Response {
    if input.otp_code.as_deref() == Some("000000") {
        return error_body(StatusCode::UNAUTHORIZED, 7225, "invalid one-time password");
    }
    Json(json!({ "token": AUTH_TOKEN, "email": input.email })).into_response()
}

async fn logout() -> StatusCode {
    StatusCode::OK
}

async fn me() -> Json<Value> {
    Json(json!({
        "distinct_id": "dev001",
        "email": "dev@example.com",
        "name": "Dev Eloper",
        "current_plan": "free",
        "first_transaction_at": "2023-06-01"
    }))
}

async fn overview(Query(params): Query<HashMap<String, String>>) -> Response {
    if let Some(rejection) = require_sandbox_mode(&params) {
        return rejection;
    }
    Json(json!({
        "mrr": 1234.56,
        "revenue": 9876.5,
        "active_subscribers_count": 321,
        "active_trials_count": 12,
        "active_users_count": 4567,
        "installs_count": 8910
    }))
    .into_response()
}

async fn chart(
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.get("resolution").is_none()
        || params.get("start_date").is_none()
        || params.get("end_date").is_none()
    {
        return error_body(StatusCode::BAD_REQUEST, 7002, "missing chart parameters");
    }
    // Fault injection: the churn chart always breaks.
    if name == "churn" {
        return error_body(StatusCode::INTERNAL_SERVER_ERROR, 7500, "chart backend down");
    }
    Json(json!({
        "name": name,
        "resolution": params.get("resolution"),
        "values": [
            [1706745600, 100.5, 42.0],
            [1706832000],
            [1706918400, 120.25]
        ],
        "summary": {
            "total": { "Total Revenue": 512.25, "Proceeds": 430.0 }
        }
    }))
    .into_response()
}

async fn transactions(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let limit = params
        .get("limit")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(2)
        .min(2);
    let rows = [
        json!({
            "app_user_id": "user001",
            "product_identifier": "app.pro.monthly",
            "store": "APP_STORE",
            "price": 9.99,
            "currency": "USD",
            "purchased_at": "2024-02-01T10:00:00Z"
        }),
        json!({
            "app_user_id": "user002",
            "product_identifier": "app.pro.yearly",
            "store": "PLAY_STORE",
            "price": 79.99,
            "currency": "EUR",
            "purchased_at": "2024-01-31T09:00:00Z"
        }),
    ];
    Json(json!({
        "transactions": &rows[..limit],
        "last_purchase_date": "2024-01-31T09:00:00Z"
    }))
}

async fn transaction_detail(
    Path((_project_id, subscriber_id)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = require_sandbox_mode(&params) {
        return rejection;
    }
    Json(json!({
        "app_user_id": subscriber_id,
        "created_at": "2023-12-25T08:00:00Z",
        "last_seen_at": "2024-02-01T10:00:00Z",
        "country": "US",
        "total_spent": 29.97
    }))
    .into_response()
}

async fn transaction_activity(
    Path((_project_id, subscriber_id)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = require_sandbox_mode(&params) {
        return rejection;
    }
    Json(json!({
        "events": [
            {
                "type": "INITIAL_PURCHASE",
                "body": {
                    "price": 9.99,
                    "currency": "USD",
                    "product_id": "app.pro.monthly",
                    "event_timestamp_ms": 1705350714054i64,
                    "period_type": "NORMAL"
                }
            },
            { "type": "CANCELLATION" }
        ],
        "subscriber": { "app_user_id": subscriber_id }
    }))
    .into_response()
}

async fn projects() -> Json<Value> {
    Json(json!([
        { "id": "p1", "name": "Kittengram", "bundle_id": "com.example.kittengram" },
        { "id": "p2", "name": "Pupflix" }
    ]))
}

async fn project_detail(Path(project_id): Path<String>) -> Response {
    match project_id.as_str() {
        "p1" => Json(json!({
            "id": "p1",
            "name": "Kittengram",
            "bundle_id": "com.example.kittengram",
            "icon_url": "https://cdn.example.com/p1.png"
        }))
        .into_response(),
        _ => error_body(StatusCode::NOT_FOUND, 7404, "project not found"),
    }
}

async fn list_webhooks(State(db): State<Db>, Path(_project_id): Path<String>) -> Json<Value> {
    let webhooks = db.read().await;
    Json(json!({ "webhooks": webhooks.values().cloned().collect::<Vec<_>>() }))
}

async fn create_webhook(
    State(db): State<Db>,
    Path(_project_id): Path<String>,
    Json(input): Json<CreateWebhook>,
) -> (StatusCode, Json<Webhook>) {
    let webhook = Webhook {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        url: input.url,
        environment: input.environment,
        authorization_header: input.authorization_header,
    };
    db.write().await.insert(webhook.id.clone(), webhook.clone());
    (StatusCode::CREATED, Json(webhook))
}

async fn update_webhook(
    State(db): State<Db>,
    Path((_project_id, webhook_id)): Path<(String, String)>,
    Json(input): Json<UpdateWebhook>,
) -> Response {
    let mut webhooks = db.write().await;
    let Some(webhook) = webhooks.get_mut(&webhook_id) else {
        return error_body(StatusCode::NOT_FOUND, 7404, "webhook not found");
    };
    if let Some(name) = input.name {
        webhook.name = name;
    }
    if let Some(url) = input.url {
        webhook.url = url;
    }
    if let Some(environment) = input.environment {
        webhook.environment = Some(environment);
    }
    if let Some(header) = input.authorization_header {
        webhook.authorization_header = Some(header);
    }
    Json(webhook.clone()).into_response()
}

async fn delete_webhook(
    State(db): State<Db>,
    Path((_project_id, webhook_id)): Path<(String, String)>,
) -> Response {
    let mut webhooks = db.write().await;
    match webhooks.remove(&webhook_id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => error_body(StatusCode::NOT_FOUND, 7404, "webhook not found"),
    }
}

async fn test_webhook(
    State(db): State<Db>,
    Path((_project_id, webhook_id)): Path<(String, String)>,
) -> Response {
    let webhooks = db.read().await;
    match webhooks.get(&webhook_id) {
        Some(_) => StatusCode::OK.into_response(),
        None => error_body(StatusCode::NOT_FOUND, 7404, "webhook not found"),
    }
}
