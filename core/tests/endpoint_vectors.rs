//! Verify endpoint resolution against the JSON vectors in `test-vectors/`.
//!
//! Every catalog variant has one vector pinning its resolved root, path,
//! method, encoding, parameters, and headers. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use revscope_core::{
    ApiRoot, ChartName, ChartRequest, ChartResolution, CreateWebhookRequest, Encoding, Endpoint,
    LoginRequest, TransactionsRequest, UpdateWebhookRequest,
};
use serde_json::Value;

/// Build the fixture endpoint a vector refers to. Payload values here must
/// match the vector's `parameters` block.
fn endpoint_for(name: &str) -> Endpoint {
    match name {
        "login" => Endpoint::Login(LoginRequest {
            email: "dev@example.com".to_string(),
            password: "hunter2".to_string(),
            otp_code: None,
        }),
        "logout" => Endpoint::Logout,
        "me" => Endpoint::Me,
        "projects" => Endpoint::Projects,
        "project_detail" => Endpoint::ProjectDetail {
            project_id: "p1".to_string(),
        },
        "overview" => Endpoint::Overview,
        "charts" => Endpoint::Charts(ChartRequest {
            name: ChartName::Mrr,
            resolution: ChartResolution::Day,
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-28".to_string(),
        }),
        "transactions" => Endpoint::Transactions(TransactionsRequest {
            end_date: Some("2024-02-01".to_string()),
            limit: Some(100),
        }),
        "transaction_detail" => Endpoint::TransactionDetail {
            project_id: "p1".to_string(),
            subscriber_id: "s1".to_string(),
        },
        "transaction_activity" => Endpoint::TransactionActivity {
            project_id: "p1".to_string(),
            subscriber_id: "s1".to_string(),
        },
        "webhooks" => Endpoint::Webhooks {
            project_id: "p1".to_string(),
        },
        "create_webhook" => Endpoint::CreateWebhook {
            project_id: "p1".to_string(),
            request: CreateWebhookRequest {
                name: "hook".to_string(),
                url: "https://example.com/hook".to_string(),
                environment: Some("production".to_string()),
                authorization_header: None,
            },
        },
        "update_webhook" => Endpoint::UpdateWebhook {
            project_id: "p1".to_string(),
            webhook_id: "w1".to_string(),
            request: UpdateWebhookRequest {
                url: Some("https://example.com/hook2".to_string()),
                ..Default::default()
            },
        },
        "delete_webhook" => Endpoint::DeleteWebhook {
            project_id: "p1".to_string(),
            webhook_id: "w1".to_string(),
        },
        "test_webhook" => Endpoint::TestWebhook {
            project_id: "p1".to_string(),
            webhook_id: "w1".to_string(),
        },
        other => panic!("unknown endpoint vector: {other}"),
    }
}

fn root_str(root: ApiRoot) -> &'static str {
    match root {
        ApiRoot::Public => "public",
        ApiRoot::Internal => "internal",
    }
}

fn encoding_str(encoding: Encoding) -> &'static str {
    match encoding {
        Encoding::Json => "json",
        Encoding::Query => "query",
    }
}

#[test]
fn every_variant_resolves_as_pinned() {
    let raw = include_str!("../../test-vectors/endpoints.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let cases = vectors["cases"].as_array().unwrap();
    assert_eq!(cases.len(), 15, "one vector per catalog variant");

    for case in cases {
        let name = case["endpoint"].as_str().unwrap();
        let endpoint = endpoint_for(name);

        assert_eq!(root_str(endpoint.root()), case["root"], "{name}: root");
        assert_eq!(endpoint.method().as_str(), case["method"], "{name}: method");
        assert_eq!(endpoint.path(), case["path"], "{name}: path");
        assert_eq!(
            encoding_str(endpoint.encoding()),
            case["encoding"],
            "{name}: encoding"
        );

        let parameters = match endpoint.parameters() {
            Some(params) => Value::Object(params),
            None => Value::Null,
        };
        assert_eq!(parameters, case["parameters"], "{name}: parameters");

        let headers: Vec<Value> = endpoint
            .headers()
            .into_iter()
            .map(|(key, value)| serde_json::json!([key, value]))
            .collect();
        assert_eq!(Value::Array(headers), case["headers"], "{name}: headers");
    }
}

#[test]
fn resolution_is_repeatable() {
    for case_name in ["charts", "overview", "delete_webhook"] {
        let first = endpoint_for(case_name);
        let second = endpoint_for(case_name);
        assert_eq!(first.path(), second.path());
        assert_eq!(first.parameters(), second.parameters());
        assert_eq!(first.headers(), second.headers());
    }
}
