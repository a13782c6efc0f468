//! Webhook integration models (internal root).

use serde::Deserialize;
use serde_json::{Map, Value};

/// One configured webhook integration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Webhook {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub environment: Option<String>,
    pub authorization_header: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhooksResponse {
    pub webhooks: Option<Vec<Webhook>>,
}

/// Payload for creating a webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWebhookRequest {
    pub name: String,
    pub url: String,
    pub environment: Option<String>,
    pub authorization_header: Option<String>,
}

impl CreateWebhookRequest {
    pub(crate) fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("name".to_string(), Value::String(self.name.clone()));
        params.insert("url".to_string(), Value::String(self.url.clone()));
        if let Some(environment) = &self.environment {
            params.insert(
                "environment".to_string(),
                Value::String(environment.clone()),
            );
        }
        if let Some(header) = &self.authorization_header {
            params.insert(
                "authorization_header".to_string(),
                Value::String(header.clone()),
            );
        }
        params
    }
}

/// Payload for updating a webhook; only the supplied fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateWebhookRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub environment: Option<String>,
    pub authorization_header: Option<String>,
}

impl UpdateWebhookRequest {
    pub(crate) fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        if let Some(name) = &self.name {
            params.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(url) = &self.url {
            params.insert("url".to_string(), Value::String(url.clone()));
        }
        if let Some(environment) = &self.environment {
            params.insert(
                "environment".to_string(),
                Value::String(environment.clone()),
            );
        }
        if let Some(header) = &self.authorization_header {
            params.insert(
                "authorization_header".to_string(),
                Value::String(header.clone()),
            );
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_params_include_required_fields() {
        let request = CreateWebhookRequest {
            name: "prod hook".to_string(),
            url: "https://example.com/hook".to_string(),
            environment: Some("production".to_string()),
            authorization_header: None,
        };
        let params = request.params();
        assert_eq!(params["name"], "prod hook");
        assert_eq!(params["url"], "https://example.com/hook");
        assert_eq!(params["environment"], "production");
        assert!(params.get("authorization_header").is_none());
    }

    #[test]
    fn update_params_carry_only_supplied_fields() {
        let request = UpdateWebhookRequest {
            url: Some("https://example.com/hook2".to_string()),
            ..Default::default()
        };
        let params = request.params();
        assert_eq!(params.len(), 1);
        assert_eq!(params["url"], "https://example.com/hook2");
    }

    #[test]
    fn webhook_decodes_with_missing_fields() {
        let webhook: Webhook = serde_json::from_str(r#"{"id":"w1"}"#).unwrap();
        assert_eq!(webhook.id.as_deref(), Some("w1"));
        assert!(webhook.url.is_none());
    }
}
