//! Transaction list, subscriber detail, and activity-feed models.
//!
//! # Design
//! Activity events split discriminator from payload on the wire:
//! `{ "type": ..., "body": { ...fields } }`, with a sibling `subscriber`
//! object carrying the app user id at the response level. Both wrappers are
//! unwrapped into flat models at decode time. The outer `type` is the only
//! required field — an event without its discriminator is a decode error,
//! everything under `body` is optional and the `body` object itself may be
//! absent.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Paging parameters for the transaction listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionsRequest {
    /// Exclusive upper bound, preformatted date; used as the paging cursor.
    pub end_date: Option<String>,
    pub limit: Option<u32>,
}

impl TransactionsRequest {
    pub(crate) fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        if let Some(end_date) = &self.end_date {
            params.insert("end_date".to_string(), Value::String(end_date.clone()));
        }
        if let Some(limit) = self.limit {
            params.insert("limit".to_string(), Value::from(limit));
        }
        params
    }
}

/// One row of the transaction listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Transaction {
    pub app_user_id: Option<String>,
    pub product_identifier: Option<String>,
    pub store: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub purchased_at: Option<String>,
    pub expires_date: Option<String>,
    pub is_trial_period: Option<bool>,
    pub is_sandbox: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Option<Vec<Transaction>>,
    pub last_purchase_date: Option<String>,
}

/// Subscriber detail behind one transaction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionDetailResponse {
    pub app_user_id: Option<String>,
    pub created_at: Option<String>,
    pub last_seen_at: Option<String>,
    pub country: Option<String>,
    pub total_spent: Option<f64>,
}

/// Activity feed for one subscriber, flattened from
/// `{ events: [...], subscriber: { app_user_id } }`.
#[derive(Debug, Clone, Default)]
pub struct TransactionActivityResponse {
    pub events: Option<Vec<TransactionActivityEvent>>,
    pub app_user_id: Option<String>,
}

impl<'de> Deserialize<'de> for TransactionActivityResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            events: Option<Vec<TransactionActivityEvent>>,
            subscriber: Option<WireSubscriber>,
        }

        #[derive(Deserialize)]
        struct WireSubscriber {
            app_user_id: Option<String>,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(Self {
            events: wire.events,
            app_user_id: wire.subscriber.and_then(|s| s.app_user_id),
        })
    }
}

/// One activity event, flattened from `{ type, body: { ... } }`.
#[derive(Debug, Clone, Default)]
pub struct TransactionActivityEvent {
    pub event_type: String,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub price_in_purchased_currency: Option<f64>,
    pub event_timestamp_ms: Option<i64>,
    pub purchased_at_ms: Option<i64>,
    pub expiration_at_ms: Option<i64>,
    pub product_id: Option<String>,
    pub new_product_id: Option<String>,
    pub offer_code: Option<String>,
    pub cancel_reason: Option<String>,
    pub period_type: Option<String>,
    pub is_trial_conversion: Option<bool>,
    pub transferred_from: Option<Vec<String>>,
    pub transferred_to: Option<Vec<String>>,
}

impl<'de> Deserialize<'de> for TransactionActivityEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            /// The discriminator is the one field the wire must supply.
            #[serde(rename = "type")]
            event_type: String,
            #[serde(default)]
            body: WireBody,
        }

        #[derive(Deserialize, Default)]
        struct WireBody {
            price: Option<f64>,
            currency: Option<String>,
            price_in_purchased_currency: Option<f64>,
            event_timestamp_ms: Option<i64>,
            purchased_at_ms: Option<i64>,
            expiration_at_ms: Option<i64>,
            product_id: Option<String>,
            new_product_id: Option<String>,
            offer_code: Option<String>,
            cancel_reason: Option<String>,
            period_type: Option<String>,
            is_trial_conversion: Option<bool>,
            transferred_from: Option<Vec<String>>,
            transferred_to: Option<Vec<String>>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let body = wire.body;
        Ok(Self {
            event_type: wire.event_type,
            price: body.price,
            currency: body.currency,
            price_in_purchased_currency: body.price_in_purchased_currency,
            event_timestamp_ms: body.event_timestamp_ms,
            purchased_at_ms: body.purchased_at_ms,
            expiration_at_ms: body.expiration_at_ms,
            product_id: body.product_id,
            new_product_id: body.new_product_id,
            offer_code: body.offer_code,
            cancel_reason: body.cancel_reason,
            period_type: body.period_type,
            is_trial_conversion: body.is_trial_conversion,
            transferred_from: body.transferred_from,
            transferred_to: body.transferred_to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENT: &str = r#"{
        "type": "INITIAL_PURCHASE",
        "uuid": "uuid001",
        "body": {
            "app_id": "app001",
            "currency": "USD",
            "price": 9.99,
            "price_in_purchased_currency": 9.99,
            "event_timestamp_ms": 1705350714054,
            "purchased_at_ms": 1705350708000,
            "product_id": "app.pro.monthly",
            "period_type": "NORMAL",
            "store": "APP_STORE"
        }
    }"#;

    #[test]
    fn event_flattens_body_fields() {
        let event: TransactionActivityEvent = serde_json::from_str(EVENT).unwrap();
        assert_eq!(event.event_type, "INITIAL_PURCHASE");
        assert_eq!(event.price, Some(9.99));
        assert_eq!(event.product_id.as_deref(), Some("app.pro.monthly"));
        assert!(event.cancel_reason.is_none());
    }

    #[test]
    fn event_with_missing_optional_field_decodes() {
        let event: TransactionActivityEvent =
            serde_json::from_str(r#"{"type": "CANCELLATION", "body": {}}"#).unwrap();
        assert_eq!(event.event_type, "CANCELLATION");
        assert!(event.price.is_none());
    }

    #[test]
    fn event_without_body_object_decodes() {
        let event: TransactionActivityEvent =
            serde_json::from_str(r#"{"type": "TEST"}"#).unwrap();
        assert_eq!(event.event_type, "TEST");
        assert!(event.event_timestamp_ms.is_none());
    }

    #[test]
    fn event_without_discriminator_fails() {
        let result: Result<TransactionActivityEvent, _> =
            serde_json::from_str(r#"{"body": {"price": 1.0}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn activity_response_flattens_subscriber() {
        let body = format!(
            r#"{{"events": [{EVENT}], "subscriber": {{"app_user_id": "user001"}}}}"#
        );
        let response: TransactionActivityResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(response.app_user_id.as_deref(), Some("user001"));
        assert_eq!(response.events.unwrap().len(), 1);
    }

    #[test]
    fn activity_response_tolerates_missing_subscriber() {
        let response: TransactionActivityResponse = serde_json::from_str("{}").unwrap();
        assert!(response.app_user_id.is_none());
        assert!(response.events.is_none());
    }

    #[test]
    fn transactions_request_omits_absent_fields() {
        let params = TransactionsRequest::default().params();
        assert!(params.is_empty());

        let params = TransactionsRequest {
            end_date: Some("2024-02-01".to_string()),
            limit: Some(100),
        }
        .params();
        assert_eq!(params["end_date"], "2024-02-01");
        assert_eq!(params["limit"], 100);
    }
}
