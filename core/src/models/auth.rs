//! Login request and response.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Credentials posted to the login endpoint. The one-time-password code is
/// only present when the account has 2FA enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub otp_code: Option<String>,
}

impl LoginRequest {
    pub(crate) fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("email".to_string(), Value::String(self.email.clone()));
        params.insert("password".to_string(), Value::String(self.password.clone()));
        if let Some(otp_code) = &self.otp_code {
            params.insert("otp_code".to_string(), Value::String(otp_code.clone()));
        }
        params
    }
}

/// Successful login body. The token is what the caller hands to
/// `Session::authenticate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_code_is_included_when_present() {
        let request = LoginRequest {
            email: "dev@example.com".to_string(),
            password: "hunter2".to_string(),
            otp_code: Some("123456".to_string()),
        };
        let params = request.params();
        assert_eq!(params["otp_code"], "123456");
    }

    #[test]
    fn login_response_tolerates_missing_token() {
        let response: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(response.token.is_none());
    }
}
