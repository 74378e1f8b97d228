//! External authorizer adapter
//!
//! HTTP implementation of [`AuthorizationPort`]. Issues one GET per
//! authorization check against the configured endpoint and maps the
//! payload's boolean flag to a decision.
//!
//! # Fail-closed translation
//!
//! Every way the call can go wrong — connect failure, timeout, non-success
//! status, payload that does not deserialize — is translated *here*, once,
//! into an `Unreachable` result carrying the diagnostic text. An outage of
//! the authorization dependency is a business denial from the workflow's
//! point of view, never a server fault surfaced to the caller.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::ContractingError;
use crate::ports::{AuthorizationPort, AuthorizationResult};

/// Default endpoint of the authorization dependency.
pub const DEFAULT_ENDPOINT: &str = "https://util.devi.tools/api/v2/authorize";

/// Configuration for [`ExternalAuthorizer`].
#[derive(Debug, Clone)]
pub struct AuthorizerConfig {
    /// Full URL of the authorization endpoint
    pub endpoint: String,
    /// Request timeout; on expiry the adapter fails closed like any other
    /// transport failure
    pub timeout_secs: u64,
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Response payload of the authorization endpoint.
///
/// The dependency is not consistent about field casing (`data`, `Data`,
/// `DATA` have all been observed), so the deserializers below match field
/// names case-insensitively and ignore everything else.
#[derive(Debug)]
struct AuthorizerResponse {
    message: Option<String>,
    data: AuthorizerData,
}

#[derive(Debug)]
struct AuthorizerData {
    authorization: bool,
}

impl<'de> Deserialize<'de> for AuthorizerResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ResponseVisitor;

        impl<'de> Visitor<'de> for ResponseVisitor {
            type Value = AuthorizerResponse;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an authorization response object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut message = None;
                let mut data = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.to_ascii_lowercase().as_str() {
                        "message" => message = map.next_value()?,
                        "data" => data = Some(map.next_value()?),
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(AuthorizerResponse {
                    message,
                    data: data.ok_or_else(|| de::Error::missing_field("data"))?,
                })
            }
        }

        deserializer.deserialize_map(ResponseVisitor)
    }
}

impl<'de> Deserialize<'de> for AuthorizerData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DataVisitor;

        impl<'de> Visitor<'de> for DataVisitor {
            type Value = AuthorizerData;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with an authorization flag")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut authorization = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case("authorization") {
                        authorization = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                Ok(AuthorizerData {
                    authorization: authorization
                        .ok_or_else(|| de::Error::missing_field("authorization"))?,
                })
            }
        }

        deserializer.deserialize_map(DataVisitor)
    }
}

/// HTTP adapter for the external authorization dependency.
pub struct ExternalAuthorizer {
    client: reqwest::Client,
    endpoint: String,
}

impl ExternalAuthorizer {
    /// Builds the adapter and its pooled HTTP client.
    pub fn new(config: AuthorizerConfig) -> Result<Self, ContractingError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ContractingError::GatewaySetup(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_decision(&self) -> Result<AuthorizationResult, reqwest::Error> {
        let payload: AuthorizerResponse = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if payload.data.authorization {
            Ok(AuthorizationResult::authorized(payload.message))
        } else {
            Ok(AuthorizationResult::denied(payload.message))
        }
    }
}

#[async_trait]
impl AuthorizationPort for ExternalAuthorizer {
    async fn authorize(&self) -> AuthorizationResult {
        match self.fetch_decision().await {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    error = %error,
                    "authorization dependency unavailable, failing closed"
                );
                AuthorizationResult::unreachable(error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = AuthorizerConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn payload_field_matching_ignores_case() {
        let lower: AuthorizerResponse = serde_json::from_str(
            r#"{"status":"success","message":"ok","data":{"authorization":true}}"#,
        )
        .unwrap();
        assert!(lower.data.authorization);
        assert_eq!(lower.message.as_deref(), Some("ok"));

        let capitalized: AuthorizerResponse = serde_json::from_str(
            r#"{"Status":"success","Message":"ok","Data":{"Authorization":false}}"#,
        )
        .unwrap();
        assert!(!capitalized.data.authorization);

        let shouted: AuthorizerResponse = serde_json::from_str(
            r#"{"MESSAGE":"ok","dAtA":{"AUTHORIZATION":true,"extra":1}}"#,
        )
        .unwrap();
        assert!(shouted.data.authorization);
    }

    #[test]
    fn null_message_is_accepted() {
        let payload: AuthorizerResponse = serde_json::from_str(
            r#"{"message":null,"data":{"authorization":true}}"#,
        )
        .unwrap();
        assert!(payload.message.is_none());
    }

    #[test]
    fn payload_without_flag_is_rejected() {
        let result =
            serde_json::from_str::<AuthorizerResponse>(r#"{"status":"success","data":{}}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<AuthorizerResponse>(r#"{"status":"success"}"#);
        assert!(result.is_err());
    }
}
