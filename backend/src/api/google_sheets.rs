use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use mockall::automock;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;

use crate::config::SheetsConfig;
use crate::error::DeliveryError;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: i64 = 3600;
const REFRESH_MARGIN_SECS: i64 = 60;

#[automock]
#[async_trait]
pub trait SheetAppender: Send + Sync {
    async fn append_row(&self, row: Vec<String>) -> Result<(), DeliveryError>;
}

/// Claims of the self-signed assertion a service account trades for an
/// access token.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceAccountClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl ServiceAccountClaims {
    pub fn new(service_account_email: &str, issued_at: i64) -> Self {
        Self {
            iss: service_account_email.to_string(),
            scope: SHEETS_SCOPE.to_string(),
            aud: TOKEN_URL.to_string(),
            iat: issued_at,
            exp: issued_at + TOKEN_LIFETIME_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

struct CachedToken {
    value: String,
    expires_at: i64,
}

pub fn append_url(spreadsheet_id: &str, range: &str) -> String {
    format!(
        "{}/{}/values/{}:append?valueInputOption=USER_ENTERED",
        SHEETS_API,
        urlencoding::encode(spreadsheet_id),
        urlencoding::encode(range),
    )
}

pub struct GoogleSheetsClient {
    http: reqwest::Client,
    service_account_email: String,
    key: EncodingKey,
    spreadsheet_id: String,
    range: String,
    token: Mutex<Option<CachedToken>>,
}

impl GoogleSheetsClient {
    pub fn new(config: &SheetsConfig, http: reqwest::Client) -> Result<Self, DeliveryError> {
        let key = EncodingKey::from_rsa_pem(config.private_key.as_bytes())
            .map_err(|e| DeliveryError::Config(format!("invalid service account key: {}", e)))?;
        Ok(Self {
            http,
            service_account_email: config.service_account_email.clone(),
            key,
            spreadsheet_id: config.spreadsheet_id.clone(),
            range: config.range.clone(),
            token: Mutex::new(None),
        })
    }

    async fn access_token(&self) -> Result<String, DeliveryError> {
        let now = Utc::now().timestamp();
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at - REFRESH_MARGIN_SECS > now {
                return Ok(token.value.clone());
            }
        }

        tracing::debug!("Requesting new Google access token for {}", self.service_account_email);
        let claims = ServiceAccountClaims::new(&self.service_account_email, now);
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &self.key)?;
        let response = self
            .http
            .post(TOKEN_URL)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DeliveryError::Api { provider: "Google OAuth", status, body });
        }

        let token: TokenResponse = response.json().await?;
        let expires_at = now + token.expires_in.unwrap_or(TOKEN_LIFETIME_SECS);
        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at,
        });
        Ok(token.access_token)
    }

    async fn forget_token(&self) {
        *self.token.lock().await = None;
    }
}

#[async_trait]
impl SheetAppender for GoogleSheetsClient {
    async fn append_row(&self, row: Vec<String>) -> Result<(), DeliveryError> {
        let access_token = self.access_token().await?;
        let response = self
            .http
            .post(append_url(&self.spreadsheet_id, &self.range))
            .bearer_auth(access_token)
            .header(ACCEPT, "application/json")
            .json(&json!({ "values": [row] }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status == reqwest::StatusCode::UNAUTHORIZED {
                self.forget_token().await;
            }
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DeliveryError::Api {
                provider: "Google Sheets",
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!("Appended lead row to spreadsheet {}", self.spreadsheet_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_target_the_token_endpoint_for_one_hour() {
        let claims = ServiceAccountClaims::new("svc@lusso.iam.gserviceaccount.com", 1_700_000_000);
        assert_eq!(claims.iss, "svc@lusso.iam.gserviceaccount.com");
        assert_eq!(claims.scope, "https://www.googleapis.com/auth/spreadsheets");
        assert_eq!(claims.aud, "https://oauth2.googleapis.com/token");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn append_url_encodes_the_range() {
        assert_eq!(
            append_url("abc123", "Responses!A1"),
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/Responses%21A1:append?valueInputOption=USER_ENTERED"
        );
        assert!(append_url("abc123", "Lead Sheet!A1").contains("/values/Lead%20Sheet%21A1:append"));
    }

    #[test]
    fn rejects_a_malformed_private_key() {
        let config = SheetsConfig {
            service_account_email: "svc@lusso.iam.gserviceaccount.com".into(),
            private_key: "not a pem".into(),
            spreadsheet_id: "abc123".into(),
            range: "Responses!A1".into(),
        };
        match GoogleSheetsClient::new(&config, reqwest::Client::new()) {
            Err(DeliveryError::Config(msg)) => assert!(msg.contains("invalid service account key")),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("malformed key accepted"),
        }
    }
}
