use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::{Arc, Mutex};

use crate::errors::AuthError;
use crate::models::{GoogleTokenResponse, JwtClaims, ServiceAccountKey, TokenCache};

/// OAuth2 token provider for Google APIs
///
/// Signs an RS256 JWT assertion with the service account key and exchanges it
/// at the token endpoint. Tokens are cached in-process and refreshed 60
/// seconds before expiry.
pub struct TokenProvider {
    credentials: Arc<ServiceAccountKey>,
    scope: String,
    cache: Mutex<Option<TokenCache>>,
    http_client: reqwest::Client,
}

impl TokenProvider {
    pub fn new(credentials: ServiceAccountKey, scope: impl Into<String>) -> Self {
        Self {
            credentials: Arc::new(credentials),
            scope: scope.into(),
            cache: Mutex::new(None),
            http_client: reqwest::Client::new(),
        }
    }

    /// Get a bearer token, from cache when still fresh.
    pub async fn access_token(&self) -> Result<String, AuthError> {
        {
            let cache = self.cache.lock().expect("token cache lock poisoned");
            if let Some(cached) = cache.as_ref() {
                if cached.is_fresh(Utc::now().timestamp()) {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        let claims = assertion_claims(&self.credentials, &self.scope, Utc::now());

        let encoding_key = EncodingKey::from_rsa_pem(self.credentials.private_key.as_bytes())
            .map_err(|e| AuthError::PrivateKey(e.to_string()))?;

        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| AuthError::JwtEncode(e.to_string()))?;

        let params = [
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", &assertion),
        ];

        let response = self
            .http_client
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::TokenRequest(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::TokenStatus(response.status().to_string()));
        }

        let token_response: GoogleTokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::TokenParse(e.to_string()))?;

        tracing::debug!(
            "Obtained access token for {} (expires in {}s)",
            self.credentials.client_email,
            token_response.expires_in
        );

        let expires_at = Utc::now().timestamp() + token_response.expires_in;
        {
            let mut cache = self.cache.lock().expect("token cache lock poisoned");
            *cache = Some(TokenCache {
                access_token: token_response.access_token.clone(),
                expires_at,
            });
        }

        Ok(token_response.access_token)
    }
}

/// Build the claim set for a JWT-bearer assertion issued at `now`.
fn assertion_claims(key: &ServiceAccountKey, scope: &str, now: DateTime<Utc>) -> JwtClaims {
    JwtClaims {
        iss: key.client_email.clone(),
        sub: key.client_email.clone(),
        scope: scope.to_string(),
        aud: key.token_uri.clone(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    }
}
