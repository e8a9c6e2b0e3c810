//! Published signing keys (JWKS) from the token issuer.

use serde::Deserialize;

use crate::error::AuthError;

/// One JSON Web Key as published by the issuer.
///
/// Only the RSA members barkeep verifies against are modeled; keys of other
/// types deserialize but are never selected.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    pub kty: String,
    #[serde(default)]
    pub kid: Option<String>,
    #[serde(rename = "use", default)]
    pub use_: Option<String>,
    /// RSA modulus, base64url.
    #[serde(default)]
    pub n: Option<String>,
    /// RSA public exponent, base64url.
    #[serde(default)]
    pub e: Option<String>,
}

/// The issuer's published key set.
#[derive(Debug, Clone, Deserialize)]
pub struct KeySet {
    pub keys: Vec<Jwk>,
}

impl KeySet {
    /// Find the RSA key with the given key id.
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys
            .iter()
            .find(|key| key.kty == "RSA" && key.kid.as_deref() == Some(kid))
    }
}

/// Fetches the issuer's key set from its well-known endpoint.
pub struct JwksClient {
    http: reqwest::Client,
    url: String,
}

impl JwksClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Well-known JWKS document URL for an issuer base URL.
    pub fn well_known_url(issuer: &str) -> String {
        format!("{}/.well-known/jwks.json", issuer.trim_end_matches('/'))
    }

    /// Fetch and deserialize the key set.
    pub async fn fetch(&self) -> Result<KeySet, AuthError> {
        tracing::debug!(url = %self.url, "fetching issuer key set");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|err| AuthError::KeySetUnavailable(err.to_string()))?;

        response
            .json::<KeySet>()
            .await
            .map_err(|err| AuthError::KeySetUnavailable(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;

    #[test]
    fn well_known_url_tolerates_trailing_slash() {
        assert_eq!(
            JwksClient::well_known_url("https://tenant.auth.example/"),
            "https://tenant.auth.example/.well-known/jwks.json"
        );
        assert_eq!(
            JwksClient::well_known_url("https://tenant.auth.example"),
            "https://tenant.auth.example/.well-known/jwks.json"
        );
    }

    #[test]
    fn find_selects_rsa_keys_by_kid() {
        let set: KeySet = serde_json::from_value(json!({
            "keys": [
                {"kty": "EC", "kid": "ec-1", "crv": "P-256", "x": "..", "y": ".."},
                {"kty": "RSA", "kid": "rsa-1", "use": "sig", "n": "AQAB", "e": "AQAB"}
            ]
        }))
        .unwrap();

        assert!(set.find("rsa-1").is_some());
        assert!(set.find("ec-1").is_none());
        assert!(set.find("nope").is_none());
    }

    #[tokio::test]
    async fn fetch_reads_the_well_known_document() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/.well-known/jwks.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "keys": [
                        {"kty": "RSA", "kid": "k1", "use": "sig", "alg": "RS256",
                         "n": "abc", "e": "AQAB"}
                    ]
                }));
        });

        let client = JwksClient::new(JwksClient::well_known_url(&server.base_url()));
        let set = client.fetch().await.unwrap();

        assert_eq!(set.keys.len(), 1);
        assert_eq!(set.find("k1").unwrap().n.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn fetch_failure_is_reported_as_unavailable() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/.well-known/jwks.json");
            then.status(503);
        });

        let client = JwksClient::new(JwksClient::well_known_url(&server.base_url()));
        assert!(matches!(
            client.fetch().await,
            Err(AuthError::KeySetUnavailable(_))
        ));
    }
}
