//! Pre-handler authorization check for permission-gated routes.

use axum::http::{HeaderMap, header};

use barkeep_auth::{AuthError, Claims, Permission, TokenVerifier, bearer_token, check_permission};

/// Run the full authorization gate for a request.
///
/// Header extraction, then signature/claims verification, then the
/// permission check. Called at the top of each protected handler body,
/// before anything touches the store.
pub fn authorize(
    headers: &HeaderMap,
    verifier: &dyn TokenVerifier,
    required: Permission,
) -> Result<Claims, AuthError> {
    let header = match headers.get(header::AUTHORIZATION) {
        None => None,
        Some(value) => Some(value.to_str().map_err(|_| AuthError::MalformedHeader)?),
    };

    let token = bearer_token(header)?;
    let claims = verifier.verify(token)?;
    check_permission(&claims, &required)?;
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    /// Verifier that accepts any token and returns fixed claims.
    struct StaticVerifier(Claims);

    impl TokenVerifier for StaticVerifier {
        fn verify(&self, _token: &str) -> Result<Claims, AuthError> {
            Ok(self.0.clone())
        }
    }

    fn verifier(permissions: Vec<&str>) -> StaticVerifier {
        StaticVerifier(Claims {
            sub: "auth0|tester".to_string(),
            permissions: Some(permissions.into_iter().map(str::to_string).collect()),
        })
    }

    fn headers(value: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn missing_header_fails_before_verification() {
        let result = authorize(
            &headers(None),
            &verifier(vec!["post:drinks"]),
            Permission::new("post:drinks"),
        );
        assert_eq!(result, Err(AuthError::MissingHeader));
    }

    #[test]
    fn granted_permission_yields_claims() {
        let result = authorize(
            &headers(Some("Bearer anything")),
            &verifier(vec!["post:drinks"]),
            Permission::new("post:drinks"),
        );
        assert_eq!(result.unwrap().sub, "auth0|tester");
    }

    #[test]
    fn valid_token_with_wrong_scope_is_denied() {
        let result = authorize(
            &headers(Some("Bearer anything")),
            &verifier(vec!["get:drinks-detail"]),
            Permission::new("post:drinks"),
        );
        assert!(matches!(result, Err(AuthError::InsufficientPermission(_))));
    }
}
