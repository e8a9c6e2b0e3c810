use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::permissions::Permission;

/// Claims barkeep relies on once a token's signature, lifetime, issuer and
/// audience have been verified.
///
/// The issuer attaches further registered claims; they are validated during
/// decoding and not modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the caller's identity at the issuer.
    pub sub: String,

    /// Permission strings granted to the subject. Absent entirely when the
    /// issuer does not attach permissions to its tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

/// Check that verified claims grant `required`.
///
/// A token without any `permissions` claim fails differently from a token
/// whose permission set merely lacks the required entry: the former is an
/// issuer-configuration problem, the latter an authorization denial.
pub fn check_permission(claims: &Claims, required: &Permission) -> Result<(), AuthError> {
    let permissions = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::MissingPermissionsClaim)?;

    if permissions.iter().any(|p| p == required.as_str()) {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermission(
            required.as_str().to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(permissions: Option<Vec<&str>>) -> Claims {
        Claims {
            sub: "auth0|tester".to_string(),
            permissions: permissions.map(|p| p.into_iter().map(str::to_string).collect()),
        }
    }

    #[test]
    fn granted_permission_passes() {
        let claims = claims(Some(vec!["get:drinks-detail", "post:drinks"]));
        assert!(check_permission(&claims, &Permission::new("post:drinks")).is_ok());
    }

    #[test]
    fn absent_permissions_claim_is_a_configuration_failure() {
        assert_eq!(
            check_permission(&claims(None), &Permission::new("post:drinks")),
            Err(AuthError::MissingPermissionsClaim)
        );
    }

    #[test]
    fn ungranted_permission_is_denied_distinctly() {
        assert_eq!(
            check_permission(
                &claims(Some(vec!["get:drinks-detail"])),
                &Permission::new("post:drinks")
            ),
            Err(AuthError::InsufficientPermission("post:drinks".to_string()))
        );
    }

    #[test]
    fn empty_permission_set_is_denied() {
        assert!(matches!(
            check_permission(&claims(Some(vec![])), &Permission::new("patch:drinks")),
            Err(AuthError::InsufficientPermission(_))
        ));
    }
}
