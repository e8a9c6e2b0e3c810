use thiserror::Error;

/// Failure modes of the authorization gate.
///
/// Each variant maps to exactly one HTTP status at the API boundary; the
/// variants stay distinct even where statuses collapse, so callers and
/// tests can tell a wrongly-scoped token from a forged one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("authorization header is missing")]
    MissingHeader,

    /// Header present but not `Bearer <token>` with exactly one token
    /// segment after the scheme.
    #[error("authorization header must be 'Bearer <token>'")]
    MalformedHeader,

    /// JOSE header unusable: unsupported signing algorithm, missing key
    /// id, or a key id with no matching published key.
    #[error("token header is invalid")]
    InvalidHeader,

    #[error("token has expired")]
    TokenExpired,

    /// Issuer or audience mismatch, or a required claim is absent.
    #[error("token claims are invalid")]
    InvalidClaims,

    /// Signature mismatch or unparseable payload.
    #[error("token could not be verified")]
    InvalidToken,

    /// The token carries no `permissions` claim at all; the issuer is not
    /// configured for permission-based access control.
    #[error("token carries no permissions claim")]
    MissingPermissionsClaim,

    /// Authenticated, but the required permission is not granted.
    #[error("missing permission '{0}'")]
    InsufficientPermission(String),

    /// The issuer's signing key set could not be fetched.
    #[error("signing key set unavailable: {0}")]
    KeySetUnavailable(String),
}
