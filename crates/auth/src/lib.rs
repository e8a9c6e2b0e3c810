//! `barkeep-auth` — the request-authorization gate.
//!
//! Validates inbound bearer credentials against an external token issuer
//! (RS256 signatures, published JWKS) and checks the permission a route
//! requires. Decoupled from the HTTP framework and from storage; the only
//! IO here is the key-set fetch.

pub mod claims;
pub mod error;
pub mod header;
pub mod jwks;
pub mod permissions;
pub mod verify;

pub use claims::{Claims, check_permission};
pub use error::AuthError;
pub use header::bearer_token;
pub use jwks::{Jwk, JwksClient, KeySet};
pub use permissions::Permission;
pub use verify::{Rs256Verifier, TokenVerifier};
