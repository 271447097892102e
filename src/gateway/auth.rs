//! Bearer-token verification for the gateway surface.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Claims carried by a caller token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub exp: usize,
}

/// Validates `Authorization: Bearer <token>` header values and extracts
/// the caller identity. HS256 over a shared secret; no side effects.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verify the raw header value and return the `user_id` claim.
    ///
    /// Expired tokens are reported distinctly. Every other failure —
    /// missing header, missing `Bearer ` prefix, bad signature, wrong
    /// algorithm, malformed claims — is an invalid token.
    pub fn verify(&self, header: Option<&str>) -> Result<String, GatewayError> {
        let token = header
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or(GatewayError::Unauthorized("Invalid token"))?;

        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(data.claims.user_id),
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
                Err(GatewayError::Unauthorized("Token expired"))
            }
            Err(_) => Err(GatewayError::Unauthorized("Invalid token")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "test-secret";

    fn mint(secret: &str, user_id: &str, ttl: Duration) -> String {
        let claims = Claims {
            user_id: user_id.to_string(),
            exp: (Utc::now() + ttl).timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_yields_user_id() {
        let verifier = TokenVerifier::new(SECRET);
        let token = mint(SECRET, "u1", Duration::hours(1));
        let header = format!("Bearer {}", token);
        assert_eq!(verifier.verify(Some(&header)).unwrap(), "u1");
    }

    #[test]
    fn test_expired_token_is_reported_distinctly() {
        let verifier = TokenVerifier::new(SECRET);
        // Well past the default validation leeway
        let token = mint(SECRET, "u1", Duration::hours(-2));
        let header = format!("Bearer {}", token);
        assert!(matches!(
            verifier.verify(Some(&header)),
            Err(GatewayError::Unauthorized("Token expired"))
        ));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let verifier = TokenVerifier::new(SECRET);
        let token = mint("other-secret", "u1", Duration::hours(1));
        let header = format!("Bearer {}", token);
        assert!(matches!(
            verifier.verify(Some(&header)),
            Err(GatewayError::Unauthorized("Invalid token"))
        ));
    }

    #[test]
    fn test_missing_header_is_invalid() {
        let verifier = TokenVerifier::new(SECRET);
        assert!(matches!(
            verifier.verify(None),
            Err(GatewayError::Unauthorized("Invalid token"))
        ));
    }

    #[test]
    fn test_missing_bearer_prefix_is_invalid() {
        let verifier = TokenVerifier::new(SECRET);
        let token = mint(SECRET, "u1", Duration::hours(1));
        // Raw token without the scheme must not panic or pass
        assert!(matches!(
            verifier.verify(Some(&token)),
            Err(GatewayError::Unauthorized("Invalid token"))
        ));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let verifier = TokenVerifier::new(SECRET);
        assert!(matches!(
            verifier.verify(Some("Bearer not.a.jwt")),
            Err(GatewayError::Unauthorized("Invalid token"))
        ));
    }
}
