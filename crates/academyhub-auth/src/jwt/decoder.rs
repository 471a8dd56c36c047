//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use academyhub_core::config::AuthConfig;
use academyhub_core::error::AppError;

use super::claims::Claims;

/// Validates JWT tokens.
///
/// Tokens are stateless: there is no blocklist, so a token stays valid until
/// it expires. Logout on the client side is discarding the token.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// An expired token is reported distinctly from a malformed or tampered
    /// one so clients can tell "log in again" apart from "bad request".
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::token_expired("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use academyhub_core::config::AuthConfig;
    use academyhub_core::error::ErrorKind;
    use academyhub_entity::user::{Role, User};

    use super::super::encoder::JwtEncoder;
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-key-for-unit-tests".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
        }
    }

    fn test_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            password_hash: "hash".to_string(),
            full_name: "Jane Doe".to_string(),
            role: Role::Admin,
            active_academy_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user = test_user();
        let academy_a = Uuid::new_v4();
        let academy_b = Uuid::new_v4();

        let issued = encoder
            .issue(&user, vec![academy_a, academy_b], Some(academy_a))
            .unwrap();
        let claims = decoder.verify(&issued.token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.academy_ids, vec![academy_a, academy_b]);
        assert_eq!(claims.active_academy_id, Some(academy_a));
        assert!(claims.is_member_of(academy_b));
        assert!(!claims.is_expired());
    }

    #[test]
    fn expired_token_is_distinguishable() {
        let config = AuthConfig {
            jwt_ttl_minutes: 0,
            ..test_config()
        };
        let encoder = JwtEncoder::new(&config);

        // Decoder without leeway so an exp in the past fails immediately.
        let mut decoder = JwtDecoder::new(&config);
        decoder.validation.leeway = 0;

        let user = test_user();
        let issued = encoder.issue(&user, vec![], None).unwrap();

        std::thread::sleep(std::time::Duration::from_millis(1100));
        let err = decoder.verify(&issued.token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenExpired);
    }

    #[test]
    fn tampered_token_is_unauthorized() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user = test_user();
        let issued = encoder.issue(&user, vec![], None).unwrap();

        let other = AuthConfig {
            jwt_secret: "a-completely-different-secret".to_string(),
            ..test_config()
        };
        let other_decoder = JwtDecoder::new(&other);
        let err = other_decoder.verify(&issued.token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);

        let err = decoder.verify("not-a-jwt-at-all").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }
}
