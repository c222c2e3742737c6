use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

use crate::shared::config::AuthConfig;
use crate::system::sessions::Session;

/// Signing secret and token lifetime
#[derive(Clone)]
pub struct JwtKeys {
    secret: String,
    lifetime_hours: i64,
}

impl JwtKeys {
    pub fn new(secret: impl Into<String>, lifetime_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            lifetime_hours,
        }
    }

    /// Use the configured secret, or generate one for this process
    pub fn from_config(config: &AuthConfig) -> Self {
        let secret = match config.jwt_secret.as_deref().map(str::trim) {
            Some(secret) if !secret.is_empty() => secret.to_string(),
            _ => {
                tracing::warn!(
                    "No jwt_secret configured, generated a random one (tokens die with the process)"
                );
                generate_jwt_secret()
            }
        };
        Self::new(secret, config.access_token_lifetime_hours)
    }

    pub fn lifetime(&self) -> chrono::Duration {
        chrono::Duration::hours(self.lifetime_hours)
    }

    /// Generate access token bound to `session`
    pub fn generate_access_token(&self, session: &Session) -> Result<String> {
        let now = Utc::now();
        let exp = (now + self.lifetime()).timestamp() as usize;
        let iat = now.timestamp() as usize;

        let claims = TokenClaims {
            sub: session.username.clone(),
            sid: session.id.to_string(),
            is_admin: session.is_admin(),
            exp,
            iat,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to encode JWT token")?;

        Ok(token)
    }

    /// Validate JWT token and extract claims
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims> {
        let token_data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .context("Failed to decode JWT token")?;

        Ok(token_data.claims)
    }
}

/// Generate a random JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::sessions::SessionStore;
    use contracts::system::auth::UserRole;

    #[test]
    fn test_token_roundtrip() {
        let keys = JwtKeys::new("test-secret", 1);
        let session = SessionStore::new().create("admin", UserRole::Admin);

        let token = keys.generate_access_token(&session).unwrap();
        let claims = keys.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.sid, session.id.to_string());
        assert!(claims.is_admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let session = SessionStore::new().create("user", UserRole::User);
        let token = JwtKeys::new("a", 1).generate_access_token(&session).unwrap();
        assert!(JwtKeys::new("b", 1).validate_token(&token).is_err());
        assert!(JwtKeys::new("a", 1).validate_token("garbage").is_err());
    }

    #[test]
    fn test_generated_secret_when_missing() {
        let keys = JwtKeys::from_config(&AuthConfig::default());
        assert_eq!(keys.secret.len(), 44);
        assert_eq!(keys.lifetime(), chrono::Duration::hours(24));
    }
}
