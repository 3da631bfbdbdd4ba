//! Bearer token issuance and validation.
//!
//! Access and refresh tokens are HS256 JWTs carrying the account id as `sub`, a random
//! `jti` used for revocation, and a `token_type` claim so a refresh token can never be
//! presented where an access token is expected. Revocation itself lives in the database
//! (see `RevokedTokenRepository`); this service is pure and holds no connection.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{
    config::Config,
    error::{auth::AuthError, internal::InternalError},
    model::account::TokenPair,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims stored in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID
    pub sub: String,
    /// Unique token ID, the key of the revocation list
    pub jti: String,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Parses the subject back into an account id.
    pub fn account_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("non-numeric subject '{}'", self.sub)))
    }

    /// Expiry as a UTC timestamp, for storing on the revocation list.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret,
            Duration::minutes(config.access_token_minutes),
            Duration::days(config.refresh_token_days),
        )
    }

    /// Issues a fresh access + refresh pair for an account.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Signed access and refresh tokens
    /// - `Err(InternalError::TokenEncoding)` - Signing failed
    pub fn issue_pair(&self, account_id: i32) -> Result<TokenPair, InternalError> {
        Ok(TokenPair {
            access: self.issue(account_id, TokenType::Access, self.access_ttl)?,
            refresh: self.issue(account_id, TokenType::Refresh, self.refresh_ttl)?,
        })
    }

    fn issue(
        &self,
        account_id: i32,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<String, InternalError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            jti: Uuid::new_v4().to_string(),
            token_type,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Validates signature, expiry and token type.
    ///
    /// Does not consult the revocation list.
    ///
    /// # Arguments
    /// - `token` - Encoded JWT
    /// - `expected` - Token type the caller accepts
    ///
    /// # Returns
    /// - `Ok(Claims)` - Valid token of the expected type
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, malformed, or wrong type
    pub fn decode(&self, token: &str, expected: TokenType) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?
            .claims;

        if claims.token_type != expected {
            return Err(AuthError::InvalidToken(format!(
                "expected {:?} token, got {:?}",
                expected, claims.token_type
            )));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-that-is-at-least-32-bytes";

    fn service() -> TokenService {
        TokenService::new(SECRET, Duration::minutes(5), Duration::days(1))
    }

    /// Expected: both tokens decode with their own type and the issuing account id
    #[test]
    fn issued_pair_decodes() {
        let tokens = service();
        let pair = tokens.issue_pair(42).unwrap();

        let access = tokens.decode(&pair.access, TokenType::Access).unwrap();
        let refresh = tokens.decode(&pair.refresh, TokenType::Refresh).unwrap();

        assert_eq!(access.account_id().unwrap(), 42);
        assert_eq!(refresh.account_id().unwrap(), 42);
        assert_ne!(access.jti, refresh.jti);
        assert!(refresh.exp > access.exp);
    }

    /// Expected: Err(InvalidToken) when a refresh token is used as an access token
    #[test]
    fn rejects_wrong_token_type() {
        let tokens = service();
        let pair = tokens.issue_pair(1).unwrap();

        let result = tokens.decode(&pair.refresh, TokenType::Access);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    /// Expected: Err(InvalidToken) for a token signed with another secret
    #[test]
    fn rejects_foreign_signature() {
        let other = TokenService::new(
            "another-secret-that-is-32-bytes-long!",
            Duration::minutes(5),
            Duration::days(1),
        );
        let pair = other.issue_pair(1).unwrap();

        let result = service().decode(&pair.access, TokenType::Access);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    /// Expected: Err(InvalidToken) for an expired token
    #[test]
    fn rejects_expired_token() {
        let tokens = TokenService::new(SECRET, Duration::minutes(-5), Duration::days(1));
        let pair = tokens.issue_pair(1).unwrap();

        let result = tokens.decode(&pair.access, TokenType::Access);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }
}
