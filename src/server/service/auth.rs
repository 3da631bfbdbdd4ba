//! Login, token refresh and logout.
//!
//! Tokens are stateless JWTs; the only server-side state is the revocation list.
//! Refresh rotates: every successful refresh revokes the presented refresh token and
//! issues a new pair.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{account::AccountRepository, revoked_token::RevokedTokenRepository},
    error::{auth::AuthError, AppError},
    model::account::TokenPair,
    service::token::{Claims, TokenService, TokenType},
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Exchanges email and password for a token pair.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Credentials valid and account active
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email, wrong password, or
    ///   inactive account
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let email = email.trim().to_lowercase();

        let Some(account) = AccountRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !account.active || !verify_password(password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(self.tokens.issue_pair(account.id)?)
    }

    /// Rotates a refresh token into a new pair.
    ///
    /// The presented token is revoked before the new pair is returned, so replaying it
    /// fails.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.validate(refresh_token, TokenType::Refresh).await?;
        let account = self.load_account(&claims).await?;

        RevokedTokenRepository::new(self.db)
            .revoke(&claims.jti, account.id, claims.expires_at())
            .await?;

        Ok(self.tokens.issue_pair(account.id)?)
    }

    /// Revokes the current access token and the given refresh token.
    ///
    /// # Arguments
    /// - `access` - Claims of the access token that authenticated the request
    /// - `refresh_token` - Refresh token to revoke; must belong to the same account
    ///
    /// # Returns
    /// - `Ok(())` - Both tokens revoked
    /// - `Err(AppError::BadRequest)` - Refresh token invalid or issued to another account
    pub async fn logout(&self, access: &Claims, refresh_token: &str) -> Result<(), AppError> {
        let account_id = access.account_id()?;

        let refresh = self
            .validate(refresh_token, TokenType::Refresh)
            .await
            .map_err(|_| AppError::BadRequest("Refresh token is invalid or expired.".to_string()))?;

        if refresh.account_id()? != account_id {
            return Err(AppError::BadRequest(
                "Refresh token is invalid or expired.".to_string(),
            ));
        }

        let revoked = RevokedTokenRepository::new(self.db);
        revoked
            .revoke(&refresh.jti, account_id, refresh.expires_at())
            .await?;
        revoked
            .revoke(&access.jti, account_id, access.expires_at())
            .await?;

        Ok(())
    }

    /// Validates an access token and loads its account.
    ///
    /// Used by `AuthGuard` for every authenticated request.
    pub async fn authenticate(
        &self,
        access_token: &str,
    ) -> Result<(entity::account::Model, Claims), AppError> {
        let claims = self.validate(access_token, TokenType::Access).await?;
        let account = self.load_account(&claims).await?;
        Ok((account, claims))
    }

    async fn validate(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let claims = self.tokens.decode(token, expected)?;

        if RevokedTokenRepository::new(self.db)
            .is_revoked(&claims.jti)
            .await?
        {
            return Err(AuthError::RevokedToken(claims.jti).into());
        }

        Ok(claims)
    }

    async fn load_account(&self, claims: &Claims) -> Result<entity::account::Model, AppError> {
        let account_id = claims.account_id()?;

        match AccountRepository::new(self.db).find_by_id(account_id).await? {
            Some(account) if account.active => Ok(account),
            _ => Err(AuthError::AccountNotFound(account_id).into()),
        }
    }
}
