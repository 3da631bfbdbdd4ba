use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Repository for the token revocation list.
pub struct RevokedTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RevokedTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a token id to the revocation list.
    ///
    /// Revoking an already revoked token is a no-op.
    ///
    /// # Arguments
    /// - `jti` - Token id claim
    /// - `account_id` - Account the token was issued to
    /// - `expires_at` - Token expiry, after which the row may be purged
    pub async fn revoke(
        &self,
        jti: &str,
        account_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        if self.is_revoked(jti).await? {
            return Ok(());
        }

        entity::revoked_token::ActiveModel {
            jti: ActiveValue::Set(jti.to_string()),
            account_id: ActiveValue::Set(account_id),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_revoked(&self, jti: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::RevokedToken::find_by_id(jti.to_string())
            .one(self.db)
            .await?
            .is_some())
    }

    /// Removes entries whose token has already expired.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::RevokedToken::delete_many()
            .filter(entity::revoked_token::Column::ExpiresAt.lt(now))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
