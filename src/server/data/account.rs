use chrono::Utc;
use entity::sea_orm_active_enums::AccountRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository for login identities.
///
/// Generic over the connection so registration can create an account and its profile
/// inside one transaction.
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `AccountRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active account.
    ///
    /// # Arguments
    /// - `email` - Normalized login email, must be unique
    /// - `password_hash` - Argon2 PHC string
    /// - `role` - Role determining the permission matrix
    ///
    /// # Returns
    /// - `Ok(Model)` - The created account
    /// - `Err(DbErr)` - Database error, including unique-constraint violation on email
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        role: AccountRole,
    ) -> Result<entity::account::Model, DbErr> {
        let now = Utc::now();
        entity::account::ActiveModel {
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(id).one(self.db).await
    }

    /// Finds an account by email.
    ///
    /// The caller is expected to pass an already normalized (trimmed, lowercase) email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Returns the accounts with the given ids, ordered by id.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::account::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Account::find()
            .filter(entity::account::Column::Id.is_in(ids))
            .order_by_asc(entity::account::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Deletes an account; the linked profile and its dependants cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Account::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
