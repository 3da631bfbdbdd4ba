//! Account factory for creating login identities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::AccountRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let admin = AccountFactory::new(&db)
///     .email("admin@example.com")
///     .role(AccountRole::Admin)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password_hash: String,
    role: AccountRole,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - email: `"account{id}@example.com"` where id is auto-incremented
    /// - password_hash: `"!"` (matches no password)
    /// - role: `AccountRole::Shopper`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("account{}@example.com", id),
            password_hash: "!".to_string(),
            role: AccountRole::Shopper,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn role(mut self, role: AccountRole) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate email)
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        let now = Utc::now();
        entity::account::ActiveModel {
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shopper-role account with default values.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}

/// Creates an account with the given role.
pub async fn create_account_with_role(
    db: &DatabaseConnection,
    role: AccountRole,
) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).role(role).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_account_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Account).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let account = create_account(db).await?;

        assert!(account.email.ends_with("@example.com"));
        assert_eq!(account.role, AccountRole::Shopper);
        assert!(account.active);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_email() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Account).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        AccountFactory::new(db).email("dup@example.com").build().await?;
        let second = AccountFactory::new(db).email("dup@example.com").build().await;

        assert!(second.is_err());

        Ok(())
    }
}
