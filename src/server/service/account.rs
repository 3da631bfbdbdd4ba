//! Registration, profile lookup and per-request viewer loading.

use std::collections::HashSet;

use entity::sea_orm_active_enums::AccountRole;
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        account::AccountRepository,
        favorite::{FavoriteProductRepository, FavoriteStoreRepository},
        shopper::{NewShopper, ShopperRepository},
        store_owner::{NewStoreOwner, StoreOwnerRepository},
    },
    error::{internal::InternalError, AppError},
    model::{
        account::{Account, Profile, RegisterShopperParams, RegisterStoreOwnerParams, Viewer},
        shopper::Shopper,
        store_owner::StoreOwner,
    },
    service::{
        category::CategoryService, shopper::ShopperService, store_owner::StoreOwnerService,
    },
    util::password::hash_password,
};

const DUPLICATE_EMAIL: &str = "An account with this email already exists.";

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a shopper: creates the account and profile in one transaction.
    ///
    /// # Returns
    /// - `Ok(Shopper)` - The new shopper
    /// - `Err(AppError::Validation)` - Email already used or unknown desired category;
    ///   nothing is written
    /// - `Err(AppError::DbErr)` - Database failure; the transaction is rolled back
    pub async fn register_shopper(&self, params: RegisterShopperParams) -> Result<Shopper, AppError> {
        CategoryService::new(self.db)
            .ensure_exist("categorias_desejadas", &params.desired_category_ids)
            .await?;

        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await?;

        let accounts = AccountRepository::new(&txn);
        if accounts.email_exists(&params.email).await? {
            return Err(AppError::field("email", "unique", DUPLICATE_EMAIL));
        }

        let account = accounts
            .create(params.email, password_hash, AccountRole::Shopper)
            .await
            .map_err(duplicate_email)?;

        let shoppers = ShopperRepository::new(&txn);
        let shopper = shoppers
            .create(NewShopper {
                account_id: account.id,
                name: params.name,
                phone: params.phone,
                photo: params.photo,
                age_range: params.age_range,
                gender: params.gender,
                kind: params.kind,
            })
            .await?;
        shoppers
            .set_desired_categories(shopper.id, params.desired_category_ids)
            .await?;

        txn.commit().await?;

        tracing::info!("Registered shopper {} (account {})", shopper.id, account.id);

        ShopperService::new(self.db)
            .get_by_id(shopper.id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "shopper",
                    id: shopper.id,
                }
                .into()
            })
    }

    /// Registers a store owner: creates the account and profile in one transaction.
    pub async fn register_store_owner(
        &self,
        params: RegisterStoreOwnerParams,
    ) -> Result<StoreOwner, AppError> {
        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await?;

        let accounts = AccountRepository::new(&txn);
        if accounts.email_exists(&params.email).await? {
            return Err(AppError::field("email", "unique", DUPLICATE_EMAIL));
        }

        let account = accounts
            .create(params.email, password_hash, AccountRole::StoreOwner)
            .await
            .map_err(duplicate_email)?;

        let owner = StoreOwnerRepository::new(&txn)
            .create(NewStoreOwner {
                account_id: account.id,
                name: params.name,
                phone: params.phone,
                tax_id: params.tax_id,
                photo: params.photo,
            })
            .await?;

        txn.commit().await?;

        tracing::info!("Registered store owner {} (account {})", owner.id, account.id);

        StoreOwnerService::new(self.db)
            .get_by_id(owner.id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "store owner",
                    id: owner.id,
                }
                .into()
            })
    }

    /// Loads what per-viewer projections need for the given account.
    pub async fn viewer(&self, account: &entity::account::Model) -> Result<Viewer, AppError> {
        let mut viewer = Viewer::bare(account.id, account.role);

        match account.role {
            AccountRole::Shopper => {
                if let Some(shopper) = ShopperRepository::new(self.db)
                    .find_by_account_id(account.id)
                    .await?
                {
                    viewer.shopper_id = Some(shopper.id);
                    viewer.favorite_product_ids = FavoriteProductRepository::new(self.db)
                        .product_ids_for_shopper(shopper.id)
                        .await?
                        .into_iter()
                        .collect::<HashSet<_>>();
                    viewer.favorite_store_ids = FavoriteStoreRepository::new(self.db)
                        .store_ids_for_shopper(shopper.id)
                        .await?
                        .into_iter()
                        .collect::<HashSet<_>>();
                }
            }
            AccountRole::StoreOwner => {
                viewer.store_owner_id = StoreOwnerRepository::new(self.db)
                    .find_by_account_id(account.id)
                    .await?
                    .map(|owner| owner.id);
            }
            AccountRole::Admin => {}
        }

        Ok(viewer)
    }

    /// Returns the account with whichever profile it has.
    pub async fn profile(&self, account: entity::account::Model) -> Result<Profile, AppError> {
        let shopper = match account.role {
            AccountRole::Shopper => {
                ShopperService::new(self.db)
                    .get_by_account_id(account.id)
                    .await?
            }
            _ => None,
        };
        let store_owner = match account.role {
            AccountRole::StoreOwner => {
                StoreOwnerService::new(self.db)
                    .get_by_account_id(account.id)
                    .await?
            }
            _ => None,
        };

        Ok(Profile {
            account: Account::from_entity(account),
            shopper,
            store_owner,
        })
    }
}

/// Maps a unique violation on insert to the duplicate-email validation error.
fn duplicate_email(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::field("email", "unique", DUPLICATE_EMAIL)
        }
        _ => err.into(),
    }
}
