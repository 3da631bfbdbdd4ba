use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        account::AccountRepository, store::StoreRepository, store_owner::StoreOwnerRepository,
    },
    error::AppError,
    model::store_owner::{StoreOwner, UpdateStoreOwnerParams},
};

pub struct StoreOwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreOwnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the account email and store ids for each owner row.
    pub async fn assemble(
        &self,
        owners: Vec<entity::store_owner::Model>,
    ) -> Result<Vec<StoreOwner>, AppError> {
        let accounts = AccountRepository::new(self.db)
            .find_by_ids(owners.iter().map(|o| o.account_id).collect())
            .await?;
        let mut store_ids = StoreRepository::new(self.db)
            .ids_by_owner(owners.iter().map(|o| o.id).collect())
            .await?;

        Ok(owners
            .into_iter()
            .map(|owner| {
                let email = accounts
                    .iter()
                    .find(|a| a.id == owner.account_id)
                    .map(|a| a.email.clone())
                    .unwrap_or_default();
                let stores = store_ids.remove(&owner.id).unwrap_or_default();
                StoreOwner::from_entity(owner, email, stores)
            })
            .collect())
    }

    pub async fn get_all(&self, name: Option<&str>) -> Result<Vec<StoreOwner>, AppError> {
        let owners = StoreOwnerRepository::new(self.db).find_all(name).await?;
        self.assemble(owners).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<StoreOwner>, AppError> {
        let Some(owner) = StoreOwnerRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(self.assemble(vec![owner]).await?.pop())
    }

    pub async fn get_by_account_id(&self, account_id: i32) -> Result<Option<StoreOwner>, AppError> {
        let Some(owner) = StoreOwnerRepository::new(self.db)
            .find_by_account_id(account_id)
            .await?
        else {
            return Ok(None);
        };
        Ok(self.assemble(vec![owner]).await?.pop())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateStoreOwnerParams,
    ) -> Result<Option<StoreOwner>, AppError> {
        let Some(owner) = StoreOwnerRepository::new(self.db).update(id, params).await? else {
            return Ok(None);
        };
        Ok(self.assemble(vec![owner]).await?.pop())
    }

    /// Deletes the store owner together with its account; their stores cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let Some(owner) = StoreOwnerRepository::new(self.db).find_by_id(id).await? else {
            return Ok(false);
        };
        Ok(AccountRepository::new(self.db)
            .delete(owner.account_id)
            .await?)
    }
}
