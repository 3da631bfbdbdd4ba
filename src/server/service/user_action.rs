use sea_orm::DatabaseConnection;

use crate::server::{
    data::user_action::UserActionRepository,
    error::AppError,
    model::user_action::{RecordUserActionParams, UserAction, VIEWED_PRODUCT, VIEWED_STORE},
};

pub struct UserActionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserActionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry to the audit trail.
    ///
    /// Never fails: a database error is logged at `warn` and dropped so the request
    /// that triggered it still succeeds.
    pub async fn record(&self, params: RecordUserActionParams) {
        let action = params.action.clone();
        let account_id = params.account_id;

        if let Err(e) = UserActionRepository::new(self.db).create(params).await {
            tracing::warn!(
                "Failed to record user action '{}' for account {}: {}",
                action,
                account_id,
                e
            );
        }
    }

    pub async fn record_store_view(&self, account_id: i32, store_id: i32, store_name: &str) {
        self.record(RecordUserActionParams {
            account_id,
            action: VIEWED_STORE.to_string(),
            store_id: Some(store_id),
            product_id: None,
            detail: format!("Visualizou a loja {}", store_name),
        })
        .await
    }

    pub async fn record_product_view(&self, account_id: i32, product_id: i32, product_name: &str) {
        self.record(RecordUserActionParams {
            account_id,
            action: VIEWED_PRODUCT.to_string(),
            store_id: None,
            product_id: Some(product_id),
            detail: format!("Visualizou o produto {}", product_name),
        })
        .await
    }

    /// Lists audit entries, optionally of one account only.
    pub async fn get_all(&self, account_id: Option<i32>) -> Result<Vec<UserAction>, AppError> {
        let actions = UserActionRepository::new(self.db).find_all(account_id).await?;
        Ok(actions.into_iter().map(UserAction::from_entity).collect())
    }
}
