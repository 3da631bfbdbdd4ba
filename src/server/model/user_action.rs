use chrono::{DateTime, Utc};

use crate::model::user_action::UserActionDto;

/// Action label recorded when an account opens a store.
pub const VIEWED_STORE: &str = "visualizou_loja";
/// Action label recorded when an account opens a product.
pub const VIEWED_PRODUCT: &str = "visualizou_produto";

#[derive(Debug, Clone)]
pub struct UserAction {
    pub id: i32,
    pub account_id: i32,
    pub action: String,
    pub store_id: Option<i32>,
    pub product_id: Option<i32>,
    pub detail: String,
    pub created_at: DateTime<Utc>,
}

impl UserAction {
    pub fn from_entity(entity: entity::user_action::Model) -> Self {
        Self {
            id: entity.id,
            account_id: entity.account_id,
            action: entity.action,
            store_id: entity.store_id,
            product_id: entity.product_id,
            detail: entity.detail,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserActionDto {
        UserActionDto {
            id: self.id,
            conta: self.account_id,
            acao: self.action,
            loja: self.store_id,
            produto: self.product_id,
            detalhe: self.detail,
            criacao: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordUserActionParams {
    pub account_id: i32,
    pub action: String,
    pub store_id: Option<i32>,
    pub product_id: Option<i32>,
    pub detail: String,
}
