//! Review factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    shopper_id: i32,
    store_id: i32,
    rating: f64,
    comment: Option<String>,
    active: bool,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with a rating of 5.0 and no comment.
    pub fn new(db: &'a DatabaseConnection, shopper_id: i32, store_id: i32) -> Self {
        Self {
            db,
            shopper_id,
            store_id,
            rating: 5.0,
            comment: None,
            active: true,
        }
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        entity::review::ActiveModel {
            shopper_id: ActiveValue::Set(self.shopper_id),
            store_id: ActiveValue::Set(self.store_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_review(
    db: &DatabaseConnection,
    shopper_id: i32,
    store_id: i32,
    rating: f64,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, shopper_id, store_id)
        .rating(rating)
        .build()
        .await
}
