use sea_orm::DatabaseConnection;

use crate::server::{
    data::review::ReviewRepository,
    error::AppError,
    model::review::{CreateReviewParams, Review, UpdateReviewParams},
    service::{shopper::ShopperService, store::StoreService},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review after checking the shopper and store exist.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(AppError::Validation)` - Unknown shopper (`cliente`) or store (`loja`)
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        ShopperService::new(self.db)
            .ensure_exists("cliente", params.shopper_id)
            .await?;
        StoreService::new(self.db)
            .ensure_exists("loja", params.store_id)
            .await?;

        let review = ReviewRepository::new(self.db).create(params).await?;
        Ok(Review::from_entity(review))
    }

    /// Lists reviews, optionally those of one store only.
    pub async fn get_all(&self, store_id: Option<i32>) -> Result<Vec<Review>, AppError> {
        let reviews = ReviewRepository::new(self.db).find_all(store_id).await?;
        Ok(reviews.into_iter().map(Review::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, AppError> {
        let review = ReviewRepository::new(self.db).find_by_id(id).await?;
        Ok(review.map(Review::from_entity))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateReviewParams,
    ) -> Result<Option<Review>, AppError> {
        if let Some(store_id) = params.store_id {
            StoreService::new(self.db)
                .ensure_exists("loja", store_id)
                .await?;
        }

        let review = ReviewRepository::new(self.db).update(id, params).await?;
        Ok(review.map(Review::from_entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ReviewRepository::new(self.db).delete(id).await?)
    }
}
