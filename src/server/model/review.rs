use chrono::{DateTime, Utc};

use crate::model::review::{PaginatedReviewsDto, ReviewDto, ReviewInputDto, ReviewPatchDto};

#[derive(Debug, Clone)]
pub struct Review {
    pub id: i32,
    pub shopper_id: i32,
    pub store_id: i32,
    pub rating: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            shopper_id: entity.shopper_id,
            store_id: entity.store_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            cliente: self.shopper_id,
            loja: self.store_id,
            nota: self.rating,
            comentario: self.comment,
            criacao: self.created_at,
            atualizacao: self.updated_at,
            ativo: self.active,
        }
    }
}

/// Arithmetic mean of the given ratings, `0.0` for an empty slice.
pub fn average_rating(ratings: &[f64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    ratings.iter().sum::<f64>() / ratings.len() as f64
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub shopper_id: i32,
    pub store_id: i32,
    pub rating: f64,
    pub comment: Option<String>,
}

impl CreateReviewParams {
    pub fn from_dto(shopper_id: i32, dto: ReviewInputDto) -> Self {
        Self {
            shopper_id,
            store_id: dto.loja,
            rating: dto.nota,
            comment: dto.comentario,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReviewParams {
    pub store_id: Option<i32>,
    pub rating: Option<f64>,
    pub comment: Option<Option<String>>,
}

impl UpdateReviewParams {
    pub fn from_put(dto: ReviewInputDto) -> Self {
        Self {
            store_id: Some(dto.loja),
            rating: Some(dto.nota),
            comment: Some(dto.comentario),
        }
    }

    pub fn from_patch(dto: ReviewPatchDto) -> Self {
        Self {
            store_id: None,
            rating: dto.nota,
            comment: dto.comentario.map(Some),
        }
    }
}

/// One page of a store's reviews.
#[derive(Debug, Clone)]
pub struct PaginatedReviews {
    pub reviews: Vec<Review>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedReviews {
    pub fn into_dto(self) -> PaginatedReviewsDto {
        PaginatedReviewsDto {
            avaliacoes: self.reviews.into_iter().map(Review::into_dto).collect(),
            total: self.total,
            page: self.page,
            entries: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_no_ratings_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        assert_eq!(average_rating(&[4.0, 5.0, 3.0]), 4.0);
        assert_eq!(average_rating(&[2.5]), 2.5);
    }
}
