use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDto {
    pub id: i32,
    pub cliente: i32,
    pub loja: i32,
    pub nota: f64,
    pub comentario: Option<String>,
    pub criacao: DateTime<Utc>,
    pub atualizacao: DateTime<Utc>,
    pub ativo: bool,
}

/// Body of `POST /avaliacoes` and `PUT /avaliacoes/{id}`.
///
/// `cliente` is required for admins; shoppers always review as themselves.
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewInputDto {
    pub cliente: Option<i32>,
    pub loja: i32,
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5."))]
    pub nota: f64,
    #[validate(length(max = 1000))]
    pub comentario: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReviewPatchDto {
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5."))]
    pub nota: Option<f64>,
    #[validate(length(max = 1000))]
    pub comentario: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedReviewsDto {
    pub avaliacoes: Vec<ReviewDto>,
    pub total: u64,
    pub page: u64,
    pub entries: u64,
    pub total_pages: u64,
}
