use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::search::SearchResults,
    service::{product::ProductService, store::StoreService},
};

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds stores and products whose name contains `term`.
    ///
    /// Matching is a case-insensitive substring test; a missing or blank term
    /// returns every store and product.
    pub async fn search(&self, term: Option<&str>) -> Result<SearchResults, AppError> {
        let term = term.map(str::trim).filter(|t| !t.is_empty());

        let stores = StoreService::new(self.db).get_all(term).await?;
        let products = ProductService::new(self.db).get_all(term).await?;

        Ok(SearchResults { stores, products })
    }
}
