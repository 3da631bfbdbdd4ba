use crate::{
    model::search::SearchResultsDto,
    server::model::{account::Viewer, product::Product, store::Store},
};

pub struct SearchResults {
    pub stores: Vec<Store>,
    pub products: Vec<Product>,
}

impl SearchResults {
    pub fn into_dto(self, viewer: &Viewer, media_base: &str) -> SearchResultsDto {
        SearchResultsDto {
            lojas: self
                .stores
                .into_iter()
                .map(|s| s.into_dto(viewer, media_base))
                .collect(),
            produtos: self
                .products
                .into_iter()
                .map(|p| p.into_dto(viewer, media_base))
                .collect(),
        }
    }
}
