use serde::{Deserialize, Serialize};

use crate::model::{product::ProductDto, store::StoreDto};

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultsDto {
    pub lojas: Vec<StoreDto>,
    pub produtos: Vec<ProductDto>,
}
