use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of a 400 response caused by field validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorDto {
    pub error: String,
    pub fields: BTreeMap<String, Vec<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}
