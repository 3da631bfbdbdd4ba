use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActionDto {
    pub id: i32,
    pub conta: i32,
    pub acao: String,
    pub loja: Option<i32>,
    pub produto: Option<i32>,
    pub detalhe: String,
    pub criacao: DateTime<Utc>,
}
