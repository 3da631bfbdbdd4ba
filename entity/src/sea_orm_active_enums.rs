use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of account behind a login identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum AccountRole {
    #[sea_orm(string_value = "admin")]
    #[serde(rename = "admin")]
    Admin,
    #[sea_orm(string_value = "shopper")]
    #[serde(rename = "cliente")]
    Shopper,
    #[sea_orm(string_value = "store_owner")]
    #[serde(rename = "lojista")]
    StoreOwner,
}

/// Self-reported age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum AgeRange {
    #[sea_orm(string_value = "18-")]
    #[serde(rename = "18-")]
    Under18,
    #[sea_orm(string_value = "18-25")]
    #[serde(rename = "18-25")]
    From18To25,
    #[sea_orm(string_value = "26-35")]
    #[serde(rename = "26-35")]
    From26To35,
    #[sea_orm(string_value = "36-45")]
    #[serde(rename = "36-45")]
    From36To45,
    #[sea_orm(string_value = "46-55")]
    #[serde(rename = "46-55")]
    From46To55,
    #[sea_orm(string_value = "56-65")]
    #[serde(rename = "56-65")]
    From56To65,
    #[sea_orm(string_value = "65+")]
    #[serde(rename = "65+")]
    Over65,
}

/// Why a visitor is in the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum VisitorKind {
    #[sea_orm(string_value = "Turista")]
    #[serde(rename = "Turista")]
    Tourist,
    #[sea_orm(string_value = "Local")]
    #[serde(rename = "Local")]
    Local,
    #[sea_orm(string_value = "Comerciante")]
    #[serde(rename = "Comerciante")]
    Merchant,
}
