//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and take
//! parameter models from the service layer, keeping queries, inserts, updates and deletes
//! out of the business logic.

use sea_orm::{sea_query::LikeExpr, ColumnTrait, Condition};

pub mod account;
pub mod category;
pub mod favorite;
pub mod kiosk_survey;
pub mod product;
pub mod review;
pub mod revoked_token;
pub mod sector;
pub mod shopper;
pub mod store;
pub mod store_owner;
pub mod user_action;

/// Key stored in the `name_search` column for a name.
///
/// Uses Unicode lowercasing; SQLite `lower()` folds ASCII only.
pub fn search_key(name: &str) -> String {
    name.to_lowercase()
}

/// Substring match of `term` against a `name_search` column, ignoring case.
///
/// `%`, `_` and `\` in the term match themselves.
pub fn name_matches<C: ColumnTrait>(column: C, term: &str) -> Condition {
    let escaped = search_key(term)
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Condition::all().add(column.like(LikeExpr::new(format!("%{}%", escaped)).escape('\\')))
}

#[cfg(test)]
mod test;
