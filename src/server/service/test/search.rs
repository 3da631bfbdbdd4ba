use super::*;

use crate::server::service::search::SearchService;

/// Tests searching with mixed case and surrounding whitespace.
///
/// Expected: stores and products whose name contains the term, ignoring case
#[tokio::test]
async fn matches_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_store_owner(db).await?;
    let cafe = factory::store::StoreFactory::new(db, owner.id)
        .name("Casa do Cafe")
        .build()
        .await?;
    factory::store::StoreFactory::new(db, owner.id)
        .name("Livraria Central")
        .build()
        .await?;
    let espresso = factory::product::ProductFactory::new(db, cafe.id)
        .name("Cafe expresso")
        .build()
        .await?;
    factory::product::ProductFactory::new(db, cafe.id)
        .name("Bolo de cenoura")
        .build()
        .await?;

    let results = SearchService::new(db).search(Some("  CAFE ")).await?;

    assert_eq!(
        results.stores.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![cafe.id]
    );
    assert_eq!(
        results.products.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![espresso.id]
    );

    Ok(())
}

/// Tests searching with a blank term.
///
/// Expected: every store and product
#[tokio::test]
async fn blank_term_returns_everything() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    factory::create_store(db, store.owner_id).await?;
    factory::create_product(db, store.id).await?;

    let service = SearchService::new(db);
    let blank = service.search(Some("   ")).await?;
    let missing = service.search(None).await?;

    assert_eq!(blank.stores.len(), 2);
    assert_eq!(blank.products.len(), 1);
    assert_eq!(missing.stores.len(), 2);
    assert_eq!(missing.products.len(), 1);

    Ok(())
}
