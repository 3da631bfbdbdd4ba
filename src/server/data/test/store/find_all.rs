use super::*;

/// Tests the name filter is a case-insensitive substring match.
///
/// Expected: only stores whose name contains "shoe" in any case
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_store_owner(db).await?;
    let repo = StoreRepository::new(db);
    let shoe_store = repo.create(store_params(owner.id, "Shoe Palace", vec![])).await?;
    let outlet = repo.create(store_params(owner.id, "Big SHOES outlet", vec![])).await?;
    repo.create(store_params(owner.id, "Livraria", vec![])).await?;

    let stores = repo.find_all(Some("shoe")).await?;

    let ids: Vec<i32> = stores.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![shoe_store.id, outlet.id]);

    Ok(())
}

/// Tests that no filter returns every store ordered by id.
///
/// Expected: all three stores
#[tokio::test]
async fn returns_all_without_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_store_owner(db).await?;
    for _ in 0..3 {
        factory::create_store(db, owner.id).await?;
    }

    let stores = StoreRepository::new(db).find_all(None).await?;

    assert_eq!(stores.len(), 3);
    assert!(stores.windows(2).all(|w| w[0].id < w[1].id));

    Ok(())
}

/// Tests that `%`, `_` and `\` in the filter are matched literally.
///
/// Expected: only the store whose name contains the literal characters
#[tokio::test]
async fn treats_like_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_store_owner(db).await?;
    let repo = StoreRepository::new(db);
    repo.create(store_params(owner.id, "Casa do Cafe", vec![])).await?;
    repo.create(store_params(owner.id, "Livraria Central", vec![])).await?;
    let sale = repo.create(store_params(owner.id, "Tudo 50% off", vec![])).await?;

    assert!(repo.find_all(Some("_")).await?.is_empty());
    assert!(repo.find_all(Some("\\")).await?.is_empty());

    let percent = repo.find_all(Some("%")).await?;
    assert_eq!(percent.iter().map(|s| s.id).collect::<Vec<_>>(), vec![sale.id]);

    Ok(())
}

/// Tests that accented names match regardless of case.
///
/// Expected: "ÓTICA CALÇADOS" found by "ótica" and by "calçados"
#[tokio::test]
async fn matches_accented_names_in_any_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_store_owner(db).await?;
    let repo = StoreRepository::new(db);
    let optics = repo.create(store_params(owner.id, "ÓTICA CALÇADOS", vec![])).await?;
    repo.create(store_params(owner.id, "Otica Barata", vec![])).await?;

    let by_lower = repo.find_all(Some("ótica")).await?;
    let by_suffix = repo.find_all(Some("calçados")).await?;

    assert_eq!(by_lower.iter().map(|s| s.id).collect::<Vec<_>>(), vec![optics.id]);
    assert_eq!(by_suffix.iter().map(|s| s.id).collect::<Vec<_>>(), vec![optics.id]);

    Ok(())
}
