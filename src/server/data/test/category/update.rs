use super::*;

/// Tests renaming a category.
///
/// Expected: Ok(Some) with the new name
#[tokio::test]
async fn renames_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category_named(db, "Moda").await?;

    let updated = CategoryRepository::new(db)
        .update(
            category.id,
            UpdateCategoryParams {
                name: Some("Moda Feminina".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.map(|c| c.name), Some("Moda Feminina".to_string()));

    Ok(())
}

/// Tests updating a category that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CategoryRepository::new(db)
        .update(7, UpdateCategoryParams::default())
        .await?;

    assert!(updated.is_none());

    Ok(())
}
