use super::*;

/// Tests creating a category.
///
/// Expected: Ok with an active category of the given name
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = CategoryRepository::new(db)
        .create(CreateCategoryParams {
            name: "Calcados".to_string(),
        })
        .await?;

    assert_eq!(category.name, "Calcados");
    assert!(category.active);

    Ok(())
}
