use super::*;

/// Tests that a partial update leaves unspecified fields untouched.
///
/// Expected: name changed, phone and desired categories unchanged
#[tokio::test]
async fn keeps_unspecified_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::create_shopper(db).await?;
    let category = factory::create_category(db).await?;
    factory::helpers::desire_category(db, shopper.id, category.id).await?;

    let repo = ShopperRepository::new(db);
    let updated = repo
        .update(
            shopper.id,
            UpdateShopperParams {
                name: Some("Ana Souza".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Ana Souza");
    assert_eq!(updated.phone, shopper.phone);
    assert_eq!(
        repo.desired_category_ids(shopper.id).await?,
        vec![category.id]
    );

    Ok(())
}

/// Tests updating a shopper that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_shopper() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = ShopperRepository::new(db)
        .update(404, UpdateShopperParams::default())
        .await?;

    assert!(updated.is_none());

    Ok(())
}
