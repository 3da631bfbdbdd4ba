use super::*;

/// Tests that setting desired categories replaces the previous set.
///
/// Expected: only the new categories, deduplicated and ascending
#[tokio::test]
async fn replaces_previous_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::create_shopper(db).await?;
    let first = factory::create_category(db).await?;
    let second = factory::create_category(db).await?;
    let third = factory::create_category(db).await?;
    factory::helpers::desire_category(db, shopper.id, first.id).await?;

    let repo = ShopperRepository::new(db);
    repo.set_desired_categories(shopper.id, vec![third.id, second.id, third.id])
        .await?;

    assert_eq!(
        repo.desired_category_ids(shopper.id).await?,
        vec![second.id, third.id]
    );

    Ok(())
}
