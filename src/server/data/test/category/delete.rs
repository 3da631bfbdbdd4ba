use super::*;

/// Tests that deleting a category clears kiosk survey links instead of deleting surveys.
///
/// Expected: survey row kept with no category, store tag removed
#[tokio::test]
async fn nulls_kiosk_survey_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    factory::helpers::tag_store(db, store.id, category.id).await?;

    let surveys = KioskSurveyRepository::new(db);
    let survey = surveys
        .create(CreateKioskSurveyParams {
            visitor_kind: VisitorKind::Tourist,
            age_range: AgeRange::From18To25,
            gender: "M".to_string(),
            category_id: Some(category.id),
        })
        .await?;

    let deleted = CategoryRepository::new(db).delete(category.id).await?;

    assert!(deleted);
    let survey = surveys.find_by_id(survey.id).await?.unwrap();
    assert_eq!(survey.category_id, None);
    assert_eq!(entity::prelude::StoreCategory::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Store::find().count(db).await?, 1);

    Ok(())
}
