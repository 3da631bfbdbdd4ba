use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, kiosk_survey::KioskSurveyRepository},
    error::AppError,
    model::kiosk::{CreateKioskSurveyParams, KioskSurvey},
};

pub struct KioskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KioskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a kiosk survey answer.
    ///
    /// # Returns
    /// - `Err(AppError::Validation)` - `categoria` names a category that does not exist
    pub async fn create(&self, params: CreateKioskSurveyParams) -> Result<KioskSurvey, AppError> {
        if let Some(category_id) = params.category_id {
            if CategoryRepository::new(self.db)
                .find_by_id(category_id)
                .await?
                .is_none()
            {
                return Err(AppError::missing_reference("categoria", category_id));
            }
        }

        let survey = KioskSurveyRepository::new(self.db).create(params).await?;
        Ok(KioskSurvey::from_entity(survey))
    }

    pub async fn get_all(&self) -> Result<Vec<KioskSurvey>, AppError> {
        let surveys = KioskSurveyRepository::new(self.db).find_all().await?;
        Ok(surveys.into_iter().map(KioskSurvey::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<KioskSurvey>, AppError> {
        let survey = KioskSurveyRepository::new(self.db).find_by_id(id).await?;
        Ok(survey.map(KioskSurvey::from_entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(KioskSurveyRepository::new(self.db).delete(id).await?)
    }
}
