use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::kiosk::CreateKioskSurveyParams;

pub struct KioskSurveyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KioskSurveyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateKioskSurveyParams,
    ) -> Result<entity::kiosk_survey::Model, DbErr> {
        let now = Utc::now();
        entity::kiosk_survey::ActiveModel {
            visitor_kind: ActiveValue::Set(params.visitor_kind),
            age_range: ActiveValue::Set(params.age_range),
            gender: ActiveValue::Set(params.gender),
            category_id: ActiveValue::Set(params.category_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::kiosk_survey::Model>, DbErr> {
        entity::prelude::KioskSurvey::find_by_id(id).one(self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::kiosk_survey::Model>, DbErr> {
        entity::prelude::KioskSurvey::find()
            .order_by_asc(entity::kiosk_survey::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::KioskSurvey::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
